//! s3-syncer - directory/S3 mirroring facade over the AWS CLI
//!
//! Wraps `aws s3 sync` behind a two-operation library API: push a local
//! directory up to a bucket location, or pull a bucket location down into a
//! local directory. Transfer, credential resolution, and change detection are
//! delegated entirely to the AWS CLI child process.

pub mod error;
pub mod runner;
pub mod sync;

// Re-exports for convenience
pub use error::{SyncError, SyncResult};
pub use runner::{aws_cli_available, CommandRunner, SystemRunner};
pub use sync::S3Syncer;

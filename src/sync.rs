//! Directory/S3 Sync Facade
//!
//! Mirrors a local directory with an S3 bucket location in either direction
//! by delegating to `aws s3 sync`. The transfer protocol, credentials, and
//! change detection all belong to the AWS CLI; this facade only builds the
//! argument list and surfaces the exit status.

use crate::error::{SyncError, SyncResult};
use crate::runner::{CommandRunner, SystemRunner};
use std::path::Path;

/// Default external tool name
const DEFAULT_TOOL: &str = "aws";

/// Facade for one-directional mirroring between a local directory and an
/// S3 bucket location
///
/// Each operation is a single atomic dispatch: spawn the AWS CLI, block
/// until it exits, return. No retries, no timeout, no mutual exclusion
/// between concurrent callers.
pub struct S3Syncer<R: CommandRunner = SystemRunner> {
    runner: R,
    tool: String,
}

impl S3Syncer {
    /// Create a syncer that invokes the real AWS CLI
    pub fn new() -> Self {
        Self::with_runner(SystemRunner)
    }
}

impl Default for S3Syncer {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> S3Syncer<R> {
    /// Create a syncer over a custom runner
    ///
    /// Tests substitute a recording fake here to avoid spawning real
    /// processes.
    pub fn with_runner(runner: R) -> Self {
        Self {
            runner,
            tool: DEFAULT_TOOL.to_string(),
        }
    }

    /// Override the tool name (e.g. a wrapper script around the AWS CLI)
    pub fn with_tool(mut self, tool: impl Into<String>) -> Self {
        self.tool = tool.into();
        self
    }

    /// Mirror `folder` up to `bucket_url`
    ///
    /// `folder` must already exist; the tool is never invoked otherwise.
    /// `bucket_url` is opaque to this crate and passed through verbatim.
    pub fn push(&self, folder: &Path, bucket_url: &str) -> SyncResult<()> {
        if !folder.exists() {
            return Err(SyncError::DirectoryNotFound {
                path: folder.to_path_buf(),
            });
        }
        self.run_sync(&folder.display().to_string(), bucket_url)
    }

    /// Mirror `bucket_url` down into `folder`
    ///
    /// Creates `folder` (parents included) when it does not exist yet.
    pub fn pull(&self, folder: &Path, bucket_url: &str) -> SyncResult<()> {
        if !folder.exists() {
            std::fs::create_dir_all(folder)?;
        }
        self.run_sync(bucket_url, &folder.display().to_string())
    }

    /// Invoke `<tool> s3 sync <source> <destination>` and map a non-zero
    /// exit to an error
    fn run_sync(&self, source: &str, destination: &str) -> SyncResult<()> {
        let args = vec![
            "s3".to_string(),
            "sync".to_string(),
            source.to_string(),
            destination.to_string(),
        ];

        let status = self.runner.run(&self.tool, &args)?;
        if status != Some(0) {
            return Err(SyncError::CommandFailed {
                program: self.tool.clone(),
                status,
            });
        }

        Ok(())
    }
}

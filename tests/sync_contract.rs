//! Contract tests for the public sync facade API.

use s3_syncer::{CommandRunner, S3Syncer, SyncError};
use std::sync::{Arc, Mutex};
use tempfile::TempDir;

#[derive(Clone)]
struct ScriptedRunner {
    exit: Option<i32>,
    calls: Arc<Mutex<Vec<(String, Vec<String>)>>>,
}

impl ScriptedRunner {
    fn with_exit(exit: Option<i32>) -> Self {
        Self {
            exit,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> std::io::Result<Option<i32>> {
        self.calls
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        Ok(self.exit)
    }
}

#[test]
fn push_then_pull_compose_mirror_image_invocations() {
    let dir = TempDir::new().unwrap();
    let local = dir.path().display().to_string();
    let runner = ScriptedRunner::with_exit(Some(0));
    let syncer = S3Syncer::with_runner(runner.clone());

    syncer.push(dir.path(), "s3://bucket/prefix").unwrap();
    syncer.pull(dir.path(), "s3://bucket/prefix").unwrap();

    let calls = runner.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].1, vec!["s3", "sync", &local, "s3://bucket/prefix"]);
    assert_eq!(calls[1].1, vec!["s3", "sync", "s3://bucket/prefix", &local]);
}

#[test]
fn failing_tool_reports_program_and_status() {
    let dir = TempDir::new().unwrap();
    let runner = ScriptedRunner::with_exit(Some(2));
    let syncer = S3Syncer::with_runner(runner);

    let err = syncer.pull(dir.path(), "s3://bucket/prefix").unwrap_err();

    assert_eq!(
        err.to_string(),
        "command 'aws' failed with exit code: Some(2)"
    );
    assert!(matches!(err, SyncError::CommandFailed { .. }));
}

#[test]
fn missing_source_directory_reports_its_path() {
    let dir = TempDir::new().unwrap();
    let missing = dir.path().join("never-created");
    let runner = ScriptedRunner::with_exit(Some(0));
    let syncer = S3Syncer::with_runner(runner.clone());

    let err = syncer.push(&missing, "s3://bucket/prefix").unwrap_err();

    assert_eq!(
        err.to_string(),
        format!("directory not found: {}", missing.display())
    );
    assert!(runner.calls().is_empty());
}

use std::thread;

use tracing::error;

/// Execution seam for CPU-heavy work dispatched off the interactive thread.
///
/// Scoring, enhancement and crop encoding are all pure functions of value
/// inputs; this trait keeps them decoupled from any particular concurrency
/// primitive.
pub trait TaskRunner: Send + Sync {
    fn run(&self, job: Box<dyn FnOnce() + Send>);
}

/// Runs each job on a freshly spawned background thread.
pub struct ThreadRunner;

impl TaskRunner for ThreadRunner {
    fn run(&self, job: Box<dyn FnOnce() + Send>) {
        if let Err(e) = thread::Builder::new()
            .name("fingercap-worker".into())
            .spawn(job)
        {
            error!("failed to spawn worker thread: {e}");
        }
    }
}

/// Runs each job synchronously on the caller's thread.
/// Useful for batch pipelines and deterministic tests.
pub struct InlineRunner;

impl TaskRunner for InlineRunner {
    fn run(&self, job: Box<dyn FnOnce() + Send>) {
        job();
    }
}

//! Bounded parallel execution of file tasks.
//!
//! A directory run fans its tasks out to a fixed pool of workers instead of
//! spawning one task per file. The pool size is capped by the job limit, so
//! a directory with thousands of files never holds thousands of handles or
//! buffers at once.
//!
//! Topology: a feeder pushes tasks into a bounded channel and the workers
//! pull from it, sending outcomes through a second bounded channel. The
//! caller drains outcomes until every sender is gone.

use std::path::Path;
use std::sync::Arc;

use tracing::error;

use crate::config::CHANNEL_DEPTH_PER_JOB;
use crate::error::Result;
use crate::file::list_regular_files;
use crate::processor::FileProcessor;
use crate::types::{BatchReport, FileOutcome, FileTask};

/// Fixed-size pool that runs file tasks concurrently.
pub struct Worker {
    /// Shared transform, identical for every file in the batch.
    processor: Arc<FileProcessor>,

    /// Upper bound on concurrently running tasks.
    jobs: usize,
}

impl Worker {
    /// Creates a pool limited to `jobs` concurrent tasks.
    ///
    /// A limit of zero is treated as one so the pool can always make
    /// progress.
    #[must_use]
    pub fn new(processor: FileProcessor, jobs: usize) -> Self {
        Self { processor: Arc::new(processor), jobs: jobs.max(1) }
    }

    /// Transforms every regular file directly inside `input_dir`.
    ///
    /// Discovery errors abort the whole run; per-file errors do not, they
    /// are collected into the report.
    pub async fn process_directory(&self, input_dir: &Path, output_dir: &Path) -> Result<BatchReport> {
        let tasks = list_regular_files(input_dir, output_dir).await?;
        Ok(self.run(tasks).await)
    }

    /// Runs the given tasks through the pool and reports every outcome.
    pub async fn run(&self, tasks: Vec<FileTask>) -> BatchReport {
        if tasks.is_empty() {
            return BatchReport::default();
        }

        // Never spin up more workers than there are tasks.
        let workers = self.jobs.min(tasks.len());
        let capacity = workers * CHANNEL_DEPTH_PER_JOB;
        let (task_sender, task_receiver) = flume::bounded::<FileTask>(capacity);
        let (outcome_sender, outcome_receiver) = flume::bounded::<FileOutcome>(capacity);

        let mut handles = Vec::with_capacity(workers);
        for _ in 0..workers {
            let processor = Arc::clone(&self.processor);
            let tasks = task_receiver.clone();
            let outcomes = outcome_sender.clone();

            handles.push(tokio::spawn(async move {
                Self::worker_loop(&processor, &tasks, &outcomes).await;
            }));
        }

        // Only the workers may hold channel ends now. Once the feeder is
        // done and the workers finish, both channels disconnect and the
        // drain loop below terminates.
        drop(task_receiver);
        drop(outcome_sender);

        // Feeding runs on its own task so a full task channel blocks the
        // feeder, not the outcome drain.
        let feeder = tokio::spawn(async move {
            for task in tasks {
                if task_sender.send_async(task).await.is_err() {
                    break;
                }
            }
        });

        let mut outcomes = Vec::new();
        while let Ok(outcome) = outcome_receiver.recv_async().await {
            outcomes.push(outcome);
        }

        if feeder.await.is_err() {
            error!("task feeder panicked");
        }

        for handle in handles {
            if handle.await.is_err() {
                error!("worker task panicked");
            }
        }

        BatchReport::from_outcomes(outcomes)
    }

    async fn worker_loop(
        processor: &FileProcessor,
        tasks: &flume::Receiver<FileTask>,
        outcomes: &flume::Sender<FileOutcome>,
    ) {
        while let Ok(task) = tasks.recv_async().await {
            let outcome = processor.process(&task).await;
            if outcomes.send_async(outcome).await.is_err() {
                break;
            }
        }
    }
}

use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::thread;

use anyhow::{Context, Result};
use bytesize::ByteSize;
use clap::{Parser, Subcommand};
use tracing::{error, info};

use crate::cipher::Keystream;
use crate::config::FALLBACK_JOBS;
use crate::processor::FileProcessor;
use crate::secret::Passphrase;
use crate::types::{Direction, FileTask};
use crate::worker::Worker;

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a file, or every file directly inside a directory.
    Encrypt {
        /// Input file or directory.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file, or output directory for directory input.
        #[arg(short, long)]
        output: PathBuf,

        /// Passphrase whose bytes form the repeating key.
        #[arg(short, long)]
        key: String,

        /// Maximum number of files processed at once (defaults to the CPU count).
        #[arg(short, long)]
        jobs: Option<usize>,
    },

    /// Decrypt a file, or every file directly inside a directory.
    Decrypt {
        /// Input file or directory.
        #[arg(short, long)]
        input: PathBuf,

        /// Output file, or output directory for directory input.
        #[arg(short, long)]
        output: PathBuf,

        /// Passphrase whose bytes form the repeating key.
        #[arg(short, long)]
        key: String,

        /// Maximum number of files processed at once (defaults to the CPU count).
        #[arg(short, long)]
        jobs: Option<usize>,
    },
}

#[derive(Parser)]
#[command(name = "shiftbyte", version, about = "Encrypt or decrypt files with a passphrase-keyed additive byte cipher.")]
pub struct App {
    #[command(subcommand)]
    command: Commands,
}

impl App {
    pub fn init() -> Result<Self> {
        let subscriber = tracing_subscriber::fmt().with_target(false).with_writer(std::io::stderr).finish();
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(Self::parse())
    }

    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Encrypt { input, output, key, jobs } => Self::run(input, output, key, jobs, Direction::Encrypt).await,
            Commands::Decrypt { input, output, key, jobs } => Self::run(input, output, key, jobs, Direction::Decrypt).await,
        }
    }

    async fn run(input: PathBuf, output: PathBuf, key: String, jobs: Option<usize>, direction: Direction) -> Result<()> {
        let passphrase = Passphrase::from_string(key);
        let keystream = Keystream::from_passphrase(&passphrase)?;
        let processor = FileProcessor::new(keystream, direction);

        // An unusable input path is a usage error, not a per-file failure.
        let metadata = tokio::fs::metadata(&input)
            .await
            .with_context(|| format!("invalid input path: {}", input.display()))?;

        if metadata.is_dir() {
            Self::run_directory(processor, &input, &output, jobs.unwrap_or_else(default_jobs)).await;
        } else {
            processor.process(&FileTask { index: 0, input, output }).await;
        }

        Ok(())
    }

    async fn run_directory(processor: FileProcessor, input: &Path, output: &Path, jobs: usize) {
        let direction = processor.direction();
        let worker = Worker::new(processor, jobs);

        match worker.process_directory(input, output).await {
            Ok(report) => info!(
                "{} {} of {} files ({}), {} failed",
                direction.done_label(),
                report.succeeded(),
                report.len(),
                ByteSize::b(report.bytes_processed()),
                report.failed()
            ),
            Err(err) => error!("{err}"),
        }
    }
}

fn default_jobs() -> usize {
    thread::available_parallelism().map(NonZeroUsize::get).unwrap_or(FALLBACK_JOBS)
}

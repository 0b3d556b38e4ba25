//! Tool-wide constants.

/// Worker count used when the host's available parallelism cannot be
/// determined.
pub const FALLBACK_JOBS: usize = 4;

/// Task-channel slots per worker.
///
/// Two slots of buffering keep the feeder ahead of the pool without
/// queueing a large directory's worth of tasks in the channel.
pub const CHANNEL_DEPTH_PER_JOB: usize = 2;

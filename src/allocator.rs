//! Global allocator selection.
//!
//! Directory runs allocate one whole-file buffer per task and release it
//! right after the write. mimalloc keeps that churn cheap compared to the
//! system allocator.

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

//! The reuse pool and its request and statistics types.
//!
//! - [`ReusePool`] - Lock-guarded set of idle buffers with exact and best-fit acquire
//! - [`FitRequest`] - Shape of a decode that may land in a larger buffer
//! - [`PoolStats`] - Consistent snapshot of pool counters

mod request;
mod reuse;
mod stats;

pub use request::FitRequest;
pub use reuse::ReusePool;
pub use stats::PoolStats;

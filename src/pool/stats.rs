//! Pool statistics snapshot.

use std::fmt;

/// Snapshot of a pool's contents and counters, taken under the pool lock.
///
/// Checked-out buffers are not counted anywhere in here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PoolStats {
    /// Buffers currently idle in the pool.
    pub buffers: usize,
    /// Sum of backing bytes of idle buffers.
    pub total_bytes: usize,
    /// Acquire calls that returned a buffer.
    pub hits: u64,
    /// Acquire calls that returned nothing.
    pub misses: u64,
    /// Non-reusable entries removed by compaction.
    pub purged: u64,
    /// Buffers retired by `clear` or by the byte ceiling.
    pub retired: u64,
}

impl PoolStats {
    /// Fraction of acquires that were served from the pool, or 0 with no acquires.
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

impl fmt::Display for PoolStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} buffers, {} bytes (hits={}, misses={}, purged={}, retired={})",
            self.buffers, self.total_bytes, self.hits, self.misses, self.purged, self.retired
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hit_ratio() {
        assert_eq!(PoolStats::default().hit_ratio(), 0.0);

        let stats = PoolStats {
            hits: 3,
            misses: 1,
            ..Default::default()
        };
        assert_eq!(stats.hit_ratio(), 0.75);
    }

    #[test]
    fn test_display() {
        let stats = PoolStats {
            buffers: 2,
            total_bytes: 600,
            ..Default::default()
        };
        assert!(stats.to_string().starts_with("2 buffers, 600 bytes"));
    }
}

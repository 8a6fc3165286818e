//! Configuration for pool behavior.
//!
//! This module provides types to configure how the pool matches and retains buffers:
//!
//! - [`PoolConfig`] - Default best-fit policy and optional byte ceiling
//! - [`FitPolicy`] - How strictly a best-fit request must match a candidate
//!
//! # Example
//!
//! ```
//! use pixpool::{FitPolicy, PoolConfig};
//!
//! // Policy picked from the platform's capability level
//! let config = PoolConfig::default()
//!     .with_default_policy(FitPolicy::for_platform_level(16));
//! assert_eq!(config.default_policy(), FitPolicy::Legacy);
//!
//! // Keep at most 8 MiB of idle buffers
//! let config = PoolConfig::new(FitPolicy::Modern, Some(8 * 1024 * 1024))?;
//!
//! # Ok::<(), pixpool::PoolError>(())
//! ```

use crate::error::PoolError;

/// First platform level whose decoders accept any large-enough buffer.
pub const MODERN_FIT_MIN_LEVEL: u32 = 19;

/// Default best-fit policy.
pub const DEFAULT_FIT_POLICY: FitPolicy = FitPolicy::Modern;

/// How a best-fit request decides whether a pooled candidate is usable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FitPolicy {
    /// Candidate dimensions must equal the undecoded source dimensions and the
    /// sample size must be 1. Older decoders require an identical layout.
    Legacy,

    /// Candidate backing capacity must cover the decoded output bytes.
    Modern,
}

impl FitPolicy {
    /// Picks the policy supported by a deployment's minimum platform level.
    ///
    /// # Example
    ///
    /// ```
    /// use pixpool::FitPolicy;
    ///
    /// assert_eq!(FitPolicy::for_platform_level(18), FitPolicy::Legacy);
    /// assert_eq!(FitPolicy::for_platform_level(19), FitPolicy::Modern);
    /// ```
    pub const fn for_platform_level(level: u32) -> Self {
        if level < MODERN_FIT_MIN_LEVEL {
            FitPolicy::Legacy
        } else {
            FitPolicy::Modern
        }
    }
}

impl Default for FitPolicy {
    fn default() -> Self {
        DEFAULT_FIT_POLICY
    }
}

/// Configuration for a [`ReusePool`](crate::ReusePool).
///
/// - `default_policy` - Policy used by [`ReusePool::acquire_fit`](crate::ReusePool::acquire_fit)
/// - `max_pooled_bytes` - Optional ceiling on idle bytes; `None` lets demand decide
///
/// # Example
///
/// ```
/// use pixpool::{FitPolicy, PoolConfig};
///
/// let config = PoolConfig::default()
///     .with_default_policy(FitPolicy::Legacy)
///     .with_max_pooled_bytes(Some(1 << 20));
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PoolConfig {
    /// Policy for best-fit requests that do not name one.
    default_policy: FitPolicy,

    /// Ceiling on the bytes held by idle buffers.
    max_pooled_bytes: Option<usize>,
}

impl PoolConfig {
    /// Creates a new configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if `max_pooled_bytes` is `Some(0)`.
    pub fn new(default_policy: FitPolicy, max_pooled_bytes: Option<usize>) -> Result<Self, PoolError> {
        if max_pooled_bytes == Some(0) {
            return Err(PoolError::InvalidConfig {
                message: "max_pooled_bytes must be non-zero; use None for no ceiling",
            });
        }

        Ok(Self {
            default_policy,
            max_pooled_bytes,
        })
    }

    /// Sets the default best-fit policy.
    pub fn with_default_policy(mut self, policy: FitPolicy) -> Self {
        self.default_policy = policy;
        self
    }

    /// Sets the idle byte ceiling.
    ///
    /// Note: This does not validate the configuration. Use [`PoolConfig::validate`]
    /// to check if the configuration is valid.
    pub fn with_max_pooled_bytes(mut self, max: Option<usize>) -> Self {
        self.max_pooled_bytes = max;
        self
    }

    /// Returns the default best-fit policy.
    pub fn default_policy(&self) -> FitPolicy {
        self.default_policy
    }

    /// Returns the idle byte ceiling, if any.
    pub fn max_pooled_bytes(&self) -> Option<usize> {
        self.max_pooled_bytes
    }

    /// Validates the current configuration.
    pub fn validate(&self) -> Result<(), PoolError> {
        Self::new(self.default_policy, self.max_pooled_bytes).map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PoolConfig::default();
        assert_eq!(config.default_policy(), FitPolicy::Modern);
        assert_eq!(config.max_pooled_bytes(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = PoolConfig::default()
            .with_default_policy(FitPolicy::Legacy)
            .with_max_pooled_bytes(Some(4096));

        assert_eq!(config.default_policy(), FitPolicy::Legacy);
        assert_eq!(config.max_pooled_bytes(), Some(4096));
    }

    #[test]
    fn test_invalid_config_zero_ceiling() {
        assert!(PoolConfig::new(FitPolicy::Modern, Some(0)).is_err());
        assert!(
            PoolConfig::default()
                .with_max_pooled_bytes(Some(0))
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_policy_for_platform_level() {
        assert_eq!(FitPolicy::for_platform_level(11), FitPolicy::Legacy);
        assert_eq!(FitPolicy::for_platform_level(MODERN_FIT_MIN_LEVEL), FitPolicy::Modern);
        assert_eq!(FitPolicy::for_platform_level(34), FitPolicy::Modern);
    }
}

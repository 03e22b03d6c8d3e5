//! Centralized configuration values shared across the contour pipeline.
//!
//! Each public item in this module documents its purpose and provides a minimal
//! usage example so that downstream crates can remain declarative and avoid
//! scattering literals.

use std::fmt;

// =============================================================================
// GRID CONSTANTS
// =============================================================================

/// Minimum number of points along either mesh axis. Anything smaller has no
/// zones to contour.
///
/// # Examples
/// ```
/// use config::constants::MIN_GRID_POINTS;
/// assert_eq!(MIN_GRID_POINTS, 2);
/// ```
pub const MIN_GRID_POINTS: usize = 2;

/// Chunk size meaning "one chunk spanning the whole mesh".
///
/// # Examples
/// ```
/// use config::constants::NO_CHUNKING;
/// let requested = 0;
/// assert_eq!(requested, NO_CHUNKING);
/// ```
pub const NO_CHUNKING: usize = 0;

// =============================================================================
// PATH CODES
// =============================================================================

/// Path code starting a new sub-path.
///
/// # Examples
/// ```
/// use config::constants::PATH_MOVE_TO;
/// assert_eq!(PATH_MOVE_TO, 1);
/// ```
pub const PATH_MOVE_TO: u8 = 1;

/// Path code continuing the current sub-path with a straight segment.
///
/// # Examples
/// ```
/// use config::constants::{PATH_LINE_TO, PATH_MOVE_TO};
/// assert!(PATH_LINE_TO > PATH_MOVE_TO);
/// ```
pub const PATH_LINE_TO: u8 = 2;

/// Path code closing the current sub-path. The vertex carrying it is still
/// part of the path.
///
/// # Examples
/// ```
/// use config::constants::PATH_CLOSE_POLY;
/// assert_eq!(PATH_CLOSE_POLY, 79);
/// ```
pub const PATH_CLOSE_POLY: u8 = 79;

// =============================================================================
// PARALLELISM
// =============================================================================

/// Number of levels at which multi-level tracing moves onto the thread pool.
///
/// # Examples
/// ```
/// use config::constants::DEFAULT_PARALLEL_LEVEL_THRESHOLD;
/// assert!(DEFAULT_PARALLEL_LEVEL_THRESHOLD >= 2);
/// ```
pub const DEFAULT_PARALLEL_LEVEL_THRESHOLD: usize = 4;

/// Immutable snapshot of global configuration settings that can be shared
/// between crates.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let config = GlobalConfig::default();
/// assert!(config.parallel_threshold >= 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Minimum number of independent levels before tracing fans out.
    pub parallel_threshold: usize,
    /// Master switch for multi-level parallelism.
    pub parallel: bool,
}

impl GlobalConfig {
    /// Builds a configuration enforcing strict validation of the supplied
    /// threshold.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// let cfg = GlobalConfig::new(8, true).expect("valid config");
    /// assert_eq!(cfg.parallel_threshold, 8);
    /// ```
    pub fn new(parallel_threshold: usize, parallel: bool) -> Result<Self, ConfigError> {
        if parallel_threshold < 2 {
            return Err(ConfigError::InvalidParallelThreshold(parallel_threshold));
        }
        Ok(Self {
            parallel_threshold,
            parallel,
        })
    }

    /// Configuration that always traces levels one after another.
    ///
    /// # Examples
    /// ```
    /// use config::constants::GlobalConfig;
    /// assert!(!GlobalConfig::sequential().parallel);
    /// ```
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Returns true when `level_count` levels should be traced in parallel.
    pub fn should_parallelize(&self, level_count: usize) -> bool {
        self.parallel && level_count >= self.parallel_threshold
    }
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_LEVEL_THRESHOLD,
            parallel: true,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the parallel threshold cannot amortize a fan-out.
    InvalidParallelThreshold(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidParallelThreshold(value) => {
                write!(f, "parallel_threshold must be >= 2: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests;

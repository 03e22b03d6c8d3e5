//! Tests for the centralized configuration constants.

use super::*;

/// Ensures default constants are sane.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// let cfg = GlobalConfig::default();
/// assert!(cfg.parallel);
/// ```
#[test]
fn default_constants_are_valid() {
    let cfg = GlobalConfig::default();
    assert!(cfg.parallel);
    assert_eq!(cfg.parallel_threshold, DEFAULT_PARALLEL_LEVEL_THRESHOLD);
}

/// Validates the builder rejects invalid values.
///
/// # Examples
/// ```
/// use config::constants::GlobalConfig;
/// assert!(GlobalConfig::new(1, true).is_err());
/// ```
#[test]
fn new_validates_inputs() {
    assert_eq!(
        GlobalConfig::new(1, true).unwrap_err(),
        ConfigError::InvalidParallelThreshold(1)
    );
    assert!(GlobalConfig::new(2, false).is_ok());
}

#[test]
fn sequential_never_parallelizes() {
    let cfg = GlobalConfig::sequential();
    assert!(!cfg.should_parallelize(1000));
}

#[test]
fn threshold_gates_parallelism() {
    let cfg = GlobalConfig::default();
    assert!(!cfg.should_parallelize(DEFAULT_PARALLEL_LEVEL_THRESHOLD - 1));
    assert!(cfg.should_parallelize(DEFAULT_PARALLEL_LEVEL_THRESHOLD));
}

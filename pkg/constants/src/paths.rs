//! Filesystem path constants.

/// Default config file path for `knamectl`.
pub const DEFAULT_CONFIG: &str = "/etc/kname/config.yaml";

//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

/// Default configuration file written by `init`.
pub const CONFIG_FILE: &str = "nssm-wrap.toml";

/// NSSM executable looked up on `PATH` when no explicit path is configured.
#[cfg(windows)]
pub const NSSM_EXECUTABLE: &str = "nssm.exe";

/// NSSM executable looked up on `PATH` when no explicit path is configured.
#[cfg(not(windows))]
pub const NSSM_EXECUTABLE: &str = "nssm";

/// Column width of keys in pretty-printed configurations.
pub const PRETTY_KEY_WIDTH: usize = 30;

/// Extra indentation per nesting level in pretty-printed configurations.
pub const PRETTY_INDENT_STEP: usize = 4;

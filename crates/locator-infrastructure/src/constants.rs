//! Infrastructure Constants

// ============================================================================
// CONFIGURATION CONSTANTS
// ============================================================================

/// Default application configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "locator.toml";

/// Default configuration directory name (under the platform config dir)
pub const DEFAULT_CONFIG_DIR: &str = "locator";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "LOCATOR";

/// Separator for nested keys in environment variables (`LOCATOR__LOGGING__LEVEL`)
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Default service configuration document path
pub const DEFAULT_SERVICES_PATH: &str = "services.toml";

// ============================================================================
// LOGGING CONSTANTS
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "LOCATOR_LOG";

/// File stem used for log files when the configured path has none
pub const DEFAULT_LOG_FILE_STEM: &str = "locator";

//! Provider Constants
//!
//! Persisted type names and defaults of the bundled service types. Type names
//! are written into configuration documents, so changing one breaks existing
//! files.

// ============================================================================
// TYPE NAMES
// ============================================================================

/// Echo that logs and returns messages unchanged
pub const CONSOLE_ECHO_TYPE: &str = "locator.providers.ConsoleEcho";

/// Echo that prepends a configured prefix
pub const PREFIXED_ECHO_TYPE: &str = "locator.providers.PrefixedEcho";

/// Clock backed by the system time
pub const SYSTEM_CLOCK_TYPE: &str = "locator.providers.SystemClock";

/// Clock frozen at a configured instant
pub const FIXED_CLOCK_TYPE: &str = "locator.providers.FixedClock";

/// In-memory key-value store
pub const MEMORY_STORE_TYPE: &str = "locator.providers.MemoryStore";

// ============================================================================
// DEFAULTS
// ============================================================================

/// Largest instant `FixedClock` accepts; TOML integers are signed 64-bit
pub const MAX_FIXED_CLOCK_MILLIS: u64 = i64::MAX.unsigned_abs();

/// Prefix used by `PrefixedEcho` when none is configured
pub const DEFAULT_ECHO_PREFIX: &str = "> ";

//! Load reports and diagnostics
//!
//! Data problems found while building the registry are not errors: `load`
//! still completes and returns them here so host code decides what to do.

use std::fmt;

use locator_domain::CapabilityId;

/// Warning-level problem found while loading a configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// Two entries claim the same capability; the first one wins
    DuplicateCapability {
        /// The contested capability
        capability: CapabilityId,
        /// Entry that owns the capability
        first: usize,
        /// Entry whose claim was ignored
        duplicate: usize,
    },

    /// Persisted capability not provided by the entry's implementation type
    UnsupportedCapability {
        /// The claimed capability
        capability: CapabilityId,
        /// Entry making the claim
        entry: usize,
        /// Type name of the entry's implementation
        type_name: &'static str,
    },

    /// Entry has an implementation that provides no capability
    UnusedEntry {
        /// Index of the unused entry
        entry: usize,
        /// Type name of the entry's implementation
        type_name: &'static str,
    },

    /// Entry has no implementation
    EmptyEntry {
        /// Index of the empty entry
        entry: usize,
    },
}

impl Diagnostic {
    /// Capability the diagnostic refers to, if any
    pub fn capability(&self) -> Option<&CapabilityId> {
        match self {
            Self::DuplicateCapability { capability, .. }
            | Self::UnsupportedCapability { capability, .. } => Some(capability),
            Self::UnusedEntry { .. } | Self::EmptyEntry { .. } => None,
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateCapability {
                capability,
                first,
                duplicate,
            } => write!(
                f,
                "capability '{capability}' claimed by entries {first} and {duplicate}; entry {first} wins"
            ),
            Self::UnsupportedCapability {
                capability,
                entry,
                type_name,
            } => write!(
                f,
                "entry {entry} claims '{capability}' but {type_name} does not provide it"
            ),
            Self::UnusedEntry { entry, type_name } => {
                write!(f, "entry {entry} ({type_name}) provides no capabilities")
            }
            Self::EmptyEntry { entry } => write!(f, "entry {entry} has no implementation"),
        }
    }
}

/// Outcome of a `load` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// `true` when the registry was already loaded and nothing was rebuilt
    pub already_loaded: bool,
    /// `true` when the call was ignored because a load was under way
    pub in_progress: bool,
    /// Number of capabilities registered
    pub registered: usize,
    /// Problems found while building the map
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadReport {
    /// Report for an idempotent no-op load
    pub fn already_loaded(registered: usize) -> Self {
        Self {
            already_loaded: true,
            in_progress: false,
            registered,
            diagnostics: Vec::new(),
        }
    }

    /// Report for a load requested while the same thread was loading
    pub fn in_progress() -> Self {
        Self {
            in_progress: true,
            ..Self::default()
        }
    }

    /// Whether any diagnostics were recorded
    pub fn has_warnings(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Duplicate capability diagnostics
    pub fn duplicates(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DuplicateCapability { .. }))
    }
}

impl fmt::Display for LoadReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.in_progress {
            return write!(f, "Registry load already in progress");
        }
        if self.already_loaded {
            return write!(f, "Registry already loaded ({} capabilities)", self.registered);
        }
        writeln!(f, "Registered {} capabilities", self.registered)?;
        for diagnostic in &self.diagnostics {
            writeln!(f, "  warning: {diagnostic}")?;
        }
        Ok(())
    }
}

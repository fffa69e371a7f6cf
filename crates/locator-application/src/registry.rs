//! Service Registry
//!
//! Maps each capability to the one implementation that satisfies it. The map
//! is built exactly once from a [`ServiceConfiguration`] and is immutable
//! afterwards, so lookups need no locking.
//!
//! ## Lifecycle
//!
//! ```text
//! Unloaded ──load()──▶ Loading ──▶ Loaded (terminal)
//!     ▲                   │
//!     └── missing config ─┘
//! ```
//!
//! A `load` issued from the loading thread itself (for example by a
//! [`ConfigurationSource`] while it is fetching) is a no-op. Other threads
//! block until the build finishes.
//!
//! ## Usage
//!
//! ```ignore
//! let registry = Arc::new(ServiceRegistry::new());
//! let report = registry.load(&config)?;
//! for diagnostic in &report.diagnostics {
//!     eprintln!("warning: {diagnostic}");
//! }
//!
//! let echo: &dyn Echo = registry.resolve::<dyn Echo>()?;
//! echo.echo("hello");
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread::{self, ThreadId};

use locator_domain::error::{Error, Result};
use locator_domain::{Capability, CapabilityId, CapabilityRef, ServiceConfiguration};
use once_cell::sync::OnceCell;
use tracing::{debug, info, warn};

use crate::report::{Diagnostic, LoadReport};
use crate::source::ConfigurationSource;

const UNLOADED: u8 = 0;
const LOADING: u8 = 1;
const LOADED: u8 = 2;

type ServiceMap = HashMap<CapabilityId, CapabilityRef>;

/// Lifecycle state of a [`ServiceRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryState {
    /// Nothing loaded; every resolve fails with `NotLoaded`
    Unloaded,
    /// The map is being built
    Loading,
    /// The map is built and immutable
    Loaded,
}

impl fmt::Display for RegistryState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unloaded => write!(f, "unloaded"),
            Self::Loading => write!(f, "loading"),
            Self::Loaded => write!(f, "loaded"),
        }
    }
}

/// Capability to implementation registry, loaded once
pub struct ServiceRegistry {
    state: AtomicU8,
    loader: Mutex<Option<ThreadId>>,
    services: OnceCell<ServiceMap>,
}

impl ServiceRegistry {
    /// Create an unloaded registry
    pub fn new() -> Self {
        Self {
            state: AtomicU8::new(UNLOADED),
            loader: Mutex::new(None),
            services: OnceCell::new(),
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> RegistryState {
        match self.state.load(Ordering::Acquire) {
            LOADED => RegistryState::Loaded,
            LOADING => RegistryState::Loading,
            _ => RegistryState::Unloaded,
        }
    }

    /// Whether the map has been built
    pub fn is_loaded(&self) -> bool {
        self.services.get().is_some()
    }

    /// Build the registry from `config`.
    ///
    /// Idempotent: once loaded, later calls return a report with
    /// `already_loaded` set and leave the map untouched. Concurrent callers
    /// block until the first load finishes; a call made by the loading thread
    /// while it is loading returns [`LoadReport::in_progress`].
    pub fn load(&self, config: &ServiceConfiguration) -> Result<LoadReport> {
        self.initialize(|| Ok(build_services(config)))
    }

    /// Build the registry from the configuration supplied by `source`.
    ///
    /// Fails with `ConfigurationMissing` when the source has none; the
    /// registry then stays unloaded and the call can be retried.
    pub fn load_from(&self, source: &dyn ConfigurationSource) -> Result<LoadReport> {
        self.initialize(|| {
            let config = source.fetch()?.ok_or_else(|| {
                Error::configuration_missing("configuration source returned no configuration")
            })?;
            Ok(build_services(&config))
        })
    }

    fn initialize<F>(&self, build: F) -> Result<LoadReport>
    where
        F: FnOnce() -> Result<(ServiceMap, LoadReport)>,
    {
        if let Some(services) = self.services.get() {
            debug!("Service registry already loaded, skipping rebuild");
            return Ok(LoadReport::already_loaded(services.len()));
        }
        if self.is_loading_thread() {
            debug!("Service registry load requested while loading, ignoring");
            return Ok(LoadReport::in_progress());
        }

        let mut built = None;
        let services = self.services.get_or_try_init(|| {
            let mut guard = LoadingGuard::enter(self);
            let (services, report) = build()?;
            guard.completed = true;
            built = Some(report);
            Ok::<_, Error>(services)
        })?;
        self.state.store(LOADED, Ordering::Release);

        match built {
            Some(report) => {
                log_report(&report);
                Ok(report)
            }
            // Another thread finished the build while this one waited
            None => Ok(LoadReport::already_loaded(services.len())),
        }
    }

    fn is_loading_thread(&self) -> bool {
        let loader = self.loader.lock().unwrap_or_else(PoisonError::into_inner);
        *loader == Some(thread::current().id())
    }

    /// Resolve the implementation registered for capability `T`
    pub fn resolve<T: ?Sized + Capability>(&self) -> Result<&T> {
        let services = self.services.get().ok_or_else(|| Error::not_loaded(T::ID))?;
        let handle = services.get(T::ID).ok_or_else(|| Error::not_found(T::ID))?;
        handle
            .get::<T>()
            .ok_or_else(|| Error::capability_mismatch(T::ID))
    }

    /// Resolve capability `T`, treating absence as `None`
    pub fn try_resolve<T: ?Sized + Capability>(&self) -> Option<&T> {
        self.resolve::<T>().ok()
    }

    /// Resolve capability `T` into `slot`.
    ///
    /// Returns whether an implementation was found; the slot is cleared
    /// otherwise.
    pub fn resolve_into<'a, T: ?Sized + Capability>(&'a self, slot: &mut Option<&'a T>) -> bool {
        *slot = self.try_resolve::<T>();
        slot.is_some()
    }

    /// Whether capability `T` has a registered implementation
    pub fn contains<T: ?Sized + Capability>(&self) -> bool {
        self.services
            .get()
            .is_some_and(|services| services.contains_key(T::ID))
    }

    /// Registered capabilities, sorted
    pub fn capabilities(&self) -> Vec<&CapabilityId> {
        let mut capabilities: Vec<_> = self
            .services
            .get()
            .map(|services| services.keys().collect())
            .unwrap_or_default();
        capabilities.sort();
        capabilities
    }

    /// Number of registered capabilities
    pub fn len(&self) -> usize {
        self.services.get().map_or(0, HashMap::len)
    }

    /// Whether no capabilities are registered
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ServiceRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ServiceRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceRegistry")
            .field("state", &self.state())
            .field("capabilities", &self.capabilities())
            .finish()
    }
}

/// Marks the current thread as the loader for the duration of a build
struct LoadingGuard<'a> {
    registry: &'a ServiceRegistry,
    completed: bool,
}

impl<'a> LoadingGuard<'a> {
    fn enter(registry: &'a ServiceRegistry) -> Self {
        *registry.loader.lock().unwrap_or_else(PoisonError::into_inner) =
            Some(thread::current().id());
        registry.state.store(LOADING, Ordering::Release);
        Self {
            registry,
            completed: false,
        }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        if !self.completed {
            self.registry.state.store(UNLOADED, Ordering::Release);
        }
        *self
            .registry
            .loader
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

/// Build the capability map in entry order; the first claim on a capability wins
fn build_services(config: &ServiceConfiguration) -> (ServiceMap, LoadReport) {
    let mut services = ServiceMap::new();
    let mut owners: HashMap<CapabilityId, usize> = HashMap::new();
    let mut report = LoadReport::default();

    for (index, entry) in config.entries().iter().enumerate() {
        let Some(service) = entry.implementation() else {
            report.diagnostics.push(Diagnostic::EmptyEntry { entry: index });
            continue;
        };
        let descriptor = service.descriptor();
        if entry.capabilities().is_empty() {
            report.diagnostics.push(Diagnostic::UnusedEntry {
                entry: index,
                type_name: descriptor.type_name,
            });
            continue;
        }

        for capability in entry.capabilities() {
            if let Some(&first) = owners.get(capability) {
                report.diagnostics.push(Diagnostic::DuplicateCapability {
                    capability: capability.clone(),
                    first,
                    duplicate: index,
                });
                continue;
            }

            let handle = descriptor
                .binding(capability.as_str())
                .and_then(|binding| (binding.cast)(Arc::clone(service)));
            let Some(handle) = handle else {
                report.diagnostics.push(Diagnostic::UnsupportedCapability {
                    capability: capability.clone(),
                    entry: index,
                    type_name: descriptor.type_name,
                });
                continue;
            };

            debug!(
                capability = %capability,
                type_name = descriptor.type_name,
                entry = index,
                "Registered capability"
            );
            owners.insert(capability.clone(), index);
            services.insert(capability.clone(), handle);
        }
    }

    report.registered = services.len();
    (services, report)
}

fn log_report(report: &LoadReport) {
    for diagnostic in &report.diagnostics {
        match diagnostic {
            Diagnostic::DuplicateCapability {
                capability,
                first,
                duplicate,
            } => warn!(
                capability = %capability,
                first,
                duplicate,
                "Duplicate capability registration ignored"
            ),
            other => warn!("{other}"),
        }
    }
    info!(
        capabilities = report.registered,
        warnings = report.diagnostics.len(),
        "Service registry loaded"
    );
}

//! File-backed service configuration store
//!
//! Persists [`ConfigurationDocument`]s as TOML or JSON. A missing file reads
//! as `None`, which the registry reports as `ConfigurationMissing`.
//!
//! ```text
//! services.toml ──read()──▶ ConfigurationDocument ──catalog.materialize()──▶ ServiceConfiguration
//!               ◀─write()──                       ◀──to_document()────────
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use locator_application::{ConfigurationSource, ServiceCatalog};
use locator_domain::error::Result;
use locator_domain::{ConfigurationDocument, ServiceConfiguration};
use tracing::{debug, info};

use crate::config::{DocumentFormat, ServicesConfig};
use crate::error_ext::ErrorContext;

/// Reads and writes the service configuration document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfigurationStore {
    path: PathBuf,
    format: DocumentFormat,
}

impl FileConfigurationStore {
    /// Store at `path`, with the format inferred from its extension
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let format = DocumentFormat::from_path(&path);
        Self { path, format }
    }

    /// Store described by the application configuration
    pub fn from_config(config: &ServicesConfig) -> Self {
        Self {
            path: config.path.clone(),
            format: config.resolved_format(),
        }
    }

    /// Override the document format
    pub fn with_format(mut self, format: DocumentFormat) -> Self {
        self.format = format;
        self
    }

    /// Document path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Document format
    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    /// Whether the document exists
    pub fn exists(&self) -> bool {
        self.path.is_file()
    }

    /// Read the persisted document, `None` if the file does not exist
    pub fn read(&self) -> Result<Option<ConfigurationDocument>> {
        if !self.exists() {
            debug!(path = %self.path.display(), "Service configuration not found");
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)
            .io_context(format!("Failed to read {}", self.path.display()))?;
        let document = self.parse(&content)?;
        debug!(
            path = %self.path.display(),
            entries = document.entries.len(),
            "Read service configuration"
        );
        Ok(Some(document))
    }

    /// Write the document, creating parent directories as needed
    pub fn write(&self, document: &ConfigurationDocument) -> Result<()> {
        let content = self.render(document)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .io_context(format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, content)
            .io_context(format!("Failed to write {}", self.path.display()))?;

        info!(
            path = %self.path.display(),
            entries = document.entries.len(),
            format = %self.format,
            "Saved service configuration"
        );
        Ok(())
    }

    /// Read and materialize the configuration with `catalog`
    pub fn load(&self, catalog: &ServiceCatalog) -> Result<Option<ServiceConfiguration>> {
        self.read()?
            .map(|document| catalog.materialize(&document))
            .transpose()
    }

    /// Persist `config`
    pub fn save(&self, config: &ServiceConfiguration) -> Result<()> {
        self.write(&config.to_document())
    }

    /// Configuration source reading from this store
    pub fn source<'a>(&'a self, catalog: &'a ServiceCatalog) -> StoreSource<'a> {
        StoreSource {
            store: self,
            catalog,
        }
    }

    fn parse(&self, content: &str) -> Result<ConfigurationDocument> {
        let context = || format!("Invalid service configuration {}", self.path.display());
        match self.format {
            DocumentFormat::Toml => toml::from_str(content).with_serialization_context(context),
            DocumentFormat::Json => {
                serde_json::from_str(content).with_serialization_context(context)
            }
        }
    }

    fn render(&self, document: &ConfigurationDocument) -> Result<String> {
        match self.format {
            DocumentFormat::Toml => toml::to_string_pretty(document)
                .serialization_context("Failed to serialize service configuration to TOML"),
            DocumentFormat::Json => serde_json::to_string_pretty(document)
                .serialization_context("Failed to serialize service configuration to JSON"),
        }
    }
}

/// [`ConfigurationSource`] backed by a [`FileConfigurationStore`]
#[derive(Debug, Clone, Copy)]
pub struct StoreSource<'a> {
    store: &'a FileConfigurationStore,
    catalog: &'a ServiceCatalog,
}

impl ConfigurationSource for StoreSource<'_> {
    fn fetch(&self) -> Result<Option<ServiceConfiguration>> {
        self.store.load(self.catalog)
    }
}

//! Command line interface
//!
//! Authoring commands for the persisted service configuration, plus a few
//! commands that load the registry and use it.
//!
//! | Command | Description |
//! |---------|-------------|
//! | `types` | List registered service types and their capabilities |
//! | `show` | Print the service configuration entries |
//! | `add <type>` | Append an entry holding a new instance |
//! | `set <index> [type]` | Replace (or clear) an entry's implementation |
//! | `remove <index>` | Remove an entry |
//! | `check` | Load the registry and report warnings |
//! | `echo <message>` | Resolve `Echo` and echo a message |

use std::io::Write;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use locator_application::{ServiceCatalog, ServiceRegistry};
use locator_domain::error::Result;
use locator_domain::ports::Echo;
use locator_domain::{Service, ServiceConfiguration};
use locator_infrastructure::ErrorContext;
use locator_infrastructure::config::AppConfig;
use locator_infrastructure::store::FileConfigurationStore;
use tracing::debug;

/// Command line interface for the Service Locator
#[derive(Parser, Debug)]
#[command(name = "locator")]
#[command(about = "Service Locator - author and inspect service configurations")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Command to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// List registered service types
    Types,

    /// Show the service configuration entries
    Show,

    /// Append an entry holding a new instance of a service type
    Add {
        /// Service type name
        type_name: String,

        /// Factory settings as JSON
        #[arg(long)]
        settings: Option<String>,
    },

    /// Replace the implementation of an entry; omit the type to clear it
    Set {
        /// Entry index
        index: usize,

        /// Service type name
        type_name: Option<String>,

        /// Factory settings as JSON
        #[arg(long)]
        settings: Option<String>,
    },

    /// Remove an entry, shifting later entries down
    Remove {
        /// Entry index
        index: usize,
    },

    /// Load the registry and report warnings
    Check,

    /// Resolve the Echo capability and echo a message
    Echo {
        /// Message to echo
        message: String,
    },
}

/// Run `command` against the service configuration described by `config`
pub fn execute(command: &Command, config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let catalog = ServiceCatalog::discover();
    let store = FileConfigurationStore::from_config(&config.services);
    debug!(?command, path = %store.path().display(), "Executing command");

    match command {
        Command::Types => list_types(&catalog, out),
        Command::Show => show(&catalog, &store, out),
        Command::Add {
            type_name,
            settings,
        } => {
            let mut services = editable(&catalog, &store)?;
            let service = instantiate(&catalog, type_name, settings.as_deref())?;
            let index = services.push(service);
            store.save(&services)?;
            writeln!(out, "Added entry {index} ({type_name})").io_context("write output")
        }
        Command::Set {
            index,
            type_name,
            settings,
        } => {
            let mut services = editable(&catalog, &store)?;
            let service = type_name
                .as_deref()
                .map(|type_name| instantiate(&catalog, type_name, settings.as_deref()))
                .transpose()?;
            services.set_implementation(*index, service)?;
            store.save(&services)?;
            let written = match type_name {
                Some(type_name) => writeln!(out, "Set entry {index} to {type_name}"),
                None => writeln!(out, "Cleared entry {index}"),
            };
            written.io_context("write output")
        }
        Command::Remove { index } => {
            let mut services = editable(&catalog, &store)?;
            let removed = services.remove_entry(*index)?;
            store.save(&services)?;
            let type_name = removed.type_name().unwrap_or("empty");
            writeln!(out, "Removed entry {index} ({type_name})").io_context("write output")
        }
        Command::Check => {
            let registry = ServiceRegistry::new();
            let report = registry.load_from(&store.source(&catalog))?;
            write!(out, "{report}").io_context("write output")?;
            for capability in registry.capabilities() {
                writeln!(out, "  {capability}").io_context("write output")?;
            }
            Ok(())
        }
        Command::Echo { message } => {
            let registry = ServiceRegistry::new();
            registry.load_from(&store.source(&catalog))?;
            let echo = registry.resolve::<dyn Echo>()?;
            writeln!(out, "{}", echo.echo(message)).io_context("write output")
        }
    }
}

fn list_types(catalog: &ServiceCatalog, out: &mut dyn Write) -> Result<()> {
    for descriptor in catalog.descriptors() {
        let capabilities: Vec<String> = descriptor
            .capability_ids()
            .into_iter()
            .map(|id| id.to_string())
            .collect();
        writeln!(
            out,
            "{}  [{}]\n    {}",
            descriptor.type_name,
            capabilities.join(", "),
            descriptor.description
        )
        .io_context("write output")?;
    }
    Ok(())
}

fn show(
    catalog: &ServiceCatalog,
    store: &FileConfigurationStore,
    out: &mut dyn Write,
) -> Result<()> {
    let Some(services) = store.load(catalog)? else {
        return writeln!(out, "No service configuration at {}", store.path().display())
            .io_context("write output");
    };

    for (index, entry) in services.entries().iter().enumerate() {
        let capabilities: Vec<&str> = entry.capabilities().iter().map(|id| id.as_str()).collect();
        writeln!(
            out,
            "{index}: {} [{}]",
            entry.type_name().unwrap_or("(empty)"),
            capabilities.join(", ")
        )
        .io_context("write output")?;
    }
    for conflict in services.conflicts() {
        writeln!(
            out,
            "warning: capability '{}' claimed by entries {} and {}; entry {} wins",
            conflict.capability, conflict.first, conflict.duplicate, conflict.first
        )
        .io_context("write output")?;
    }
    Ok(())
}

/// Configuration to edit; a missing document starts empty
fn editable(
    catalog: &ServiceCatalog,
    store: &FileConfigurationStore,
) -> Result<ServiceConfiguration> {
    Ok(store.load(catalog)?.unwrap_or_default())
}

fn instantiate(
    catalog: &ServiceCatalog,
    type_name: &str,
    settings: Option<&str>,
) -> Result<std::sync::Arc<dyn Service>> {
    let settings = match settings {
        Some(raw) => serde_json::from_str(raw).serialization_context("Invalid --settings JSON")?,
        None => serde_json::Value::Null,
    };
    catalog.instantiate(type_name, &settings)
}

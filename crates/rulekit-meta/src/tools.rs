//! Tool registry
//!
//! The registry is the set of tools declared in the templates
//! configuration. [`ToolRegistry`] is the accessor: it re-reads the
//! configuration on every call, so edits to the file are visible on the
//! next call. [`ToolCatalog`] is a snapshot of one such read.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::TemplatesConfig;
use crate::loader::ConfigLoader;
use crate::Result;
use rulekit_fs::NormalizedPath;

/// A tool known to the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub key: String,
    pub name: String,
    pub description: String,
}

/// Snapshot of the registry: tool key to descriptor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolCatalog {
    tools: BTreeMap<String, ToolDescriptor>,
}

impl ToolCatalog {
    /// Build a catalog from an already-loaded configuration.
    pub fn from_config(config: &TemplatesConfig) -> Self {
        let tools = config
            .tools
            .iter()
            .map(|(key, entry)| {
                let descriptor = ToolDescriptor {
                    key: key.clone(),
                    name: entry.name.clone(),
                    description: entry.description.clone(),
                };
                (key.clone(), descriptor)
            })
            .collect();
        Self { tools }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.tools.contains_key(key)
    }

    pub fn get(&self, key: &str) -> Option<&ToolDescriptor> {
        self.tools.get(key)
    }

    /// Sorted tool keys.
    pub fn keys(&self) -> Vec<&str> {
        self.tools.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Descriptors sorted by key.
    pub fn descriptors(&self) -> impl Iterator<Item = &ToolDescriptor> {
        self.tools.values()
    }
}

/// Accessor for the tool registry of one templates root.
#[derive(Debug, Clone)]
pub struct ToolRegistry {
    loader: ConfigLoader,
}

impl ToolRegistry {
    pub fn new(templates_root: impl Into<NormalizedPath>) -> Self {
        Self {
            loader: ConfigLoader::new(templates_root),
        }
    }

    /// Read the configuration and return a fresh catalog.
    pub fn snapshot(&self) -> Result<ToolCatalog> {
        let config = self.loader.load()?;
        Ok(ToolCatalog::from_config(&config))
    }

    /// All known tools, sorted by key.
    pub fn list_tools(&self) -> Result<Vec<ToolDescriptor>> {
        Ok(self.snapshot()?.descriptors().cloned().collect())
    }
}

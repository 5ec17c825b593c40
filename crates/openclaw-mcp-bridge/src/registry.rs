//! Name-keyed tool registry

use openclaw_mcp_core::{RegistryEntry, ToolDefinition};
use rustc_hash::FxHashMap;

/// Registry entries in listing order with an index by name.
///
/// Inserting an existing name replaces the entry in place, so the last
/// write wins without moving the tool in the listing.
#[derive(Debug, Default)]
pub struct ToolRegistry {
    entries: Vec<RegistryEntry>,
    index: FxHashMap<String, usize>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry. Returns `true` when a tool was replaced.
    pub fn upsert(&mut self, entry: RegistryEntry) -> bool {
        let existing = self.index.get(entry.name()).copied();
        match existing {
            Some(position) => {
                self.entries[position] = entry;
                true
            }
            None => {
                self.index
                    .insert(entry.name().to_string(), self.entries.len());
                self.entries.push(entry);
                false
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&RegistryEntry> {
        self.index.get(name).map(|&position| &self.entries[position])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Public projection of every entry, in listing order
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.entries
            .iter()
            .map(|entry| entry.definition.clone())
            .collect()
    }
}

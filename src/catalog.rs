//! File-backed tool catalog
//!
//! Thin data-access layer over a JSON list of tool records: lookup,
//! any-overlap category filtering, and substring search. The engine never
//! touches this module; callers load a catalog snapshot and hand the records
//! over.

use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::types::Tool;

/// Difficulty assumed for tools without a label when filtering by
/// difficulty.
const DEFAULT_DIFFICULTY: &str = "intermediate";

// =============================================================================
// Catalog
// =============================================================================

/// An immutable snapshot of catalog records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCatalog {
    tools: Vec<Tool>,
}

impl ToolCatalog {
    /// Load a catalog from a JSON file holding an array of tool records.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let tools: Vec<Tool> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;
        Ok(Self { tools })
    }

    pub fn from_tools(tools: Vec<Tool>) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &[Tool] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Look up a tool by name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&Tool> {
        self.tools
            .iter()
            .find(|tool| tool.tool_name.eq_ignore_ascii_case(name))
    }

    /// Tools passing every supplied filter dimension.
    pub fn filter(&self, filter: &CatalogFilter) -> Vec<&Tool> {
        self.tools.iter().filter(|tool| filter.matches(tool)).collect()
    }

    /// Case-insensitive substring search over tool name and summary.
    pub fn search(&self, text: &str) -> Vec<&Tool> {
        let needle = text.to_lowercase();
        self.tools
            .iter()
            .filter(|tool| {
                tool.tool_name.to_lowercase().contains(&needle)
                    || tool.summary.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

// =============================================================================
// Filtering
// =============================================================================

/// Per-dimension catalog filter. Set-valued dimensions match on any overlap;
/// difficulty matches on label inclusion, treating unlabeled tools as
/// "intermediate". Supplied dimensions combine with AND; an empty filter
/// matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFilter {
    #[serde(default)]
    pub purpose: Vec<String>,
    #[serde(default)]
    pub functional_role: Vec<String>,
    #[serde(default)]
    pub application_field: Vec<String>,
    #[serde(default)]
    pub tech_layer: Vec<String>,
    #[serde(default)]
    pub data_flow_role: Vec<String>,
    #[serde(default)]
    pub difficulty: Vec<String>,
}

impl CatalogFilter {
    pub fn matches(&self, tool: &Tool) -> bool {
        let empty = crate::types::ToolCategories::default();
        let categories = tool.categories.as_ref().unwrap_or(&empty);

        if !dimension_passes(&self.purpose, &categories.purpose) {
            return false;
        }
        if !dimension_passes(&self.functional_role, &categories.functional_role) {
            return false;
        }
        if !dimension_passes(&self.application_field, &categories.application_field) {
            return false;
        }
        if !dimension_passes(&self.tech_layer, &categories.tech_layer) {
            return false;
        }
        if !dimension_passes(&self.data_flow_role, &categories.data_flow_role) {
            return false;
        }
        if !self.difficulty.is_empty() {
            let label = categories.difficulty.as_deref().unwrap_or(DEFAULT_DIFFICULTY);
            if !self.difficulty.iter().any(|wanted| wanted == label) {
                return false;
            }
        }
        true
    }
}

/// A dimension passes when no filter values were supplied or any value
/// appears in the tool's set.
fn dimension_passes(wanted: &[String], values: &[String]) -> bool {
    wanted.is_empty() || wanted.iter().any(|w| values.contains(w))
}

// =============================================================================
// Tests
// =============================================================================

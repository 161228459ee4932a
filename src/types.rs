//! Catalog record types shared across the crate.
//!
//! Tools are read-only inputs supplied by the catalog store; everything the
//! engine derives from them lives in `engine::types`.

use serde::{Deserialize, Serialize};

// =============================================================================
// Tool Categories
// =============================================================================

/// Category memberships for a catalog tool.
///
/// Every set-valued field defaults to empty and the difficulty label is
/// optional: a tool with no memberships is a legal record that simply
/// matches nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ToolCategories {
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
    /// Free-text difficulty label ("no-code", "low-code", "code", ...)
    #[serde(default)]
    pub difficulty: Option<String>,
    #[serde(default)]
    pub common_pairings: Vec<String>,
}

impl ToolCategories {
    pub fn with_purpose<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.purpose = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_functional_roles<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functional_role = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_application_fields<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.application_field = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tech_layers<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_layer = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_data_flow_roles<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.data_flow_role = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_difficulty(mut self, label: impl Into<String>) -> Self {
        self.difficulty = Some(label.into());
        self
    }
}

// =============================================================================
// Tool
// =============================================================================

/// A catalog entry.
///
/// `tool_name` is unique within the catalog and used for identity. Records
/// deserialize leniently: absent category data defaults rather than fails,
/// and presentation metadata passes through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub tool_name: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub categories: Option<ToolCategories>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_priority: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub popularity_score: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_verified: Option<bool>,
}

impl Tool {
    pub fn new(name: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            tool_name: name.into(),
            summary: summary.into(),
            ..Default::default()
        }
    }

    pub fn with_categories(mut self, categories: ToolCategories) -> Self {
        self.categories = Some(categories);
        self
    }

    /// The tool's difficulty label, if it carries one.
    pub fn difficulty(&self) -> Option<&str> {
        self.categories
            .as_ref()
            .and_then(|c| c.difficulty.as_deref())
    }
}

// =============================================================================
// Skill Level
// =============================================================================

/// User skill hint supplied alongside a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl SkillLevel {
    /// Parse a free-text hint. Anything that is not "beginner" or
    /// "intermediate" routes through the code-first rule, so it parses as
    /// `Advanced` rather than failing.
    pub fn parse(hint: &str) -> SkillLevel {
        match hint.to_lowercase().as_str() {
            "beginner" => SkillLevel::Beginner,
            "intermediate" => SkillLevel::Intermediate,
            _ => SkillLevel::Advanced,
        }
    }

    /// Whether a tool difficulty label is compatible with this level.
    ///
    /// Shared by the scorer's difficulty bonus and the fallback partition.
    /// The advanced rule accepts any label containing "code" except
    /// "no-code", so "low-code" tools qualify for the advanced bonus even
    /// though the fallback partition buckets them as intermediate.
    pub fn accepts_label(&self, label: &str) -> bool {
        let label = label.to_lowercase();
        match self {
            SkillLevel::Beginner => label.contains("no-code") || label.contains("beginner"),
            SkillLevel::Intermediate => {
                label.contains("low-code") || label.contains("intermediate")
            }
            SkillLevel::Advanced => label.contains("code") && !label.contains("no-code"),
        }
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkillLevel::Beginner => write!(f, "beginner"),
            SkillLevel::Intermediate => write!(f, "intermediate"),
            SkillLevel::Advanced => write!(f, "advanced"),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

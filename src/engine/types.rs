//! Engine value types
//!
//! Everything here is an immutable value record: intent templates are static
//! configuration, scored tools and stacks are derived per request and
//! discarded after the response is built.

use serde::{Deserialize, Serialize};

use crate::types::Tool;

// =============================================================================
// Intent Templates
// =============================================================================

/// A static rule mapping trigger keywords to target categories and a display
/// strategy. Templates are hand-authored configuration, loaded once and never
/// mutated at runtime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentTemplate {
    /// Display name, e.g. "Automation Workflow Stack"
    pub name: String,
    /// Strategy description shown with the recommended stack
    pub strategy: String,
    /// Lower-case trigger substrings
    pub keywords: Vec<String>,
    /// Target `application_field` values
    pub application_fields: Vec<String>,
    /// Target `functional_role` values
    pub functional_roles: Vec<String>,
    /// Target `tech_layer` values
    pub tech_layers: Vec<String>,
}

impl IntentTemplate {
    pub fn new(name: impl Into<String>, strategy: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            strategy: strategy.into(),
            keywords: Vec::new(),
            application_fields: Vec::new(),
            functional_roles: Vec::new(),
            tech_layers: Vec::new(),
        }
    }

    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_application_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.application_fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_functional_roles<I, S>(mut self, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.functional_roles = roles.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_tech_layers<I, S>(mut self, layers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tech_layers = layers.into_iter().map(Into::into).collect();
        self
    }

    /// Whether any trigger keyword occurs in the query. The query must
    /// already be lower-cased; keywords are stored lower-case.
    pub fn matches_query(&self, normalized_query: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| normalized_query.contains(keyword.as_str()))
    }
}

// =============================================================================
// Scored Tools
// =============================================================================

/// A catalog tool plus the score and match rationale it earned against one
/// intent template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredTool {
    #[serde(flatten)]
    pub tool: Tool,
    pub score: u32,
    /// Comma-joined list of the category dimensions that matched
    pub match_reason: String,
}

impl ScoredTool {
    pub fn new(tool: Tool, score: u32, match_reason: impl Into<String>) -> Self {
        Self {
            tool,
            score,
            match_reason: match_reason.into(),
        }
    }

    /// Wrap a tool that was never scored against a template (fallback path).
    pub fn unscored(tool: Tool) -> Self {
        Self::new(tool, 0, super::scorer::REASON_GENERAL)
    }
}

// =============================================================================
// Stacks
// =============================================================================

/// A named, ranked group of tools proposed as one coherent answer to a query.
///
/// Tool order is ranking order. A stack in a returned result always has at
/// least one tool; empty stacks are filtered out before returning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stack {
    pub name: String,
    pub strategy: String,
    pub tools: Vec<ScoredTool>,
    /// Mean of member tool scores, or a fixed constant in the fallback path
    pub score: f64,
}

impl Stack {
    pub fn new(
        name: impl Into<String>,
        strategy: impl Into<String>,
        tools: Vec<ScoredTool>,
        score: f64,
    ) -> Self {
        Self {
            name: name.into(),
            strategy: strategy.into(),
            tools,
            score,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }
}

// =============================================================================
// Recommendation Result
// =============================================================================

/// Ordered stacks answering one query: first is the best fit, later entries
/// are alternates. Regenerated on every call, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub stacks: Vec<Stack>,
}

impl RecommendationResult {
    pub fn new(stacks: Vec<Stack>) -> Self {
        Self { stacks }
    }

    /// The top-ranked stack, when any tool matched at all.
    pub fn best(&self) -> Option<&Stack> {
        self.stacks.first()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;

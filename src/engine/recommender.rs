//! Recommendation engine entry point
//!
//! Composes the taxonomy matcher, category scorer, and stack assembler into
//! a single request/response pipeline, with the difficulty classifier as the
//! fallback when no intent template matches. Pure computation over the
//! caller's catalog snapshot: no I/O, no shared state, safe to call
//! concurrently.

use super::assembler::assemble;
use super::classifier::classify_and_stack;
use super::matcher::WorkflowMatcher;
use super::scorer::score_tool;
use super::types::{IntentTemplate, RecommendationResult};
use crate::types::{SkillLevel, Tool};

/// Stack recommendation engine.
pub struct Recommender {
    matcher: WorkflowMatcher,
}

impl Default for Recommender {
    fn default() -> Self {
        Self::new()
    }
}

impl Recommender {
    /// Create a recommender over the built-in workflow taxonomy.
    pub fn new() -> Self {
        Self {
            matcher: WorkflowMatcher::new(),
        }
    }

    /// Create a recommender over a custom template table.
    pub fn with_templates(templates: Vec<IntentTemplate>) -> Self {
        Self {
            matcher: WorkflowMatcher::with_templates(templates),
        }
    }

    pub fn matcher(&self) -> &WorkflowMatcher {
        &self.matcher
    }

    /// Rank catalog tools for a free-text query and group them into stacks.
    ///
    /// When the query matches an intent template, every tool is scored by
    /// weighted category overlap and the top candidates are assembled into a
    /// recommended stack plus alternates. Otherwise the catalog is bucketed
    /// by difficulty. Total over any input: an empty result means no
    /// relevant tools, never an error.
    pub fn generate_recommendations(
        &self,
        query: &str,
        catalog: &[Tool],
        skill_level: Option<SkillLevel>,
    ) -> RecommendationResult {
        match self.matcher.match_query(query) {
            Some(template) => {
                let scored = catalog
                    .iter()
                    .map(|tool| score_tool(tool, template, skill_level))
                    .collect();
                assemble(scored, template)
            }
            None => classify_and_stack(catalog),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
#[path = "recommender_tests.rs"]
mod tests;

//! Difficulty classifier (fallback path)
//!
//! When no intent template matches a query, the whole catalog is bucketed by
//! difficulty label and returned as one stack per bucket. Catalog order is
//! authoritative here; there is no score-based ranking on this path.

use serde::{Deserialize, Serialize};

use super::assembler::STACK_WINDOW;
use super::types::{RecommendationResult, ScoredTool, Stack};
use crate::types::{SkillLevel, Tool};

/// Aggregate scores for the fallback stacks are presentation hints, not
/// comparable to scorer output.
const BEGINNER_STACK_SCORE: f64 = 8.0;
const INTERMEDIATE_STACK_SCORE: f64 = 7.0;
const ADVANCED_STACK_SCORE: f64 = 6.0;

// =============================================================================
// Difficulty Tiers
// =============================================================================

/// The three buckets of the fallback partition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DifficultyTier {
    Beginner,
    Intermediate,
    Advanced,
}

impl DifficultyTier {
    /// Classify a (possibly absent) difficulty label. Total and
    /// non-overlapping: every label lands in exactly one tier, with
    /// `Advanced` as the catch-all for unlabeled and unrecognized tools.
    ///
    /// Built on the same substring tests as the scorer's difficulty bonus so
    /// the two paths cannot drift apart.
    pub fn classify(label: Option<&str>) -> DifficultyTier {
        let label = label.unwrap_or("");
        if SkillLevel::Beginner.accepts_label(label) {
            DifficultyTier::Beginner
        } else if SkillLevel::Intermediate.accepts_label(label) {
            DifficultyTier::Intermediate
        } else {
            DifficultyTier::Advanced
        }
    }
}

impl std::fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyTier::Beginner => write!(f, "Beginner"),
            DifficultyTier::Intermediate => write!(f, "Intermediate"),
            DifficultyTier::Advanced => write!(f, "Advanced"),
        }
    }
}

// =============================================================================
// Fallback Stacking
// =============================================================================

/// Partition the catalog by difficulty tier and build one fixed-name stack
/// per non-empty bucket, each holding the first tools of its bucket in
/// catalog order.
pub fn classify_and_stack(catalog: &[Tool]) -> RecommendationResult {
    let mut beginner = Vec::new();
    let mut intermediate = Vec::new();
    let mut advanced = Vec::new();

    for tool in catalog {
        match DifficultyTier::classify(tool.difficulty()) {
            DifficultyTier::Beginner => beginner.push(tool),
            DifficultyTier::Intermediate => intermediate.push(tool),
            DifficultyTier::Advanced => advanced.push(tool),
        }
    }

    let stacks = [
        (
            "Beginner-Friendly Stack",
            "Start with no-code tools that are easy to learn and use",
            BEGINNER_STACK_SCORE,
            beginner,
        ),
        (
            "Intermediate Stack",
            "Combine low-code tools for more advanced workflows",
            INTERMEDIATE_STACK_SCORE,
            intermediate,
        ),
        (
            "Advanced Stack",
            "Leverage code-based tools for maximum flexibility",
            ADVANCED_STACK_SCORE,
            advanced,
        ),
    ]
    .into_iter()
    .filter(|(_, _, _, bucket)| !bucket.is_empty())
    .map(|(name, strategy, score, bucket)| {
        let tools = bucket
            .into_iter()
            .take(STACK_WINDOW)
            .cloned()
            .map(ScoredTool::unscored)
            .collect();
        Stack::new(name, strategy, tools, score)
    })
    .collect();

    RecommendationResult::new(stacks)
}

// =============================================================================
// Tests
// =============================================================================

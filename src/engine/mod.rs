//! Recommendation engine
//!
//! Provides:
//! - Workflow taxonomy matching over a fixed intent-template table
//! - Weighted category-overlap scoring of catalog tools
//! - Stack assembly into a recommended stack plus alternates
//! - Difficulty-tier fallback stacking when no template matches

mod assembler;
mod classifier;
mod matcher;
mod recommender;
mod scorer;
mod types;

pub use assembler::assemble;
pub use classifier::{classify_and_stack, DifficultyTier};
pub use matcher::WorkflowMatcher;
pub use recommender::Recommender;
pub use scorer::{
    score_tool, WEIGHT_APPLICATION_FIELD, WEIGHT_DIFFICULTY, WEIGHT_FUNCTIONAL_ROLE,
    WEIGHT_TECH_LAYER,
};
pub use types::{IntentTemplate, RecommendationResult, ScoredTool, Stack};

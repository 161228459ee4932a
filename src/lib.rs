//! Recomendar: rule-based stack recommendations for an AI tool catalog
//!
//! Given a free-text statement of intent and an optional skill level, the
//! engine ranks catalog tools by weighted category overlap and groups the
//! best candidates into named stacks. The whole computation is pure and
//! deterministic over the caller's catalog snapshot.
//!
//! ```
//! use recomendar::{Recommender, Tool, ToolCategories};
//!
//! let catalog = vec![Tool::new("Zapier", "Connect apps and automate workflows")
//!     .with_categories(ToolCategories::default().with_application_fields(["Automation"]))];
//!
//! let recommender = Recommender::new();
//! let result = recommender.generate_recommendations("automate my reports", &catalog, None);
//! assert!(result.best().unwrap().name.ends_with("(Recommended)"));
//! ```

pub mod catalog;
pub mod engine;
pub mod export;
pub mod types;

// Re-export key types for convenience
pub use catalog::{CatalogFilter, ToolCatalog};
pub use engine::{
    IntentTemplate, Recommender, RecommendationResult, ScoredTool, Stack, WorkflowMatcher,
};
pub use types::{SkillLevel, Tool, ToolCategories};

//! Category scorer
//!
//! Scores a single tool against one intent template by weighted overlap
//! between the tool's category memberships and the template's target sets.
//! Pure and total: missing category data scores nothing, it never errors.

use super::types::{IntentTemplate, ScoredTool};
use crate::types::{SkillLevel, Tool};

/// Per-dimension weights, in decreasing importance.
pub const WEIGHT_APPLICATION_FIELD: u32 = 4;
pub const WEIGHT_FUNCTIONAL_ROLE: u32 = 3;
pub const WEIGHT_TECH_LAYER: u32 = 2;
pub const WEIGHT_DIFFICULTY: u32 = 1;

pub(crate) const REASON_APPLICATION_FIELD: &str = "Application field match";
pub(crate) const REASON_FUNCTIONAL_ROLE: &str = "Functional role match";
pub(crate) const REASON_TECH_LAYER: &str = "Tech layer match";
pub(crate) const REASON_DIFFICULTY: &str = "Difficulty level match";
pub(crate) const REASON_GENERAL: &str = "General match";

/// Score one tool against one template.
///
/// Each set-valued dimension that intersects the template's target set adds
/// its weight and a reason label. A supplied skill level adds the difficulty
/// bonus when the tool's label is compatible. A tool matching nothing still
/// yields a `ScoredTool` with score 0 and reason "General match"; exclusion
/// happens later in the assembler.
pub fn score_tool(
    tool: &Tool,
    template: &IntentTemplate,
    skill_level: Option<SkillLevel>,
) -> ScoredTool {
    let mut score = 0;
    let mut reasons: Vec<&str> = Vec::new();

    if let Some(categories) = &tool.categories {
        if intersects(&categories.application_field, &template.application_fields) {
            score += WEIGHT_APPLICATION_FIELD;
            reasons.push(REASON_APPLICATION_FIELD);
        }
        if intersects(&categories.functional_role, &template.functional_roles) {
            score += WEIGHT_FUNCTIONAL_ROLE;
            reasons.push(REASON_FUNCTIONAL_ROLE);
        }
        if intersects(&categories.tech_layer, &template.tech_layers) {
            score += WEIGHT_TECH_LAYER;
            reasons.push(REASON_TECH_LAYER);
        }
        if let (Some(level), Some(label)) = (skill_level, categories.difficulty.as_deref()) {
            if !label.is_empty() && level.accepts_label(label) {
                score += WEIGHT_DIFFICULTY;
                reasons.push(REASON_DIFFICULTY);
            }
        }
    }

    let match_reason = if reasons.is_empty() {
        REASON_GENERAL.to_string()
    } else {
        reasons.join(", ")
    };

    ScoredTool::new(tool.clone(), score, match_reason)
}

fn intersects(values: &[String], targets: &[String]) -> bool {
    values.iter().any(|value| targets.contains(value))
}

// =============================================================================
// Tests
// =============================================================================

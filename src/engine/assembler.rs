//! Stack assembler
//!
//! Orders scored tools and partitions the top candidates into a recommended
//! stack plus two alternates. The sort must be stable: tools with equal
//! scores keep their catalog order, so a fixed input always produces the
//! same output.

use super::types::{IntentTemplate, RecommendationResult, ScoredTool, Stack};

/// Tools per stack.
pub(crate) const STACK_WINDOW: usize = 5;
/// Ranked candidates considered across all three stacks.
const MAX_RANKED_TOOLS: usize = 3 * STACK_WINDOW;

/// Assemble stacks from tools scored against one template.
///
/// Zero-scoring tools are excluded here (not in the scorer). The secondary
/// and tertiary stacks reuse the primary window when their own window is
/// fully empty, so the caller never renders an empty alternate; a partially
/// filled window is used as-is. Stacks that still end up empty are dropped,
/// which only happens when nothing matched at all.
pub fn assemble(scored: Vec<ScoredTool>, template: &IntentTemplate) -> RecommendationResult {
    let mut ranked: Vec<ScoredTool> = scored.into_iter().filter(|t| t.score > 0).collect();
    // Stable sort keeps catalog order between equal scores.
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(MAX_RANKED_TOOLS);

    let primary = window(&ranked, 0);
    let secondary = window(&ranked, 1);
    let tertiary = window(&ranked, 2);

    let (secondary_tools, secondary_score) = alternate(secondary, primary);
    let (tertiary_tools, tertiary_score) = alternate(tertiary, primary);

    let mut stacks = vec![
        Stack::new(
            format!("{} (Recommended)", template.name),
            template.strategy.clone(),
            primary.to_vec(),
            mean_score(primary),
        ),
        Stack::new(
            format!("{} (Alternative 1)", template.name),
            format!("Alternative approach: {}", template.strategy),
            secondary_tools,
            secondary_score,
        ),
        Stack::new(
            format!("{} (Alternative 2)", template.name),
            format!("Extended approach: {}", template.strategy),
            tertiary_tools,
            tertiary_score,
        ),
    ];
    stacks.retain(|stack| !stack.is_empty());

    RecommendationResult::new(stacks)
}

fn window(ranked: &[ScoredTool], index: usize) -> &[ScoredTool] {
    let start = (index * STACK_WINDOW).min(ranked.len());
    let end = ((index + 1) * STACK_WINDOW).min(ranked.len());
    &ranked[start..end]
}

/// An alternate window, or the primary window with score 0 when the
/// alternate is fully empty.
fn alternate(own: &[ScoredTool], primary: &[ScoredTool]) -> (Vec<ScoredTool>, f64) {
    if own.is_empty() {
        (primary.to_vec(), 0.0)
    } else {
        (own.to_vec(), mean_score(own))
    }
}

fn mean_score(tools: &[ScoredTool]) -> f64 {
    if tools.is_empty() {
        return 0.0;
    }
    let sum: u32 = tools.iter().map(|t| t.score).sum();
    f64::from(sum) / tools.len() as f64
}

// =============================================================================
// Tests
// =============================================================================

//! Export helpers
//!
//! Pure serialization of catalog records and recommendation results to
//! JSON, CSV, and markdown. No decision logic lives here.

use crate::engine::RecommendationResult;
use crate::types::{Tool, ToolCategories};

const CSV_HEADERS: [&str; 8] = [
    "Tool Name",
    "Summary",
    "Purpose",
    "Functional Roles",
    "Tech Layers",
    "Difficulty",
    "Application Fields",
    "Common Pairings",
];

/// Serialize tool records to JSON.
pub fn tools_to_json(tools: &[Tool], pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(tools)
    } else {
        serde_json::to_string(tools)
    }
}

/// Serialize tool records to CSV, one row per tool, set values joined
/// with "; " and every cell quoted.
pub fn tools_to_csv(tools: &[Tool]) -> String {
    let mut lines = Vec::with_capacity(tools.len() + 1);
    lines.push(CSV_HEADERS.join(","));

    let empty = ToolCategories::default();
    for tool in tools {
        let categories = tool.categories.as_ref().unwrap_or(&empty);
        let purpose = categories.purpose.join("; ");
        let roles = categories.functional_role.join("; ");
        let layers = categories.tech_layer.join("; ");
        let fields = categories.application_field.join("; ");
        let pairings = categories.common_pairings.join("; ");
        let row = [
            tool.tool_name.as_str(),
            tool.summary.as_str(),
            purpose.as_str(),
            roles.as_str(),
            layers.as_str(),
            categories.difficulty.as_deref().unwrap_or(""),
            fields.as_str(),
            pairings.as_str(),
        ]
        .map(csv_quote);
        lines.push(row.join(","));
    }

    lines.join("\n")
}

/// Serialize a recommendation result to JSON.
pub fn result_to_json(result: &RecommendationResult, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(result)
    } else {
        serde_json::to_string(result)
    }
}

/// Render a recommendation result as a shareable markdown digest.
pub fn result_to_markdown(result: &RecommendationResult) -> String {
    let mut out = String::from("# Recommended Stacks\n");

    if result.is_empty() {
        out.push_str("\nNo relevant tools found.\n");
        return out;
    }

    for stack in &result.stacks {
        out.push_str(&format!("\n## {} (score {:.1})\n\n", stack.name, stack.score));
        out.push_str(&format!("_{}_\n\n", stack.strategy));
        for (rank, entry) in stack.tools.iter().enumerate() {
            out.push_str(&format!(
                "{}. **{}**: {} ({})\n",
                rank + 1,
                entry.tool.tool_name,
                entry.tool.summary,
                entry.match_reason,
            ));
        }
    }

    out
}

/// Quote a CSV cell, doubling embedded quotes.
fn csv_quote(cell: &str) -> String {
    format!("\"{}\"", cell.replace('"', "\"\""))
}

// =============================================================================
// Tests
// =============================================================================

//! Workflow taxonomy matcher
//!
//! Classifies a free-text query into one of a fixed set of intent templates
//! by lower-case keyword containment. The first template in table order with
//! any keyword hit wins; this tie-break is deliberate and must stay stable
//! so repeated queries keep producing identical results.

use super::types::IntentTemplate;

/// Matches queries against the intent-template table.
///
/// The built-in table is immutable configuration assembled at construction;
/// `with_templates` exists for callers that need a custom taxonomy.
#[derive(Debug, Clone)]
pub struct WorkflowMatcher {
    templates: Vec<IntentTemplate>,
}

impl Default for WorkflowMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl WorkflowMatcher {
    /// Create a matcher over the built-in workflow taxonomy.
    pub fn new() -> Self {
        Self {
            templates: builtin_templates(),
        }
    }

    /// Create a matcher over a custom template table. Table order is the
    /// match precedence.
    pub fn with_templates(templates: Vec<IntentTemplate>) -> Self {
        Self { templates }
    }

    pub fn templates(&self) -> &[IntentTemplate] {
        &self.templates
    }

    /// First template whose keyword list has a substring hit in the query,
    /// or `None` for empty and unmatched queries. Total over any input.
    pub fn match_query(&self, query: &str) -> Option<&IntentTemplate> {
        if query.trim().is_empty() {
            return None;
        }
        let normalized = query.to_lowercase();
        self.templates
            .iter()
            .find(|template| template.matches_query(&normalized))
    }
}

/// The built-in workflow taxonomy, in match-precedence order.
fn builtin_templates() -> Vec<IntentTemplate> {
    vec![
        IntentTemplate::new(
            "Automation Workflow Stack",
            "Build automated workflows with no-code tools and integrations",
        )
        .with_keywords(["automation", "workflow", "automate", "integration"])
        .with_application_fields(["Automation", "Integration"])
        .with_functional_roles(["Automation", "Integration"])
        .with_tech_layers(["Integration Layer", "Processing Layer"]),
        IntentTemplate::new(
            "AI Content Creation Stack",
            "Generate and manage content using AI-powered tools",
        )
        .with_keywords(["content", "create", "writing", "generate", "blog", "article"])
        .with_application_fields(["Content Creation", "AI Applications"])
        .with_functional_roles(["AI Assistant", "Content Management"])
        .with_tech_layers(["AI Layer", "Frontend Layer"]),
        IntentTemplate::new(
            "Data Analytics Stack",
            "Collect, process, and visualize data for insights",
        )
        .with_keywords(["data", "analyze", "analytics", "visualization", "insights"])
        .with_application_fields(["Data Analysis", "Analytics"])
        .with_functional_roles(["Database", "Analytics"])
        .with_tech_layers(["Data Layer", "Processing Layer"]),
        IntentTemplate::new(
            "Knowledge Management Stack",
            "Organize and manage knowledge effectively",
        )
        .with_keywords(["knowledge", "learn", "organize", "notes", "documentation"])
        .with_application_fields(["Knowledge Management", "Collaboration"])
        .with_functional_roles(["Content Management", "Database"])
        .with_tech_layers(["Data Layer", "Frontend Layer"]),
        IntentTemplate::new(
            "Web Development Stack",
            "Build modern web applications and interfaces",
        )
        .with_keywords(["website", "web", "app", "frontend", "ui", "interface"])
        .with_application_fields(["Web Development", "Frontend"])
        .with_functional_roles(["Frontend", "Content Management"])
        .with_tech_layers(["Frontend Layer", "Integration Layer"]),
        IntentTemplate::new(
            "AI Assistant Stack",
            "Create intelligent conversational interfaces",
        )
        .with_keywords(["chat", "chatbot", "assistant", "conversational", "ai"])
        .with_application_fields(["AI Applications", "Automation"])
        .with_functional_roles(["AI Assistant", "API"])
        .with_tech_layers(["AI Layer", "Integration Layer"]),
    ]
}

// =============================================================================
// Tests
// =============================================================================

//! CLI command handlers
//!
//! Thin presentation layer over the library: load a catalog snapshot, run
//! the engine or the catalog helpers, render the result.

use std::path::{Path, PathBuf};

use colored::Colorize;
use tracing::debug;

use recomendar::{
    export, CatalogFilter, RecommendationResult, Recommender, SkillLevel, Stack, Tool,
    ToolCatalog,
};

/// Output format for recommendation rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
    Markdown,
}

/// Output format for catalog export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Csv,
}

// =============================================================================
// recommend
// =============================================================================

pub fn cmd_recommend(
    query: &str,
    catalog_path: &Path,
    level: Option<SkillLevel>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = ToolCatalog::load(catalog_path)?;
    debug!(tools = catalog.len(), "catalog loaded");

    let recommender = Recommender::new();
    let result = recommender.generate_recommendations(query, catalog.tools(), level);

    match format {
        OutputFormat::Json => println!("{}", export::result_to_json(&result, true)?),
        OutputFormat::Markdown => print!("{}", export::result_to_markdown(&result)),
        OutputFormat::Human => display_result(query, level, &result),
    }
    Ok(())
}

fn display_result(query: &str, level: Option<SkillLevel>, result: &RecommendationResult) {
    println!("{}", "🧰 Stack Recommendations".bright_cyan().bold());
    println!("{}", "─".repeat(50).dimmed());
    println!("  {} {}", "query:".dimmed(), query);
    if let Some(level) = level {
        println!("  {} {}", "level:".dimmed(), level);
    }
    println!();

    if result.is_empty() {
        println!("{}", "No relevant tools found in this catalog.".yellow());
        return;
    }

    for stack in &result.stacks {
        display_stack(stack);
    }
}

fn display_stack(stack: &Stack) {
    println!(
        "{} {}",
        stack.name.bright_yellow().bold(),
        format!("(score {:.1})", stack.score).dimmed()
    );
    println!("  {}", stack.strategy.dimmed());
    for entry in &stack.tools {
        println!(
            "  {} {} {}",
            "•".cyan(),
            entry.tool.tool_name.cyan(),
            format!("[{}] {}", entry.score, entry.match_reason).dimmed()
        );
    }
    println!();
}

// =============================================================================
// catalog
// =============================================================================

pub fn cmd_catalog(
    catalog_path: &Path,
    show: Option<String>,
    search: Option<String>,
    filter: CatalogFilter,
) -> anyhow::Result<()> {
    let catalog = ToolCatalog::load(catalog_path)?;

    if let Some(name) = show {
        let tool = catalog
            .get(&name)
            .ok_or_else(|| anyhow::anyhow!("tool not found in catalog: {name}"))?;
        display_tool_details(tool);
        return Ok(());
    }

    let tools = if let Some(text) = search {
        catalog.search(&text)
    } else {
        catalog.filter(&filter)
    };

    println!("{}", "🧰 Catalog Tools".bright_cyan().bold());
    println!("{}", "─".repeat(50).dimmed());
    for tool in &tools {
        println!("  {} {}", tool.tool_name.cyan(), tool.summary.dimmed());
    }
    println!();
    println!("  {} of {} tools", tools.len(), catalog.len());

    Ok(())
}

fn display_tool_details(tool: &Tool) {
    println!("{}", tool.tool_name.bright_cyan().bold());
    println!("{}", "─".repeat(50).dimmed());
    println!("  {}", tool.summary);

    if let Some(categories) = &tool.categories {
        let rows = [
            ("purpose", &categories.purpose),
            ("functional role", &categories.functional_role),
            ("application field", &categories.application_field),
            ("tech layer", &categories.tech_layer),
            ("data flow role", &categories.data_flow_role),
            ("pairs with", &categories.common_pairings),
        ];
        println!();
        for (label, values) in rows {
            if !values.is_empty() {
                println!("  {} {}", format!("{label}:").dimmed(), values.join(", "));
            }
        }
        if let Some(difficulty) = &categories.difficulty {
            println!("  {} {}", "difficulty:".dimmed(), difficulty);
        }
    }
}

// =============================================================================
// export
// =============================================================================

pub fn cmd_export(
    catalog_path: &Path,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let catalog = ToolCatalog::load(catalog_path)?;

    let rendered = match format {
        ExportFormat::Json => export::tools_to_json(catalog.tools(), true)?,
        ExportFormat::Csv => export::tools_to_csv(catalog.tools()),
    };

    match output {
        Some(path) => {
            std::fs::write(&path, &rendered)?;
            println!("Exported {} tools to {}", catalog.len(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

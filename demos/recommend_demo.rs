/// Recommendation engine walkthrough: build a small in-memory catalog, run
/// workflow and fallback queries, and print the resulting stacks.
///
/// Run with: cargo run --example recommend_demo
use recomendar::{RecommendationResult, Recommender, SkillLevel, Tool, ToolCategories};

fn demo_catalog() -> Vec<Tool> {
    vec![
        Tool::new("Zapier", "Connect apps and automate workflows").with_categories(
            ToolCategories::default()
                .with_application_fields(["Automation"])
                .with_functional_roles(["Automation"])
                .with_tech_layers(["Integration Layer"])
                .with_difficulty("no-code"),
        ),
        Tool::new("Make", "Visual automation scenarios").with_categories(
            ToolCategories::default()
                .with_application_fields(["Automation", "Integration"])
                .with_functional_roles(["Integration"])
                .with_difficulty("no-code"),
        ),
        Tool::new("n8n", "Source-available workflow automation").with_categories(
            ToolCategories::default()
                .with_application_fields(["Automation"])
                .with_tech_layers(["Processing Layer"])
                .with_difficulty("low-code"),
        ),
        Tool::new("Airflow", "Programmatic workflow orchestration").with_categories(
            ToolCategories::default()
                .with_application_fields(["Automation"])
                .with_difficulty("code"),
        ),
        Tool::new("Notion", "Connected workspace for notes and docs").with_categories(
            ToolCategories::default()
                .with_application_fields(["Knowledge Management"])
                .with_functional_roles(["Content Management"])
                .with_difficulty("no-code"),
        ),
        Tool::new("Metabase", "Self-service analytics dashboards").with_categories(
            ToolCategories::default()
                .with_application_fields(["Analytics"])
                .with_functional_roles(["Analytics"])
                .with_tech_layers(["Data Layer"])
                .with_difficulty("low-code"),
        ),
    ]
}

fn print_result(result: &RecommendationResult) {
    if result.is_empty() {
        println!("  (no relevant tools)");
        return;
    }
    for stack in &result.stacks {
        println!("  {} [score {:.1}]", stack.name, stack.score);
        println!("    strategy: {}", stack.strategy);
        for entry in &stack.tools {
            println!(
                "    - {} ({}, {})",
                entry.tool.tool_name, entry.score, entry.match_reason
            );
        }
    }
    println!();
}

fn main() {
    println!("🧰 Recommendation Engine Demo\n");

    let catalog = demo_catalog();
    let recommender = Recommender::new();

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("1. WORKFLOW QUERY: matched intent template");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    let queries = [
        "i want to build automation workflows",
        "organize my notes and documentation",
        "visualize data for insights",
    ];
    for query in queries {
        println!("query: {query:?}");
        print_result(&recommender.generate_recommendations(query, &catalog, None));
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("2. SKILL LEVEL: difficulty-aware ranking");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    for level in [SkillLevel::Beginner, SkillLevel::Advanced] {
        println!("query: \"automation\" with level {level}");
        print_result(&recommender.generate_recommendations(
            "automation",
            &catalog,
            Some(level),
        ));
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("3. FALLBACK: no template matched, bucket by difficulty");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━\n");

    println!("query: \"\" (empty)");
    print_result(&recommender.generate_recommendations("", &catalog, None));
}

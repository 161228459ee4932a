use super::*;
use crate::engine::classifier::DifficultyTier;
use crate::types::ToolCategories;

fn categories(
    fields: &[&str],
    roles: &[&str],
    layers: &[&str],
    difficulty: Option<&str>,
) -> ToolCategories {
    let mut categories = ToolCategories::default()
        .with_application_fields(fields.iter().copied())
        .with_functional_roles(roles.iter().copied())
        .with_tech_layers(layers.iter().copied());
    if let Some(label) = difficulty {
        categories = categories.with_difficulty(label);
    }
    categories
}

/// Eight automation-adjacent tools plus two unrelated ones.
fn automation_catalog() -> Vec<Tool> {
    vec![
        Tool::new("Zapier", "Connect apps and automate workflows").with_categories(categories(
            &["Automation"],
            &["Automation"],
            &["Integration Layer"],
            Some("no-code"),
        )),
        Tool::new("Make", "Visual automation scenarios").with_categories(categories(
            &["Automation"],
            &["Integration"],
            &["Integration Layer"],
            Some("no-code"),
        )),
        Tool::new("n8n", "Source-available workflow automation").with_categories(categories(
            &["Automation"],
            &["Automation"],
            &["Processing Layer"],
            Some("low-code"),
        )),
        Tool::new("Pipedream", "Connect APIs with code steps").with_categories(categories(
            &["Automation", "Integration"],
            &["API"],
            &["Integration Layer"],
            Some("low-code"),
        )),
        Tool::new("Airflow", "Programmatic workflow orchestration").with_categories(categories(
            &["Automation"],
            &["Automation"],
            &["Processing Layer"],
            Some("code"),
        )),
        Tool::new("Temporal", "Durable execution platform").with_categories(categories(
            &["Automation"],
            &[],
            &[],
            Some("code"),
        )),
        Tool::new("IFTTT", "Simple applet automation").with_categories(categories(
            &["Integration"],
            &[],
            &[],
            Some("no-code"),
        )),
        Tool::new("Retool", "Internal tool builder").with_categories(categories(
            &[],
            &["Integration"],
            &[],
            Some("low-code"),
        )),
        Tool::new("Figma", "Collaborative design").with_categories(categories(
            &["Design"],
            &["Design"],
            &["Frontend Layer"],
            Some("no-code"),
        )),
        Tool::new("Obsidian", "Local-first notes").with_categories(categories(
            &["Knowledge Management"],
            &["Content Management"],
            &["Data Layer"],
            Some("no-code"),
        )),
    ]
}

// =========================================================================
// Workflow Path Tests
// =========================================================================

#[test]
fn test_automation_query_builds_recommended_stack() {
    let rec = Recommender::new();
    let result =
        rec.generate_recommendations("i want to build automation workflows", &automation_catalog(), None);

    let primary = result.best().unwrap();
    assert!(primary.name.ends_with("(Recommended)"));
    assert_eq!(primary.name, "Automation Workflow Stack (Recommended)");
    assert!(primary.len() <= 5);
    assert!(primary.tools.iter().all(|t| t.score > 0));
}

#[test]
fn test_unrelated_tools_are_excluded() {
    let rec = Recommender::new();
    let result =
        rec.generate_recommendations("automate my business", &automation_catalog(), None);

    // Figma matches no automation dimension and must not appear anywhere
    assert!(result
        .stacks
        .iter()
        .flat_map(|s| &s.tools)
        .all(|t| t.tool.tool_name != "Figma"));
}

#[test]
fn test_primary_stack_is_ranked_by_score() {
    let rec = Recommender::new();
    let result =
        rec.generate_recommendations("automation", &automation_catalog(), None);

    let primary = result.best().unwrap();
    for pair in primary.tools.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Zapier matches all three dimensions (4+3+2) and leads the stack
    assert_eq!(primary.tools[0].tool.tool_name, "Zapier");
    assert_eq!(primary.tools[0].score, 9);
}

#[test]
fn test_skill_level_bonus_shifts_ranking() {
    let catalog = vec![
        Tool::new("Airflow", "").with_categories(categories(
            &["Automation"],
            &[],
            &[],
            Some("code"),
        )),
        Tool::new("Zapier", "").with_categories(categories(
            &["Automation"],
            &[],
            &[],
            Some("no-code"),
        )),
    ];

    let rec = Recommender::new();

    // Without a hint the tie keeps catalog order: Airflow first
    let neutral = rec.generate_recommendations("automation", &catalog, None);
    assert_eq!(neutral.best().unwrap().tools[0].tool.tool_name, "Airflow");

    // A beginner hint gives Zapier the difficulty bonus and the lead
    let beginner =
        rec.generate_recommendations("automation", &catalog, Some(SkillLevel::Beginner));
    assert_eq!(beginner.best().unwrap().tools[0].tool.tool_name, "Zapier");
    assert_eq!(beginner.best().unwrap().tools[0].score, 5);
}

#[test]
fn test_match_reasons_name_the_dimensions() {
    let rec = Recommender::new();
    let result = rec.generate_recommendations("automation", &automation_catalog(), None);

    let zapier = &result.best().unwrap().tools[0];
    assert_eq!(
        zapier.match_reason,
        "Application field match, Functional role match, Tech layer match"
    );
}

#[test]
fn test_template_match_with_zero_scoring_catalog() {
    let catalog = vec![
        Tool::new("Figma", "Design tool").with_categories(categories(
            &["Design"],
            &["Design"],
            &["Frontend Layer"],
            None,
        )),
        Tool::new("Mystery", "No categories"),
    ];

    let rec = Recommender::new();
    let result = rec.generate_recommendations("automation workflows", &catalog, None);

    assert!(result.is_empty());
}

#[test]
fn test_twelve_survivors_split_five_five_two() {
    let catalog: Vec<Tool> = (0..12)
        .map(|i| {
            Tool::new(format!("T{i:02}"), "").with_categories(categories(
                &["Automation"],
                &[],
                &[],
                None,
            ))
        })
        .collect();

    let rec = Recommender::new();
    let result = rec.generate_recommendations("automation", &catalog, None);

    assert_eq!(result.len(), 3);
    assert_eq!(result.stacks[0].len(), 5);
    assert_eq!(result.stacks[1].len(), 5);
    // The truncated window still has 2 tools, so no primary substitution
    assert_eq!(result.stacks[2].len(), 2);
    assert_eq!(result.stacks[2].tools[0].tool.tool_name, "T10");
}

#[test]
fn test_few_survivors_fall_back_to_primary() {
    let catalog: Vec<Tool> = (0..4)
        .map(|i| {
            Tool::new(format!("T{i}"), "").with_categories(categories(
                &["Automation"],
                &[],
                &[],
                None,
            ))
        })
        .collect();

    let rec = Recommender::new();
    let result = rec.generate_recommendations("automation", &catalog, None);

    assert_eq!(result.len(), 3);
    // Alternates reuse the primary window and carry score 0
    assert_eq!(result.stacks[1].len(), 4);
    assert_eq!(result.stacks[1].score, 0.0);
    assert_eq!(result.stacks[2].len(), 4);
    assert_eq!(result.stacks[2].score, 0.0);
}

#[test]
fn test_tool_without_categories_never_errors() {
    let catalog = vec![Tool::new("Mystery", "no categories at all")];
    let rec = Recommender::new();

    let workflow = rec.generate_recommendations("automation", &catalog, Some(SkillLevel::Beginner));
    assert!(workflow.is_empty());

    let fallback = rec.generate_recommendations("", &catalog, None);
    assert_eq!(fallback.best().unwrap().name, "Advanced Stack");
}

// =========================================================================
// Fallback Path Tests
// =========================================================================

#[test]
fn test_empty_query_takes_fallback_path() {
    let rec = Recommender::new();
    let result = rec.generate_recommendations("", &automation_catalog(), None);

    let names: Vec<&str> = result.stacks.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Beginner-Friendly Stack", "Intermediate Stack", "Advanced Stack"]
    );
    assert!(result.stacks.iter().all(|s| s.len() <= 5));
}

#[test]
fn test_unmatched_query_takes_fallback_path() {
    let rec = Recommender::new();
    let result = rec.generate_recommendations("qwerty asdf", &automation_catalog(), None);

    assert!(result.stacks.iter().all(|s| !s.name.contains("(Recommended)")));
    assert_eq!(result.best().unwrap().name, "Beginner-Friendly Stack");
}

#[test]
fn test_fallback_uses_catalog_order() {
    let rec = Recommender::new();
    let result = rec.generate_recommendations("", &automation_catalog(), None);

    // no-code tools in catalog order: Zapier, Make, IFTTT, Figma, Obsidian
    let beginner: Vec<&str> = result.stacks[0]
        .tools
        .iter()
        .map(|t| t.tool.tool_name.as_str())
        .collect();
    assert_eq!(beginner, vec!["Zapier", "Make", "IFTTT", "Figma", "Obsidian"]);
}

#[test]
fn test_empty_catalog_yields_empty_result() {
    let rec = Recommender::new();

    assert!(rec.generate_recommendations("", &[], None).is_empty());
    assert!(rec.generate_recommendations("automation", &[], None).is_empty());
}

// =========================================================================
// Determinism Tests
// =========================================================================

#[test]
fn test_repeated_calls_are_identical() {
    let rec = Recommender::new();
    let catalog = automation_catalog();

    let first = rec.generate_recommendations("automation", &catalog, Some(SkillLevel::Beginner));
    for _ in 0..5 {
        let again =
            rec.generate_recommendations("automation", &catalog, Some(SkillLevel::Beginner));
        assert_eq!(first, again);
    }
}

#[test]
fn test_custom_templates_route_queries() {
    let rec = Recommender::with_templates(vec![IntentTemplate::new(
        "Design Stack",
        "Design things",
    )
    .with_keywords(["design"])
    .with_application_fields(["Design"])]);

    let result = rec.generate_recommendations("design a logo", &automation_catalog(), None);
    assert_eq!(result.best().unwrap().name, "Design Stack (Recommended)");
    assert_eq!(result.best().unwrap().tools[0].tool.tool_name, "Figma");
}

// =========================================================================
// Property Tests
// =========================================================================

mod properties {
    use super::*;
    use proptest::prelude::*;

    fn arb_label() -> impl Strategy<Value = Option<String>> {
        prop_oneof![
            Just(None),
            Just(Some("no-code".to_string())),
            Just(Some("low-code".to_string())),
            Just(Some("code".to_string())),
            Just(Some("beginner".to_string())),
            Just(Some("intermediate".to_string())),
            "[a-z]{0,8}".prop_map(Some),
        ]
    }

    fn arb_catalog() -> impl Strategy<Value = Vec<Tool>> {
        prop::collection::vec(
            (any::<bool>(), any::<bool>(), any::<bool>(), arb_label()),
            0..40,
        )
        .prop_map(|specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (field, role, layer, label))| {
                    let mut categories = ToolCategories::default();
                    if field {
                        categories.application_field = vec!["Automation".to_string()];
                    }
                    if role {
                        categories.functional_role = vec!["Integration".to_string()];
                    }
                    if layer {
                        categories.tech_layer = vec!["Integration Layer".to_string()];
                    }
                    categories.difficulty = label;
                    Tool::new(format!("tool-{i}"), "").with_categories(categories)
                })
                .collect()
        })
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        /// Repeated calls over identical inputs return identical results.
        #[test]
        fn prop_determinism(catalog in arb_catalog(), query in ".{0,40}") {
            let rec = Recommender::new();
            let first = rec.generate_recommendations(&query, &catalog, None);
            let second = rec.generate_recommendations(&query, &catalog, None);
            prop_assert_eq!(first, second);
        }

        /// No returned stack is ever empty, on either path.
        #[test]
        fn prop_no_empty_stacks(catalog in arb_catalog(), query in ".{0,40}") {
            let rec = Recommender::new();
            let result = rec.generate_recommendations(&query, &catalog, None);
            prop_assert!(result.stacks.iter().all(|s| !s.is_empty()));
        }

        /// Every tool lands in exactly one difficulty tier.
        #[test]
        fn prop_difficulty_partition_is_total(catalog in arb_catalog()) {
            let mut counts = [0usize; 3];
            for tool in &catalog {
                match DifficultyTier::classify(tool.difficulty()) {
                    DifficultyTier::Beginner => counts[0] += 1,
                    DifficultyTier::Intermediate => counts[1] += 1,
                    DifficultyTier::Advanced => counts[2] += 1,
                }
            }
            prop_assert_eq!(counts.iter().sum::<usize>(), catalog.len());
        }

        /// Matching strictly more dimensions never lowers the score.
        #[test]
        fn prop_superset_match_scores_no_lower(
            field in any::<bool>(),
            role in any::<bool>(),
            layer in any::<bool>(),
        ) {
            let template = IntentTemplate::new("T", "s")
                .with_keywords(["x"])
                .with_application_fields(["Automation"])
                .with_functional_roles(["Integration"])
                .with_tech_layers(["Integration Layer"]);

            let mut partial = ToolCategories::default();
            if field {
                partial.application_field = vec!["Automation".to_string()];
            }
            if role {
                partial.functional_role = vec!["Integration".to_string()];
            }
            if layer {
                partial.tech_layer = vec!["Integration Layer".to_string()];
            }
            let superset = ToolCategories::default()
                .with_application_fields(["Automation"])
                .with_functional_roles(["Integration"])
                .with_tech_layers(["Integration Layer"]);

            let a = crate::engine::scorer::score_tool(
                &Tool::new("A", "").with_categories(superset),
                &template,
                None,
            );
            let b = crate::engine::scorer::score_tool(
                &Tool::new("B", "").with_categories(partial),
                &template,
                None,
            );
            prop_assert!(a.score >= b.score);
        }
    }
}

//! Property-based tests for the template scanner.
//!
//! Tests the following properties:
//! - literal text survives quote doubling
//! - mode routing of text and expression blocks
//! - import order, duplicates included

use proptest::prelude::*;
use ttgen::{scan_template, Fragment, GeneratorConfig, RecordingDiagnostics, TemplateProgram};

fn scan(source: &str) -> TemplateProgram {
    let mut diagnostics = RecordingDiagnostics::default();
    scan_template(source, "Prop.tt", &mut diagnostics).unwrap()
}

#[derive(Debug, Clone)]
enum Item {
    Text(String),
    Expression(String),
    ClassFeature(String),
    Control(String),
    Import(String),
}

impl Item {
    fn render(&self) -> String {
        match self {
            Item::Text(text) => text.clone(),
            Item::Expression(body) => format!("<#={}#>", body),
            Item::ClassFeature(body) => format!("<#+{}#>", body),
            Item::Control(body) => format!("<# {}#>", body),
            Item::Import(namespace) => format!("<#@ import namespace=\"{}\" #>", namespace),
        }
    }
}

fn arb_body() -> impl Strategy<Value = String> {
    "[a-z0-9 +();{}]{0,8}"
}

/// Text starting with a non-whitespace character, never containing `<`
fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z\"][a-zA-Z \"\n>#]{0,10}"
}

fn arb_item() -> impl Strategy<Value = Item> {
    prop_oneof![
        arb_text().prop_map(Item::Text),
        arb_body().prop_map(Item::Expression),
        arb_body().prop_map(Item::ClassFeature),
        arb_body().prop_map(Item::Control),
        "[A-Z][a-z]{0,5}".prop_map(Item::Import),
    ]
}

/// Adjacent text items form one literal run
fn merge_text(items: Vec<Item>) -> Vec<Item> {
    let mut merged: Vec<Item> = Vec::new();
    for item in items {
        match (merged.last_mut(), item) {
            (Some(Item::Text(previous)), Item::Text(text)) => previous.push_str(&text),
            (_, item) => merged.push(item),
        }
    }
    merged
}

/// Expected (script, class features) regions
fn model(items: &[Item]) -> (Vec<Fragment>, Vec<Fragment>) {
    let mut script = Vec::new();
    let mut class_features = Vec::new();
    let mut in_class_features = false;

    for item in items {
        let routed = if in_class_features { &mut class_features } else { &mut script };
        match item {
            Item::Text(text) => routed.push(Fragment::EmitText(text.replace('"', "\"\""))),
            Item::Expression(body) => routed.push(Fragment::EmitExpression(body.clone())),
            Item::ClassFeature(body) => {
                class_features.push(Fragment::Code(body.clone()));
                in_class_features = true;
            }
            Item::Control(body) => {
                script.push(Fragment::Code(format!(" {}", body)));
                in_class_features = false;
            }
            Item::Import(_) => {}
        }
    }
    (script, class_features)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A template of only literal text yields one emit instruction that un-escapes to the text
    #[test]
    fn literal_text_round_trips(text in "[a-z \"\n\t<>#]{1,40}") {
        prop_assume!(!text.contains("<#"));

        let program = scan(&text);
        prop_assert!(program.class_features.is_empty());
        prop_assert_eq!(program.script.len(), 1);
        match &program.script.fragments()[0] {
            Fragment::EmitText(escaped) => prop_assert_eq!(escaped.replace("\"\"", "\""), text),
            other => prop_assert!(false, "expected literal text, got {:?}", other),
        }
    }

    /// Class features hold exactly the class-feature bodies and what was routed there by mode
    #[test]
    fn regions_follow_mode(items in prop::collection::vec(arb_item(), 0..12)) {
        let items = merge_text(items);
        let source: String = items.iter().map(Item::render).collect();

        let program = scan(&source);
        let (script, class_features) = model(&items);

        prop_assert_eq!(program.script.fragments(), script.as_slice(), "template: {:?}", source);
        prop_assert_eq!(program.class_features.fragments(), class_features.as_slice(), "template: {:?}", source);
    }

    /// Usings appear in import order, duplicates kept
    #[test]
    fn imports_keep_order(
        namespaces in prop::collection::vec(prop::sample::select(vec!["System", "System.IO", "System.Linq"]), 0..8)
    ) {
        let mut source = String::from("<#@ output extension=\"txt\" #>");
        for namespace in &namespaces {
            source.push_str(&format!("<#@ import namespace=\"{}\" #>\n", namespace));
        }

        let program = scan(&source);
        prop_assert_eq!(&program.usings, &namespaces);

        let generated = ttgen::codegen::generate_program(&program, &GeneratorConfig::default()).unwrap();
        let using_lines: Vec<&str> = generated
            .lines()
            .filter_map(|line| line.strip_prefix("using ").and_then(|rest| rest.strip_suffix(';')))
            .collect();
        prop_assert_eq!(using_lines, namespaces);
    }
}

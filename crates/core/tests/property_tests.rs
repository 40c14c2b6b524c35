use charset_registry_core::conf;
use charset_registry_core::parser::parse_str;
use charset_registry_core::render::{IniRenderer, Renderer, TableRenderer, render_to_string};
use chrono::{Local, TimeZone};
use proptest::prelude::*;

fn record_block() -> impl Strategy<Value = (String, Option<u32>, Vec<String>, bool)> {
    (
        "[A-Za-z][A-Za-z0-9_.:-]{0,20}",
        proptest::option::of(0u32..3000),
        proptest::collection::vec(
            prop_oneof![Just("None".to_string()), "[A-Za-z][A-Za-z0-9_.-]{0,12}"],
            0..5,
        ),
        any::<bool>(),
    )
}

fn registry_text(blocks: &[(String, Option<u32>, Vec<String>, bool)]) -> String {
    let mut text = String::from("Character Sets\n\n");
    for (name, mib, aliases, preferred) in blocks {
        let marker = if *preferred { " (preferred MIME name)" } else { "" };
        text.push_str(&format!("Name: {name}{marker}   [RFC1345]\n"));
        if let Some(mib) = mib {
            text.push_str(&format!("MIBenum: {mib}\n"));
        }
        text.push_str("Source: generated\n");
        for alias in aliases {
            text.push_str(&format!("Alias: {alias}\n"));
        }
        text.push('\n');
    }
    text
}

fn render(renderer: &dyn Renderer, text: &str) -> String {
    let registry = parse_str(text).unwrap();
    render_to_string(renderer, registry.records(), registry.stats()).unwrap()
}

proptest! {
    #[test]
    fn one_record_per_name_line(blocks in proptest::collection::vec(record_block(), 0..12)) {
        let text = registry_text(&blocks);
        let registry = parse_str(&text).unwrap();
        let name_lines = text.lines().filter(|l| l.starts_with("Name:")).count();

        prop_assert_eq!(registry.records().len(), name_lines);
        prop_assert_eq!(registry.stats().charsets, name_lines);

        let ini = render(&IniRenderer::new(Local::now(), "src"), &text);
        prop_assert_eq!(ini.lines().filter(|l| l.starts_with('[')).count(), name_lines);

        let table = render(&TableRenderer::new("t"), &text);
        prop_assert_eq!(table.lines().filter(|l| l.starts_with("  /* ")).count(), name_lines);
    }

    #[test]
    fn records_hold_invariants(blocks in proptest::collection::vec(record_block(), 1..12)) {
        let registry = parse_str(&registry_text(&blocks)).unwrap();

        for record in registry.records() {
            prop_assert!(!record.name.is_empty());
            prop_assert!(!record.aliases.iter().any(|a| a == "None"));
            if let Some(mime) = &record.mime_name {
                prop_assert!(mime == &record.name || record.aliases.contains(mime));
            }
            let mut seen = record.aliases.clone();
            seen.sort();
            seen.dedup();
            prop_assert_eq!(seen.len(), record.aliases.len());
            prop_assert!(record.aliases.len() <= registry.stats().max_aliases);
            prop_assert!(record.name.chars().count() <= registry.stats().max_name_len);
        }
    }

    #[test]
    fn output_is_deterministic(blocks in proptest::collection::vec(record_block(), 0..8)) {
        let text = registry_text(&blocks);
        let stamp = Local.with_ymd_and_hms(2020, 1, 2, 3, 4, 5).single().unwrap();
        let renderer = IniRenderer::new(stamp, "src");
        prop_assert_eq!(render(&renderer, &text), render(&renderer, &text));
    }

    #[test]
    fn ini_output_loads_back(blocks in proptest::collection::vec(record_block(), 0..8)) {
        let mut names: Vec<_> = blocks.iter().map(|b| b.0.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assume!(names.len() == blocks.len());

        let registry = parse_str(&registry_text(&blocks)).unwrap();
        let ini = render_to_string(
            &IniRenderer::new(Local::now(), "src"),
            registry.records(),
            registry.stats(),
        ).unwrap();

        let loaded = conf::load_str(&ini).unwrap();
        prop_assert_eq!(loaded.records(), registry.records());
        prop_assert_eq!(loaded.stats(), registry.stats());
    }
}

//! Property-based tests for scalar encoding and rendering

use actionsmith_workflow::render::{render_env, render_params};
use actionsmith_workflow::scalar::{encode, is_safe};
use actionsmith_workflow::{Document, EnvMap, Error, WorkflowJob, WorkflowStep, compile};
use proptest::prelude::*;
use std::collections::BTreeMap;

fn parse_value(encoded: &str) -> String {
    let yaml = format!("key: {encoded}\n");
    let map: BTreeMap<String, String> =
        serde_yaml::from_str(&yaml).unwrap_or_else(|e| panic!("invalid YAML ({e}):\n{yaml}"));
    map["key"].clone()
}

proptest! {
    #[test]
    fn safe_strings_are_emitted_bare(s in "[a-zA-Z0-9_.$/(][a-zA-Z0-9 _.$/(){}=+'-]{0,30}") {
        prop_assert!(is_safe(&s));
        prop_assert_eq!(encode(&s), s);
    }

    #[test]
    fn quoted_strings_double_single_quotes(
        head in "[a-z ]{0,8}",
        middle in "[a-z' ]{0,8}",
        tail in "[a-z ]{0,8}",
    ) {
        let s = format!("{head}:'{middle}'{tail}");
        let expected = format!("'{}'", s.replace('\'', "''"));
        prop_assert_eq!(encode(&s), expected);
    }

    #[test]
    fn unsafe_strings_round_trip_through_yaml(s in "[ -~]{1,40}") {
        prop_assume!(!is_safe(&s));
        prop_assert_eq!(parse_value(&encode(&s)), s);
    }

    #[test]
    fn multiline_strings_become_indented_block_literals(
        lines in prop::collection::vec("[a-z][a-z0-9 :#'\"-]{0,12}", 2..6)
    ) {
        let s = lines.join("\n");
        let encoded = encode(&s);
        prop_assert!(encoded.starts_with("|\n"));

        let body: Vec<&str> = encoded.lines().skip(1).collect();
        prop_assert_eq!(body.len(), lines.len());
        for (rendered, original) in body.iter().zip(&lines) {
            prop_assert_eq!(*rendered, format!("  {original}"));
        }

        prop_assert_eq!(parse_value(&encoded), format!("{s}\n"));
    }

    #[test]
    fn keys_with_spaces_are_always_rejected(
        left in "[A-Z_]{1,6}",
        right in "[A-Z_]{1,6}",
        value in "[ -~]{0,10}",
    ) {
        let key = format!("{left} {right}");
        let map: EnvMap = [(key.clone(), value)].into_iter().collect();

        for result in [render_env(&map), render_params(&map)] {
            match result {
                Err(Error::InvalidKey { key: rejected, .. }) => prop_assert_eq!(&rejected, &key),
                Ok(rendered) => prop_assert!(false, "key '{}' rendered as {}", key, rendered),
            }
        }
    }

    #[test]
    fn compiled_commands_round_trip(
        command in "[a-z]+ [a-z0-9 :#'\"{}\\[\\]-]*[a-z]",
        name in "[A-Za-z]+ [A-Za-z0-9 :'-]{0,20}[A-Za-z]",
    ) {
        let document = Document::new("CI").with_branches(["main"]).with_job(
            WorkflowJob::new("build", "Build")
                .with_oses(["ubuntu-latest"])
                .with_scalas(["2.13.1"])
                .with_javas(["adopt@1.8"])
                .with_step(WorkflowStep::run([command.clone()]).with_name(name.clone())),
        );

        let first = compile(&document, "sbt").unwrap();
        prop_assert_eq!(&first, &compile(&document, "sbt").unwrap());

        let parsed: serde_yaml::Value = serde_yaml::from_str(&first).unwrap();
        let step = &parsed["jobs"]["build"]["steps"][0];
        prop_assert_eq!(step["run"].as_str(), Some(command.as_str()));
        prop_assert_eq!(step["name"].as_str(), Some(name.as_str()));
    }
}

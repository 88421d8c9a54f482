//! Property tests for contract key parsing and artifact naming.

use std::collections::HashSet;

use proptest::prelude::*;

use solbuild::domain::services::plan_artifacts;
use solbuild::{ArtifactError, CompilerOutput, ContractKey, ContractRecord};

fn identifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z_$][A-Za-z0-9_$]{0,24}").unwrap()
}

fn qualifier() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_./-]{0,16}")
        .unwrap()
        .prop_filter("no separator", |s| !s.contains(':'))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(raw in ".{0,64}") {
        let _ = ContractKey::parse(&raw);
    }

    /// PROPERTY: Accepted keys yield a plain file name without the separator.
    #[test]
    fn property_accepted_stem_is_plain_file_name(raw in ".{0,64}") {
        if let Ok(key) = ContractKey::parse(&raw) {
            let stem = key.artifact_stem();
            prop_assert!(!stem.is_empty());
            prop_assert!(!stem.contains(':'));
            prop_assert!(!stem.contains('/'));
            prop_assert!(!stem.contains('\\'));
            prop_assert!(stem != "." && stem != "..");
            prop_assert_eq!(key.artifact_file_name(), format!("{}.json", stem));
        }
    }

    /// PROPERTY: Keys with zero or several separators are rejected.
    #[test]
    fn property_separator_count_must_be_one(parts in proptest::collection::vec(identifier(), 1..5)) {
        let raw = parts.join(":");
        let result = ContractKey::parse(&raw);
        if parts.len() == 2 {
            prop_assert!(result.is_ok());
        } else {
            let is_malformed = matches!(result, Err(ArtifactError::MalformedKey { .. }));
            prop_assert!(is_malformed);
        }
    }

    /// PROPERTY: Single-source keys map back to the bare contract name.
    #[test]
    fn property_empty_qualifier_stem_is_contract_name(name in identifier()) {
        let key = ContractKey::parse(&format!(":{}", name)).unwrap();
        prop_assert_eq!(key.artifact_stem(), name.clone());
        prop_assert_eq!(key.to_string(), format!(":{}", name));
    }

    /// PROPERTY: Planning either names every contract distinctly or fails.
    #[test]
    fn property_plan_is_injective_or_rejected(
        keys in proptest::collection::btree_set((qualifier(), identifier()), 0..12),
    ) {
        let mut output = CompilerOutput::new();
        for (qualifier, name) in &keys {
            output.insert(
                format!("{}:{}", qualifier, name),
                ContractRecord::new(serde_json::json!({})),
            );
        }

        match plan_artifacts(&output) {
            Ok(planned) => {
                prop_assert_eq!(planned.len(), output.contract_count());
                let names: HashSet<String> = planned.iter().map(|p| p.file_name()).collect();
                prop_assert_eq!(names.len(), planned.len());
            }
            Err(ArtifactError::Collision { .. }) | Err(ArtifactError::MalformedKey { .. }) => {}
        }
    }
}

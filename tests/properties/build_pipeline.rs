//! Property tests for the build pipeline against a real directory.

use std::collections::BTreeMap;

use proptest::prelude::*;
use serde_json::{json, Value};
use tempfile::tempdir;

use solbuild::domain::entities::SourceDocument;
use solbuild::{BuildOptions, BuildUseCase, Compiler, CompilerError, CompilerOutput, ContractRecord, LocalFs};

/// Compiler returning one record per configured contract name
struct CannedCompiler(BTreeMap<String, Value>);

impl Compiler for CannedCompiler {
    fn compile(&self, _source: &SourceDocument) -> Result<CompilerOutput, CompilerError> {
        let mut output = CompilerOutput::new();
        for (name, record) in &self.0 {
            output.insert(format!(":{}", name), ContractRecord::new(record.clone()));
        }
        Ok(output)
    }
}

fn contracts() -> impl Strategy<Value = BTreeMap<String, Value>> {
    let name = proptest::string::string_regex("[A-Z][a-z0-9_]{0,16}").unwrap();
    let record = (any::<u32>(), "[0-9a-f]{0,32}")
        .prop_map(|(gas, bytecode)| json!({"bytecode": bytecode, "gas": gas, "interface": "[]"}));
    proptest::collection::btree_map(name, record, 0..8)
}

fn list(dir: &std::path::Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: n distinct contracts produce exactly n artifacts whose
    /// content parses back to the record, and nothing else survives.
    #[test]
    fn property_build_is_complete_and_faithful(
        contracts in contracts(),
        stale in proptest::collection::vec("[a-z]{1,8}", 0..4),
    ) {
        let dir = tempdir().unwrap();
        let source = dir.path().join("Campaign.sol");
        std::fs::write(&source, "contract Campaign {}").unwrap();
        let out = dir.path().join("build");
        std::fs::create_dir_all(&out).unwrap();
        for name in &stale {
            std::fs::write(out.join(format!("{}.stale", name)), "{}").unwrap();
        }

        let use_case = BuildUseCase::new(CannedCompiler(contracts.clone()), LocalFs::new());
        let report = use_case.execute(&BuildOptions::new(&source, &out)).unwrap();

        prop_assert_eq!(report.artifact_count(), contracts.len());

        let expected: Vec<String> = contracts.keys().map(|n| format!("{}.json", n)).collect();
        prop_assert_eq!(list(&out), expected);

        for (name, record) in &contracts {
            let raw = std::fs::read_to_string(out.join(format!("{}.json", name))).unwrap();
            let parsed: Value = serde_json::from_str(&raw).unwrap();
            prop_assert_eq!(&parsed, record);
        }
    }
}

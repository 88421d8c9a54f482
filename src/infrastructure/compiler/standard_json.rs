//! solc standard-JSON input/output
//!
//! Builds the `--standard-json` request for a single in-memory source and
//! turns the response into a `CompilerOutput`. The source is registered
//! under the empty source unit name, so contract keys come out as
//! `:ContractName`.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{json, Value};

use crate::domain::entities::{
    CompilerOutput, ContractRecord, Diagnostic, Severity, KEY_SEPARATOR,
};
use crate::domain::value_objects::RecordLayout;

/// Source unit name the single source is compiled under
pub const SOURCE_UNIT: &str = "";

/// Output fields requested for every contract
const OUTPUT_SELECTION: &[&str] = &[
    "abi",
    "metadata",
    "evm.legacyAssembly",
    "evm.bytecode",
    "evm.deployedBytecode",
    "evm.methodIdentifiers",
    "evm.gasEstimates",
];

/// Optimizer settings passed to solc
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptimizerSettings {
    pub enabled: bool,
    pub runs: u32,
}

impl Default for OptimizerSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: 200,
        }
    }
}

/// Build the standard-JSON request for one source text
pub fn build_input(source: &str, optimizer: OptimizerSettings) -> Value {
    json!({
        "language": "Solidity",
        "sources": {
            SOURCE_UNIT: { "content": source }
        },
        "settings": {
            "optimizer": {
                "enabled": optimizer.enabled,
                "runs": optimizer.runs,
            },
            "outputSelection": {
                "*": { "*": OUTPUT_SELECTION }
            }
        }
    })
}

#[derive(Debug, Default, Deserialize)]
struct StandardOutput {
    #[serde(default)]
    errors: Vec<StandardError>,
    #[serde(default)]
    contracts: BTreeMap<String, BTreeMap<String, Value>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StandardError {
    #[serde(default)]
    severity: String,
    #[serde(default)]
    message: String,
    #[serde(default)]
    formatted_message: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct StandardContract {
    abi: Vec<Value>,
    metadata: Value,
    evm: Evm,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Evm {
    legacy_assembly: Value,
    bytecode: Bytecode,
    deployed_bytecode: Bytecode,
    method_identifiers: Value,
    gas_estimates: Option<GasEstimates>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct Bytecode {
    object: String,
    opcodes: String,
    source_map: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct GasEstimates {
    creation: Option<CreationGas>,
    external: BTreeMap<String, Value>,
    internal: BTreeMap<String, Value>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct CreationGas {
    execution_cost: Value,
    code_deposit_cost: Value,
}

/// Parse solc's standard-JSON response
pub fn parse_output(stdout: &[u8], layout: RecordLayout) -> serde_json::Result<CompilerOutput> {
    let parsed: StandardOutput = serde_json::from_slice(stdout)?;
    let mut output = CompilerOutput::new();

    for error in parsed.errors {
        let message = error.formatted_message.unwrap_or(error.message);
        output.push_diagnostic(Diagnostic::new(
            Severity::from_compiler(&error.severity),
            message.trim_end(),
        ));
    }

    for (file, contracts) in parsed.contracts {
        for (name, entry) in contracts {
            let record = match layout {
                RecordLayout::Standard => entry,
                RecordLayout::Legacy => legacy_record(&entry)?,
            };
            output.insert(
                format!("{}{}{}", file, KEY_SEPARATOR, name),
                ContractRecord::new(record),
            );
        }
    }

    Ok(output)
}

/// Flatten a standard-JSON contract entry into the combined legacy layout
fn legacy_record(entry: &Value) -> serde_json::Result<Value> {
    let contract = StandardContract::deserialize(entry)?;
    let evm = contract.evm;

    Ok(json!({
        "assembly": evm.legacy_assembly,
        "bytecode": evm.bytecode.object,
        "functionHashes": evm.method_identifiers,
        "gasEstimates": evm.gas_estimates.map(legacy_gas).unwrap_or(Value::Null),
        "interface": Value::Array(contract.abi).to_string(),
        "metadata": contract.metadata,
        "opcodes": evm.bytecode.opcodes,
        "runtimeBytecode": evm.deployed_bytecode.object,
        "srcmap": evm.bytecode.source_map,
        "srcmapRuntime": evm.deployed_bytecode.source_map,
    }))
}

fn legacy_gas(gas: GasEstimates) -> Value {
    let translate_map = |m: BTreeMap<String, Value>| -> Value {
        Value::Object(m.into_iter().map(|(k, v)| (k, gas_value(&v))).collect())
    };

    let creation = match gas.creation {
        Some(c) => json!([gas_value(&c.execution_cost), gas_value(&c.code_deposit_cost)]),
        None => Value::Null,
    };

    json!({
        "creation": creation,
        "external": translate_map(gas.external),
        "internal": translate_map(gas.internal),
    })
}

/// `"1234"` -> `1234`, `"infinite"` -> `null`
fn gas_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s == "infinite" => Value::Null,
        Value::String(s) => s
            .parse::<u64>()
            .map(Value::from)
            .unwrap_or_else(|_| value.clone()),
        other => other.clone(),
    }
}

//! Artifact planning service
//!
//! Pure domain logic mapping compiler keys to artifact file names.
//! Every name is derived and checked before anything is written, so a bad
//! key aborts the build with the output directory still empty.

use std::collections::HashMap;

use crate::domain::entities::{CompilerOutput, ContractKey, PlannedArtifact};
use crate::error::ArtifactError;

/// Plan one artifact per contract in `output`, in key order.
///
/// Fails on the first malformed key, or when two distinct keys would be
/// written to the same file.
pub fn plan_artifacts(output: &CompilerOutput) -> Result<Vec<PlannedArtifact<'_>>, ArtifactError> {
    let mut planned = Vec::with_capacity(output.contract_count());
    let mut claimed: HashMap<String, &str> = HashMap::new();

    for (raw_key, record) in output.contracts() {
        let key = ContractKey::parse(raw_key)?;
        let file_name = key.artifact_file_name();

        if let Some(first) = claimed.get(&file_name) {
            return Err(ArtifactError::Collision {
                file_name,
                first: first.to_string(),
                second: raw_key.to_string(),
            });
        }
        claimed.insert(file_name, raw_key);
        planned.push(PlannedArtifact::new(key, record));
    }

    Ok(planned)
}

use crate::error::ArtifactError;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};
use std::fs;

/// What kind of callable the runtime receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScriptKind {
    Function,
}

/// The output of a successful compile. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompiledScript {
    source_text: String,
    name: String,
    kind: ScriptKind,
    description: String,
}

impl CompiledScript {
    pub fn new(source_text: String, name: String, kind: ScriptKind, description: String) -> Self {
        Self {
            source_text,
            name,
            kind,
            description,
        }
    }

    pub fn source_text(&self) -> &str {
        &self.source_text
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> ScriptKind {
        self.kind
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn to_json(&self) -> Result<String, ArtifactError> {
        serde_json::to_string_pretty(self).map_err(|e| artifact_err("serialize script", e))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, ArtifactError> {
        encode_to_vec(self, standard()).map_err(|e| artifact_err("serialize script", e))
    }

    /// Writes the bincode form of the script to `path`.
    pub fn save(&self, path: &str) -> Result<(), ArtifactError> {
        let bytes = self.to_bytes()?;
        fs::write(path, bytes).map_err(|e| artifact_err(&format!("write '{}'", path), e))
    }

    pub fn from_file(path: &str) -> Result<Self, ArtifactError> {
        let bytes = fs::read(path).map_err(|e| artifact_err(&format!("read '{}'", path), e))?;
        Self::from_bytes(&bytes)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ArtifactError> {
        let (script, _) =
            decode_from_slice(bytes, standard()).map_err(|e| artifact_err("decode script", e))?;
        Ok(script)
    }
}

fn artifact_err(action: &str, err: impl std::fmt::Display) -> ArtifactError {
    ArtifactError::Generic(format!("Could not {}: {}", action, err))
}

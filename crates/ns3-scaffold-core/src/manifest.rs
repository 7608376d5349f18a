//! The `ns3-project.json` record written at the root of every generated project.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ScaffoldError};

/// File name of the manifest, relative to the project root.
pub const MANIFEST_FILE: &str = "ns3-project.json";

/// Name and version of the tool, as recorded in generated manifests.
pub const GENERATOR: &str = concat!("create-ns3-project ", env!("CARGO_PKG_VERSION"));

/// What the project was generated from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectManifest {
    pub project_name: String,
    pub ns3_version: String,
    /// Simulator directory name, e.g. `ns-3.45`.
    pub ns3_dir: String,
    pub generator: String,
    /// Created directories relative to the root, `/`-separated.
    pub directories: Vec<String>,
}

impl ProjectManifest {
    /// Pretty-printed JSON with a trailing newline.
    pub fn to_json(&self) -> Result<String> {
        let mut json = serde_json::to_string_pretty(self)?;
        json.push('\n');
        Ok(json)
    }

    /// Load the manifest from a project root.
    pub fn load(project_root: &Path) -> Result<Self> {
        let path = project_root.join(MANIFEST_FILE);
        let content = std::fs::read_to_string(&path).map_err(|e| ScaffoldError::fs(&path, e))?;
        Ok(serde_json::from_str(&content)?)
    }
}

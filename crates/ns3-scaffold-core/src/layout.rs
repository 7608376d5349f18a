//! Directory layout templates for new projects.
//!
//! A [`ProjectLayout`] is plain data: an ordered list of relative directory paths,
//! each with a description (written to the directory's `about_folder.md`) and a
//! `keep_empty` flag (whether a `.gitkeep` is written). Paths and descriptions are
//! Handlebars templates rendered against the project context, so a layout can
//! refer to `{{ns3_dir}}` or `{{ns3_version}}`.
//!
//! The built-in layout ([`ProjectLayout::standard`]) can be replaced by a JSON file:
//!
//! ```json
//! {
//!   "root_description": "Root of the simulation project.",
//!   "directories": [
//!     { "path": "{{ns3_dir}}/scratch", "keep_empty": true },
//!     { "path": "results", "description": "Raw simulation output." }
//!   ]
//! }
//! ```

use std::collections::{HashMap, HashSet};
use std::path::{Component, Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, ScaffoldError};
use crate::templates::renderer::TemplateRenderer;

/// Description used for directories that have none of their own.
pub const DEFAULT_DESCRIPTION: &str = "A project directory.";

const DEFAULT_ROOT_DESCRIPTION: &str = "Root of the simulation project.";

fn default_description() -> String {
    DEFAULT_DESCRIPTION.into()
}

fn default_root_description() -> String {
    DEFAULT_ROOT_DESCRIPTION.into()
}

/// One directory in a layout, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutEntry {
    /// Relative path template, e.g. `{{ns3_dir}}/src/my-module-1`.
    pub path: String,
    #[serde(default = "default_description")]
    pub description: String,
    /// Write a `.gitkeep` so the directory survives a git checkout while empty.
    #[serde(default)]
    pub keep_empty: bool,
}

impl LayoutEntry {
    fn new(path: &str, description: &str) -> Self {
        Self {
            path: path.into(),
            description: description.into(),
            keep_empty: false,
        }
    }

    fn kept(mut self) -> Self {
        self.keep_empty = true;
        self
    }
}

/// The set of directories created under a project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLayout {
    #[serde(default = "default_root_description")]
    pub root_description: String,
    pub directories: Vec<LayoutEntry>,
}

/// A layout entry after template expansion and validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDir {
    /// Path relative to the project root, never empty.
    pub path: PathBuf,
    pub description: String,
    pub keep_empty: bool,
}

impl ResolvedDir {
    /// `true` for directories directly under the project root.
    pub fn is_top_level(&self) -> bool {
        self.path.components().count() == 1
    }
}

impl ProjectLayout {
    /// The standard ns-3 project layout.
    pub fn standard() -> Self {
        Self {
            root_description: default_root_description(),
            directories: vec![
                LayoutEntry::new(
                    "{{ns3_dir}}",
                    "Placeholder for the ns-{{ns3_version}} simulator source code. Clone or link the ns-3 repository here.",
                ),
                LayoutEntry::new("{{ns3_dir}}/contrib", "Directory for your contributed ns-3 modules.").kept(),
                LayoutEntry::new("{{ns3_dir}}/src", "Directory for your custom ns-3 modules."),
                LayoutEntry::new("{{ns3_dir}}/src/my-module-1", "Directory for your custom ns-3 module 1.").kept(),
                LayoutEntry::new(
                    "{{ns3_dir}}/scratch",
                    "Directory for quick, single-file simulation tests run from the ns-3 scratch directory.",
                )
                .kept(),
                LayoutEntry::new("simulations", "C++ scripts for running your main simulation scenarios."),
                LayoutEntry::new("results", "Raw simulation results (e.g., .pcap, .dat files)."),
                LayoutEntry::new("results/scenario-1", "Results for the first simulation scenario."),
                LayoutEntry::new("results/scenario-2", "Results for the second simulation scenario."),
                LayoutEntry::new("analysis", "Python scripts for data processing, analysis, and plotting."),
                LayoutEntry::new("plots", "Final plots and figures for reports and publications."),
                LayoutEntry::new("doc", "Project documentation, notes, and descriptions."),
            ],
        }
    }

    /// Load a layout from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ScaffoldError::LayoutNotFound {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| ScaffoldError::LayoutParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Expand every entry against `data` and validate the result.
    ///
    /// Missing ancestors are inserted before their first descendant with the
    /// default description, so the returned list is in creation order.
    pub fn resolve(&self, renderer: &TemplateRenderer, data: &Value) -> Result<Vec<ResolvedDir>> {
        let mut resolved: Vec<ResolvedDir> = Vec::new();
        let mut index: HashMap<PathBuf, usize> = HashMap::new();
        let mut explicit: HashSet<PathBuf> = HashSet::new();

        for entry in &self.directories {
            let rel = normalize_relative(&renderer.render(&entry.path, data)?)?;
            if !explicit.insert(rel.clone()) {
                return Err(ScaffoldError::InvalidLayout(format!(
                    "duplicate directory '{}'",
                    to_slash(&rel)
                )));
            }
            let description = renderer.render(&entry.description, data)?;

            let mut partial = PathBuf::new();
            for component in rel.components() {
                partial.push(component);
                if !index.contains_key(&partial) {
                    index.insert(partial.clone(), resolved.len());
                    resolved.push(ResolvedDir {
                        path: partial.clone(),
                        description: default_description(),
                        keep_empty: false,
                    });
                }
            }

            let slot = &mut resolved[index[&rel]];
            slot.description = description;
            slot.keep_empty = entry.keep_empty;
        }

        Ok(resolved)
    }
}

impl Default for ProjectLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Turn a rendered layout path into a clean relative path.
fn normalize_relative(raw: &str) -> Result<PathBuf> {
    let mut out = PathBuf::new();
    for component in Path::new(raw).components() {
        match component {
            Component::Normal(part) => out.push(part),
            Component::CurDir => {}
            Component::ParentDir => {
                return Err(ScaffoldError::InvalidLayout(format!(
                    "'{raw}' must not contain '..'"
                )))
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(ScaffoldError::InvalidLayout(format!(
                    "'{raw}' must be relative to the project root"
                )))
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(ScaffoldError::InvalidLayout(format!(
            "'{raw}' does not name a directory"
        )));
    }
    Ok(out)
}

/// Render a relative path with `/` separators regardless of platform.
pub(crate) fn to_slash(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

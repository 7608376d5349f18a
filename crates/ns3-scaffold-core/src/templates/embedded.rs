//! Compile-time embedded templates for project scaffolding.
//!
//! Each constant loads a template file from `templates/project/` via [`include_str!`]. The
//! paths are relative to this source file (`crates/ns3-scaffold-core/src/templates/embedded.rs`).
//!
//! Do NOT rename or move template files without updating the `include_str!` path here.
//! Do NOT modify template files without checking that the Handlebars variables still match
//! what [`crate::project`] passes in.

/// Top-level `README.md`. Variables: `project_name`, `ns3_version`, `ns3_dir`, `tree`, `sections`.
pub const README_MD: &str = include_str!("../../../../templates/project/README.md.hbs");

/// Top-level `.gitignore`. Variables: `ns3_version`, `ns3_dir`.
pub const GITIGNORE: &str = include_str!("../../../../templates/project/gitignore.hbs");

/// Per-directory `about_folder.md`. Variables: `title`, `description`.
pub const ABOUT_FOLDER_MD: &str = include_str!("../../../../templates/project/about_folder.md.hbs");

//! Core library for ns3-scaffold.
//!
//! Creates the directory skeleton of a new ns-3 network simulation project:
//! validation of the requested [`project::ProjectSpec`], the replaceable
//! [`layout::ProjectLayout`] template, Handlebars rendering of the starter files,
//! and the all-or-nothing creation pass in [`project::create_project`].
//!
//! ```no_run
//! use ns3_scaffold_core::project::{create_standard_project, ProjectSpec};
//!
//! let spec = ProjectSpec::new("my_project", "/tmp/work", "3.45");
//! let report = create_standard_project(&spec)?;
//! println!("created {}", report.root.display());
//! # Ok::<(), ns3_scaffold_core::error::ScaffoldError>(())
//! ```

pub mod error;
pub mod layout;
pub mod manifest;
pub mod project;
pub mod templates;
pub mod tree;

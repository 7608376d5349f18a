//! Template system for ns-3 project scaffolding.
//!
//! Templates are embedded into the binary at compile-time via [`include_str!`] in the
//! [`embedded`] module, then rendered at runtime with [Handlebars](https://handlebarsjs.com/)
//! via the [`renderer::TemplateRenderer`].
//!
//! ## Template variables
//!
//! Every template and every layout path or description is rendered against the same
//! base context:
//! - `{{project_name}}` — project directory name
//! - `{{ns3_version}}` — simulator version label (e.g., `3.45`)
//! - `{{ns3_dir}}` — simulator directory name (e.g., `ns-3.45`)
//!
//! **Warning**: Template files in `templates/project/` and constants in [`embedded`] must
//! stay in sync. The `include_str!` paths are checked at compile-time.

pub mod embedded;
pub mod renderer;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use ns3_scaffold_core::layout::ProjectLayout;
use ns3_scaffold_core::project::{self, ProjectSpec};

use crate::output;

/// Options for a single `create-ns3-project` run.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    pub project_name: String,
    pub output_path: PathBuf,
    pub ns3_version: String,
    /// JSON layout replacing the built-in directory template.
    pub layout: Option<PathBuf>,
    pub dry_run: bool,
}

/// Create a new ns-3 project.
///
/// Validates the settings and renders every file before anything is written, then
/// creates the tree in one pass. With `dry_run` the planned tree is printed and
/// nothing is created.
pub fn run(opts: &CreateOptions) -> Result<()> {
    output::print_header(&format!("create-ns3-project: {}", opts.project_name));

    output::print_step(1, 2, "Checking project settings");
    let layout = match &opts.layout {
        Some(path) => load_layout(path)?,
        None => ProjectLayout::standard(),
    };
    let spec = ProjectSpec::new(
        opts.project_name.clone(),
        opts.output_path.clone(),
        opts.ns3_version.clone(),
    );
    let plan = project::plan_project(&spec, &layout)?;
    output::print_key_value("location", &plan.root.display().to_string());
    output::print_key_value("ns-3 version", &spec.ns3_version);

    if opts.dry_run {
        output::print_step(2, 2, "Planned project structure");
        output::print_block(&plan.tree);
        output::print_warning("Dry run: nothing was created");
        return Ok(());
    }

    output::print_step(
        2,
        2,
        &format!(
            "Creating {} directories and {} files",
            plan.directories.len() + 1,
            plan.files.len()
        ),
    );
    let report = plan
        .apply()
        .with_context(|| format!("could not create project '{}'", opts.project_name))?;

    output::print_success(&format!("Project '{}' created", opts.project_name));
    println!();
    println!("  Next steps:");
    println!("    cd {}", report.root.display());
    println!("    Read README.md and the about_folder.md files for details.");
    println!();

    Ok(())
}

fn load_layout(path: &Path) -> Result<ProjectLayout> {
    tracing::info!("loading layout from {}", path.display());
    Ok(ProjectLayout::load(path)?)
}

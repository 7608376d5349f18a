//! Project validation, planning and creation.
//!
//! Scaffolding is split in two steps. [`plan_project`] validates the inputs,
//! checks the destination and renders every file in memory without touching the
//! disk. [`ProjectPlan::apply`] then creates the tree in one pass. If anything
//! fails after the project root has been created, the partial tree is removed.
//!
//! ## Directory layout
//!
//! With the standard layout and ns-3 version 3.45:
//! ```text
//! <project>/
//! ├── ns-3.45/
//! │   ├── contrib/
//! │   ├── src/
//! │   │   └── my-module-1/
//! │   └── scratch/
//! ├── simulations/
//! ├── results/
//! │   ├── scenario-1/
//! │   └── scenario-2/
//! ├── analysis/
//! ├── plots/
//! ├── doc/
//! ├── README.md
//! ├── .gitignore
//! └── ns3-project.json
//! ```
//!
//! Every directory also gets an `about_folder.md`; directories meant to stay empty
//! get a `.gitkeep`.

use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::{Path, PathBuf, MAIN_SEPARATOR};

use serde_json::Value;

use crate::error::{Result, ScaffoldError};
use crate::layout::{to_slash, ProjectLayout};
use crate::manifest::{ProjectManifest, GENERATOR, MANIFEST_FILE};
use crate::templates::embedded;
use crate::templates::renderer::TemplateRenderer;
use crate::tree::render_tree;

/// ns-3 version used when none is given.
pub const DEFAULT_NS3_VERSION: &str = "3.45";

pub const README_FILE: &str = "README.md";
pub const GITIGNORE_FILE: &str = ".gitignore";
pub const ABOUT_FILE: &str = "about_folder.md";
pub const KEEP_FILE: &str = ".gitkeep";

/// What to create, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    pub project_name: String,
    /// Parent directory of the project root.
    pub output_path: PathBuf,
    /// Free-text simulator version label.
    pub ns3_version: String,
}

impl ProjectSpec {
    pub fn new(
        project_name: impl Into<String>,
        output_path: impl Into<PathBuf>,
        ns3_version: impl Into<String>,
    ) -> Self {
        Self {
            project_name: project_name.into(),
            output_path: output_path.into(),
            ns3_version: ns3_version.into(),
        }
    }

    /// A spec for `project_name` in the current directory with the default version.
    pub fn with_defaults(project_name: impl Into<String>) -> Self {
        Self::new(project_name, ".", DEFAULT_NS3_VERSION)
    }

    /// Name of the simulator directory, e.g. `ns-3.45`.
    pub fn ns3_dir(&self) -> String {
        format!("ns-{}", self.ns3_version)
    }

    /// Check that the name and version can be used as directory-name fragments.
    pub fn validate(&self) -> Result<()> {
        check_fragment("project name", &self.project_name)?;
        if self.project_name == "." || self.project_name == ".." {
            return Err(ScaffoldError::InvalidArgument(format!(
                "project name must not be '{}'",
                self.project_name
            )));
        }
        check_fragment("ns-3 version", &self.ns3_version)
    }

    fn template_data(&self) -> Value {
        serde_json::json!({
            "project_name": self.project_name,
            "ns3_version": self.ns3_version,
            "ns3_dir": self.ns3_dir(),
        })
    }
}

fn check_fragment(what: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ScaffoldError::InvalidArgument(format!(
            "{what} must not be empty"
        )));
    }
    if value.contains(['/', '\\', MAIN_SEPARATOR]) {
        return Err(ScaffoldError::InvalidArgument(format!(
            "{what} '{value}' must not contain path separators"
        )));
    }
    if value.contains('\0') {
        return Err(ScaffoldError::InvalidArgument(format!(
            "{what} must not contain NUL bytes"
        )));
    }
    Ok(())
}

/// A file to write, relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedFile {
    pub path: PathBuf,
    pub contents: String,
}

/// Everything [`ProjectPlan::apply`] will create, fully rendered.
#[derive(Debug, Clone)]
pub struct ProjectPlan {
    /// Absolute path of the project root.
    pub root: PathBuf,
    /// Subdirectories relative to the root, parents before children.
    pub directories: Vec<PathBuf>,
    /// Files relative to the root, in write order.
    pub files: Vec<PlannedFile>,
    /// ASCII tree of the project, as shown in the README.
    pub tree: String,
}

/// What [`ProjectPlan::apply`] created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    /// Absolute path of the project root.
    pub root: PathBuf,
    /// Created subdirectories relative to the root.
    pub directories: Vec<PathBuf>,
    /// Written files relative to the root.
    pub files: Vec<PathBuf>,
}

/// Validate everything and render the project in memory.
///
/// Fails with the same errors as [`create_project`] would before it writes anything.
pub fn plan_project(spec: &ProjectSpec, layout: &ProjectLayout) -> Result<ProjectPlan> {
    spec.validate()?;

    let output = resolve_output_path(&spec.output_path)?;
    let root = output.join(&spec.project_name);
    match std::fs::symlink_metadata(&root) {
        Ok(_) => return Err(ScaffoldError::ProjectAlreadyExists(root)),
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => return Err(ScaffoldError::fs(root, e)),
    }

    let renderer = TemplateRenderer::new();
    let data = spec.template_data();
    let dirs = layout.resolve(&renderer, &data)?;

    let mut files = Vec::new();
    let root_about = render_about(&renderer, &spec.project_name, &layout.root_description)?;
    files.push(PlannedFile {
        path: PathBuf::from(ABOUT_FILE),
        contents: root_about,
    });
    for dir in &dirs {
        let title = dir
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        files.push(PlannedFile {
            path: dir.path.join(ABOUT_FILE),
            contents: render_about(&renderer, &title, &dir.description)?,
        });
        if dir.keep_empty {
            files.push(PlannedFile {
                path: dir.path.join(KEEP_FILE),
                contents: String::new(),
            });
        }
    }

    let directories: Vec<PathBuf> = dirs.iter().map(|d| d.path.clone()).collect();
    let top_files = [README_FILE, GITIGNORE_FILE, MANIFEST_FILE];
    let tree = render_tree(&spec.project_name, &directories, top_files);

    let sections: Vec<Value> = dirs
        .iter()
        .filter(|d| d.is_top_level())
        .map(|d| serde_json::json!({ "name": to_slash(&d.path), "description": d.description }))
        .collect();
    let mut readme_data = data.clone();
    readme_data["tree"] = Value::String(tree.clone());
    readme_data["sections"] = Value::Array(sections);

    files.push(PlannedFile {
        path: PathBuf::from(README_FILE),
        contents: renderer.render(embedded::README_MD, &readme_data)?,
    });
    files.push(PlannedFile {
        path: PathBuf::from(GITIGNORE_FILE),
        contents: renderer.render(embedded::GITIGNORE, &data)?,
    });

    let manifest = ProjectManifest {
        project_name: spec.project_name.clone(),
        ns3_version: spec.ns3_version.clone(),
        ns3_dir: spec.ns3_dir(),
        generator: GENERATOR.to_string(),
        directories: directories.iter().map(|d| to_slash(d)).collect(),
    };
    files.push(PlannedFile {
        path: PathBuf::from(MANIFEST_FILE),
        contents: manifest.to_json()?,
    });
    check_file_collisions(&directories, &files)?;

    Ok(ProjectPlan {
        root,
        directories,
        files,
        tree,
    })
}

/// A layout directory must not sit where a generated file is written.
fn check_file_collisions(directories: &[PathBuf], files: &[PlannedFile]) -> Result<()> {
    let dirs: HashSet<&Path> = directories.iter().map(PathBuf::as_path).collect();
    match files.iter().find(|f| dirs.contains(f.path.as_path())) {
        Some(file) => Err(ScaffoldError::InvalidLayout(format!(
            "directory '{}' collides with a generated file",
            to_slash(&file.path)
        ))),
        None => Ok(()),
    }
}

fn render_about(renderer: &TemplateRenderer, title: &str, description: &str) -> Result<String> {
    renderer.render(
        embedded::ABOUT_FOLDER_MD,
        &serde_json::json!({ "title": title, "description": description }),
    )
}

/// Resolve the parent directory to an absolute path and check that it is usable.
fn resolve_output_path(path: &Path) -> Result<PathBuf> {
    let resolved = match std::fs::canonicalize(path) {
        Ok(p) => p,
        Err(e) if matches!(e.kind(), ErrorKind::NotFound | ErrorKind::NotADirectory) => {
            let shown = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
            return Err(ScaffoldError::OutputPathNotFound(shown));
        }
        Err(e) => return Err(ScaffoldError::fs(path, e)),
    };

    let metadata = std::fs::metadata(&resolved).map_err(|e| ScaffoldError::fs(&resolved, e))?;
    if !metadata.is_dir() {
        return Err(ScaffoldError::OutputPathNotFound(resolved));
    }
    if metadata.permissions().readonly() {
        return Err(ScaffoldError::OutputPathNotWritable(resolved));
    }
    Ok(resolved)
}

impl ProjectPlan {
    /// Create the project on disk.
    ///
    /// The root is created without `create_dir_all`, so a directory that appeared
    /// after planning still yields [`ScaffoldError::ProjectAlreadyExists`].
    pub fn apply(&self) -> Result<ScaffoldReport> {
        tracing::info!("creating project root {}", self.root.display());
        match std::fs::create_dir(&self.root) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(ScaffoldError::ProjectAlreadyExists(self.root.clone()));
            }
            Err(e) if e.kind() == ErrorKind::PermissionDenied => {
                let parent = self.root.parent().unwrap_or(&self.root).to_path_buf();
                return Err(ScaffoldError::OutputPathNotWritable(parent));
            }
            Err(e) => return Err(ScaffoldError::fs(&self.root, e)),
        }

        if let Err(err) = self.populate() {
            return Err(rollback(&self.root, err));
        }

        Ok(ScaffoldReport {
            root: self.root.clone(),
            directories: self.directories.clone(),
            files: self.files.iter().map(|f| f.path.clone()).collect(),
        })
    }

    fn populate(&self) -> Result<()> {
        tracing::info!("creating {} directories", self.directories.len());
        for dir in &self.directories {
            let path = self.root.join(dir);
            tracing::debug!("mkdir {}", path.display());
            std::fs::create_dir(&path).map_err(|e| ScaffoldError::fs(&path, e))?;
        }

        tracing::info!("writing {} files", self.files.len());
        for file in &self.files {
            let path = self.root.join(&file.path);
            tracing::debug!("write {}", path.display());
            std::fs::write(&path, &file.contents).map_err(|e| ScaffoldError::fs(&path, e))?;
        }
        Ok(())
    }
}

fn rollback(root: &Path, cause: ScaffoldError) -> ScaffoldError {
    tracing::warn!("scaffolding failed, removing partial project at {}", root.display());
    match std::fs::remove_dir_all(root) {
        Ok(()) => cause,
        Err(source) => ScaffoldError::CleanupFailed {
            path: root.to_path_buf(),
            cause: Box::new(cause),
            source,
        },
    }
}

/// Create a project from `spec` using `layout`.
pub fn create_project(spec: &ProjectSpec, layout: &ProjectLayout) -> Result<ScaffoldReport> {
    tracing::info!(
        "scaffolding '{}' (ns-{}) in {}",
        spec.project_name,
        spec.ns3_version,
        spec.output_path.display()
    );
    plan_project(spec, layout)?.apply()
}

/// Create a project from `spec` using [`ProjectLayout::standard`].
pub fn create_standard_project(spec: &ProjectSpec) -> Result<ScaffoldReport> {
    create_project(spec, &ProjectLayout::standard())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEntry;
    use std::collections::BTreeSet;

    /// Every entry under `root`, relative and `/`-separated.
    fn walk(root: &Path) -> BTreeSet<String> {
        let mut out = BTreeSet::new();
        let mut stack = vec![root.to_path_buf()];
        while let Some(dir) = stack.pop() {
            for entry in std::fs::read_dir(&dir).unwrap() {
                let path = entry.unwrap().path();
                out.insert(to_slash(path.strip_prefix(root).unwrap()));
                if path.is_dir() {
                    stack.push(path);
                }
            }
        }
        out
    }

    #[test]
    fn test_create_standard_tree() {
        let work = tempfile::tempdir().unwrap();
        let spec = ProjectSpec::new("my_project", work.path(), DEFAULT_NS3_VERSION);
        let report = create_standard_project(&spec).unwrap();

        let expected_root = std::fs::canonicalize(work.path()).unwrap().join("my_project");
        assert_eq!(report.root, expected_root);
        assert!(report.root.is_absolute());

        let mut expected: BTreeSet<String> = [
            "ns-3.45",
            "ns-3.45/contrib",
            "ns-3.45/contrib/.gitkeep",
            "ns-3.45/src",
            "ns-3.45/src/my-module-1",
            "ns-3.45/src/my-module-1/.gitkeep",
            "ns-3.45/scratch",
            "ns-3.45/scratch/.gitkeep",
            "simulations",
            "results",
            "results/scenario-1",
            "results/scenario-2",
            "analysis",
            "plots",
            "doc",
            "README.md",
            ".gitignore",
            "ns3-project.json",
            "about_folder.md",
        ]
        .into_iter()
        .map(String::from)
        .collect();
        for dir in &report.directories {
            expected.insert(format!("{}/about_folder.md", to_slash(dir)));
        }
        assert_eq!(walk(&report.root), expected);
    }

    #[test]
    fn test_default_version_in_generated_files() {
        let work = tempfile::tempdir().unwrap();
        let mut spec = ProjectSpec::with_defaults("proj");
        spec.output_path = work.path().to_path_buf();
        let report = create_standard_project(&spec).unwrap();

        let readme = std::fs::read_to_string(report.root.join(README_FILE)).unwrap();
        assert!(readme.starts_with("# proj\n"));
        assert!(readme.contains("ns-3.45"));
        assert!(readme.contains("├── ns-3.45/"));
        assert!(readme.contains("- `simulations/`: C++ scripts"));

        let gitignore = std::fs::read_to_string(report.root.join(GITIGNORE_FILE)).unwrap();
        assert!(gitignore.contains("ns-3.45/build/"));

        let about = std::fs::read_to_string(report.root.join(ABOUT_FILE)).unwrap();
        assert_eq!(about, "# proj\n\nRoot of the simulation project.\n");

        let manifest = ProjectManifest::load(&report.root).unwrap();
        assert_eq!(manifest.ns3_version, "3.45");
        assert_eq!(manifest.ns3_dir, "ns-3.45");
        assert_eq!(manifest.generator, GENERATOR);
        assert_eq!(manifest.directories.len(), report.directories.len());
    }

    #[test]
    fn test_custom_version_in_generated_files() {
        let work = tempfile::tempdir().unwrap();
        let spec = ProjectSpec::new("proj", work.path(), "3.46");
        let report = create_standard_project(&spec).unwrap();

        assert!(report.root.join("ns-3.46/scratch").is_dir());
        assert!(!report.root.join("ns-3.45").exists());
        let readme = std::fs::read_to_string(report.root.join(README_FILE)).unwrap();
        assert!(readme.contains("ns-3.46"));
        assert!(!readme.contains("3.45"));
        let about = std::fs::read_to_string(report.root.join("ns-3.46/about_folder.md")).unwrap();
        assert!(about.starts_with("# ns-3.46\n"));
        assert!(about.contains("ns-3.46 simulator source code"));
    }

    #[test]
    fn test_second_run_fails_and_leaves_first_untouched() {
        let work = tempfile::tempdir().unwrap();
        let spec = ProjectSpec::new("my_project", work.path(), "3.45");
        let report = create_standard_project(&spec).unwrap();
        let readme_path = report.root.join(README_FILE);
        std::fs::write(&readme_path, "edited by user").unwrap();
        let before = walk(&report.root);

        let err = create_standard_project(&spec).unwrap_err();
        assert!(matches!(err, ScaffoldError::ProjectAlreadyExists(ref p) if *p == report.root));
        assert_eq!(walk(&report.root), before);
        assert_eq!(std::fs::read_to_string(&readme_path).unwrap(), "edited by user");
    }

    #[test]
    fn test_existing_file_counts_as_collision() {
        let work = tempfile::tempdir().unwrap();
        std::fs::write(work.path().join("taken"), "").unwrap();
        let spec = ProjectSpec::new("taken", work.path(), "3.45");
        assert!(matches!(
            create_standard_project(&spec),
            Err(ScaffoldError::ProjectAlreadyExists(_))
        ));
        assert!(work.path().join("taken").is_file());
    }

    #[test]
    fn test_invalid_names_create_nothing() {
        let work = tempfile::tempdir().unwrap();
        for name in ["", "   ", "a/b", "a\\b", ".", "..", "nul\0byte"] {
            let spec = ProjectSpec::new(name, work.path(), "3.45");
            let err = create_standard_project(&spec).unwrap_err();
            assert!(
                matches!(err, ScaffoldError::InvalidArgument(_)),
                "name {name:?} gave {err:?}"
            );
        }
        assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_invalid_version_rejected() {
        let work = tempfile::tempdir().unwrap();
        for version in ["", "3.45/../../x"] {
            let spec = ProjectSpec::new("proj", work.path(), version);
            assert!(matches!(
                create_standard_project(&spec),
                Err(ScaffoldError::InvalidArgument(_))
            ));
        }
        assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_missing_output_path() {
        let work = tempfile::tempdir().unwrap();
        let missing = work.path().join("no/such/dir");
        let spec = ProjectSpec::new("proj2", &missing, "3.45");
        let err = create_standard_project(&spec).unwrap_err();
        assert!(matches!(err, ScaffoldError::OutputPathNotFound(_)));
        assert!(!missing.exists());
    }

    #[test]
    fn test_output_path_is_a_file() {
        let work = tempfile::tempdir().unwrap();
        let file = work.path().join("plain.txt");
        std::fs::write(&file, "x").unwrap();
        let spec = ProjectSpec::new("proj", &file, "3.45");
        assert!(matches!(
            create_standard_project(&spec),
            Err(ScaffoldError::OutputPathNotFound(_))
        ));
    }

    #[test]
    fn test_readonly_output_path() {
        let work = tempfile::tempdir().unwrap();
        let locked = work.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        let mut perms = std::fs::metadata(&locked).unwrap().permissions();
        perms.set_readonly(true);
        std::fs::set_permissions(&locked, perms.clone()).unwrap();

        let spec = ProjectSpec::new("proj", &locked, "3.45");
        let result = create_standard_project(&spec);

        perms.set_readonly(false);
        std::fs::set_permissions(&locked, perms).unwrap();

        assert!(matches!(result, Err(ScaffoldError::OutputPathNotWritable(_))));
        assert_eq!(std::fs::read_dir(&locked).unwrap().count(), 0);
    }

    #[test]
    fn test_failed_pass_removes_partial_tree() {
        let work = tempfile::tempdir().unwrap();
        // "missing/" is never created, so the second write fails after the tree exists.
        let plan = ProjectPlan {
            root: work.path().join("broken"),
            directories: vec![PathBuf::from("simulations")],
            files: vec![
                PlannedFile {
                    path: Path::new("simulations").join(ABOUT_FILE),
                    contents: "# simulations\n".into(),
                },
                PlannedFile {
                    path: Path::new("missing").join("notes.txt"),
                    contents: String::new(),
                },
            ],
            tree: String::new(),
        };
        let err = plan.apply().unwrap_err();
        assert!(matches!(err, ScaffoldError::Filesystem { ref path, .. } if path.ends_with("missing/notes.txt")));
        assert!(!work.path().join("broken").exists());
    }

    #[test]
    fn test_rollback_reports_cleanup_failure() {
        let work = tempfile::tempdir().unwrap();
        let gone = work.path().join("gone");
        let err = rollback(&gone, ScaffoldError::InvalidLayout("x".into()));
        match err {
            ScaffoldError::CleanupFailed { path, cause, .. } => {
                assert_eq!(path, gone);
                assert!(matches!(*cause, ScaffoldError::InvalidLayout(ref m) if m == "x"));
            }
            other => panic!("expected CleanupFailed, got {other:?}"),
        }
    }

    #[test]
    fn test_layout_colliding_with_generated_files_is_rejected_before_writing() {
        let work = tempfile::tempdir().unwrap();
        let spec = ProjectSpec::new("clash", work.path(), "3.45");
        let cases: Vec<Vec<LayoutEntry>> = vec![
            vec![LayoutEntry {
                path: README_FILE.into(),
                description: "x".into(),
                keep_empty: false,
            }],
            vec![LayoutEntry {
                path: MANIFEST_FILE.into(),
                description: "x".into(),
                keep_empty: false,
            }],
            vec![LayoutEntry {
                path: format!("doc/{ABOUT_FILE}"),
                description: "x".into(),
                keep_empty: false,
            }],
            vec![
                LayoutEntry {
                    path: "src/.gitkeep".into(),
                    description: "x".into(),
                    keep_empty: false,
                },
                LayoutEntry {
                    path: "src".into(),
                    description: "x".into(),
                    keep_empty: true,
                },
            ],
        ];
        for directories in cases {
            let layout = ProjectLayout {
                root_description: "root".into(),
                directories,
            };
            let err = plan_project(&spec, &layout).unwrap_err();
            assert!(matches!(err, ScaffoldError::InvalidLayout(_)), "got {err:?}");
            assert!(matches!(
                create_project(&spec, &layout),
                Err(ScaffoldError::InvalidLayout(_))
            ));
        }
        assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_plan_touches_nothing() {
        let work = tempfile::tempdir().unwrap();
        let spec = ProjectSpec::new("planned", work.path(), "3.45");
        let plan = plan_project(&spec, &ProjectLayout::standard()).unwrap();

        assert!(plan.tree.starts_with("planned/\n"));
        assert!(plan.tree.ends_with("└── ns3-project.json"));
        assert_eq!(plan.directories.len(), 12);
        assert!(!plan.root.exists());
        assert_eq!(std::fs::read_dir(work.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_apply_detects_late_collision() {
        let work = tempfile::tempdir().unwrap();
        let spec = ProjectSpec::new("racy", work.path(), "3.45");
        let plan = plan_project(&spec, &ProjectLayout::standard()).unwrap();
        std::fs::create_dir(&plan.root).unwrap();

        assert!(matches!(
            plan.apply(),
            Err(ScaffoldError::ProjectAlreadyExists(_))
        ));
        assert_eq!(std::fs::read_dir(&plan.root).unwrap().count(), 0);
    }

    #[test]
    fn test_custom_layout_drives_readme_and_manifest() {
        let work = tempfile::tempdir().unwrap();
        let layout = ProjectLayout {
            root_description: "Custom root.".into(),
            directories: vec![
                LayoutEntry {
                    path: "src".into(),
                    description: "Sources for {{project_name}}.".into(),
                    keep_empty: true,
                },
                LayoutEntry {
                    path: "results/raw".into(),
                    description: "Raw output.".into(),
                    keep_empty: false,
                },
            ],
        };
        let spec = ProjectSpec::new("custom", work.path(), "3.44");
        let report = create_project(&spec, &layout).unwrap();

        assert_eq!(
            report.directories,
            vec![PathBuf::from("src"), PathBuf::from("results"), Path::new("results").join("raw")]
        );
        assert!(report.root.join("src/.gitkeep").is_file());
        let about = std::fs::read_to_string(report.root.join("src/about_folder.md")).unwrap();
        assert_eq!(about, "# src\n\nSources for custom.\n");

        let readme = std::fs::read_to_string(report.root.join(README_FILE)).unwrap();
        assert!(readme.contains("- `src/`: Sources for custom."));
        assert!(readme.contains("- `results/`: A project directory."));
        assert!(!readme.contains("simulations/`:"));

        let manifest = ProjectManifest::load(&report.root).unwrap();
        assert_eq!(manifest.directories, vec!["src", "results", "results/raw"]);
    }
}

//! ASCII rendering of a project tree, as embedded in the generated README.

use std::path::Path;

struct Node {
    name: String,
    is_dir: bool,
    children: Vec<Node>,
}

impl Node {
    fn insert(&mut self, parts: &[String], is_dir: bool) {
        let Some((head, rest)) = parts.split_first() else {
            return;
        };
        let pos = match self.children.iter().position(|c| &c.name == head) {
            Some(pos) => pos,
            None => {
                self.children.push(Node {
                    name: head.clone(),
                    is_dir: is_dir || !rest.is_empty(),
                    children: Vec::new(),
                });
                self.children.len() - 1
            }
        };
        self.children[pos].insert(rest, is_dir);
    }

    fn write_children(&self, out: &mut String, prefix: &str) {
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == self.children.len();
            let (branch, indent) = if last {
                ("└── ", "    ")
            } else {
                ("├── ", "│   ")
            };
            out.push_str(prefix);
            out.push_str(branch);
            out.push_str(&child.name);
            if child.is_dir {
                out.push('/');
            }
            out.push('\n');
            child.write_children(out, &format!("{prefix}{indent}"));
        }
    }
}

/// Render `root/` followed by `dirs` and then `files`, in the given order.
///
/// Paths are relative to the root. Entries sharing a parent are grouped under it
/// in first-seen order.
pub fn render_tree<D, F>(root: &str, dirs: D, files: F) -> String
where
    D: IntoIterator,
    D::Item: AsRef<Path>,
    F: IntoIterator,
    F::Item: AsRef<Path>,
{
    let mut tree = Node {
        name: root.to_string(),
        is_dir: true,
        children: Vec::new(),
    };
    for dir in dirs {
        tree.insert(&parts(dir.as_ref()), true);
    }
    for file in files {
        tree.insert(&parts(file.as_ref()), false);
    }

    let mut out = format!("{root}/\n");
    tree.write_children(&mut out, "");
    out.truncate(out.trim_end().len());
    out
}

fn parts(path: &Path) -> Vec<String> {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
        .collect()
}

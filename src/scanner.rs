//! Empty-directory discovery.

use ignore::WalkBuilder;
use std::collections::HashSet;
use std::path::{Component, Path, PathBuf};

/// Everything one traversal learns about the tree: the directories that are
/// eligible for removal, and the entries that rule directories out.
struct TreeEntries {
    /// Non-hidden directories strictly below the root.
    candidates: Vec<PathBuf>,
    /// Regular files, hidden entries, and anything else that prevents an
    /// ancestor directory from being empty.
    disqualifiers: Vec<PathBuf>,
}

/// Check whether any component of `path` below `root` starts with a `.`.
fn has_hidden_component(root: &Path, path: &Path) -> bool {
    let Ok(relative) = path.strip_prefix(root) else {
        return false;
    };

    for component in relative.components() {
        if let Component::Normal(name) = component {
            if name.to_string_lossy().starts_with('.') {
                return true;
            }
        }
    }

    false
}

/// Walk the tree once, splitting every entry below the root into removal
/// candidates and disqualifiers.
fn collect_entries(root: &Path) -> TreeEntries {
    let mut candidates = Vec::new();
    let mut disqualifiers = Vec::new();

    // Hidden entries must be observed (they disqualify their ancestors), and
    // ignore-file semantics would change what counts as present, so every
    // standard filter is disabled.
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .git_ignore(false)
        .ignore(false)
        .git_global(false)
        .git_exclude(false)
        .build();

    for result in walker {
        let entry = match result {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("Warning: failed to access entry: {}", err);
                continue;
            }
        };

        let path = entry.path();
        if path == root {
            continue;
        }

        let is_dir = entry.file_type().is_some_and(|ft| ft.is_dir());

        if has_hidden_component(root, path) {
            // Hidden files and hidden directories both mark the tree above
            // them as in use.
            disqualifiers.push(path.to_path_buf());
        } else if is_dir {
            candidates.push(path.to_path_buf());
        } else {
            // Regular files, and anything else that is not a directory;
            // a symlink would make rmdir fail just the same.
            disqualifiers.push(path.to_path_buf());
        }
    }

    TreeEntries {
        candidates,
        disqualifiers,
    }
}

/// Find every directory below `root` that contains no regular file and no
/// hidden entry anywhere beneath it, ordered so that children always precede
/// their parents.
///
/// Returns `None` when the root has no eligible subdirectories at all, as
/// opposed to `Some` of an empty list when subdirectories exist but none are
/// empty. The caller guarantees that `root` exists; the traversal itself is
/// read-only.
pub fn find_empty_dirs(root: &Path) -> Option<Vec<PathBuf>> {
    let TreeEntries {
        candidates,
        disqualifiers,
    } = collect_entries(root);

    if candidates.is_empty() {
        return None;
    }

    // Mark every directory between a disqualifying entry and the root as
    // occupied. Ancestry is component-wise, so a file under `foo2` never
    // taints a sibling named `foo`.
    let mut occupied: HashSet<&Path> = HashSet::new();
    for entry in &disqualifiers {
        for ancestor in entry.ancestors().skip(1) {
            if ancestor == root {
                break;
            }
            occupied.insert(ancestor);
        }
    }

    let mut empty: Vec<PathBuf> = candidates
        .into_iter()
        .filter(|candidate| !occupied.contains(candidate.as_path()))
        .collect();

    // Deepest first, so each directory is removed before its parent. Depth is
    // the component count; the lexicographic tie-break keeps repeated runs
    // identical.
    empty.sort_by(|a, b| {
        b.components()
            .count()
            .cmp(&a.components().count())
            .then_with(|| a.cmp(b))
    });

    Some(empty)
}

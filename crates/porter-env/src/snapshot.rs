use porter_core::EnvSnapshot;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::warn;

/// Depth bound used when the caller has no opinion. Symlinks are never
/// followed, so this only cuts off genuinely deep trees.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Capture a point-in-time snapshot of the tree rooted at `working_dir`.
///
/// An unset working directory is a deliberate no-op and produces the empty
/// snapshot. Any error during the walk (permission denied, path vanished
/// mid-walk, nonexistent root) aborts enumeration and yields a snapshot
/// carrying only the failure description. This function never returns an
/// error to the caller.
///
/// The walk descends at most `max_depth` levels below the root; directories
/// on the boundary still appear as entries of their parents, but their own
/// contents are not recorded.
pub fn capture(working_dir: Option<&Path>, max_depth: usize) -> EnvSnapshot {
    let Some(root) = working_dir else {
        return EnvSnapshot::empty();
    };

    let mut snapshot = EnvSnapshot::empty();

    for entry in walkdir::WalkDir::new(root)
        .max_depth(max_depth)
        .follow_links(false)
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(root = %root.display(), error = %e, "environment enumeration failed");
                return EnvSnapshot::failed(format!(
                    "failed to enumerate {}: {}",
                    root.display(),
                    e
                ));
            }
        };

        let path = entry.path();
        if entry.file_type().is_dir() {
            // Every visited directory gets a key, even when empty.
            snapshot
                .entries
                .entry(path.to_string_lossy().to_string())
                .or_insert_with(BTreeSet::new);
        }
        if entry.depth() > 0 {
            if let Some(parent) = path.parent() {
                snapshot
                    .entries
                    .entry(parent.to_string_lossy().to_string())
                    .or_insert_with(BTreeSet::new)
                    .insert(entry.file_name().to_string_lossy().to_string());
            }
        }
    }

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unset_working_dir_is_empty_snapshot() {
        assert!(capture(None, DEFAULT_MAX_DEPTH).is_empty());
    }
}

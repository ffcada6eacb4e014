use porter_core::{DiffEntry, EnvDiff, EnvSnapshot};

/// Compare two snapshots and report only the paths whose direct contents
/// differ. Pure function; neither snapshot is touched.
///
/// Keys are drawn from the union of both snapshots, so a directory created
/// between the two captures shows up with `initial: None`, and a deleted one
/// with `updated: None`. Entry-set equality ignores order by construction.
pub fn diff(initial: &EnvSnapshot, updated: &EnvSnapshot) -> EnvDiff {
    let mut out = EnvDiff::default();

    for (path, before) in &initial.entries {
        match updated.entries.get(path) {
            Some(after) if after == before => {}
            after => {
                out.changes.insert(
                    path.clone(),
                    DiffEntry {
                        initial: Some(before.clone()),
                        updated: after.cloned(),
                    },
                );
            }
        }
    }

    // Paths that only exist in the updated snapshot
    for (path, after) in &updated.entries {
        if !initial.entries.contains_key(path) {
            out.changes.insert(
                path.clone(),
                DiffEntry {
                    initial: None,
                    updated: Some(after.clone()),
                },
            );
        }
    }

    out
}

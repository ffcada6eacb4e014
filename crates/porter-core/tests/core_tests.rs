#[cfg(test)]
mod tests {
    use porter_core::*;
    use std::collections::BTreeSet;

    // ── Snapshot type ──────────────────────────────────────────

    #[test]
    fn test_empty_snapshot() {
        let snap = EnvSnapshot::empty();
        assert!(snap.is_empty());
        assert!(snap.error.is_none());
    }

    #[test]
    fn test_failed_snapshot_is_not_empty() {
        let snap = EnvSnapshot::failed("permission denied");
        assert!(!snap.is_empty());
        assert_eq!(snap.error.as_deref(), Some("permission denied"));
        assert!(snap.entries.is_empty());
    }

    #[test]
    fn test_snapshot_serializes_error_field() {
        let snap = EnvSnapshot::failed("boom");
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["error"], "boom");

        // A healthy snapshot omits the field entirely
        let json = serde_json::to_value(EnvSnapshot::empty()).unwrap();
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_snapshot_entry_order_is_irrelevant() {
        let mut a = EnvSnapshot::empty();
        a.entries.insert(
            "/d".into(),
            ["file1", "subdir", "file2"].iter().map(|s| s.to_string()).collect(),
        );
        let mut b = EnvSnapshot::empty();
        b.entries.insert(
            "/d".into(),
            ["file2", "file1", "subdir"].iter().map(|s| s.to_string()).collect(),
        );
        assert_eq!(a, b);
    }

    // ── Diff type ──────────────────────────────────────────────

    #[test]
    fn test_env_diff_serializes_transparently() {
        let mut diff = EnvDiff::default();
        diff.changes.insert(
            "/d".into(),
            DiffEntry {
                initial: Some(BTreeSet::from(["a".to_string()])),
                updated: None,
            },
        );
        let json = serde_json::to_value(&diff).unwrap();
        // No wrapper object; the map itself is the wire shape
        assert_eq!(json["/d"]["initial"][0], "a");
        assert_eq!(json["/d"]["updated"], serde_json::Value::Null);
    }

    // ── Exec report ────────────────────────────────────────────

    #[test]
    fn test_cancelled_report_has_no_outcomes() {
        let report = ExecReport::Cancelled;
        assert!(report.is_cancelled());
        assert!(report.outcomes().is_empty());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["status"], "cancelled");
    }

    // ── Error display ──────────────────────────────────────────

    #[test]
    fn test_skill_not_found_message() {
        let err = PorterError::SkillNotFound {
            skill: "FunSkill".into(),
            function: "Joke".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not find function Joke in skill FunSkill"
        );
    }

    #[test]
    fn test_remote_endpoint_message_embeds_status() {
        let err = PorterError::RemoteEndpoint {
            status: 503,
            message: "service unavailable".into(),
        };
        assert!(err.to_string().contains("503"));
    }
}

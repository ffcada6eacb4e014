#[cfg(test)]
mod tests {
    use porter_queue::mock::MockTranslator;
    use porter_queue::{GorillaCli, QueueBuilder, ScriptFormat, Translator};
    use std::sync::Arc;

    // ── Translator ─────────────────────────────────────────────

    #[tokio::test]
    async fn test_unset_cli_path_fails_at_launch() {
        let translator = GorillaCli::new(None, 5);
        let err = translator.translate("list files").await.unwrap_err();
        assert!(err.to_string().contains("list files"));
    }

    #[tokio::test]
    async fn test_missing_executable_is_a_translation_failure() {
        let translator = GorillaCli::new(Some("/nonexistent/gorilla".into()), 5);
        let err = translator.translate("list files").await.unwrap_err();
        assert!(matches!(
            err,
            porter_core::PorterError::Translation { .. }
        ));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_real_subprocess_receives_instruction_as_single_arg() {
        // `echo` stands in for the translator: its stdout is argv joined by
        // spaces, so an instruction with internal whitespace must come back
        // as one piece.
        let translator = GorillaCli::new(Some("/bin/echo".into()), 5);
        let out = translator
            .translate("show disk usage; then exit")
            .await
            .unwrap();
        assert_eq!(out, "show disk usage; then exit");
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_captures_stderr() {
        let dir = tempfile::tempdir().unwrap();
        let tool = dir.path().join("failing-translator");
        std::fs::write(&tool, "#!/bin/sh\necho 'model unavailable' >&2\nexit 3\n").unwrap();
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755)).unwrap();

        let translator = GorillaCli::new(Some(tool), 5);
        let err = translator.translate("anything").await.unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("model unavailable"), "got: {msg}");
    }

    // ── Queue builder ──────────────────────────────────────────

    #[tokio::test]
    async fn test_queue_preserves_instruction_order() {
        let dir = tempfile::tempdir().unwrap();
        let translator = MockTranslator::new()
            .with_translation("cmd A", "echo A")
            .with_translation("cmd B", "echo B");

        let builder = QueueBuilder::new(Arc::new(translator))
            .with_script_dir(dir.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        let result = builder
            .queue(&["cmd A".into(), "cmd B".into()])
            .await
            .unwrap();
        assert_eq!(result.queued_commands, vec!["echo A", "echo B"]);
    }

    #[tokio::test]
    async fn test_script_and_queue_agree() {
        let dir = tempfile::tempdir().unwrap();
        let translator = MockTranslator::new().with_translation("cmd A", "echo A");

        let builder = QueueBuilder::new(Arc::new(translator))
            .with_script_dir(dir.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        let result = builder.queue(&["cmd A".into()]).await.unwrap();
        assert_eq!(result.queued_commands, vec!["echo A"]);
        assert_eq!(
            result.script_path,
            dir.path().join("gorilla_commands.sh")
        );

        let script = std::fs::read_to_string(&result.script_path).unwrap();
        assert_eq!(script, "#!/bin/sh\n\necho A\n");
    }

    #[tokio::test]
    async fn test_failed_translation_is_skipped_without_placeholder() {
        let dir = tempfile::tempdir().unwrap();
        let translator = MockTranslator::new()
            .with_failure("bad", "exit status 1")
            .with_translation("good", "echo ok");

        let builder = QueueBuilder::new(Arc::new(translator))
            .with_script_dir(dir.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        let result = builder
            .queue(&["bad".into(), "good".into()])
            .await
            .unwrap();
        assert_eq!(result.queued_commands, vec!["echo ok"]);

        let script = std::fs::read_to_string(&result.script_path).unwrap();
        assert!(!script.contains("bad"));
    }

    #[tokio::test]
    async fn test_all_failures_yield_empty_queue_and_empty_script_body() {
        let dir = tempfile::tempdir().unwrap();
        let translator = MockTranslator::new().with_failure("bad", "exit status 1");

        let builder = QueueBuilder::new(Arc::new(translator))
            .with_script_dir(dir.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        let result = builder.queue(&["bad".into()]).await.unwrap();
        assert!(result.queued_commands.is_empty());

        let script = std::fs::read_to_string(&result.script_path).unwrap();
        assert_eq!(script, "#!/bin/sh\n\n");
    }

    #[tokio::test]
    async fn test_each_instruction_attempted_exactly_once() {
        let dir = tempfile::tempdir().unwrap();
        let translator = MockTranslator::new().with_failure("bad", "boom");
        let requests = translator.requests.clone();

        let builder = QueueBuilder::new(Arc::new(translator))
            .with_script_dir(dir.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        builder.queue(&["bad".into()]).await.unwrap();
        assert_eq!(requests.lock().unwrap().as_slice(), ["bad"]);
    }

    #[tokio::test]
    async fn test_queue_overwrites_previous_script() {
        let dir = tempfile::tempdir().unwrap();
        let translator = MockTranslator::new()
            .with_translation("one", "echo 1")
            .with_translation("two", "echo 2");

        let builder = QueueBuilder::new(Arc::new(translator))
            .with_script_dir(dir.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        builder.queue(&["one".into()]).await.unwrap();
        let result = builder.queue(&["two".into()]).await.unwrap();

        let script = std::fs::read_to_string(&result.script_path).unwrap();
        assert_eq!(script, "#!/bin/sh\n\necho 2\n");
    }

    #[tokio::test]
    async fn test_queue_snapshot_reflects_working_dir() {
        let work = tempfile::tempdir().unwrap();
        std::fs::write(work.path().join("present.txt"), b"x").unwrap();
        let scripts = tempfile::tempdir().unwrap();

        let translator = MockTranslator::new().with_translation("cmd A", "echo A");
        let builder = QueueBuilder::new(Arc::new(translator))
            .with_working_dir(Some(work.path().to_path_buf()))
            .with_script_dir(scripts.path().to_path_buf())
            .with_script_format(ScriptFormat::Posix);

        let result = builder.queue(&["cmd A".into()]).await.unwrap();
        let root_key = work.path().to_string_lossy().to_string();
        assert!(
            result.environment_info.entries[&root_key].contains("present.txt")
        );
    }
}

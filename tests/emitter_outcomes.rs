use flowlog_core::{Annotation, AnnotationKind, ExecutionNode, FlowLogError, InMemoryStepContext,
                   LogEmitter, LogRequest, NodeResult, RunHandle, RunStatus};

fn request(level: &str, label: &str, message: &str) -> LogRequest {
    LogRequest::builder().message(message)
                         .label(label)
                         .log_level(level)
                         .build()
                         .expect("request should build")
}

#[test]
fn low_severities_leave_node_and_run_untouched() {
    for level in ["TRACE", "DEBUG", "INFO"] {
        for suppress in [false, true] {
            let req = LogRequest::builder().message("just logging")
                                           .label("Note")
                                           .log_level(level)
                                           .skip_ui_coloring(suppress)
                                           .build()
                                           .unwrap();
            let mut ctx = InMemoryStepContext::new();
            LogEmitter::emit(&req, &mut ctx).expect("emit should succeed");

            assert!(ctx.node.annotations().is_empty(),
                    "{} must not annotate the node", level);
            assert_eq!(ctx.run.status(), RunStatus::Success, "{} must not touch the run", level);
        }
    }
}

#[test]
fn warn_annotates_node_as_unstable_with_label_payload() {
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("WARN", "Deploy", "slow rollout"), &mut ctx).unwrap();

    let warning = ctx.node.annotation(AnnotationKind::Warning).expect("warning annotation");
    assert_eq!(warning.message, "Deploy"); // el payload es el label, no el mensaje
    assert_eq!(warning.result, Some(NodeResult::Unstable));
    assert_eq!(ctx.run.status(), RunStatus::Success);
}

#[test]
fn error_fails_the_node_but_not_the_run() {
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("ERROR", "Deploy", "rollout broke"), &mut ctx).unwrap();

    let warning = ctx.node.annotation(AnnotationKind::Warning).unwrap();
    assert_eq!(warning.result, Some(NodeResult::Failed));
    assert_eq!(ctx.run.status(), RunStatus::Success);
}

#[test]
fn fatal_fails_node_and_forces_run_failure() {
    let mut ctx = InMemoryStepContext::new();
    assert_eq!(ctx.run.status(), RunStatus::Success);

    LogEmitter::emit(&request("FATAL", "Deploy", "unrecoverable"), &mut ctx).unwrap();

    let warning = ctx.node.annotation(AnnotationKind::Warning).unwrap();
    assert_eq!(warning.result, Some(NodeResult::Failed));
    assert_eq!(ctx.run.status(), RunStatus::Failed);
}

#[test]
fn fatal_overrides_any_current_run_status() {
    for previous in [RunStatus::Success, RunStatus::Unstable, RunStatus::Failed] {
        let mut ctx = InMemoryStepContext::new();
        ctx.run.set_status(previous);

        LogEmitter::emit(&request("FATAL", "boom", ""), &mut ctx).unwrap();
        assert_eq!(ctx.run.status(), RunStatus::Failed);
    }
}

#[test]
fn suppression_skips_mutation_but_console_output_still_happens() {
    let mut ctx = InMemoryStepContext::new();
    let req = LogRequest::builder().message("details")
                                   .label("Broken")
                                   .log_level("FATAL")
                                   .skip_ui_coloring(true)
                                   .build()
                                   .unwrap();
    LogEmitter::emit(&req, &mut ctx).unwrap();

    assert!(ctx.node.annotations().is_empty());
    assert_eq!(ctx.run.status(), RunStatus::Success);
    assert_eq!(ctx.console.lines,
               vec!["[FATAL] Broken".to_string(), "[FATAL] details".to_string()]);
}

#[test]
fn repeated_emit_replaces_instead_of_stacking() {
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("WARN", "first", ""), &mut ctx).unwrap();
    LogEmitter::emit(&request("WARN", "second", ""), &mut ctx).unwrap();

    // exactamente una anotación warning, con el mensaje de la segunda llamada
    assert_eq!(ctx.node.annotations().len(), 1);
    assert_eq!(ctx.node.annotation(AnnotationKind::Warning).unwrap().message, "second");
}

#[test]
fn warning_replacement_leaves_other_kinds_alone() {
    let mut ctx = InMemoryStepContext::new();
    ctx.node.replace_annotation(Annotation::label("checkout"));

    LogEmitter::emit(&request("ERROR", "Deploy", ""), &mut ctx).unwrap();

    assert_eq!(ctx.node.annotations().len(), 2);
    assert_eq!(ctx.node.annotation(AnnotationKind::Label).unwrap().message, "checkout");
    assert_eq!(ctx.node.annotation(AnnotationKind::Warning).unwrap().message, "Deploy");
}

#[test]
fn console_lines_are_prefixed_and_ordered() {
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("WARN", "Deploy", "step one\nstep two"), &mut ctx).unwrap();

    assert_eq!(ctx.console.lines,
               vec!["[WARN] Deploy".to_string(),
                    "[WARN] step one".to_string(),
                    "[WARN] step two".to_string()]);
}

#[test]
fn trailing_newlines_do_not_emit_empty_lines() {
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("WARN", "Deploy", "ok\n"), &mut ctx).unwrap();
    assert_eq!(ctx.console.lines,
               vec!["[WARN] Deploy".to_string(), "[WARN] ok".to_string()]);

    // mensaje compuesto solo por saltos de línea: ninguna línea de cuerpo
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("WARN", "Deploy", "\n\n"), &mut ctx).unwrap();
    assert_eq!(ctx.console.lines, vec!["[WARN] Deploy".to_string()]);

    // los segmentos vacíos interiores sí se conservan
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("WARN", "", "a\n\nb\n"), &mut ctx).unwrap();
    assert_eq!(ctx.console.lines,
               vec!["[WARN] a".to_string(), "[WARN] ".to_string(), "[WARN] b".to_string()]);
}

#[test]
fn empty_label_and_empty_message_suppress_independently() {
    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("INFO", "", "only the body"), &mut ctx).unwrap();
    assert_eq!(ctx.console.lines, vec!["[INFO] only the body".to_string()]);

    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("INFO", "only the label", ""), &mut ctx).unwrap();
    assert_eq!(ctx.console.lines, vec!["[INFO] only the label".to_string()]);

    let mut ctx = InMemoryStepContext::new();
    LogEmitter::emit(&request("INFO", "", ""), &mut ctx).unwrap();
    assert!(ctx.console.lines.is_empty());
}

#[test]
fn emit_returns_the_annotated_node_id() {
    let mut ctx = InMemoryStepContext::new();
    let node_id = LogEmitter::emit(&request("ERROR", "Deploy", "x"), &mut ctx).unwrap();
    assert_eq!(node_id, ctx.node.id());
}

#[test]
fn missing_collaborators_abort_the_call() {
    let mut ctx = InMemoryStepContext::new().without_node();
    let err = LogEmitter::emit(&request("WARN", "x", "y"), &mut ctx).unwrap_err();
    assert_eq!(err, FlowLogError::NodeUnavailable);

    let mut ctx = InMemoryStepContext::new().without_run();
    let err = LogEmitter::emit(&request("FATAL", "x", "y"), &mut ctx).unwrap_err();
    assert_eq!(err, FlowLogError::RunUnavailable);

    let mut ctx = InMemoryStepContext::new().without_console();
    let err = LogEmitter::emit(&request("INFO", "x", "y"), &mut ctx).unwrap_err();
    assert_eq!(err, FlowLogError::ConsoleUnavailable);
}

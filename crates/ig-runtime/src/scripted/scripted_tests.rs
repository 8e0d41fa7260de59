use super::*;

use ig_core::{BeginOp, EndOp, ScopeEvent, ScopeKind, UiValue};

use crate::backend::{BackendCall, BeginResults, RecordingBackend};

fn scripted_with(source: &str, backend: RecordingBackend) -> ScriptedUi<RecordingBackend> {
    ScriptedUi::new(ScriptedUiOptions {
        source: source.to_string(),
        entry_fn: None,
        max_operations: None,
        backend,
    })
    .expect("script should load")
}

fn scripted(source: &str) -> ScriptedUi<RecordingBackend> {
    scripted_with(source, RecordingBackend::default())
}

fn state_value(ui: &ScriptedUi<RecordingBackend>, key: &str) -> Dynamic {
    ui.state()
        .clone()
        .cast::<Map>()
        .get(key)
        .cloned()
        .unwrap_or(Dynamic::UNIT)
}

fn assert_mirror_clean(ui: &ScriptedUi<RecordingBackend>) {
    ui.with_backend(|backend| {
        assert!(
            backend.violations().is_empty(),
            "native violations: {:?}",
            backend.violations()
        );
    });
}

#[test]
fn well_nested_script_runs_clean() {
    let mut ui = scripted(
        r#"
        fn update() {
            if Begin("Main") {
                BeginGroup();
                Text("hello");
                PushID(7);
                Button("ok");
                PopID();
                EndGroup();
                End();
            }
        }
        "#,
    );

    let report = ui.run_frame();
    assert!(report.is_clean(), "{:?}", report);
    assert_eq!(report.frame_index, 1);
    assert!(ui.context().guard().is_empty());
    assert_mirror_clean(&ui);
    ui.with_backend(|backend| {
        assert_eq!(backend.calls().first(), Some(&BackendCall::NewFrame));
        assert_eq!(backend.calls().last(), Some(&BackendCall::Render));
        assert!(backend.calls().contains(&BackendCall::Begin {
            op: BeginOp::Begin,
            args: vec![UiValue::String("Main".to_string())],
            result: true,
        }));
    });
}

#[test]
fn caught_mismatch_leaves_inner_scope_open() {
    let mut ui = scripted(
        r#"
        fn update() {
            if Begin("Main") {
                BeginGroup();
                try {
                    End();
                } catch (err) {
                    this.caught = err;
                    this.depth = ScopeDepth();
                }
                EndGroup();
                End();
            }
        }
        "#,
    );

    let report = ui.run_frame();
    assert!(report.script_error.is_none());
    assert_eq!(
        report.events,
        vec![ScopeEvent::ScopeMismatch {
            end_op: EndOp::End,
            expected: ScopeKind::Group,
            attempted: ScopeKind::Window,
            open_sequence: 2,
        }]
    );
    assert!(state_value(&ui, "caught")
        .to_string()
        .contains("SCOPE_MISMATCH"));
    assert_eq!(state_value(&ui, "depth").as_int().expect("depth"), 2);
    assert!(ui.context().guard().is_empty());
    assert_mirror_clean(&ui);
}

#[test]
fn uncaught_scope_error_aborts_script_and_unwinds() {
    let mut ui = scripted(
        r#"
        fn update() {
            Begin("Main");
            BeginGroup();
            End();
            EndGroup();
        }
        "#,
    );

    let report = ui.run_frame();
    let error = report.script_error.clone().expect("script error");
    assert_eq!(error.code, "RUNTIME_SCRIPT_EVAL");
    assert!(error.message.contains("SCOPE_MISMATCH"));
    assert_eq!(report.events.len(), 3);
    assert_eq!(report.events[0].name(), "scopeMismatch");
    assert_eq!(report.leaks().count(), 2);
    ui.with_backend(|backend| {
        let ends = backend
            .calls()
            .iter()
            .filter_map(|call| match call {
                BackendCall::End { op, .. } => Some(*op),
                _ => None,
            })
            .collect::<Vec<_>>();
        assert_eq!(ends, vec![EndOp::EndGroup, EndOp::End]);
    });
    assert_mirror_clean(&ui);

    let next = ui.run_frame();
    assert_eq!(next.frame_index, 2);
    assert!(next.script_error.is_some());
}

#[test]
fn early_return_leaks_exactly_one_scope() {
    let mut ui = scripted(
        r#"
        fn update() {
            if BeginTable("grid", 2) {
                TableNextRow();
                return;
            }
        }
        "#,
    );

    let report = ui.run_frame();
    assert!(report.script_error.is_none());
    assert_eq!(
        report.events,
        vec![ScopeEvent::LeakedScope {
            kind: ScopeKind::Table,
            open_sequence: 1,
            begin_op: BeginOp::BeginTable,
            synthesized_end: EndOp::EndTable,
        }]
    );
    assert!(ui.context().guard().is_empty());
    assert_mirror_clean(&ui);
}

#[test]
fn failed_conditional_begin_is_not_tracked() {
    let backend = RecordingBackend::new(
        BeginResults::always(true).queue(BeginOp::BeginPopup, [false, true]),
    );
    let mut ui = scripted_with(
        r#"
        fn update() {
            if BeginPopup("menu") {
                this.opened = true;
                EndPopup();
            } else {
                this.opened = false;
            }
        }
        "#,
        backend,
    );

    assert!(ui.run_frame().is_clean());
    assert!(!state_value(&ui, "opened").as_bool().expect("bool"));
    assert!(ui.run_frame().is_clean());
    assert!(state_value(&ui, "opened").as_bool().expect("bool"));
    assert_mirror_clean(&ui);
}

#[test]
fn counted_pops_close_several_records() {
    let mut ui = scripted(
        r#"
        fn update() {
            PushStyleVar(1, 2.0);
            PushStyleVar(2, 4.0);
            PushStyleColor(0, 0xff00ff);
            PopStyleColor();
            PopStyleVar(2);
            PopStyleVar(0);
        }
        "#,
    );

    let report = ui.run_frame();
    assert!(report.is_clean(), "{:?}", report);
    ui.with_backend(|backend| {
        assert!(backend.calls().contains(&BackendCall::End {
            op: EndOp::PopStyleVar,
            count: 2,
        }));
    });
    assert_mirror_clean(&ui);
}

#[test]
fn negative_pop_count_is_a_script_error() {
    let mut ui = scripted(
        r#"
        fn update() {
            PushStyleVar(1, 2.0);
            PopStyleVar(-1);
        }
        "#,
    );

    let report = ui.run_frame();
    let error = report.script_error.clone().expect("script error");
    assert!(error.message.contains("RUNTIME_END_COUNT"));
    assert_eq!(report.leaks().count(), 1);
    assert_mirror_clean(&ui);
}

#[test]
fn frame_calls_are_not_exposed() {
    let mut ui = scripted("fn update() { NewFrame(); }");
    let report = ui.run_frame();
    assert!(report.script_error.is_some());
    ui.with_backend(|backend| {
        let new_frames = backend
            .calls()
            .iter()
            .filter(|call| **call == BackendCall::NewFrame)
            .count();
        assert_eq!(new_frames, 1);
    });
}

#[test]
fn state_persists_across_frames() {
    let mut ui = scripted(
        r#"
        fn update() {
            if "frames" in this {
                this.frames += 1;
            } else {
                this.frames = 1;
            }
        }
        "#,
    );

    let reports = ui.run_frames(3);
    assert_eq!(reports.len(), 3);
    assert_eq!(reports[2].frame_index, 3);
    assert_eq!(state_value(&ui, "frames").as_int().expect("frames"), 3);
}

#[test]
fn widget_values_flow_back_to_script() {
    let backend = RecordingBackend::default().with_widget_result("Checkbox", UiValue::Bool(true));
    let mut ui = scripted_with(
        r#"
        fn update() {
            this.checked = Checkbox("enabled", false);
        }
        "#,
        backend,
    );
    assert!(ui.run_frame().is_clean());
    assert!(state_value(&ui, "checked").as_bool().expect("bool"));
}

#[test]
fn custom_entry_and_operation_limit() {
    let mut ui = ScriptedUi::new(ScriptedUiOptions {
        source: "fn draw() { loop { } }".to_string(),
        entry_fn: Some("draw".to_string()),
        max_operations: Some(500),
        backend: RecordingBackend::default(),
    })
    .expect("script should load");
    assert_eq!(ui.entry_fn(), "draw");
    let report = ui.run_frame();
    assert_eq!(
        report.script_error.expect("operation limit").code,
        "RUNTIME_SCRIPT_EVAL"
    );
}

#[test]
fn construction_errors_have_codes() {
    let load = |source: &str, backend: RecordingBackend| {
        ScriptedUi::new(ScriptedUiOptions {
            source: source.to_string(),
            entry_fn: None,
            max_operations: None,
            backend,
        })
        .err()
        .map(|error| error.code)
    };

    assert_eq!(
        load("fn update( {", RecordingBackend::default()).as_deref(),
        Some("RUNTIME_SCRIPT_COMPILE")
    );
    assert_eq!(
        load("fn draw() {}", RecordingBackend::default()).as_deref(),
        Some("RUNTIME_ENTRY_MISSING")
    );
    assert_eq!(
        load("fn update(x) {}", RecordingBackend::default()).as_deref(),
        Some("RUNTIME_ENTRY_MISSING")
    );
    assert_eq!(
        load(
            "fn update() {}",
            RecordingBackend::default().with_widgets(["Text", "EndGroup"])
        )
        .as_deref(),
        Some("RUNTIME_WIDGET_RESERVED")
    );
    assert_eq!(
        load(
            "fn update() {}",
            RecordingBackend::default().with_widgets(["Render"])
        )
        .as_deref(),
        Some("RUNTIME_WIDGET_RESERVED")
    );
}

#[test]
fn recreating_context_discards_open_records() {
    let mut ui = scripted("fn update() { if Begin(\"w\") { End(); } }");
    assert!(ui.run_frame().is_clean());
    assert!(ui.recreate_backend_context().is_empty());
    ui.with_backend_mut(|backend| {
        let calls = backend.take_calls();
        assert!(calls.ends_with(&[BackendCall::DestroyContext, BackendCall::CreateContext]));
    });
    assert!(ui.run_frame().is_clean());
    assert_eq!(ui.context().frame_index(), 2);
    assert_mirror_clean(&ui);
}

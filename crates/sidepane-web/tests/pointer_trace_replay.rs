#![forbid(unsafe_code)]

//! Recorded divider traces replayed end to end.
//!
//! Run:
//!   cargo test -p sidepane-web --features input-parser --test pointer_trace_replay

use pretty_assertions::assert_eq;
use sidepane_layout::SplitPaneConfig;
use sidepane_web::{
    DividerCancelReason, DividerPointerIgnoredReason, DividerPointerLogOutcome,
    DividerPointerPhase, DividerTrace, DragListenerCommand,
};

const DRAG_OUTSIDE_CONTAINER: &str = r#"
# divider grabbed at 800, released past the right edge of the window
{"event":"pointer_down","pointer_id":1,"x":800}
{"event":"pointer_move","pointer_id":1,"x":760}
{"event":"pointer_move","pointer_id":1,"x":1500}
{"event":"pointer_up","pointer_id":1}
"#;

const RESIZE_MID_DRAG: &str = r#"
{"event":"pointer_down","pointer_id":4,"x":800}
{"event":"container_resize","width":500}
{"event":"pointer_move","pointer_id":4,"x":0}
{"event":"pointer_up","pointer_id":4}
"#;

const COLLAPSE_MID_DRAG: &str = r#"
{"event":"pointer_down","pointer_id":2,"x":800}
{"event":"pointer_move","pointer_id":2,"x":700}
{"event":"toggle_collapse"}
{"event":"pointer_move","pointer_id":2,"x":100}
{"event":"pointer_up","pointer_id":2}
{"event":"toggle_collapse"}
"#;

const INTERRUPTED_DRAGS: &str = r#"
{"event":"pointer_down","pointer_id":1,"x":800}
{"event":"blur"}
{"event":"pointer_down","pointer_id":2,"x":800}
{"event":"visibility_hidden"}
{"event":"pointer_down","pointer_id":3,"x":800}
{"event":"pointer_cancel","pointer_id":3}
{"event":"pointer_down","pointer_id":4,"x":800,"button":"secondary"}
"#;

fn replay(trace: &str, config: SplitPaneConfig, width: u32) -> sidepane_web::DividerReplayOutcome {
    DividerTrace::parse_jsonl(trace)
        .expect("fixture trace should parse")
        .replay(config, width)
        .expect("fixture config should be valid")
}

#[test]
fn drag_released_outside_container_ends_at_floor() {
    let outcome = replay(
        DRAG_OUTSIDE_CONTAINER,
        SplitPaneConfig::new(400, 400, 300),
        1_200,
    );
    assert_eq!(outcome.final_state.right_width, 300);
    assert!(!outcome.final_state.is_dragging());
    assert_eq!((outcome.attach_count, outcome.detach_count), (1, 1));
    assert_eq!(outcome.peak_live_listeners, 1);
}

#[test]
fn container_resize_mid_drag_rebounds_width() {
    let outcome = replay(RESIZE_MID_DRAG, SplitPaneConfig::new(400, 400, 300), 1_200);
    assert_eq!(outcome.final_state.right_width, 300);
    assert_eq!(outcome.final_container_width, 500);
    assert!(outcome.listeners_balanced());
}

#[test]
fn collapse_mid_drag_releases_listeners_and_keeps_width() {
    let outcome = replay(COLLAPSE_MID_DRAG, SplitPaneConfig::workspace(), 1_200);
    assert_eq!(outcome.final_state.right_width, 500);
    assert!(!outcome.final_state.collapsed);
    assert_eq!((outcome.attach_count, outcome.detach_count), (1, 1));

    let toggle = &outcome.log[2];
    assert_eq!(toggle.phase, DividerPointerPhase::ToggleCollapse);
    assert_eq!(
        toggle.listener_command,
        Some(DragListenerCommand::Detach { pointer_id: 2 })
    );
    assert_eq!(
        outcome.log[3].outcome,
        DividerPointerLogOutcome::Ignored(DividerPointerIgnoredReason::NoActivePointer)
    );
}

#[test]
fn every_interruption_detaches_exactly_once() {
    let outcome = replay(INTERRUPTED_DRAGS, SplitPaneConfig::workspace(), 1_200);
    assert_eq!((outcome.attach_count, outcome.detach_count), (3, 3));
    assert_eq!(outcome.peak_live_listeners, 1);

    let detaches: Vec<_> = outcome
        .log
        .iter()
        .filter(|entry| matches!(entry.listener_command, Some(DragListenerCommand::Detach { .. })))
        .map(|entry| (entry.phase, entry.cancel_reason))
        .collect();
    assert_eq!(
        detaches,
        vec![
            (DividerPointerPhase::Blur, Some(DividerCancelReason::Blur)),
            (
                DividerPointerPhase::VisibilityHidden,
                Some(DividerCancelReason::VisibilityHidden)
            ),
            (
                DividerPointerPhase::PointerCancel,
                Some(DividerCancelReason::PointerCancel)
            ),
        ]
    );
    assert_eq!(
        outcome.log.last().map(|entry| entry.outcome),
        Some(DividerPointerLogOutcome::Ignored(
            DividerPointerIgnoredReason::ButtonNotAllowed
        ))
    );
}

#[test]
fn trace_ending_mid_drag_is_torn_down() {
    let outcome = replay(
        r#"{"event":"pointer_down","pointer_id":8,"x":10}"#,
        SplitPaneConfig::workspace(),
        1_200,
    );
    assert!(outcome.listeners_balanced());
    assert_eq!(
        outcome.log.last().map(|entry| entry.phase),
        Some(DividerPointerPhase::Teardown)
    );
}

#[test]
fn replay_is_deterministic() {
    let first = replay(COLLAPSE_MID_DRAG, SplitPaneConfig::home(), 900);
    let second = replay(COLLAPSE_MID_DRAG, SplitPaneConfig::home(), 900);
    assert_eq!(first, second);
}

#[test]
fn invalid_config_is_reported() {
    let trace = DividerTrace::parse_jsonl(DRAG_OUTSIDE_CONTAINER).expect("fixture parses");
    let result = trace.replay(SplitPaneConfig::new(400, 0, 300).with_max_right_width(10), 1_200);
    assert!(result.is_err());
}

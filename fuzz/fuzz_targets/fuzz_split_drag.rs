#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sidepane_layout::{SplitPaneConfig, SplitPaneController, SplitPaneFrame};

#[derive(Debug, Arbitrary)]
enum Op {
    Begin(i32),
    Update(i32, u16),
    End,
    Toggle,
    Nudge(i16, u16),
}

#[derive(Debug, Arbitrary)]
struct Input {
    default_width: u16,
    min_left: u16,
    min_right: u16,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let config = SplitPaneConfig::new(
        u32::from(input.default_width),
        u32::from(input.min_left),
        u32::from(input.min_right),
    );
    let mut controller = SplitPaneController::new(config);

    for op in input.ops.into_iter().take(512) {
        let collapsed_before = controller.is_collapsed();
        let width_before = controller.right_width();
        match op {
            Op::Begin(x) => {
                controller.begin_drag(x);
            }
            Op::Update(x, width) => {
                let width = u32::from(width);
                let was_dragging = controller.is_dragging();
                controller.update_drag(x, width);
                if was_dragging {
                    assert!(config.resize_bounds(width).contains(controller.right_width()));
                } else {
                    assert_eq!(controller.right_width(), width_before, "idle update moved width");
                }
            }
            Op::End => {
                controller.end_drag();
                assert!(!controller.is_dragging());
            }
            Op::Toggle => {
                controller.toggle_collapse();
                assert_eq!(controller.is_collapsed(), !collapsed_before);
                assert_eq!(controller.right_width(), width_before, "collapse changed width");
                assert!(!controller.is_dragging());
            }
            Op::Nudge(delta, width) => {
                controller.nudge(i32::from(delta), u32::from(width));
            }
        }

        let state = controller.state();
        assert_eq!(state.is_dragging(), state.drag_anchor().is_some());
        let frame = SplitPaneFrame::plan(&state, 1_024, false);
        assert!(frame.left.width <= frame.container_width);
    }
});

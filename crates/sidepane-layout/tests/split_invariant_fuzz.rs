//! Property/fuzz-style invariants for split-pane drag and collapse streams.
//!
//! Random operation streams run against the public controller API; after
//! every step the width bound, drag/anchor coherence and replay determinism
//! must hold.

use proptest::prelude::*;
use sidepane_layout::{
    PaneLayoutState, RightPaneRegion, SplitPaneConfig, SplitPaneController, SplitPaneEffect,
    SplitPaneFrame,
};

#[derive(Debug, Clone)]
struct Lcg {
    state: u64,
}

impl Lcg {
    fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        self.state
    }

    fn next_i32_range(&mut self, min: i32, max: i32) -> i32 {
        debug_assert!(min <= max);
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        (i64::from(min) + (self.next_u64() % span) as i64) as i32
    }

    fn next_u32_range(&mut self, min: u32, max: u32) -> u32 {
        debug_assert!(min <= max);
        let span = u64::from(max - min) + 1;
        min + (self.next_u64() % span) as u32
    }
}

#[derive(Debug, Clone, Copy)]
enum Op {
    Begin(i32),
    Update(i32, u32),
    End,
    Toggle,
    Nudge(i32, u32),
}

fn random_op(rng: &mut Lcg) -> Op {
    match rng.next_u64() % 10 {
        0 | 1 => Op::Begin(rng.next_i32_range(-200, 2_400)),
        2..=5 => Op::Update(
            rng.next_i32_range(-500, 3_000),
            rng.next_u32_range(0, 2_400),
        ),
        6 | 7 => Op::End,
        8 => Op::Toggle,
        _ => Op::Nudge(rng.next_i32_range(-64, 64), rng.next_u32_range(0, 2_400)),
    }
}

fn apply(controller: &mut SplitPaneController, op: Op) -> SplitPaneEffect {
    match op {
        Op::Begin(x) => controller.begin_drag(x).effect,
        Op::Update(x, width) => controller.update_drag(x, width).effect,
        Op::End => controller.end_drag().effect,
        Op::Toggle => controller.toggle_collapse().effect,
        Op::Nudge(delta, width) => controller.nudge(delta, width).effect,
    }
}

fn assert_coherent(state: &PaneLayoutState) {
    assert_eq!(state.is_dragging(), state.drag_anchor().is_some());
}

#[test]
fn seeded_streams_hold_bounds_after_every_resize() {
    for seed in 0..64u64 {
        let mut rng = Lcg::new(seed);
        let config = SplitPaneConfig::new(
            rng.next_u32_range(0, 1_200),
            rng.next_u32_range(0, 800),
            rng.next_u32_range(0, 600),
        );
        let mut controller = SplitPaneController::new(config);

        for _ in 0..256 {
            let op = random_op(&mut rng);
            let effect = apply(&mut controller, op);
            let state = controller.state();
            assert_coherent(&state);

            if let (Op::Update(_, width), SplitPaneEffect::DragUpdated { right_width, .. })
            | (Op::Nudge(_, width), SplitPaneEffect::Nudged { right_width, .. }) = (op, effect)
            {
                let bounds = config.resize_bounds(width);
                assert!(
                    bounds.contains(right_width),
                    "seed {seed}: {right_width} outside {bounds:?}"
                );
                assert_eq!(state.right_width, right_width);
            }

            let frame = SplitPaneFrame::plan(&state, 1_000, false);
            assert!(frame.left.width <= frame.container_width);
            if let RightPaneRegion::Expanded {
                span,
                close_button_right_offset,
            } = frame.right
            {
                assert!(span.right() <= frame.container_width);
                assert!(close_button_right_offset <= frame.container_width);
            }
        }
    }
}

#[test]
fn seeded_streams_replay_deterministically() {
    for seed in [3u64, 17, 99, 4_096] {
        let run = |seed: u64| {
            let mut rng = Lcg::new(seed);
            let mut controller = SplitPaneController::new(SplitPaneConfig::home());
            let mut effects = Vec::new();
            for _ in 0..128 {
                effects.push(apply(&mut controller, random_op(&mut rng)));
            }
            (controller.state(), effects)
        };
        assert_eq!(run(seed), run(seed));
    }
}

#[test]
fn repeated_drag_cycles_always_return_to_idle() {
    let mut controller = SplitPaneController::new(SplitPaneConfig::workspace());
    for cycle in 0..50 {
        controller.begin_drag(800 + cycle);
        for step in 0..10 {
            controller.update_drag(800 - step * 7, 1_440);
        }
        controller.end_drag();
        assert!(!controller.is_dragging());
        assert_eq!(controller.state().drag_anchor(), None);
    }
}

proptest! {
    #[test]
    fn update_drag_result_is_within_bounds(
        min_left in 0u32..1_000,
        min_right in 0u32..1_000,
        default_width in 0u32..2_000,
        start_x in -5_000i32..5_000,
        x in -5_000i32..5_000,
        container in 0u32..4_000,
    ) {
        let config = SplitPaneConfig::new(default_width, min_left, min_right);
        let mut controller = SplitPaneController::new(config);
        controller.begin_drag(start_x);
        controller.update_drag(x, container);

        let width = controller.right_width();
        prop_assert!(min_right <= width);
        prop_assert!(width <= min_right.max(container.saturating_sub(min_left)));
    }

    #[test]
    fn capped_update_never_exceeds_cap_unless_floor_wins(
        cap in 1u32..2_000,
        min_right in 0u32..1_000,
        x in -5_000i32..5_000,
        container in 0u32..4_000,
    ) {
        let config = SplitPaneConfig::new(400, 0, min_right.min(cap)).with_max_right_width(cap);
        let mut controller = SplitPaneController::new(config);
        controller.begin_drag(0);
        controller.update_drag(x, container);
        prop_assert!(controller.right_width() <= cap);
    }

    #[test]
    fn in_range_update_matches_sign_convention(
        start_x in 0i32..2_000,
        dx in -300i32..300,
    ) {
        let mut controller = SplitPaneController::new(SplitPaneConfig::new(1_000, 0, 0));
        controller.begin_drag(start_x);
        controller.update_drag(start_x + dx, 5_000);
        prop_assert_eq!(i64::from(controller.right_width()), 1_000 - i64::from(dx));
    }

    #[test]
    fn collapse_round_trip_restores_width(
        default_width in 0u32..2_000,
        toggles in 1usize..8,
    ) {
        let mut controller = SplitPaneController::new(SplitPaneConfig::new(default_width, 0, 0));
        for _ in 0..(toggles * 2) {
            controller.toggle_collapse();
        }
        prop_assert!(!controller.is_collapsed());
        prop_assert_eq!(controller.right_width(), default_width);
    }

    #[test]
    fn end_drag_twice_equals_once(
        start_x in -1_000i32..1_000,
        x in -1_000i32..1_000,
    ) {
        let mut once = SplitPaneController::new(SplitPaneConfig::workspace());
        once.begin_drag(start_x);
        once.update_drag(x, 1_600);
        once.end_drag();

        let mut twice = once.clone();
        twice.end_drag();
        prop_assert_eq!(once.state(), twice.state());
    }
}

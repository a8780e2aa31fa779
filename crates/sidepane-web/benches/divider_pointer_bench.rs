#![forbid(unsafe_code)]

use criterion::{Criterion, criterion_group, criterion_main};
use sidepane_layout::SplitPaneConfig;
use sidepane_web::{
    DividerPointerAdapter, DividerPointerButton, DividerPointerConfig, HostedSplitPane,
    RecordingHost,
};
use std::hint::black_box;

fn adapter() -> DividerPointerAdapter {
    DividerPointerAdapter::new(SplitPaneConfig::workspace(), DividerPointerConfig::default())
        .expect("workspace config should be valid")
}

fn bench_divider_pointer_lifecycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("divider/web_pointer/lifecycle");

    group.bench_function("down_move_32_up", |b| {
        b.iter(|| {
            let mut adapter = adapter();
            let down = adapter.pointer_down(11, DividerPointerButton::Primary, 800);
            black_box(down.log.sequence);

            for step in 0..32 {
                let dispatch = adapter.pointer_move(11, 800 - step * 5, 1_440);
                black_box(dispatch.transition.map(|transition| transition.to.right_width));
            }

            let up = adapter.pointer_up(11, DividerPointerButton::Primary);
            black_box(up.listener_command);
        });
    });

    group.bench_function("hosted_down_move_240_up", |b| {
        b.iter(|| {
            let mut pane = HostedSplitPane::new(adapter(), RecordingHost::new(1_440));
            pane.pointer_down(23, DividerPointerButton::Primary, 800);

            for step in 0..240 {
                let x = 800 - ((step * 3) / 2) + (step % 7);
                let dispatch = pane.pointer_move(23, x);
                black_box(dispatch.log.sequence);
            }

            let up = pane.pointer_up(23, DividerPointerButton::Primary);
            black_box(up.affordance);
        });
    });

    group.bench_function("collapse_mid_drag", |b| {
        b.iter(|| {
            let mut adapter = adapter();
            let down = adapter.pointer_down(31, DividerPointerButton::Primary, 800);
            black_box(down.listener_command);
            let toggle = adapter.toggle_collapse();
            black_box(toggle.listener_command);
            let expand = adapter.toggle_collapse();
            black_box(expand.transition);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_divider_pointer_lifecycle);
criterion_main!(benches);

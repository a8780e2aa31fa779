#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sidepane_layout::SplitPaneConfig;
use sidepane_web::{
    DividerPointerAdapter, DividerPointerButton, DividerPointerConfig, HostedSplitPane,
    RecordingHost,
};

#[derive(Debug, Arbitrary)]
enum Signal {
    Down(u8, bool, i16),
    Move(u8, i16),
    Up(u8, bool),
    Cancel(Option<u8>),
    Blur,
    Hidden,
    Toggle,
    Nudge(i8),
    Resize(u16),
}

fn button(primary: bool) -> DividerPointerButton {
    if primary {
        DividerPointerButton::Primary
    } else {
        DividerPointerButton::Secondary
    }
}

fuzz_target!(|signals: Vec<Signal>| {
    let Ok(adapter) =
        DividerPointerAdapter::new(SplitPaneConfig::workspace(), DividerPointerConfig::default())
    else {
        return;
    };
    let mut host = RecordingHost::new(1_200);
    {
        let mut pane = HostedSplitPane::new(adapter, &mut host);
        for signal in signals.into_iter().take(512) {
            match signal {
                Signal::Down(id, primary, x) => {
                    pane.pointer_down(u32::from(id), button(primary), i32::from(x));
                }
                Signal::Move(id, x) => {
                    pane.pointer_move(u32::from(id), i32::from(x));
                }
                Signal::Up(id, primary) => {
                    pane.pointer_up(u32::from(id), button(primary));
                }
                Signal::Cancel(id) => {
                    pane.pointer_cancel(id.map(u32::from));
                }
                Signal::Blur => {
                    pane.blur();
                }
                Signal::Hidden => {
                    pane.visibility_hidden();
                }
                Signal::Toggle => {
                    pane.toggle_collapse();
                }
                Signal::Nudge(delta) => {
                    pane.nudge(i32::from(delta));
                }
                Signal::Resize(width) => {
                    pane.host_mut().set_container_width(u32::from(width));
                }
            }
            assert!(pane.host().live_listeners() <= 1);
            assert_eq!(
                pane.host().live_listeners() == 1,
                pane.adapter().active_pointer_id().is_some()
            );
            assert_eq!(
                pane.state().is_dragging(),
                pane.adapter().active_pointer_id().is_some()
            );
        }
    }
    assert_eq!(host.live_listeners(), 0);
    assert_eq!(host.attach_count(), host.detach_count());
});

use super::*;
use crate::native::{HeadlessWindowSystem, Insets, NativeCall, NativeOp};

const WINDOW: WindowHandle = WindowHandle(0x1);
const MONITOR: Rect = Rect {
    left: 0,
    top: 0,
    right: 1920,
    bottom: 1080,
};
const ORIGINAL: Rect = Rect {
    left: 100,
    top: 100,
    right: 900,
    bottom: 700,
};

fn system() -> HeadlessWindowSystem {
    HeadlessWindowSystem::new()
        .with_window_rect(ORIGINAL)
        .with_monitor(MONITOR)
        .with_frame(Insets {
            left: 8,
            top: 31,
            right: 8,
            bottom: 8,
        })
}

#[test]
fn test_state_default_is_normal() {
    let state = FullscreenState::default();
    assert!(!state.is_full_screen());
    assert!(state.saved_geometry().is_none());
}

#[test]
fn test_state_fullscreen_carries_geometry() {
    let state = FullscreenState::FullScreen {
        saved: Some(ORIGINAL),
    };
    assert!(state.is_full_screen());
    assert_eq!(state.saved_geometry(), Some(ORIGINAL));
}

#[test]
fn test_enter_call_sequence_before_restyle() {
    let system = system();
    let state = Transition::new(&system, WINDOW, FailureMode::Lenient)
        .enter(GeometryCapture::BeforeRestyle)
        .unwrap();

    assert_eq!(state, FullscreenState::FullScreen { saved: Some(ORIGINAL) });
    assert_eq!(
        system.calls(),
        vec![
            NativeCall::MonitorRect,
            NativeCall::WindowRect,
            NativeCall::SetFrameStyle(FrameStyle::Popup),
            NativeCall::Place {
                rect: MONITOR,
                z_order: ZOrder::Topmost
            },
            NativeCall::Show(ShowState::Maximized),
        ]
    );
}

#[test]
fn test_enter_call_sequence_after_restyle() {
    let system = system();
    let state = Transition::new(&system, WINDOW, FailureMode::Lenient)
        .enter(GeometryCapture::AfterRestyle)
        .unwrap();

    // The borderless rectangle is what gets saved.
    assert_eq!(
        state.saved_geometry(),
        Some(Rect::new(108, 131, 892, 692))
    );
    assert_eq!(
        system.calls()[1..3],
        [
            NativeCall::SetFrameStyle(FrameStyle::Popup),
            NativeCall::WindowRect,
        ]
    );
}

#[test]
fn test_enter_covers_monitor() {
    let system = system();
    Transition::new(&system, WINDOW, FailureMode::Strict)
        .enter(GeometryCapture::BeforeRestyle)
        .unwrap();
    let window = system.window();
    assert_eq!(window.rect, MONITOR);
    assert!(window.topmost);
    assert_eq!(window.style, FrameStyle::Popup);
    assert_eq!(window.show_state, ShowState::Maximized);
}

#[test]
fn test_exit_restores_geometry() {
    let system = system();
    let transition = Transition::new(&system, WINDOW, FailureMode::Strict);
    let state = transition.enter(GeometryCapture::BeforeRestyle).unwrap();
    system.clear_calls();

    let state = transition.exit(state.saved_geometry()).unwrap();
    assert_eq!(state, FullscreenState::Normal);
    assert_eq!(
        system.calls(),
        vec![
            NativeCall::SetFrameStyle(FrameStyle::Overlapped),
            NativeCall::Place {
                rect: ORIGINAL,
                z_order: ZOrder::NotTopmost
            },
            NativeCall::Show(ShowState::Normal),
        ]
    );
    let window = system.window();
    assert_eq!(window.rect, ORIGINAL);
    assert!(!window.topmost);
    assert_eq!(window.style, FrameStyle::Overlapped);
    assert_eq!(window.show_state, ShowState::Normal);
}

#[test]
fn test_exit_without_saved_geometry_skips_place() {
    let system = system();
    Transition::new(&system, WINDOW, FailureMode::Lenient)
        .exit(None)
        .unwrap();
    assert!(!system
        .calls()
        .iter()
        .any(|call| matches!(call, NativeCall::Place { .. })));
}

#[test]
fn test_exit_without_saved_geometry_leaves_topmost_band() {
    let system = system();
    let transition = Transition::new(&system, WINDOW, FailureMode::Lenient);
    system.fail_on(NativeOp::WindowRect);
    let state = transition.enter(GeometryCapture::BeforeRestyle).unwrap();
    assert!(system.window().topmost);
    system.clear_failures();
    system.clear_calls();

    transition.exit(state.saved_geometry()).unwrap();
    assert!(!system.window().topmost);
    assert_eq!(
        system.calls(),
        vec![
            NativeCall::SetFrameStyle(FrameStyle::Overlapped),
            NativeCall::SetZOrder(ZOrder::NotTopmost),
            NativeCall::Show(ShowState::Normal),
        ]
    );
}

#[test]
fn test_strict_enter_stops_at_first_failure() {
    let system = system();
    system.fail_on(NativeOp::SetFrameStyle);
    let result = Transition::new(&system, WINDOW, FailureMode::Strict).enter(GeometryCapture::BeforeRestyle);
    assert!(matches!(result, Err(NativeError::SetStyle(_))));
    assert_eq!(
        system.calls().last(),
        Some(&NativeCall::SetFrameStyle(FrameStyle::Popup))
    );
}

#[test]
fn test_lenient_enter_continues_after_failure() {
    let system = system();
    system.fail_on(NativeOp::SetFrameStyle);
    let state = Transition::new(&system, WINDOW, FailureMode::Lenient)
        .enter(GeometryCapture::BeforeRestyle)
        .unwrap();
    assert!(state.is_full_screen());
    assert_eq!(system.calls().last(), Some(&NativeCall::Show(ShowState::Maximized)));
}

#[test]
fn test_lenient_enter_without_monitor_skips_place() {
    let system = system();
    system.fail_on(NativeOp::MonitorRect);
    Transition::new(&system, WINDOW, FailureMode::Lenient)
        .enter(GeometryCapture::BeforeRestyle)
        .unwrap();
    assert!(!system
        .calls()
        .iter()
        .any(|call| matches!(call, NativeCall::Place { .. })));
}

#[test]
fn test_lenient_enter_capture_failure_saves_nothing() {
    let system = system();
    system.fail_on(NativeOp::WindowRect);
    let state = Transition::new(&system, WINDOW, FailureMode::Lenient)
        .enter(GeometryCapture::BeforeRestyle)
        .unwrap();
    assert_eq!(state, FullscreenState::FullScreen { saved: None });
}

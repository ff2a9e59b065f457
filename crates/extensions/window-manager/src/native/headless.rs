//! In-memory window system.
//!
//! Simulates a single top-level window on a single monitor. Every primitive
//! call is recorded, and any primitive can be made to fail, which is what the
//! bridge tests assert against.

use std::collections::HashSet;

use parking_lot::Mutex;

use winbridge_protocols::error::NativeError;
use winbridge_protocols::types::Rect;

use super::{FrameStyle, ShowState, WindowHandle, WindowSystem, ZOrder};

const HANDLE: WindowHandle = WindowHandle(0x1);

/// Primitive kinds, used to select which calls fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeOp {
    TargetWindow,
    WindowRect,
    Resize,
    SetZOrder,
    IsTopmost,
    SetFrameStyle,
    Place,
    MonitorRect,
    Show,
}

/// A recorded primitive call with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NativeCall {
    TargetWindow,
    WindowRect,
    Resize { width: i32, height: i32 },
    SetZOrder(ZOrder),
    IsTopmost,
    SetFrameStyle(FrameStyle),
    Place { rect: Rect, z_order: ZOrder },
    MonitorRect,
    Show(ShowState),
}

impl NativeCall {
    pub fn op(&self) -> NativeOp {
        match self {
            Self::TargetWindow => NativeOp::TargetWindow,
            Self::WindowRect => NativeOp::WindowRect,
            Self::Resize { .. } => NativeOp::Resize,
            Self::SetZOrder(_) => NativeOp::SetZOrder,
            Self::IsTopmost => NativeOp::IsTopmost,
            Self::SetFrameStyle(_) => NativeOp::SetFrameStyle,
            Self::Place { .. } => NativeOp::Place,
            Self::MonitorRect => NativeOp::MonitorRect,
            Self::Show(_) => NativeOp::Show,
        }
    }
}

/// Non-client frame thickness around a decorated window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    fn shrink(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.left + self.left,
            rect.top + self.top,
            rect.right - self.right,
            rect.bottom - self.bottom,
        )
    }

    fn grow(&self, rect: Rect) -> Rect {
        Rect::new(
            rect.left - self.left,
            rect.top - self.top,
            rect.right + self.right,
            rect.bottom + self.bottom,
        )
    }
}

/// Snapshot of the simulated window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulatedWindow {
    pub rect: Rect,
    pub topmost: bool,
    pub style: FrameStyle,
    pub show_state: ShowState,
}

struct State {
    window: SimulatedWindow,
    monitor: Rect,
    frame: Insets,
    has_window: bool,
    failing: HashSet<NativeOp>,
    calls: Vec<NativeCall>,
}

/// Headless [`WindowSystem`] backed by a simulated window.
pub struct HeadlessWindowSystem {
    state: Mutex<State>,
}

impl HeadlessWindowSystem {
    /// A decorated 800x600 window at (100, 100) on a 1920x1080 monitor.
    pub fn new() -> Self {
        Self {
            state: Mutex::new(State {
                window: SimulatedWindow {
                    rect: Rect::from_origin_size(100, 100, 800, 600),
                    topmost: false,
                    style: FrameStyle::Overlapped,
                    show_state: ShowState::Normal,
                },
                monitor: Rect::new(0, 0, 1920, 1080),
                frame: Insets {
                    left: 8,
                    top: 31,
                    right: 8,
                    bottom: 8,
                },
                has_window: true,
                failing: HashSet::new(),
                calls: Vec::new(),
            }),
        }
    }

    pub fn with_window_rect(self, rect: Rect) -> Self {
        self.state.lock().window.rect = rect;
        self
    }

    pub fn with_monitor(self, rect: Rect) -> Self {
        self.state.lock().monitor = rect;
        self
    }

    /// Frame thickness removed when switching to the popup style and added
    /// back when switching to the overlapped style.
    pub fn with_frame(self, frame: Insets) -> Self {
        self.state.lock().frame = frame;
        self
    }

    /// No window is available to target.
    pub fn without_window(self) -> Self {
        self.state.lock().has_window = false;
        self
    }

    /// Make every future call of `op` fail.
    pub fn fail_on(&self, op: NativeOp) {
        self.state.lock().failing.insert(op);
    }

    pub fn clear_failures(&self) {
        self.state.lock().failing.clear();
    }

    /// Current window snapshot.
    pub fn window(&self) -> SimulatedWindow {
        self.state.lock().window
    }

    /// Every primitive call made so far, in order.
    pub fn calls(&self) -> Vec<NativeCall> {
        self.state.lock().calls.clone()
    }

    pub fn clear_calls(&self) {
        self.state.lock().calls.clear();
    }

    fn record(&self, call: NativeCall) -> Result<parking_lot::MutexGuard<'_, State>, NativeOp> {
        let mut state = self.state.lock();
        let op = call.op();
        state.calls.push(call);
        if state.failing.contains(&op) {
            return Err(op);
        }
        Ok(state)
    }
}

impl Default for HeadlessWindowSystem {
    fn default() -> Self {
        Self::new()
    }
}

fn injected(op: NativeOp) -> NativeError {
    let reason = format!("{:?} failed (injected)", op);
    match op {
        NativeOp::TargetWindow => NativeError::NoTargetWindow,
        NativeOp::WindowRect => NativeError::WindowRect(reason),
        NativeOp::Resize | NativeOp::SetZOrder | NativeOp::Place => NativeError::SetPosition(reason),
        NativeOp::IsTopmost => NativeError::GetStyle(reason),
        NativeOp::SetFrameStyle => NativeError::SetStyle(reason),
        NativeOp::MonitorRect => NativeError::Monitor(reason),
        NativeOp::Show => NativeError::ShowState(reason),
    }
}

impl WindowSystem for HeadlessWindowSystem {
    fn target_window(&self) -> Option<WindowHandle> {
        let state = self.record(NativeCall::TargetWindow).ok()?;
        state.has_window.then_some(HANDLE)
    }

    fn window_rect(&self, _window: WindowHandle) -> Result<Rect, NativeError> {
        let state = self.record(NativeCall::WindowRect).map_err(injected)?;
        Ok(state.window.rect)
    }

    fn resize(&self, _window: WindowHandle, width: i32, height: i32) -> Result<(), NativeError> {
        let mut state = self.record(NativeCall::Resize { width, height }).map_err(injected)?;
        let rect = state.window.rect;
        state.window.rect = Rect::from_origin_size(rect.left, rect.top, width, height);
        Ok(())
    }

    fn set_z_order(&self, _window: WindowHandle, z_order: ZOrder) -> Result<(), NativeError> {
        let mut state = self.record(NativeCall::SetZOrder(z_order)).map_err(injected)?;
        state.window.topmost = z_order == ZOrder::Topmost;
        Ok(())
    }

    fn is_topmost(&self, _window: WindowHandle) -> Result<bool, NativeError> {
        let state = self.record(NativeCall::IsTopmost).map_err(injected)?;
        Ok(state.window.topmost)
    }

    fn set_frame_style(&self, _window: WindowHandle, style: FrameStyle) -> Result<(), NativeError> {
        let mut state = self.record(NativeCall::SetFrameStyle(style)).map_err(injected)?;
        // Restyling keeps the client area where it is, so the outer
        // rectangle loses or gains the frame.
        let frame = state.frame;
        let rect = state.window.rect;
        state.window.rect = match (state.window.style, style) {
            (FrameStyle::Overlapped, FrameStyle::Popup) => frame.shrink(rect),
            (FrameStyle::Popup, FrameStyle::Overlapped) => frame.grow(rect),
            _ => rect,
        };
        state.window.style = style;
        Ok(())
    }

    fn place(&self, _window: WindowHandle, rect: Rect, z_order: ZOrder) -> Result<(), NativeError> {
        let mut state = self.record(NativeCall::Place { rect, z_order }).map_err(injected)?;
        state.window.rect = rect;
        state.window.topmost = z_order == ZOrder::Topmost;
        Ok(())
    }

    fn monitor_rect(&self, _window: WindowHandle) -> Result<Rect, NativeError> {
        let state = self.record(NativeCall::MonitorRect).map_err(injected)?;
        Ok(state.monitor)
    }

    fn show(&self, _window: WindowHandle, show_state: ShowState) -> Result<(), NativeError> {
        let mut state = self.record(NativeCall::Show(show_state)).map_err(injected)?;
        state.window.show_state = show_state;
        Ok(())
    }
}

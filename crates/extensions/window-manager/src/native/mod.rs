//! Native window-system primitives.
//!
//! The bridge never calls the OS directly; it goes through [`WindowSystem`],
//! one method per native primitive it needs.

mod headless;
#[cfg(windows)]
mod win32;

use std::sync::Arc;

use winbridge_config::WindowTarget;
use winbridge_protocols::error::NativeError;
use winbridge_protocols::types::Rect;

pub use headless::{HeadlessWindowSystem, Insets, NativeCall, NativeOp, SimulatedWindow};
#[cfg(windows)]
pub use win32::Win32WindowSystem;

/// Opaque top-level window handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowHandle(pub isize);

/// Frame style of a top-level window. Both variants keep the window visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameStyle {
    /// Decorated window with caption and sizing border.
    Overlapped,
    /// Borderless popup.
    Popup,
}

/// Show-state of a top-level window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShowState {
    Normal,
    Maximized,
}

/// Z-order band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZOrder {
    Topmost,
    NotTopmost,
}

impl From<bool> for ZOrder {
    fn from(topmost: bool) -> Self {
        if topmost {
            Self::Topmost
        } else {
            Self::NotTopmost
        }
    }
}

/// Window-system primitives used by the bridge.
pub trait WindowSystem: Send + Sync {
    /// Resolve the window the bridge operates on.
    fn target_window(&self) -> Option<WindowHandle>;

    /// Outer window rectangle in physical pixels.
    fn window_rect(&self, window: WindowHandle) -> Result<Rect, NativeError>;

    /// Resize without moving.
    fn resize(&self, window: WindowHandle, width: i32, height: i32) -> Result<(), NativeError>;

    /// Move into or out of the topmost band without moving or resizing.
    fn set_z_order(&self, window: WindowHandle, z_order: ZOrder) -> Result<(), NativeError>;

    /// Whether the extended style carries the topmost bit.
    fn is_topmost(&self, window: WindowHandle) -> Result<bool, NativeError>;

    fn set_frame_style(&self, window: WindowHandle, style: FrameStyle) -> Result<(), NativeError>;

    /// Move and resize to `rect`, apply `z_order`, and refresh the frame.
    fn place(&self, window: WindowHandle, rect: Rect, z_order: ZOrder) -> Result<(), NativeError>;

    /// Full rectangle of the monitor nearest to the window.
    fn monitor_rect(&self, window: WindowHandle) -> Result<Rect, NativeError>;

    fn show(&self, window: WindowHandle, state: ShowState) -> Result<(), NativeError>;
}

/// The window system for the current platform.
///
/// Windows builds drive Win32. Other platforms get a headless simulated
/// window so the host and its transport still run end to end.
#[cfg(windows)]
pub fn platform_window_system(target: WindowTarget) -> Arc<dyn WindowSystem> {
    Arc::new(Win32WindowSystem::new(target))
}

/// The window system for the current platform.
///
/// Windows builds drive Win32. Other platforms get a headless simulated
/// window so the host and its transport still run end to end.
#[cfg(not(windows))]
pub fn platform_window_system(target: WindowTarget) -> Arc<dyn WindowSystem> {
    tracing::info!(?target, "No native window system on this platform; using headless window");
    Arc::new(HeadlessWindowSystem::new())
}

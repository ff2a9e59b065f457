//! Native window control for winbridge.
//!
//! Serves the `window_manager` channel:
//!
//! ## Bounds
//! - `getBounds` - Window rectangle in logical pixels
//! - `setBounds` - Resize in place (origin untouched)
//! - `setMinimumSize` / `setMaximumSize` - Reserved, always not-implemented
//!
//! ## Z-order
//! - `isAlwaysOnTop` - Whether the topmost bit is set
//! - `setAlwaysOnTop` - Move into or out of the topmost band
//!
//! ## Fullscreen
//! - `setFullScreen` - Enter or leave borderless monitor-covering mode
//! - `isFullScreen` - Cached fullscreen flag
//!
//! Every native primitive goes through [`WindowSystem`]. On Windows the
//! bridge drives Win32 directly; elsewhere it runs against
//! [`HeadlessWindowSystem`], an in-memory simulated window.

mod channel;
mod fullscreen;
mod method;
mod native;
mod plugin;
mod scale;

pub use channel::{BridgeOptions, WindowManagerChannel};
pub use fullscreen::FullscreenState;
pub use method::{
    GetBoundsParams, Method, SetAlwaysOnTopParams, SetBoundsParams, SetFullScreenParams,
};
pub use native::{
    platform_window_system, FrameStyle, HeadlessWindowSystem, Insets, NativeCall, NativeOp,
    ShowState, SimulatedWindow, WindowHandle, WindowSystem, ZOrder,
};
#[cfg(windows)]
pub use native::Win32WindowSystem;
pub use plugin::WindowManagerPlugin;
pub use scale::to_physical;

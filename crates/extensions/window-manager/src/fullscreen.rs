//! Fullscreen state machine.
//!
//! Two states, `Normal` and `FullScreen`. The saved pre-fullscreen geometry
//! lives inside the `FullScreen` variant, so it exists exactly while the
//! window is fullscreen.

use tracing::{info, warn};

use winbridge_config::{FailureMode, GeometryCapture};
use winbridge_protocols::error::NativeError;
use winbridge_protocols::types::Rect;

use crate::native::{FrameStyle, ShowState, WindowHandle, WindowSystem, ZOrder};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FullscreenState {
    #[default]
    Normal,
    FullScreen {
        /// Rectangle to restore on exit. `None` only when capturing it
        /// failed and the failure was absorbed.
        saved: Option<Rect>,
    },
}

impl FullscreenState {
    pub fn is_full_screen(&self) -> bool {
        matches!(self, Self::FullScreen { .. })
    }

    pub fn saved_geometry(&self) -> Option<Rect> {
        match self {
            Self::FullScreen { saved } => *saved,
            Self::Normal => None,
        }
    }
}

/// One fullscreen transition against a resolved window.
pub(crate) struct Transition<'a> {
    system: &'a dyn WindowSystem,
    window: WindowHandle,
    mode: FailureMode,
}

impl<'a> Transition<'a> {
    pub(crate) fn new(system: &'a dyn WindowSystem, window: WindowHandle, mode: FailureMode) -> Self {
        Self {
            system,
            window,
            mode,
        }
    }

    /// Strict mode stops at the first failure. Lenient mode logs it and
    /// carries on without the step's result.
    fn step<T>(&self, step: &'static str, result: Result<T, NativeError>) -> Result<Option<T>, NativeError> {
        match result {
            Ok(value) => Ok(Some(value)),
            Err(e) if self.mode == FailureMode::Strict => Err(e),
            Err(e) => {
                warn!(step, error = %e, "Native call failed during fullscreen transition; continuing");
                Ok(None)
            }
        }
    }

    fn capture(&self) -> Result<Option<Rect>, NativeError> {
        self.step("window_rect", self.system.window_rect(self.window))
    }

    pub(crate) fn enter(&self, capture: GeometryCapture) -> Result<FullscreenState, NativeError> {
        let monitor = self.step("monitor_rect", self.system.monitor_rect(self.window))?;

        let mut saved = None;
        if capture == GeometryCapture::BeforeRestyle {
            saved = self.capture()?;
        }

        self.step(
            "set_frame_style",
            self.system.set_frame_style(self.window, FrameStyle::Popup),
        )?;

        if capture == GeometryCapture::AfterRestyle {
            saved = self.capture()?;
        }

        match monitor {
            Some(monitor) => {
                self.step("place", self.system.place(self.window, monitor, ZOrder::Topmost))?;
            }
            None => warn!("Monitor rectangle unknown; window not moved over the monitor"),
        }

        self.step("show", self.system.show(self.window, ShowState::Maximized))?;

        info!(?saved, ?monitor, "Entered fullscreen");
        Ok(FullscreenState::FullScreen { saved })
    }

    pub(crate) fn exit(&self, saved: Option<Rect>) -> Result<FullscreenState, NativeError> {
        self.step(
            "set_frame_style",
            self.system.set_frame_style(self.window, FrameStyle::Overlapped),
        )?;

        match saved {
            Some(rect) => {
                self.step("place", self.system.place(self.window, rect, ZOrder::NotTopmost))?;
            }
            None => {
                warn!("No saved geometry; window left at its fullscreen rectangle");
                self.step(
                    "set_z_order",
                    self.system.set_z_order(self.window, ZOrder::NotTopmost),
                )?;
            }
        }

        self.step("show", self.system.show(self.window, ShowState::Normal))?;

        info!(?saved, "Left fullscreen");
        Ok(FullscreenState::Normal)
    }
}

#[cfg(test)]
#[path = "fullscreen_tests.rs"]
mod tests;

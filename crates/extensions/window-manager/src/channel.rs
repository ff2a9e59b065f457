//! The `window_manager` method channel.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::{json, Value};
use tracing::{debug, warn};

use winbridge_config::{Config, FailureMode, GeometryCapture};
use winbridge_protocols::channel::{MethodCall, MethodHandler, MethodResponse};
use winbridge_protocols::error::{ChannelError, NativeError};

use crate::fullscreen::{FullscreenState, Transition};
use crate::method::{
    GetBoundsParams, Method, SetAlwaysOnTopParams, SetBoundsParams, SetFullScreenParams,
};
use crate::native::{WindowHandle, WindowSystem, ZOrder};
use crate::scale::to_physical;

/// Behavior switches for a [`WindowManagerChannel`].
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    pub channel_name: String,
    pub failure_mode: FailureMode,
    pub geometry_capture: GeometryCapture,
}

impl BridgeOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            channel_name: config.channel.name.clone(),
            failure_mode: config.bridge.failure_mode,
            geometry_capture: config.fullscreen.geometry_capture,
        }
    }

    pub fn with_failure_mode(mut self, mode: FailureMode) -> Self {
        self.failure_mode = mode;
        self
    }

    pub fn with_geometry_capture(mut self, capture: GeometryCapture) -> Self {
        self.geometry_capture = capture;
        self
    }
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

/// Handler for window bounds, always-on-top and fullscreen calls.
///
/// Owns the fullscreen state for the window it drives. Everything else is
/// forwarded to the [`WindowSystem`] on each call.
pub struct WindowManagerChannel {
    options: BridgeOptions,
    system: Arc<dyn WindowSystem>,
    state: Mutex<FullscreenState>,
}

impl WindowManagerChannel {
    pub fn new(options: BridgeOptions, system: Arc<dyn WindowSystem>) -> Self {
        Self {
            options,
            system,
            state: Mutex::new(FullscreenState::Normal),
        }
    }

    pub fn options(&self) -> &BridgeOptions {
        &self.options
    }

    pub fn state(&self) -> FullscreenState {
        *self.state.lock()
    }

    pub fn is_full_screen(&self) -> bool {
        self.state.lock().is_full_screen()
    }

    fn target(&self) -> Result<WindowHandle, NativeError> {
        self.system.target_window().ok_or(NativeError::NoTargetWindow)
    }

    fn is_strict(&self) -> bool {
        self.options.failure_mode == FailureMode::Strict
    }

    /// Apply the failure mode to a native result. Lenient mode replaces a
    /// failure with `fallback`.
    fn absorb<T>(
        &self,
        method: Method,
        result: Result<T, NativeError>,
        fallback: T,
    ) -> Result<T, ChannelError> {
        match result {
            Ok(value) => Ok(value),
            Err(e) if self.is_strict() => Err(e.into()),
            Err(e) => {
                warn!(%method, error = %e, "Native call failed; absorbed");
                Ok(fallback)
            }
        }
    }

    fn get_bounds(&self, call: &MethodCall) -> Result<Value, ChannelError> {
        let params: GetBoundsParams = call.arguments_as()?;
        params.validate()?;

        let rect = self.target().and_then(|window| self.system.window_rect(window));
        let Some(rect) = self.absorb(Method::GetBounds, rect.map(Some), None)? else {
            return Ok(json!({}));
        };

        let bounds = rect.to_logical(params.device_pixel_ratio);
        Ok(json!({
            "x": bounds.x,
            "y": bounds.y,
            "width": bounds.width,
            "height": bounds.height,
        }))
    }

    fn set_bounds(&self, call: &MethodCall) -> Result<Value, ChannelError> {
        let params: SetBoundsParams = call.arguments_as()?;
        params.validate()?;

        let width = to_physical(params.width, params.device_pixel_ratio);
        let height = to_physical(params.height, params.device_pixel_ratio);
        if params.x.is_some() || params.y.is_some() {
            debug!(x = ?params.x, y = ?params.y, "Origin arguments ignored");
        }

        let result = self
            .target()
            .and_then(|window| self.system.resize(window, width, height));
        self.absorb(Method::SetBounds, result, ())?;
        Ok(json!(true))
    }

    fn is_always_on_top(&self) -> Result<Value, ChannelError> {
        let result = self.target().and_then(|window| self.system.is_topmost(window));
        let topmost = self.absorb(Method::IsAlwaysOnTop, result, false)?;
        Ok(json!({ "isAlwaysOnTop": topmost }))
    }

    fn set_always_on_top(&self, call: &MethodCall) -> Result<Value, ChannelError> {
        let params: SetAlwaysOnTopParams = call.arguments_as()?;
        let z_order = ZOrder::from(params.is_always_on_top);

        let result = self
            .target()
            .and_then(|window| self.system.set_z_order(window, z_order));
        self.absorb(Method::SetAlwaysOnTop, result, ())?;
        Ok(json!(true))
    }

    fn set_full_screen(&self, call: &MethodCall) -> Result<Value, ChannelError> {
        let params: SetFullScreenParams = call.arguments_as()?;
        let requested = params.is_full_screen;

        // Held for the whole transition so the flag and the saved geometry
        // change together.
        let mut state = self.state.lock();
        if state.is_full_screen() == requested {
            debug!(requested, "Fullscreen already in requested state");
            return Ok(json!(requested));
        }

        let window = match self.target() {
            Ok(window) => window,
            Err(e) if self.is_strict() => return Err(e.into()),
            Err(e) => {
                warn!(requested, error = %e, "No window for fullscreen transition; state updated anyway");
                *state = if requested {
                    FullscreenState::FullScreen { saved: None }
                } else {
                    FullscreenState::Normal
                };
                return Ok(json!(requested));
            }
        };

        let transition = Transition::new(self.system.as_ref(), window, self.options.failure_mode);
        let next = if requested {
            transition.enter(self.options.geometry_capture)?
        } else {
            transition.exit(state.saved_geometry())?
        };
        *state = next;
        Ok(json!(next.is_full_screen()))
    }

    fn dispatch(&self, method: Method, call: &MethodCall) -> Option<Result<Value, ChannelError>> {
        let result = match method {
            Method::SetMinimumSize | Method::SetMaximumSize => return None,
            Method::GetBounds => self.get_bounds(call),
            Method::SetBounds => self.set_bounds(call),
            Method::IsAlwaysOnTop => self.is_always_on_top(),
            Method::SetAlwaysOnTop => self.set_always_on_top(call),
            Method::SetFullScreen => self.set_full_screen(call),
            Method::IsFullScreen => Ok(json!(self.is_full_screen())),
        };
        Some(result)
    }
}

impl MethodHandler for WindowManagerChannel {
    fn channel(&self) -> &str {
        &self.options.channel_name
    }

    fn handle(&self, call: &MethodCall) -> MethodResponse {
        let Some(method) = Method::parse(&call.method) else {
            debug!(method = %call.method, "Unknown method");
            return MethodResponse::not_implemented();
        };

        debug!(%method, "Handling window call");
        match self.dispatch(method, call) {
            None => MethodResponse::not_implemented(),
            Some(Ok(result)) => MethodResponse::success(result),
            Some(Err(e)) => {
                debug!(%method, error = %e, "Window call failed");
                MethodResponse::from(e).with_details(json!({ "method": method.name() }))
            }
        }
    }
}

#[cfg(test)]
#[path = "channel_tests.rs"]
mod tests;

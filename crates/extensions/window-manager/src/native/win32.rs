//! Win32 window system.

use windows_sys::Win32::Foundation::{GetLastError, SetLastError, HWND, RECT};
use windows_sys::Win32::Graphics::Gdi::{
    GetMonitorInfoW, MonitorFromWindow, MONITORINFO, MONITOR_DEFAULTTONEAREST,
};
use windows_sys::Win32::UI::Input::KeyboardAndMouse::GetActiveWindow;
use windows_sys::Win32::UI::WindowsAndMessaging::{
    GetForegroundWindow, GetWindowLongW, GetWindowRect, SetWindowLongW, SetWindowPos, ShowWindow,
    GWL_EXSTYLE, GWL_STYLE, HWND_NOTOPMOST, HWND_TOP, HWND_TOPMOST, SWP_FRAMECHANGED,
    SWP_NOMOVE, SWP_NOOWNERZORDER, SWP_NOSIZE, SWP_SHOWWINDOW, SW_MAXIMIZE, SW_NORMAL,
    WS_EX_TOPMOST, WS_OVERLAPPEDWINDOW, WS_POPUP, WS_VISIBLE,
};

use winbridge_config::WindowTarget;
use winbridge_protocols::error::NativeError;
use winbridge_protocols::types::Rect;

use super::{FrameStyle, ShowState, WindowHandle, WindowSystem, ZOrder};

/// [`WindowSystem`] backed by user32.
pub struct Win32WindowSystem {
    target: WindowTarget,
}

impl Win32WindowSystem {
    pub fn new(target: WindowTarget) -> Self {
        Self { target }
    }
}

fn hwnd(window: WindowHandle) -> HWND {
    window.0 as HWND
}

fn z_order_handle(z_order: ZOrder) -> HWND {
    match z_order {
        ZOrder::Topmost => HWND_TOPMOST,
        ZOrder::NotTopmost => HWND_NOTOPMOST,
    }
}

fn last_error(call: &str) -> String {
    // SAFETY: reads the calling thread's last-error code.
    let code = unsafe { GetLastError() };
    format!("{} failed (error {})", call, code)
}

impl WindowSystem for Win32WindowSystem {
    fn target_window(&self) -> Option<WindowHandle> {
        // SAFETY: neither call takes arguments; both may return null.
        let handle = unsafe {
            match self.target {
                WindowTarget::Active => GetActiveWindow(),
                WindowTarget::Foreground => GetForegroundWindow(),
            }
        };
        (!handle.is_null()).then(|| WindowHandle(handle as isize))
    }

    fn window_rect(&self, window: WindowHandle) -> Result<Rect, NativeError> {
        // SAFETY: `rect` is a valid out pointer for the duration of the call.
        unsafe {
            let mut rect: RECT = core::mem::zeroed();
            if GetWindowRect(hwnd(window), &mut rect) == 0 {
                return Err(NativeError::WindowRect(last_error("GetWindowRect")));
            }
            Ok(Rect::new(rect.left, rect.top, rect.right, rect.bottom))
        }
    }

    fn resize(&self, window: WindowHandle, width: i32, height: i32) -> Result<(), NativeError> {
        // SAFETY: plain value arguments.
        let ok = unsafe { SetWindowPos(hwnd(window), HWND_TOP, 0, 0, width, height, SWP_NOMOVE) };
        if ok == 0 {
            return Err(NativeError::SetPosition(last_error("SetWindowPos")));
        }
        Ok(())
    }

    fn set_z_order(&self, window: WindowHandle, z_order: ZOrder) -> Result<(), NativeError> {
        // SAFETY: plain value arguments.
        let ok = unsafe {
            SetWindowPos(
                hwnd(window),
                z_order_handle(z_order),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE,
            )
        };
        if ok == 0 {
            return Err(NativeError::SetPosition(last_error("SetWindowPos")));
        }
        Ok(())
    }

    fn is_topmost(&self, window: WindowHandle) -> Result<bool, NativeError> {
        // SAFETY: a zero return is only an error if the last-error code is set.
        unsafe {
            SetLastError(0);
            let ex_style = GetWindowLongW(hwnd(window), GWL_EXSTYLE) as u32;
            if ex_style == 0 && GetLastError() != 0 {
                return Err(NativeError::GetStyle(last_error("GetWindowLongW")));
            }
            Ok(ex_style & WS_EX_TOPMOST != 0)
        }
    }

    fn set_frame_style(&self, window: WindowHandle, style: FrameStyle) -> Result<(), NativeError> {
        let bits = match style {
            FrameStyle::Overlapped => WS_OVERLAPPEDWINDOW | WS_VISIBLE,
            FrameStyle::Popup => WS_POPUP | WS_VISIBLE,
        };
        // SAFETY: SetWindowLongW returns the previous value; zero is only an
        // error if the last-error code is set.
        unsafe {
            SetLastError(0);
            let previous = SetWindowLongW(hwnd(window), GWL_STYLE, bits as i32);
            if previous == 0 && GetLastError() != 0 {
                return Err(NativeError::SetStyle(last_error("SetWindowLongW")));
            }
        }
        Ok(())
    }

    fn place(&self, window: WindowHandle, rect: Rect, z_order: ZOrder) -> Result<(), NativeError> {
        let flags = match z_order {
            ZOrder::Topmost => SWP_FRAMECHANGED | SWP_SHOWWINDOW,
            ZOrder::NotTopmost => SWP_FRAMECHANGED | SWP_NOOWNERZORDER,
        };
        // SAFETY: plain value arguments.
        let ok = unsafe {
            SetWindowPos(
                hwnd(window),
                z_order_handle(z_order),
                rect.left,
                rect.top,
                rect.width(),
                rect.height(),
                flags,
            )
        };
        if ok == 0 {
            return Err(NativeError::SetPosition(last_error("SetWindowPos")));
        }
        Ok(())
    }

    fn monitor_rect(&self, window: WindowHandle) -> Result<Rect, NativeError> {
        // SAFETY: `info` is a valid, size-tagged out pointer.
        unsafe {
            let monitor = MonitorFromWindow(hwnd(window), MONITOR_DEFAULTTONEAREST);
            if monitor.is_null() {
                return Err(NativeError::Monitor(last_error("MonitorFromWindow")));
            }

            let mut info: MONITORINFO = core::mem::zeroed();
            info.cbSize = core::mem::size_of::<MONITORINFO>() as u32;
            if GetMonitorInfoW(monitor, &mut info) == 0 {
                return Err(NativeError::Monitor(last_error("GetMonitorInfoW")));
            }

            let m = info.rcMonitor;
            Ok(Rect::new(m.left, m.top, m.right, m.bottom))
        }
    }

    fn show(&self, window: WindowHandle, state: ShowState) -> Result<(), NativeError> {
        let command = match state {
            ShowState::Normal => SW_NORMAL,
            ShowState::Maximized => SW_MAXIMIZE,
        };
        // ShowWindow reports prior visibility, not success.
        // SAFETY: plain value arguments.
        unsafe {
            ShowWindow(hwnd(window), command);
        }
        Ok(())
    }
}

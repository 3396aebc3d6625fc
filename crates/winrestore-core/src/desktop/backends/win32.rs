//! Win32 desktop backend.

use std::ffi::c_void;
use std::mem;

use sysinfo::{Pid, ProcessRefreshKind, RefreshKind, System, UpdateKind};
use tracing::debug;
use windows::Win32::Foundation::{HWND, LPARAM, RECT};
use windows::Win32::Graphics::Gdi::{
    EnumDisplayMonitors, GetMonitorInfoW, HDC, HMONITOR, MONITORINFO, MONITORINFOF_PRIMARY,
};
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, KEYBD_EVENT_FLAGS, KEYBDINPUT, KEYEVENTF_KEYUP,
    KEYEVENTF_UNICODE, SendInput, VIRTUAL_KEY, VK_CONTROL, VK_RETURN,
};
use windows::Win32::UI::WindowsAndMessaging::{
    EnumWindows, GWL_EXSTYLE, GWL_STYLE, GetSystemMetrics, GetWindowLongW, GetWindowPlacement,
    GetWindowRect, GetWindowTextLengthW, GetWindowTextW, GetWindowThreadProcessId,
    IsWindowVisible, SM_CXSCREEN, SM_CYSCREEN, SW_MAXIMIZE, SW_RESTORE, SW_SHOWMAXIMIZED,
    SW_SHOWMINIMIZED, SWP_NOACTIVATE, SWP_NOZORDER, SetForegroundWindow, SetWindowPos, ShowWindow,
    WINDOWPLACEMENT, WS_CAPTION, WS_EX_TOOLWINDOW,
};
use windows::core::BOOL;

use crate::desktop::errors::DesktopError;
use crate::desktop::traits::Desktop;
use crate::desktop::types::{KeyStroke, ProcessInfo, WindowHandle, WindowSnapshot};
use crate::geometry::Rect;
use crate::monitor::MonitorDescriptor;
use crate::window::WindowState;

/// Desktop backend over the Win32 window manager.
pub struct Win32Desktop;

fn hwnd(handle: WindowHandle) -> HWND {
    HWND(handle.0 as *mut c_void)
}

fn rect_from(rect: &RECT) -> Rect {
    Rect::from_edges(rect.left, rect.top, rect.right, rect.bottom)
}

unsafe extern "system" fn collect_window(hwnd: HWND, lparam: LPARAM) -> BOOL {
    // SAFETY: lparam is the &mut Vec<HWND> passed by `top_level_windows` and
    // outlives the EnumWindows call.
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HWND>) };
    handles.push(hwnd);
    BOOL(1)
}

unsafe extern "system" fn collect_monitor(
    monitor: HMONITOR,
    _hdc: HDC,
    _rect: *mut RECT,
    lparam: LPARAM,
) -> BOOL {
    // SAFETY: lparam is the &mut Vec<HMONITOR> passed by `monitors`.
    let handles = unsafe { &mut *(lparam.0 as *mut Vec<HMONITOR>) };
    handles.push(monitor);
    BOOL(1)
}

fn top_level_windows() -> Result<Vec<HWND>, DesktopError> {
    let mut handles: Vec<HWND> = Vec::new();
    // SAFETY: the callback only touches `handles`, which lives for the whole call.
    unsafe {
        EnumWindows(
            Some(collect_window),
            LPARAM(&mut handles as *mut Vec<HWND> as isize),
        )
    }
    .map_err(|e| DesktopError::EnumerationFailed {
        message: e.to_string(),
    })?;
    Ok(handles)
}

fn window_title(hwnd: HWND) -> String {
    // SAFETY: plain Win32 queries on a handle; a stale handle yields 0.
    let len = unsafe { GetWindowTextLengthW(hwnd) };
    if len <= 0 {
        return String::new();
    }
    let mut buf = vec![0u16; len as usize + 1];
    let copied = unsafe { GetWindowTextW(hwnd, &mut buf) };
    if copied <= 0 {
        return String::new();
    }
    String::from_utf16_lossy(&buf[..copied as usize])
}

fn window_state(hwnd: HWND) -> WindowState {
    let mut placement = WINDOWPLACEMENT {
        length: mem::size_of::<WINDOWPLACEMENT>() as u32,
        ..Default::default()
    };
    // SAFETY: placement is a properly sized, initialized WINDOWPLACEMENT.
    if unsafe { GetWindowPlacement(hwnd, &mut placement) }.is_err() {
        return WindowState::Normal;
    }
    if placement.showCmd == SW_SHOWMAXIMIZED.0 as u32 {
        WindowState::Maximized
    } else if placement.showCmd == SW_SHOWMINIMIZED.0 as u32 {
        WindowState::Minimized
    } else {
        WindowState::Normal
    }
}

fn owning_process(hwnd: HWND, system: &System) -> Option<ProcessInfo> {
    let mut pid = 0u32;
    // SAFETY: pid is a valid out pointer for the duration of the call.
    unsafe { GetWindowThreadProcessId(hwnd, Some(&mut pid)) };
    if pid == 0 {
        return None;
    }
    let process = system.process(Pid::from_u32(pid))?;
    let path = process.exe()?;
    Some(ProcessInfo::from_path(path.to_string_lossy().into_owned()))
}

fn process_table() -> System {
    System::new_with_specifics(RefreshKind::nothing().with_processes(
        ProcessRefreshKind::nothing().with_exe(UpdateKind::OnlyIfNotSet),
    ))
}

fn snapshot(hwnd: HWND, system: &System) -> Result<WindowSnapshot, DesktopError> {
    let handle = WindowHandle(hwnd.0 as isize);

    let mut rect = RECT::default();
    // SAFETY: rect is a valid out pointer.
    unsafe { GetWindowRect(hwnd, &mut rect) }.map_err(|_| DesktopError::WindowGone { handle })?;

    // SAFETY: read-only style and visibility queries.
    let (visible, style, ex_style) = unsafe {
        (
            IsWindowVisible(hwnd).as_bool(),
            GetWindowLongW(hwnd, GWL_STYLE) as u32,
            GetWindowLongW(hwnd, GWL_EXSTYLE) as u32,
        )
    };

    Ok(WindowSnapshot {
        handle,
        title: window_title(hwnd),
        visible,
        tool_window: ex_style & WS_EX_TOOLWINDOW.0 != 0,
        has_caption: style & WS_CAPTION.0 != 0,
        rect: rect_from(&rect),
        state: window_state(hwnd),
        process: owning_process(hwnd, system),
    })
}

fn key_input(vk: VIRTUAL_KEY, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn stroke_inputs(stroke: &KeyStroke) -> Vec<INPUT> {
    let none = KEYBD_EVENT_FLAGS(0);
    match stroke {
        KeyStroke::Ctrl(key) => {
            let vk = VIRTUAL_KEY(key.to_ascii_uppercase() as u16);
            vec![
                key_input(VK_CONTROL, 0, none),
                key_input(vk, 0, none),
                key_input(vk, 0, KEYEVENTF_KEYUP),
                key_input(VK_CONTROL, 0, KEYEVENTF_KEYUP),
            ]
        }
        KeyStroke::Text(text) => text
            .encode_utf16()
            .flat_map(|unit| {
                [
                    key_input(VIRTUAL_KEY(0), unit, KEYEVENTF_UNICODE),
                    key_input(VIRTUAL_KEY(0), unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP),
                ]
            })
            .collect(),
        KeyStroke::Enter => vec![
            key_input(VK_RETURN, 0, none),
            key_input(VK_RETURN, 0, KEYEVENTF_KEYUP),
        ],
    }
}

impl Desktop for Win32Desktop {
    fn name(&self) -> &'static str {
        "win32"
    }

    fn monitors(&self) -> Result<Vec<MonitorDescriptor>, DesktopError> {
        let mut handles: Vec<HMONITOR> = Vec::new();
        // SAFETY: the callback only touches `handles`, which lives for the whole call.
        let ok = unsafe {
            EnumDisplayMonitors(
                None,
                None,
                Some(collect_monitor),
                LPARAM(&mut handles as *mut Vec<HMONITOR> as isize),
            )
        };
        if !ok.as_bool() {
            return Err(DesktopError::MonitorEnumerationFailed {
                message: "EnumDisplayMonitors returned FALSE".to_string(),
            });
        }

        let mut monitors = Vec::with_capacity(handles.len());
        for monitor in handles {
            let mut info = MONITORINFO {
                cbSize: mem::size_of::<MONITORINFO>() as u32,
                ..Default::default()
            };
            // SAFETY: info is a properly sized MONITORINFO.
            if !unsafe { GetMonitorInfoW(monitor, &mut info) }.as_bool() {
                debug!(event = "core.desktop.monitor_info_failed");
                continue;
            }
            monitors.push(MonitorDescriptor {
                index: monitors.len(),
                bounds: rect_from(&info.rcMonitor),
                work_area: rect_from(&info.rcWork),
                is_primary: info.dwFlags & MONITORINFOF_PRIMARY != 0,
            });
        }
        Ok(monitors)
    }

    fn primary_bounds(&self) -> Option<Rect> {
        // SAFETY: GetSystemMetrics has no preconditions.
        let (width, height) = unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) };
        (width > 0 && height > 0).then(|| Rect::new(0, 0, width, height))
    }

    fn windows(&self) -> Result<Vec<WindowSnapshot>, DesktopError> {
        let handles = top_level_windows()?;
        let system = process_table();

        Ok(handles
            .into_iter()
            .filter_map(|hwnd| match snapshot(hwnd, &system) {
                Ok(snapshot) => Some(snapshot),
                Err(e) => {
                    debug!(event = "core.desktop.window_skipped", error = %e);
                    None
                }
            })
            .collect())
    }

    fn window(&self, handle: WindowHandle) -> Result<WindowSnapshot, DesktopError> {
        snapshot(hwnd(handle), &process_table())
    }

    fn restore(&self, handle: WindowHandle) -> Result<(), DesktopError> {
        // ShowWindow reports the previous visibility, not success.
        // SAFETY: a stale handle is ignored by the OS.
        let _ = unsafe { ShowWindow(hwnd(handle), SW_RESTORE) };
        Ok(())
    }

    fn maximize(&self, handle: WindowHandle) -> Result<(), DesktopError> {
        // SAFETY: a stale handle is ignored by the OS.
        let _ = unsafe { ShowWindow(hwnd(handle), SW_MAXIMIZE) };
        Ok(())
    }

    fn focus(&self, handle: WindowHandle) -> Result<(), DesktopError> {
        // SAFETY: a stale handle makes the call return FALSE.
        if unsafe { SetForegroundWindow(hwnd(handle)) }.as_bool() {
            Ok(())
        } else {
            Err(DesktopError::OperationFailed {
                operation: "SetForegroundWindow",
                handle,
                message: "foreground change refused".to_string(),
            })
        }
    }

    fn move_window(&self, handle: WindowHandle, rect: Rect) -> Result<(), DesktopError> {
        // SAFETY: plain SetWindowPos call; errors are surfaced through Result.
        unsafe {
            SetWindowPos(
                hwnd(handle),
                None,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOZORDER | SWP_NOACTIVATE,
            )
        }
        .map_err(|e| DesktopError::OperationFailed {
            operation: "SetWindowPos",
            handle,
            message: e.to_string(),
        })
    }

    fn send_keys(&self, keys: &[KeyStroke]) -> Result<(), DesktopError> {
        let inputs: Vec<INPUT> = keys.iter().flat_map(stroke_inputs).collect();
        if inputs.is_empty() {
            return Ok(());
        }
        // SAFETY: inputs is a valid slice of initialized INPUT structures.
        let sent = unsafe { SendInput(&inputs, mem::size_of::<INPUT>() as i32) };
        if sent as usize != inputs.len() {
            return Err(DesktopError::InputFailed {
                message: format!("SendInput delivered {} of {} events", sent, inputs.len()),
            });
        }
        Ok(())
    }
}

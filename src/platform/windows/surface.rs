//! Layered, topmost, non-activating popup window.

use windows::core::w;
use windows::Win32::Foundation::HWND;
use windows::Win32::System::LibraryLoader::GetModuleHandleW;
use windows::Win32::UI::Input::KeyboardAndMouse::{GetCapture, ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DestroyWindow, GetSystemMetrics, GetWindowLongPtrW, SetWindowLongPtrW,
    SetWindowPos, ShowWindow, GWL_EXSTYLE, HWND_TOPMOST, SM_CXSCREEN, SM_CYSCREEN, SWP_NOACTIVATE,
    SWP_NOSIZE, SW_HIDE, SW_SHOWNOACTIVATE, WINDOW_EX_STYLE, WS_EX_LAYERED, WS_EX_NOACTIVATE,
    WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};

use super::present;
use super::window::{ensure_window_class, WINDOW_CLASS};
use crate::error::SurfaceError;
use crate::model::{InteractionMode, SurfaceGeometry};
use crate::render::FrameBuffer;
use crate::surface::SurfaceBackend;

#[derive(Debug, Default)]
pub struct Win32Surface {
    hwnd: Option<HWND>,
    shown: bool,
}

impl Win32Surface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hwnd(&self) -> Option<HWND> {
        self.hwnd
    }

    /// The OS destroyed the window without going through [`SurfaceBackend::destroy`].
    pub(crate) fn forget_window(&mut self) {
        self.hwnd = None;
        self.shown = false;
    }
}

impl SurfaceBackend for Win32Surface {
    fn screen_size(&self) -> (i32, i32) {
        unsafe { (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN)) }
    }

    fn create(&mut self, geometry: &SurfaceGeometry, mode: &InteractionMode) -> Result<(), SurfaceError> {
        let instance = unsafe { GetModuleHandleW(None) }?;
        ensure_window_class(instance.into())?;

        let mut ex_style = WS_EX_LAYERED | WS_EX_TOPMOST | WS_EX_TOOLWINDOW | WS_EX_NOACTIVATE;
        if mode.mouse_transparent {
            ex_style |= WS_EX_TRANSPARENT;
        }

        let hwnd = unsafe {
            CreateWindowExW(
                ex_style,
                WINDOW_CLASS,
                w!("Desktop Lyric"),
                WS_POPUP,
                geometry.x,
                geometry.y,
                geometry.width,
                geometry.height,
                None,
                None,
                Some(instance.into()),
                None,
            )
        }?;

        tracing::debug!(hwnd = ?hwnd.0, "layered window created");
        self.hwnd = Some(hwnd);
        self.shown = false;
        Ok(())
    }

    fn destroy(&mut self) {
        if let Some(hwnd) = self.hwnd.take() {
            if let Err(e) = unsafe { DestroyWindow(hwnd) } {
                tracing::warn!("DestroyWindow failed: {}", e);
            }
        }
        self.shown = false;
    }

    fn is_live(&self) -> bool {
        self.hwnd.is_some()
    }

    fn show(&mut self) {
        if let Some(hwnd) = self.hwnd {
            unsafe {
                let _ = ShowWindow(hwnd, SW_SHOWNOACTIVATE);
            }
            self.shown = true;
        }
    }

    fn hide(&mut self) {
        if let Some(hwnd) = self.hwnd {
            unsafe {
                let _ = ShowWindow(hwnd, SW_HIDE);
            }
        }
        self.shown = false;
    }

    fn is_shown(&self) -> bool {
        self.shown
    }

    fn move_to(&mut self, x: i32, y: i32) {
        let Some(hwnd) = self.hwnd else { return };
        if let Err(e) = unsafe {
            SetWindowPos(hwnd, Some(HWND_TOPMOST), x, y, 0, 0, SWP_NOSIZE | SWP_NOACTIVATE)
        } {
            tracing::debug!("SetWindowPos failed: {}", e);
        }
    }

    fn present(&mut self, frame: &FrameBuffer, geometry: &SurfaceGeometry) -> Result<(), SurfaceError> {
        let hwnd = self.hwnd.ok_or(SurfaceError::NotCreated)?;
        present::update_layered(hwnd, frame, geometry)
    }

    fn set_click_through(&mut self, enabled: bool) {
        let Some(hwnd) = self.hwnd else { return };
        unsafe {
            let current = WINDOW_EX_STYLE(GetWindowLongPtrW(hwnd, GWL_EXSTYLE) as u32);
            let updated = if enabled {
                current | WS_EX_TRANSPARENT
            } else {
                current & !WS_EX_TRANSPARENT
            };
            if updated != current {
                SetWindowLongPtrW(hwnd, GWL_EXSTYLE, updated.0 as isize);
            }
        }
    }

    fn capture_pointer(&mut self) {
        if let Some(hwnd) = self.hwnd {
            unsafe {
                SetCapture(hwnd);
            }
        }
    }

    fn release_pointer(&mut self) {
        let Some(hwnd) = self.hwnd else { return };
        unsafe {
            if GetCapture() == hwnd {
                let _ = ReleaseCapture();
            }
        }
    }
}

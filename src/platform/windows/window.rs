//! Window class, window procedure and the handle-to-overlay registry.
//!
//! The window procedure is a free function, so it reaches its overlay through
//! a thread-local map from `HWND` to a weak reference. Entries are added after
//! `create()` and removed on `destroy()`, on drop, or when the OS tears the
//! window down. A message that arrives while the overlay is already borrowed
//! (re-entrancy from `SetWindowPos`, `ReleaseCapture`, `DestroyWindow`) falls
//! through to `DefWindowProcW`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use windows::core::{w, PCWSTR};
use windows::Win32::Foundation::{GetLastError, ERROR_CLASS_ALREADY_EXISTS, HINSTANCE, HWND, LPARAM, LRESULT, POINT, WPARAM};
use windows::Win32::Graphics::Gdi::ClientToScreen;
use windows::Win32::UI::WindowsAndMessaging::{
    DefWindowProcW, LoadCursorW, RegisterClassW, IDC_ARROW, WM_CAPTURECHANGED, WM_LBUTTONDOWN,
    WM_LBUTTONUP, WM_MOUSEMOVE, WM_NCDESTROY, WNDCLASSW,
};

use super::surface::Win32Surface;
use crate::error::SurfaceError;
use crate::model::{InteractionMode, OverlayStyle};
use crate::overlay::LyricOverlay;

pub(crate) const WINDOW_CLASS: PCWSTR = w!("DesktopLyricWindow");

type SharedOverlay = Rc<RefCell<LyricOverlay<Win32Surface>>>;

thread_local! {
    static WINDOWS: RefCell<HashMap<isize, Weak<RefCell<LyricOverlay<Win32Surface>>>>> =
        RefCell::new(HashMap::new());
}

fn key(hwnd: HWND) -> isize {
    hwnd.0 as isize
}

fn register(hwnd: HWND, overlay: &SharedOverlay) {
    WINDOWS.with(|w| w.borrow_mut().insert(key(hwnd), Rc::downgrade(overlay)));
}

fn unregister(hwnd: HWND) {
    WINDOWS.with(|w| w.borrow_mut().remove(&key(hwnd)));
}

fn lookup(hwnd: HWND) -> Option<SharedOverlay> {
    WINDOWS.with(|w| w.borrow().get(&key(hwnd)).and_then(Weak::upgrade))
}

/// Register the window class once per process; an existing registration is fine.
pub(crate) fn ensure_window_class(instance: HINSTANCE) -> Result<(), SurfaceError> {
    unsafe {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(wndproc),
            hInstance: instance,
            hCursor: LoadCursorW(None, IDC_ARROW).map_err(|e| SurfaceError::ClassRegistration(e.message().to_string()))?,
            lpszClassName: WINDOW_CLASS,
            ..Default::default()
        };
        if RegisterClassW(&wc) == 0 {
            let err = GetLastError();
            if err != ERROR_CLASS_ALREADY_EXISTS {
                return Err(SurfaceError::ClassRegistration(format!("RegisterClassW failed: {:?}", err)));
            }
        }
    }
    Ok(())
}

/// Signed client coordinates from a mouse message (multi-monitor safe).
fn client_point(lparam: LPARAM) -> POINT {
    POINT {
        x: (lparam.0 & 0xFFFF) as u16 as i16 as i32,
        y: ((lparam.0 >> 16) & 0xFFFF) as u16 as i16 as i32,
    }
}

fn screen_point(hwnd: HWND, lparam: LPARAM) -> (i32, i32) {
    let mut pt = client_point(lparam);
    unsafe {
        let _ = ClientToScreen(hwnd, &mut pt);
    }
    (pt.x, pt.y)
}

extern "system" fn wndproc(hwnd: HWND, msg: u32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if msg == WM_NCDESTROY {
        if let Some(overlay) = lookup(hwnd) {
            if let Ok(mut o) = overlay.try_borrow_mut() {
                tracing::info!("desktop lyric window destroyed by the system");
                o.backend_mut().forget_window();
                o.destroy();
            }
        }
        unregister(hwnd);
        return unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) };
    }

    let handled = matches!(
        msg,
        WM_LBUTTONDOWN | WM_MOUSEMOVE | WM_LBUTTONUP | WM_CAPTURECHANGED
    );
    if handled {
        if let Some(overlay) = lookup(hwnd) {
            if let Ok(mut o) = overlay.try_borrow_mut() {
                match msg {
                    WM_LBUTTONDOWN => o.pointer_down(screen_point(hwnd, lparam)),
                    WM_MOUSEMOVE => o.pointer_move(screen_point(hwnd, lparam)),
                    WM_LBUTTONUP => o.pointer_up(),
                    // lparam is the window gaining capture
                    _ => {
                        if lparam.0 != hwnd.0 as isize {
                            o.capture_lost();
                        }
                    }
                }
                return LRESULT(0);
            }
        }
    }

    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

/// Owning handle for a Win32 desktop lyric overlay.
///
/// The host keeps this value; the window procedure only holds a weak reference.
/// Lifecycle goes through this type only, so every window it creates is routed.
pub struct DesktopLyricWindow {
    overlay: SharedOverlay,
    hwnd: Option<HWND>,
}

impl DesktopLyricWindow {
    pub fn new() -> Self {
        Self::with_settings(OverlayStyle::default(), InteractionMode::default())
    }

    pub fn with_settings(style: OverlayStyle, mode: InteractionMode) -> Self {
        Self {
            overlay: Rc::new(RefCell::new(LyricOverlay::with_settings(Win32Surface::new(), style, mode))),
            hwnd: None,
        }
    }

    // === Lifecycle ===

    /// Create the window and route its messages here. Idempotent.
    pub fn create(&mut self) -> bool {
        let Ok(mut overlay) = self.overlay.try_borrow_mut() else {
            tracing::debug!("create() re-entered; ignoring");
            return false;
        };
        if !overlay.create() {
            return false;
        }
        let hwnd = overlay.backend().hwnd();
        drop(overlay);

        if let Some(hwnd) = hwnd {
            if self.hwnd != Some(hwnd) {
                if let Some(old) = self.hwnd.take() {
                    unregister(old);
                }
                register(hwnd, &self.overlay);
                self.hwnd = Some(hwnd);
            }
        }
        true
    }

    /// Bridge name for [`create`](Self::create).
    pub fn initialize(&mut self) -> bool {
        self.create()
    }

    pub fn destroy(&mut self) {
        if let Some(hwnd) = self.hwnd.take() {
            unregister(hwnd);
        }
        if let Ok(mut overlay) = self.overlay.try_borrow_mut() {
            overlay.destroy();
        }
    }

    pub fn is_created(&self) -> bool {
        self.with(|o| o.is_created()).unwrap_or(false)
    }

    pub fn hwnd(&self) -> Option<HWND> {
        self.hwnd
    }

    // === Bridge ===

    pub fn show(&self) {
        self.with(|o| o.show());
    }

    pub fn hide(&self) {
        self.with(|o| o.hide());
    }

    pub fn is_visible(&self) -> bool {
        self.with(|o| o.is_visible()).unwrap_or(false)
    }

    pub fn set_lyric_text(&self, text: &str) {
        self.with(|o| o.set_lyric_text(text));
    }

    pub fn set_text_utf16(&self, units: &[u16]) {
        self.with(|o| o.set_text_utf16(units));
    }

    pub fn set_font_size(&self, px: i32) {
        self.with(|o| o.set_font_size(px));
    }

    pub fn set_text_color(&self, argb: u32) {
        self.with(|o| o.set_text_color(argb));
    }

    pub fn set_stroke_color(&self, argb: u32) {
        self.with(|o| o.set_stroke_color(argb));
    }

    pub fn set_stroke_width(&self, px: i32) {
        self.with(|o| o.set_stroke_width(px));
    }

    pub fn set_position(&self, x: i32, y: i32) {
        self.with(|o| o.set_position(x, y));
    }

    pub fn get_position(&self) -> Option<(i32, i32)> {
        self.with(|o| o.get_position())
    }

    pub fn set_draggable(&self, draggable: bool) {
        self.with(|o| o.set_draggable(draggable));
    }

    pub fn set_mouse_transparent(&self, transparent: bool) {
        self.with(|o| o.set_mouse_transparent(transparent));
    }

    /// `None` while the overlay is busy handling a window message.
    fn with<R>(&self, f: impl FnOnce(&mut LyricOverlay<Win32Surface>) -> R) -> Option<R> {
        match self.overlay.try_borrow_mut() {
            Ok(mut overlay) => Some(f(&mut overlay)),
            Err(_) => {
                tracing::debug!("overlay busy; call skipped");
                None
            }
        }
    }
}

impl Default for DesktopLyricWindow {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DesktopLyricWindow {
    fn drop(&mut self) {
        self.destroy();
    }
}

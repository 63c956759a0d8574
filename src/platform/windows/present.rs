//! Frame presentation via `UpdateLayeredWindow`.
//!
//! Per-pixel alpha transparency: the frame is copied into a top-down 32-bit
//! DIB section (premultiplied BGRA) and handed to the compositor in one call.
//! Every GDI object is owned by a guard and released on every exit path.

use windows::Win32::Foundation::{COLORREF, HWND, POINT, SIZE};
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS, HBITMAP, HDC, HGDIOBJ,
};
use windows::Win32::UI::WindowsAndMessaging::{UpdateLayeredWindow, ULW_ALPHA};

use crate::error::SurfaceError;
use crate::model::SurfaceGeometry;
use crate::render::FrameBuffer;

/// Screen DC from `GetDC(None)`.
struct ScreenDc(HDC);

impl ScreenDc {
    fn acquire() -> Result<Self, SurfaceError> {
        let dc = unsafe { GetDC(None) };
        if dc.is_invalid() {
            return Err(SurfaceError::BufferAllocation("GetDC failed".into()));
        }
        Ok(Self(dc))
    }
}

impl Drop for ScreenDc {
    fn drop(&mut self) {
        unsafe {
            ReleaseDC(None, self.0);
        }
    }
}

/// Memory DC compatible with the screen.
struct MemoryDc(HDC);

impl MemoryDc {
    fn compatible_with(screen: &ScreenDc) -> Result<Self, SurfaceError> {
        let dc = unsafe { CreateCompatibleDC(Some(screen.0)) };
        if dc.is_invalid() {
            return Err(SurfaceError::BufferAllocation("CreateCompatibleDC failed".into()));
        }
        Ok(Self(dc))
    }
}

impl Drop for MemoryDc {
    fn drop(&mut self) {
        unsafe {
            let _ = DeleteDC(self.0);
        }
    }
}

/// A DIB section selected into a memory DC; the previous object is restored on drop.
struct DibSection<'a> {
    dc: &'a MemoryDc,
    bitmap: HBITMAP,
    previous: HGDIOBJ,
    bits: *mut u8,
    len: usize,
}

impl<'a> DibSection<'a> {
    fn select(dc: &'a MemoryDc, width: i32, height: i32) -> Result<Self, SurfaceError> {
        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
        let bitmap = unsafe { CreateDIBSection(Some(dc.0), &bmi, DIB_RGB_COLORS, &mut bits, None, 0) }
            .map_err(|e| SurfaceError::BufferAllocation(e.message().to_string()))?;
        if bits.is_null() {
            unsafe {
                let _ = DeleteObject(bitmap.into());
            }
            return Err(SurfaceError::BufferAllocation("DIB section has no pixel bits".into()));
        }

        let previous = unsafe { SelectObject(dc.0, bitmap.into()) };
        Ok(Self {
            dc,
            bitmap,
            previous,
            bits: bits.cast(),
            len: width as usize * height as usize * 4,
        })
    }

    fn pixels_mut(&mut self) -> &mut [u8] {
        // SAFETY: `bits` points at `len` bytes owned by `bitmap`, which lives as long as self.
        unsafe { std::slice::from_raw_parts_mut(self.bits, self.len) }
    }
}

impl Drop for DibSection<'_> {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.dc.0, self.previous);
            let _ = DeleteObject(self.bitmap.into());
        }
    }
}

/// Replace the layered window's content with `frame`, positioned at `geometry`.
pub fn update_layered(hwnd: HWND, frame: &FrameBuffer, geometry: &SurfaceGeometry) -> Result<(), SurfaceError> {
    let (width, height) = (frame.width() as i32, frame.height() as i32);
    if width != geometry.width || height != geometry.height {
        return Err(SurfaceError::Presentation(format!(
            "frame is {}x{} but surface is {}x{}",
            width, height, geometry.width, geometry.height
        )));
    }

    let screen_dc = ScreenDc::acquire()?;
    let mem_dc = MemoryDc::compatible_with(&screen_dc)?;
    let mut dib = DibSection::select(&mem_dc, width, height)?;
    frame.write_bgra(dib.pixels_mut());

    let pt_src = POINT { x: 0, y: 0 };
    let size = SIZE {
        cx: width,
        cy: height,
    };
    let pt_dst = POINT {
        x: geometry.x,
        y: geometry.y,
    };

    // AC_SRC_OVER, AC_SRC_ALPHA: per-pixel alpha from premultiplied bits
    let blend = BLENDFUNCTION {
        BlendOp: 0,
        BlendFlags: 0,
        SourceConstantAlpha: 255,
        AlphaFormat: 1,
    };

    unsafe {
        UpdateLayeredWindow(
            hwnd,
            Some(screen_dc.0),
            Some(&pt_dst),
            Some(&size),
            Some(mem_dc.0),
            Some(&pt_src),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        )
    }
    .map_err(|e| SurfaceError::Presentation(e.message().to_string()))
}

//! System accent color from the DWM colorization setting.

use windows::core::w;
use windows::Win32::System::Registry::{RegGetValueW, HKEY_CURRENT_USER, RRF_RT_REG_DWORD};

use crate::model::{accent_or_default, Argb};

/// Read `HKCU\SOFTWARE\Microsoft\Windows\DWM\ColorizationColor`.
///
/// Missing key, wrong value type or access denied all yield the fallback accent.
pub fn accent_color() -> Argb {
    accent_or_default(read_colorization_color())
}

fn read_colorization_color() -> Option<u32> {
    let mut value: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;
    let status = unsafe {
        RegGetValueW(
            HKEY_CURRENT_USER,
            w!("SOFTWARE\\Microsoft\\Windows\\DWM"),
            w!("ColorizationColor"),
            RRF_RT_REG_DWORD,
            None,
            Some(&mut value as *mut u32 as *mut std::ffi::c_void),
            Some(&mut size),
        )
    };
    if status.is_ok() {
        Some(value)
    } else {
        tracing::debug!("accent color unavailable: {:?}", status);
        None
    }
}

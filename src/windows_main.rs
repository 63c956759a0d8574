//! Windows entry point: one overlay, a thread timer cycling lyric lines, and
//! the message loop.

use anyhow::{bail, Result};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, KillTimer, SetTimer, TranslateMessage, MSG, WM_TIMER,
};

use desktop_lyric::config::OverlayConfig;
use desktop_lyric::DesktopLyricWindow;

const LINE_INTERVAL_MS: u32 = 3000;

pub fn run(config: &OverlayConfig, lines: Vec<String>) -> Result<()> {
    let mut window = DesktopLyricWindow::with_settings(config.style(), config.interaction_mode());
    if !window.create() {
        bail!("could not create the desktop lyric window");
    }

    let accent = desktop_lyric::accent_color();
    tracing::debug!(accent = %accent.to_hex(), "system accent color");

    let mut current = 0;
    window.set_lyric_text(lines.first().map(String::as_str).unwrap_or_default());
    window.show();

    // Thread timer: WM_TIMER arrives with a null hwnd and is handled here.
    let timer = unsafe { SetTimer(None, 0, LINE_INTERVAL_MS, None) };

    unsafe {
        let mut msg = MSG::default();
        while GetMessageW(&mut msg, None, 0, 0).as_bool() {
            if msg.message == WM_TIMER && msg.hwnd.is_invalid() && lines.len() > 1 {
                current = (current + 1) % lines.len();
                window.set_lyric_text(&lines[current]);
                continue;
            }
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);

            if !window.is_created() {
                tracing::info!("window gone; leaving message loop");
                break;
            }
        }

        if timer != 0 {
            let _ = KillTimer(None, timer);
        }
    }

    window.destroy();
    Ok(())
}

//! Demo bootstrap: `desktop-lyric [LINE]...`
//!
//! On Windows the lines cycle in a live overlay. Elsewhere one frame per line
//! is rendered headlessly and summarised in the log.

#[cfg(target_os = "windows")]
mod windows_main;

use anyhow::Result;

use desktop_lyric::{config, logging};

#[cfg(not(target_os = "windows"))]
use headless::run;
#[cfg(target_os = "windows")]
use windows_main::run;

fn main() -> Result<()> {
    let cfg = config::load();
    logging::init(cfg.debug_logging);
    tracing::debug!(path = %config::config_path().display(), ?cfg, "config loaded");

    let mut lines: Vec<String> = std::env::args().skip(1).collect();
    if lines.is_empty() {
        lines.push("Desktop Lyric".to_string());
    }

    run(&cfg, lines)
}

#[cfg(not(target_os = "windows"))]
mod headless {
    use anyhow::{bail, Result};

    use desktop_lyric::config::OverlayConfig;
    use desktop_lyric::{HeadlessSurface, LyricOverlay};

    pub fn run(config: &OverlayConfig, lines: Vec<String>) -> Result<()> {
        let mut overlay = LyricOverlay::with_settings(
            HeadlessSurface::default(),
            config.style(),
            config.interaction_mode(),
        );
        if !overlay.create() {
            bail!("could not create the headless surface");
        }
        overlay.show();

        for line in &lines {
            overlay.set_lyric_text(line);
            let covered = overlay
                .backend()
                .last_frame
                .as_deref()
                .map(|bgra| bgra.chunks_exact(4).filter(|px| px[3] != 0).count())
                .unwrap_or(0);
            tracing::info!(line = %line, covered, "rendered lyric line");
        }

        let (x, y) = overlay.position();
        tracing::info!(x, y, presents = overlay.backend().presents, "headless run finished");
        overlay.destroy();
        Ok(())
    }
}

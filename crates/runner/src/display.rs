use std::env;
use std::path::Path;
use std::process::{Command, Stdio};

/// Whether an interactive graphics session is reachable from this process.
pub fn display_available() -> bool {
    if cfg!(any(target_os = "macos", target_os = "windows")) {
        return true;
    }
    has_display_var("DISPLAY") || has_display_var("WAYLAND_DISPLAY")
}

fn has_display_var(name: &str) -> bool {
    env::var_os(name).is_some_and(|v| !v.is_empty())
}

fn viewer_command(path: &Path) -> Command {
    if cfg!(target_os = "macos") {
        let mut cmd = Command::new("open");
        cmd.arg(path);
        cmd
    } else if cfg!(target_os = "windows") {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", "start", ""]).arg(path);
        cmd
    } else {
        let mut cmd = Command::new("xdg-open");
        cmd.arg(path);
        cmd
    }
}

/// Opens the rendered chart in the platform image viewer.
///
/// Skipped when no display is available. A viewer that fails to launch is
/// logged and otherwise ignored; the chart is already on disk.
pub fn show_chart(path: &Path) {
    if !display_available() {
        log::debug!("No display available, skipping chart preview.");
        return;
    }

    let spawned = viewer_command(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn();

    match spawned {
        Ok(_) => log::info!("Opened {} in the system viewer.", path.display()),
        Err(e) => log::warn!("Could not open {}: {}. Continuing.", path.display(), e),
    }
}

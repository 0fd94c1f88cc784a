//! Applying a chosen wallpaper.
//!
//! Both effects are best-effort: failures are logged and never reach the
//! picker, and neither effect depends on the other.

use std::path::{Path, PathBuf};
use std::process::{Child, Command, Stdio};

use thiserror::Error;
use tracing::{debug, error, info, warn};

use crate::config::PickerConfig;
use crate::models::WallpaperItem;

#[derive(Debug, Error)]
pub enum ApplyError {
    #[error("failed to link {link:?} -> {target:?}: {source}")]
    Symlink {
        target: PathBuf,
        link: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to launch {program:?}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("wallpaper command is empty")]
    EmptyCommand,
}

/// Point `link` at `target`, replacing whatever is there.
///
/// A temporary sibling link is created first and renamed over `link`, so
/// readers never observe a missing link.
pub fn replace_symlink(target: &Path, link: &Path) -> Result<(), ApplyError> {
    let wrap = |source: std::io::Error| ApplyError::Symlink {
        target: target.to_path_buf(),
        link: link.to_path_buf(),
        source,
    };

    if let Some(parent) = link.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }

    let file_name = link
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "background".to_string());
    let tmp = link.with_file_name(format!(".{}.wallpick-{}", file_name, std::process::id()));

    // Leftover from an interrupted run.
    let _ = std::fs::remove_file(&tmp);

    std::os::unix::fs::symlink(target, &tmp).map_err(wrap)?;
    if let Err(source) = std::fs::rename(&tmp, link) {
        let _ = std::fs::remove_file(&tmp);
        return Err(wrap(source));
    }
    Ok(())
}

/// Launch `command` with `path` appended, without waiting for it.
///
/// A reaper thread logs the exit status while the picker is still alive.
pub fn launch_command(command: &[String], path: &Path) -> Result<(), ApplyError> {
    let (program, args) = command.split_first().ok_or(ApplyError::EmptyCommand)?;

    let child = Command::new(program)
        .args(args)
        .arg(path)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| ApplyError::Spawn {
            program: program.clone(),
            source,
        })?;

    debug!(program = %program, pid = child.id(), "Launched wallpaper command");
    reap(program.clone(), child);
    Ok(())
}

fn reap(program: String, mut child: Child) {
    std::thread::spawn(move || match child.wait() {
        Ok(status) if status.success() => debug!(program = %program, "Wallpaper command finished"),
        Ok(status) => warn!(program = %program, %status, "Wallpaper command failed"),
        Err(err) => warn!(program = %program, error = %err, "Failed to wait for wallpaper command"),
    });
}

/// Apply `item`: repoint the current-background link and run the wallpaper
/// command. Errors are logged; this never fails.
pub fn apply(config: &PickerConfig, item: &WallpaperItem) {
    info!(file = %item.filename, "Applying wallpaper");

    if let Err(err) = replace_symlink(&item.path, &config.current_link) {
        error!(error = %err, "Error linking wallpaper");
    }

    if let Err(err) = launch_command(&config.command, &item.path) {
        error!(error = %err, "Error setting wallpaper");
    }
}

use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::{Arc, Mutex};

#[derive(Debug)]
pub enum ShellError {
    EmptyTarget,
    Spawn(String),
}

impl fmt::Display for ShellError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShellError::EmptyTarget => write!(f, "cannot open an empty target"),
            ShellError::Spawn(msg) => write!(f, "failed to open target: {msg}"),
        }
    }
}

impl std::error::Error for ShellError {}

/// Hands targets to the desktop: URLs to the default browser, paths to
/// their default application, reveals to the file manager. All of it is
/// fire and forget; the spawned opener is never awaited.
pub trait ShellActions {
    fn open_external(&self, url: &str) -> Result<(), ShellError>;
    fn open_path(&self, path: &Path) -> Result<(), ShellError>;
    fn reveal_path(&self, path: &Path) -> Result<(), ShellError>;
}

pub struct SystemShell;

impl ShellActions for SystemShell {
    fn open_external(&self, url: &str) -> Result<(), ShellError> {
        if url.trim().is_empty() {
            return Err(ShellError::EmptyTarget);
        }
        spawn_opener(url)
    }

    fn open_path(&self, path: &Path) -> Result<(), ShellError> {
        if path.as_os_str().is_empty() {
            return Err(ShellError::EmptyTarget);
        }
        spawn_opener(&path.to_string_lossy())
    }

    fn reveal_path(&self, path: &Path) -> Result<(), ShellError> {
        if path.as_os_str().is_empty() {
            return Err(ShellError::EmptyTarget);
        }

        #[cfg(target_os = "windows")]
        {
            Command::new("explorer")
                .arg("/select,")
                .arg(path)
                .spawn()
                .map(drop)
                .map_err(|err| ShellError::Spawn(format!("{}: {err}", path.display())))
        }

        #[cfg(target_os = "macos")]
        {
            Command::new("open")
                .arg("-R")
                .arg(path)
                .spawn()
                .map(drop)
                .map_err(|err| ShellError::Spawn(format!("{}: {err}", path.display())))
        }

        #[cfg(not(any(target_os = "windows", target_os = "macos")))]
        {
            // No portable reveal on other platforms; opening the parent
            // folder is the closest equivalent.
            let target = path.parent().unwrap_or(path);
            spawn_opener(&target.to_string_lossy())
        }
    }
}

fn spawn_opener(target: &str) -> Result<(), ShellError> {
    #[cfg(target_os = "windows")]
    let spawned = Command::new("cmd")
        .arg("/C")
        .arg("start")
        .arg("")
        .arg(target)
        .spawn();

    #[cfg(target_os = "macos")]
    let spawned = Command::new("open").arg(target).spawn();

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    let spawned = Command::new("xdg-open").arg(target).spawn();

    spawned
        .map(drop)
        .map_err(|err| ShellError::Spawn(format!("{target}: {err}")))
}

pub fn default_shell() -> Box<dyn ShellActions> {
    Box::new(SystemShell)
}

/// Stand-in before runtime providers attach; accepts every call silently.
pub struct NoopShell;

impl ShellActions for NoopShell {
    fn open_external(&self, _url: &str) -> Result<(), ShellError> {
        Ok(())
    }

    fn open_path(&self, _path: &Path) -> Result<(), ShellError> {
        Ok(())
    }

    fn reveal_path(&self, _path: &Path) -> Result<(), ShellError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCall {
    OpenExternal(String),
    OpenPath(PathBuf),
    RevealPath(PathBuf),
}

/// Test double recording every call. Clones share the same log, so a handle
/// kept outside the service observes calls made through it.
#[derive(Clone, Default)]
pub struct RecordingShell {
    calls: Arc<Mutex<Vec<ShellCall>>>,
}

impl RecordingShell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<ShellCall> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    fn record(&self, call: ShellCall) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(call);
        }
    }
}

impl ShellActions for RecordingShell {
    fn open_external(&self, url: &str) -> Result<(), ShellError> {
        self.record(ShellCall::OpenExternal(url.to_string()));
        Ok(())
    }

    fn open_path(&self, path: &Path) -> Result<(), ShellError> {
        self.record(ShellCall::OpenPath(path.to_path_buf()));
        Ok(())
    }

    fn reveal_path(&self, path: &Path) -> Result<(), ShellError> {
        self.record(ShellCall::RevealPath(path.to_path_buf()));
        Ok(())
    }
}

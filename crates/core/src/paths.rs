use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Windows,
    /// macOS, Linux and the other unixes
    Posix,
    Other,
}

impl OsFamily {
    pub fn current() -> Self {
        Self::from_family(std::env::consts::FAMILY)
    }

    pub fn from_family(family: &str) -> Self {
        match family {
            "windows" => OsFamily::Windows,
            "unix" => OsFamily::Posix,
            _ => OsFamily::Other,
        }
    }
}

/// Directory downloads are written to on this machine
pub fn get_download_dir() -> PathBuf {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    download_dir_for(OsFamily::current(), dirs::home_dir().as_deref(), &cwd)
}

/// `<home>/Downloads` on Windows and POSIX-like systems, the working directory elsewhere.
///
/// Never checks that the directory exists; yt-dlp creates it when writing.
pub fn download_dir_for(os: OsFamily, home: Option<&Path>, cwd: &Path) -> PathBuf {
    match (os, home) {
        (OsFamily::Windows | OsFamily::Posix, Some(home)) => home.join("Downloads"),
        _ => cwd.to_path_buf(),
    }
}

use std::path::{Path, PathBuf};

/// Directory holding the GUI configuration and log files.
#[derive(Clone, Debug, PartialEq)]
pub struct StudioDirectory(PathBuf);

impl StudioDirectory {
    pub fn new(p: PathBuf) -> Self {
        StudioDirectory(p)
    }

    pub fn new_default() -> Result<Self, Box<dyn std::error::Error>> {
        default_datadir().map(StudioDirectory::new)
    }

    pub fn exists(&self) -> bool {
        self.0.as_path().exists()
    }

    pub fn init(&self) -> Result<(), Box<dyn std::error::Error>> {
        if !self.exists() {
            std::fs::create_dir_all(self.0.as_path())?;
        }
        Ok(())
    }

    pub fn path(&self) -> &Path {
        self.0.as_path()
    }
}

/// Get the absolute path to the onebox configuration folder.
///
/// This is a "onebox" directory in the XDG standard configuration directory
/// for all OSes but Linux-based ones, for which it's `~/.onebox`. We want to
/// have the configuration file and the log file in the same folder, but the
/// XDG specification gives Linux a data directory (`~/.local/share/`)
/// different from the configuration one (`~/.config/`).
fn default_datadir() -> Result<PathBuf, Box<dyn std::error::Error>> {
    #[cfg(target_os = "linux")]
    let configs_dir = dirs::home_dir();

    #[cfg(not(target_os = "linux"))]
    let configs_dir = dirs::config_dir();

    if let Some(mut path) = configs_dir {
        #[cfg(target_os = "linux")]
        path.push(".onebox");

        #[cfg(not(target_os = "linux"))]
        path.push("OneBox");

        return Ok(path);
    }

    Err("Failed to get default data directory".into())
}

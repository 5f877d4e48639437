use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn state_dir() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            Some(
                PathBuf::from(home)
                    .join(".local")
                    .join("state")
                    .join("swot"),
            )
        } else {
            ProjectDirs::from("", "", "swot").map(|proj_dirs| proj_dirs.data_local_dir().to_path_buf())
        }
    }

    /// The persisted progress record (visited pages + quiz scores)
    pub fn progress_path() -> Option<PathBuf> {
        Self::state_dir().map(|d| d.join("progress.json"))
    }

    /// The answer history database
    pub fn db_path() -> Option<PathBuf> {
        Self::state_dir().map(|d| d.join("history.db"))
    }

    /// Append-only log of completed quiz results
    pub fn results_log_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "swot").map(|proj_dirs| proj_dirs.config_dir().join("results.csv"))
    }

    /// The persisted app settings
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "swot").map(|proj_dirs| proj_dirs.config_dir().join("config.json"))
    }
}

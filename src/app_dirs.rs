use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    pub fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "slowpoke").map(|pd| pd.config_dir().join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("slowpoke");
            Some(state_dir.join("slowpoke.log"))
        } else {
            ProjectDirs::from("", "", "slowpoke")
                .map(|proj_dirs| proj_dirs.data_local_dir().join("slowpoke.log"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_end_in_expected_files() {
        if let Some(p) = AppDirs::config_path() {
            assert!(p.ends_with("config.json"));
        }
        if let Some(p) = AppDirs::log_path() {
            assert!(p.ends_with("slowpoke.log"));
        }
    }
}

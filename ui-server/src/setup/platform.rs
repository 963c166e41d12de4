//! Client configuration file locations

use std::path::{Path, PathBuf};

const CLAUDE_CONFIG_FILE: &str = "claude_desktop_config.json";

/// Where each client keeps its configuration on this machine
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientPaths {
    /// VS Code user `settings.json`, read by Cline
    pub vscode_settings: Option<PathBuf>,
    /// Claude config candidates, most preferred first
    pub claude_candidates: Vec<PathBuf>,
}

impl ClientPaths {
    /// Locations for the current user and platform
    pub fn detect() -> Self {
        Self::from_dirs(dirs::config_dir().as_deref(), dirs::home_dir().as_deref())
    }

    /// Locations relative to a config directory (`~/.config`,
    /// `~/Library/Application Support` or `%APPDATA%`) and a home directory
    pub fn from_dirs(config_dir: Option<&Path>, home_dir: Option<&Path>) -> Self {
        let vscode_settings =
            config_dir.map(|dir| dir.join("Code").join("User").join("settings.json"));

        let mut claude_candidates = Vec::new();
        if let Some(dir) = config_dir {
            claude_candidates.push(dir.join("Claude").join(CLAUDE_CONFIG_FILE));
            if cfg!(target_os = "linux") {
                claude_candidates.push(dir.join("claude").join(CLAUDE_CONFIG_FILE));
            }
        }
        if cfg!(target_os = "linux")
            && let Some(home) = home_dir
        {
            claude_candidates.push(home.join(".claude").join(CLAUDE_CONFIG_FILE));
        }

        Self {
            vscode_settings,
            claude_candidates,
        }
    }

    /// First Claude config that already exists, else the preferred location
    pub fn claude_config(&self) -> Option<PathBuf> {
        self.claude_candidates
            .iter()
            .find(|path| path.exists())
            .or_else(|| self.claude_candidates.first())
            .cloned()
    }
}

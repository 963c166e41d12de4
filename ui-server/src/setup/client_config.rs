//! Reading and updating MCP client configuration files

use crate::error::SetupError;
use chrono::Local;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Path, PathBuf};

/// Host applications the wizard knows how to configure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClientKind {
    /// Cline extension, configured through VS Code `settings.json`
    Cline,
    /// Claude Desktop
    Claude,
}

impl ClientKind {
    /// Top-level key holding server entries
    pub fn servers_key(self) -> &'static str {
        match self {
            ClientKind::Cline => "cline.mcpServers",
            ClientKind::Claude => "mcpServers",
        }
    }

    /// Human readable name
    pub fn display_name(self) -> &'static str {
        match self {
            ClientKind::Cline => "Cline (VS Code)",
            ClientKind::Claude => "Claude Desktop",
        }
    }
}

/// Server entry written into a client config
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerEntry {
    /// Absolute path of the `kd-ui` executable
    pub command: String,
    /// Arguments, always `["serve"]`
    pub args: Vec<String>,
    /// Working directory
    pub cwd: String,
}

impl ServerEntry {
    /// Entry launching `command serve` from `cwd`
    pub fn new(command: &Path, cwd: &Path) -> Self {
        Self {
            command: command.display().to_string(),
            args: vec!["serve".to_string()],
            cwd: cwd.display().to_string(),
        }
    }
}

/// A client configuration file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfigFile {
    path: PathBuf,
    kind: ClientKind,
}

impl ClientConfigFile {
    /// Config file at `path` in the format of `kind`
    pub fn new(path: impl Into<PathBuf>, kind: ClientKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// File location
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Client this file belongs to
    pub fn kind(&self) -> ClientKind {
        self.kind
    }

    /// Whether the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Parsed top-level object; a missing file reads as empty
    pub fn read(&self) -> Result<Map<String, Value>, SetupError> {
        if !self.exists() {
            return Ok(Map::new());
        }
        let text = fs::read_to_string(&self.path).map_err(|e| SetupError::io(&self.path, e))?;
        if text.trim().is_empty() {
            return Ok(Map::new());
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(Value::Object(map)) => Ok(map),
            Ok(_) => Err(SetupError::Parse {
                path: self.path.clone(),
                message: "top level is not a JSON object".to_string(),
            }),
            Err(e) => Err(SetupError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }),
        }
    }

    /// Copy the file next to itself as `STEM.backup_YYYYMMDD_HHMMSS.json`.
    /// Returns `None` when there is nothing to back up.
    pub fn backup(&self) -> Result<Option<PathBuf>, SetupError> {
        if !self.exists() {
            return Ok(None);
        }
        let stem = self
            .path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let timestamp = Local::now().format("%Y%m%d_%H%M%S");
        let backup = self
            .path
            .with_file_name(format!("{stem}.backup_{timestamp}.json"));
        fs::copy(&self.path, &backup).map_err(|e| SetupError::io(&backup, e))?;
        Ok(Some(backup))
    }

    /// Insert or replace `name` in the servers section.
    ///
    /// The existing file is parsed before anything is written, so a file that
    /// fails to parse is left untouched. Returns the backup path, if any.
    pub fn upsert(&self, name: &str, entry: &ServerEntry) -> Result<Option<PathBuf>, SetupError> {
        let mut config = self.read()?;
        let key = self.kind.servers_key();

        let servers = config
            .entry(key.to_string())
            .or_insert_with(|| Value::Object(Map::new()));
        let Value::Object(servers) = servers else {
            return Err(SetupError::InvalidSection {
                path: self.path.clone(),
                key: key.to_string(),
            });
        };
        let entry = serde_json::to_value(entry).map_err(|e| SetupError::Parse {
            path: self.path.clone(),
            message: e.to_string(),
        })?;
        servers.insert(name.to_string(), entry);

        let backup = self.backup()?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| SetupError::io(parent, e))?;
        }
        let text = serde_json::to_string_pretty(&Value::Object(config)).map_err(|e| {
            SetupError::Parse {
                path: self.path.clone(),
                message: e.to_string(),
            }
        })?;
        fs::write(&self.path, text + "\n").map_err(|e| SetupError::io(&self.path, e))?;
        Ok(backup)
    }

    /// Entry stored under `name`, if present and well formed
    pub fn server_entry(&self, name: &str) -> Result<Option<ServerEntry>, SetupError> {
        let config = self.read()?;
        Ok(config
            .get(self.kind.servers_key())
            .and_then(|servers| servers.get(name))
            .and_then(|entry| serde_json::from_value(entry.clone()).ok()))
    }

    /// Whether `name` is already configured
    pub fn has_server(&self, name: &str) -> Result<bool, SetupError> {
        let config = self.read()?;
        Ok(config
            .get(self.kind.servers_key())
            .and_then(Value::as_object)
            .is_some_and(|servers| servers.contains_key(name)))
    }
}

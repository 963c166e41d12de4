//! Interactive wizard registering `kd-ui` with MCP clients
//!
//! Three steps: resolve the server executable, write an entry into each
//! selected client's config file (backing up existing files first), then
//! read every written file back to confirm the entry.

pub mod client_config;
pub mod platform;

pub use client_config::{ClientConfigFile, ClientKind, ServerEntry};
pub use platform::ClientPaths;

use crate::backend::SERVER_NAME;
use crate::error::SetupError;
use clap::ValueEnum;
use colored::Colorize;
use dialoguer::theme::ColorfulTheme;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Which clients to configure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ClientChoice {
    /// Cline in VS Code
    Cline,
    /// Claude Desktop
    Claude,
    /// Every supported client
    #[default]
    All,
}

impl ClientChoice {
    /// Clients covered by this choice
    pub fn kinds(self) -> Vec<ClientKind> {
        match self {
            ClientChoice::Cline => vec![ClientKind::Cline],
            ClientChoice::Claude => vec![ClientKind::Claude],
            ClientChoice::All => vec![ClientKind::Cline, ClientKind::Claude],
        }
    }
}

/// Wizard options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupOptions {
    /// Clients to configure
    pub clients: ClientChoice,
    /// Skip the per-client confirmation
    pub assume_yes: bool,
    /// Key of the server entry
    pub server_name: String,
}

impl Default for SetupOptions {
    fn default() -> Self {
        Self {
            clients: ClientChoice::All,
            assume_yes: false,
            server_name: SERVER_NAME.to_string(),
        }
    }
}

/// Source of yes/no answers
pub trait Confirm {
    /// Ask `question`; `Err(Cancelled)` when no answer can be read
    fn confirm(&mut self, question: &str) -> Result<bool, SetupError>;
}

/// Interactive terminal prompt, defaulting to yes
pub struct TerminalConfirm {
    theme: ColorfulTheme,
}

impl TerminalConfirm {
    /// Prompt with the colorful theme
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalConfirm {
    fn default() -> Self {
        Self::new()
    }
}

impl Confirm for TerminalConfirm {
    fn confirm(&mut self, question: &str) -> Result<bool, SetupError> {
        let answer = dialoguer::Confirm::with_theme(&self.theme)
            .with_prompt(question)
            .default(true)
            .interact_opt()
            .map_err(|e| {
                debug!(error = %e, "Prompt failed");
                SetupError::Cancelled
            })?;
        answer.ok_or(SetupError::Cancelled)
    }
}

/// Resolved server executable and working directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Environment {
    /// Absolute path of the running binary
    pub executable: PathBuf,
    /// Directory the client should launch it from
    pub working_dir: PathBuf,
}

impl Environment {
    /// Environment of the running process
    pub fn detect() -> Result<Self, SetupError> {
        let exe = std::env::current_exe()
            .map_err(|e| SetupError::Environment(format!("cannot locate executable: {e}")))?;
        Self::from_executable(&exe)
    }

    /// Environment for a given executable path
    pub fn from_executable(exe: &Path) -> Result<Self, SetupError> {
        let executable = exe.canonicalize().map_err(|e| {
            SetupError::Environment(format!("cannot resolve {}: {e}", exe.display()))
        })?;
        let working_dir = executable
            .parent()
            .map(Path::to_path_buf)
            .ok_or_else(|| {
                SetupError::Environment(format!("{} has no parent directory", executable.display()))
            })?;
        Ok(Self {
            executable,
            working_dir,
        })
    }
}

/// A client whose config was written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfiguredClient {
    /// Client
    pub kind: ClientKind,
    /// Config file written
    pub path: PathBuf,
    /// Copy of the previous contents, if the file existed
    pub backup: Option<PathBuf>,
}

/// Outcome of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupReport {
    /// Resolved environment
    pub environment: Environment,
    /// Clients configured and validated
    pub configured: Vec<ConfiguredClient>,
    /// Clients the user declined
    pub skipped: Vec<ClientKind>,
}

/// The setup wizard
pub struct SetupWizard<C, W> {
    options: SetupOptions,
    paths: ClientPaths,
    environment: Option<Environment>,
    confirm: C,
    out: W,
}

impl<C: Confirm, W: Write> SetupWizard<C, W> {
    /// Wizard over the detected client locations
    pub fn new(options: SetupOptions, confirm: C, out: W) -> Self {
        Self::with_paths(options, ClientPaths::detect(), confirm, out)
    }

    /// Wizard over explicit client locations
    pub fn with_paths(options: SetupOptions, paths: ClientPaths, confirm: C, out: W) -> Self {
        Self {
            options,
            paths,
            environment: None,
            confirm,
            out,
        }
    }

    /// Use `environment` instead of resolving the running executable
    pub fn with_environment(mut self, environment: Environment) -> Self {
        self.environment = Some(environment);
        self
    }

    /// Run all three steps
    pub fn run(mut self) -> Result<SetupReport, SetupError> {
        info!(server = %self.options.server_name, clients = ?self.options.clients, "Starting setup");

        let environment = self.check_environment()?;
        let (configured, skipped) = self.configure_clients(&environment)?;
        self.validate(&environment, &configured)?;

        self.say("")?;
        self.say(&"Setup complete!".green().bold().to_string())?;
        for client in &configured {
            match client.kind {
                ClientKind::Cline => self.say("  - Restart VS Code for Cline changes to take effect")?,
                ClientKind::Claude => self.say("  - Restart Claude Desktop if it is open")?,
            }
        }

        Ok(SetupReport {
            environment,
            configured,
            skipped,
        })
    }

    fn check_environment(&mut self) -> Result<Environment, SetupError> {
        self.header("[1/3] Environment")?;
        let environment = match self.environment.clone() {
            Some(environment) => environment,
            None => Environment::detect().inspect_err(|e| warn!(error = %e, "Environment check failed"))?,
        };
        self.say(&format!("✓ Server executable: {}", environment.executable.display()))?;
        self.say(&format!("✓ Working directory: {}", environment.working_dir.display()))?;
        Ok(environment)
    }

    fn configure_clients(
        &mut self,
        environment: &Environment,
    ) -> Result<(Vec<ConfiguredClient>, Vec<ClientKind>), SetupError> {
        self.header("[2/3] MCP Client Configuration")?;
        let entry = ServerEntry::new(&environment.executable, &environment.working_dir);
        let mut configured = Vec::new();
        let mut skipped = Vec::new();
        let mut failures = 0;

        for kind in self.options.clients.kinds() {
            let Some(path) = self.config_path(kind) else {
                failures += 1;
                let err = SetupError::NoConfigPath(kind.display_name());
                self.say(&format!("✗ {err}"))?;
                continue;
            };
            let file = ClientConfigFile::new(path, kind);
            if file.exists() {
                self.say(&format!("✓ {} config found: {}", kind.display_name(), file.path().display()))?;
            } else {
                self.say(&format!(
                    "? {} config not found, will create: {}",
                    kind.display_name(),
                    file.path().display()
                ))?;
            }

            if !self.options.assume_yes {
                let question = format!("Configure {}?", kind.display_name());
                if !self.confirm.confirm(&question)? {
                    self.say(&format!("- Skipped {}", kind.display_name()))?;
                    skipped.push(kind);
                    continue;
                }
            }

            match file.upsert(&self.options.server_name, &entry) {
                Ok(backup) => {
                    if let Some(backup) = &backup {
                        self.say(&format!("  Backup created: {}", backup.display()))?;
                    }
                    self.say(&format!("✓ Configured {}", kind.display_name()))?;
                    debug!(client = kind.display_name(), path = %file.path().display(), "Client configured");
                    configured.push(ConfiguredClient {
                        kind,
                        path: file.path().to_path_buf(),
                        backup,
                    });
                }
                Err(e) => {
                    warn!(client = kind.display_name(), error = %e, "Client configuration failed");
                    self.say(&format!("✗ {e}"))?;
                    failures += 1;
                }
            }
        }

        if failures > 0 {
            return Err(SetupError::ClientsFailed(failures));
        }
        if configured.is_empty() {
            self.say("No clients selected, skipping configuration")?;
        }
        Ok((configured, skipped))
    }

    fn validate(
        &mut self,
        environment: &Environment,
        configured: &[ConfiguredClient],
    ) -> Result<(), SetupError> {
        self.header("[3/3] Validation")?;
        if !environment.executable.is_file() {
            return Err(SetupError::Validation {
                path: environment.executable.clone(),
                reason: "server executable no longer exists".to_string(),
            });
        }
        self.say("✓ Server executable present")?;

        let expected = ServerEntry::new(&environment.executable, &environment.working_dir);
        for client in configured {
            let file = ClientConfigFile::new(&client.path, client.kind);
            match file.server_entry(&self.options.server_name)? {
                Some(entry) if entry == expected => {
                    self.say(&format!("✓ {} configuration OK", client.kind.display_name()))?;
                }
                Some(_) => {
                    return Err(SetupError::Validation {
                        path: client.path.clone(),
                        reason: format!("entry '{}' does not match", self.options.server_name),
                    });
                }
                None => {
                    return Err(SetupError::Validation {
                        path: client.path.clone(),
                        reason: format!("entry '{}' is missing", self.options.server_name),
                    });
                }
            }
        }
        Ok(())
    }

    fn config_path(&self, kind: ClientKind) -> Option<PathBuf> {
        match kind {
            ClientKind::Cline => self.paths.vscode_settings.clone(),
            ClientKind::Claude => self.paths.claude_config(),
        }
    }

    fn header(&mut self, title: &str) -> Result<(), SetupError> {
        self.say("")?;
        self.say(&format!("━━━ {title} ━━━").yellow().bold().to_string())
    }

    fn say(&mut self, line: &str) -> Result<(), SetupError> {
        writeln!(self.out, "{line}").map_err(SetupError::Terminal)
    }
}

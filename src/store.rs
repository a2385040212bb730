use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConsoleError, ConsoleResult};
use crate::model::ConsoleConfig;

mod session;

pub use self::session::SessionStore;

const CONFIG_FILE: &str = "config.json";

/// The console's state directory: `config.json`, `session.json` and the log.
#[derive(Clone, Debug)]
pub struct StateDir {
    root: PathBuf,
}

impl StateDir {
    /// Opens the directory, creating it on first use.
    pub fn open(root: &Path) -> ConsoleResult<Self> {
        fs::create_dir_all(root)
            .map_err(|e| ConsoleError::storage(format!("create {}", root.display()), e))?;
        Ok(Self {
            root: root.to_path_buf(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn log_path(&self) -> PathBuf {
        self.root.join("adconsole.log")
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(&self.root)
    }

    pub fn read_config(&self) -> ConsoleResult<ConsoleConfig> {
        let path = self.root.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(ConsoleConfig::default());
        }
        let bytes = fs::read(&path).map_err(|e| ConsoleError::storage("read config.json", e))?;
        let cfg: ConsoleConfig = serde_json::from_slice(&bytes)
            .map_err(|e| ConsoleError::storage("parse config.json", e))?;
        if cfg.version != 1 {
            return Err(ConsoleError::storage(
                "read config.json",
                format!("unsupported config version {}", cfg.version),
            ));
        }
        Ok(cfg)
    }

    pub fn write_config(&self, cfg: &ConsoleConfig) -> ConsoleResult<()> {
        let bytes = serde_json::to_vec_pretty(cfg)
            .map_err(|e| ConsoleError::storage("serialize config", e))?;
        write_atomic(&self.root.join(CONFIG_FILE), &bytes)
    }
}

fn write_atomic(path: &Path, bytes: &[u8]) -> ConsoleResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| ConsoleError::storage("create parent directories", e))?;
    }
    let tmp = path.with_extension(format!("tmp.{}", std::process::id()));
    fs::write(&tmp, bytes)
        .map_err(|e| ConsoleError::storage(format!("write temp file {}", tmp.display()), e))?;
    fs::rename(&tmp, path).map_err(|e| {
        ConsoleError::storage(
            format!("rename {} -> {}", tmp.display(), path.display()),
            e,
        )
    })?;
    Ok(())
}

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Default configuration file, resolved against the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "stats.yaml";

/// Longest project name the `record` table accepts.
pub const MAX_PROJECT_LEN: usize = 120;

/// Cursor value meaning "no session has ever been opened".
pub const NO_CURSOR: u32 = 0;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub db: String,
    pub project: String,
    #[serde(default)]
    pub cursor: u32,
}

impl Config {
    /// Resolve the config file path: explicit `--config` wins over the default.
    pub fn config_file(custom: Option<&Path>) -> PathBuf {
        custom
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Load and validate the configuration. Any problem is fatal for the caller.
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| AppError::ConfigLoad {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::parse(&content).map_err(|reason| AppError::ConfigLoad {
            path: path.to_path_buf(),
            reason,
        })
    }

    fn parse(content: &str) -> Result<Self, String> {
        let cfg: Config = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        cfg.validate()?;
        Ok(cfg)
    }

    fn validate(&self) -> Result<(), String> {
        if self.db.trim().is_empty() {
            return Err("please specify the db file path (`db`)".into());
        }

        let project = self.project.trim();
        if project.is_empty() {
            return Err("please specify the project name (`project`)".into());
        }
        if project.chars().count() > MAX_PROJECT_LEN {
            return Err(format!(
                "project name longer than {MAX_PROJECT_LEN} characters"
            ));
        }
        if project.contains(['/', '\\']) {
            return Err("project name must not contain path separators".into());
        }

        Ok(())
    }

    pub fn has_cursor(&self) -> bool {
        self.cursor != NO_CURSOR
    }

    /// Write the configuration back to `path`.
    ///
    /// The YAML goes to a temporary file in the same directory which is then
    /// renamed over the target, so readers never observe a half-written file.
    pub fn save(&self, path: &Path) -> AppResult<()> {
        let save_err = |reason: String| AppError::ConfigSave {
            path: path.to_path_buf(),
            reason,
        };

        let yaml = serde_yaml::to_string(self).map_err(|e| save_err(e.to_string()))?;

        let dir = match path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir).map_err(|e| save_err(e.to_string()))?;
        tmp.write_all(yaml.as_bytes())
            .map_err(|e| save_err(e.to_string()))?;
        tmp.as_file()
            .sync_all()
            .map_err(|e| save_err(e.to_string()))?;
        tmp.persist(path).map_err(|e| save_err(e.error.to_string()))?;

        log::debug!("configuration saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn parse_defaults_cursor_to_zero() {
        let cfg = Config::parse("db: work.db\nproject: acme\n").unwrap();
        assert_eq!(cfg.db, "work.db");
        assert_eq!(cfg.project, "acme");
        assert_eq!(cfg.cursor, NO_CURSOR);
        assert!(!cfg.has_cursor());
    }

    #[test]
    fn parse_rejects_missing_required_fields() {
        assert!(Config::parse("project: acme\n").is_err());
        assert!(Config::parse("db: work.db\n").is_err());
        assert!(Config::parse("db: ''\nproject: acme\n").is_err());
        assert!(Config::parse("db: work.db\nproject: '  '\n").is_err());
    }

    #[test]
    fn parse_rejects_unknown_keys() {
        let err = Config::parse("db: work.db\nproject: acme\ncolour: red\n").unwrap_err();
        assert!(err.contains("colour"));
    }

    #[test]
    fn parse_rejects_bad_project_names() {
        let long = "x".repeat(MAX_PROJECT_LEN + 1);
        assert!(Config::parse(&format!("db: a.db\nproject: {long}\n")).is_err());
        assert!(Config::parse("db: a.db\nproject: a/b\n").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let dir = tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, AppError::ConfigLoad { .. }));
    }

    #[test]
    fn save_then_load_keeps_every_field() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stats.yaml");

        let cfg = Config {
            db: "/var/lib/hours/work.db".into(),
            project: "acme".into(),
            cursor: u32::MAX,
        };
        cfg.save(&path).unwrap();

        let back = Config::load(&path).unwrap();
        assert_eq!(back, cfg);

        // no temporary files left next to the config
        let entries = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    #[test]
    fn config_file_prefers_explicit_path() {
        assert_eq!(Config::config_file(None), PathBuf::from(DEFAULT_CONFIG_FILE));
        assert_eq!(
            Config::config_file(Some(Path::new("/tmp/x.yaml"))),
            PathBuf::from("/tmp/x.yaml")
        );
    }
}

//! Per-repository hook configuration (`stagelint.json`).
//!
//! The installer writes this file next to the `pre-commit` hook; the hook
//! reads it to decide which linters run and with which tool settings. A
//! missing file means every linter is enabled with tool defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::StageLintError;
use crate::linters::Language;

/// File name of the hook configuration inside the hooks directory.
pub const CONFIG_FILE_NAME: &str = "stagelint.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HookConfig {
    pub markdown: LinterSettings,
    pub python: LinterSettings,
    pub r: LinterSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LinterSettings {
    pub enabled: bool,
    /// Tool config file, relative to the repository root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<PathBuf>,
    /// Executable to run instead of the tool's usual name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program: Option<String>,
}

impl Default for LinterSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            config: None,
            program: None,
        }
    }
}

impl HookConfig {
    /// A config enabling exactly the given languages.
    pub fn with_enabled(languages: &[Language]) -> Self {
        let mut config = Self::default();
        for language in Language::ALL {
            config.settings_mut(language).enabled = languages.contains(&language);
        }
        config
    }

    /// Reads the config at `path`, falling back to defaults if the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, StageLintError> {
        if !path.exists() {
            debug!(path = %path.display(), "no hook config, using defaults");
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        debug!(path = %path.display(), "loaded hook config");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), StageLintError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, format!("{content}\n"))?;
        Ok(())
    }

    pub fn settings(&self, language: Language) -> &LinterSettings {
        match language {
            Language::Markdown => &self.markdown,
            Language::Python => &self.python,
            Language::R => &self.r,
        }
    }

    pub fn settings_mut(&mut self, language: Language) -> &mut LinterSettings {
        match language {
            Language::Markdown => &mut self.markdown,
            Language::Python => &mut self.python,
            Language::R => &mut self.r,
        }
    }

    /// Enabled languages, in registration order.
    pub fn enabled(&self) -> Vec<Language> {
        Language::ALL
            .into_iter()
            .filter(|l| self.settings(*l).enabled)
            .collect()
    }
}

/// Conventional config file names looked up at the repository root when no
/// explicit config is set.
pub fn conventional_config_names(language: Language) -> &'static [&'static str] {
    match language {
        Language::Markdown => &[".markdownlint.json", ".markdownlint.yaml", ".markdownlintrc"],
        Language::Python => &[".flake8", "setup.cfg", "tox.ini"],
        Language::R => &[".lintr"],
    }
}

/// Resolves the tool config for `language` against `repo_root`.
///
/// An explicit path must exist. Otherwise the first conventional file found
/// at the repository root wins, and `None` means tool defaults.
pub fn resolve_tool_config(
    settings: &LinterSettings,
    language: Language,
    repo_root: &Path,
) -> Result<Option<PathBuf>, StageLintError> {
    if let Some(explicit) = &settings.config {
        let path = repo_root.join(explicit);
        if !path.is_file() {
            return Err(StageLintError::Other(format!(
                "{language} linter config not found: {}",
                path.display()
            )));
        }
        return Ok(Some(path));
    }

    Ok(conventional_config_names(language)
        .iter()
        .map(|name| repo_root.join(name))
        .find(|path| path.is_file()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_enables_everything() {
        let tmp = TempDir::new().unwrap();
        let config = HookConfig::load(&tmp.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.enabled(), Language::ALL.to_vec());
    }

    #[test]
    fn partial_file_keeps_defaults_for_the_rest() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(
            &path,
            r#"{"r": {"enabled": false}, "python": {"program": "/opt/bin/flake8"}}"#,
        )
        .unwrap();

        let config = HookConfig::load(&path).unwrap();
        assert_eq!(config.enabled(), vec![Language::Markdown, Language::Python]);
        assert_eq!(config.python.program.as_deref(), Some("/opt/bin/flake8"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"markdwon": {"enabled": false}}"#).unwrap();

        let err = HookConfig::load(&path).unwrap_err();
        assert!(matches!(err, StageLintError::Json(_)));
    }

    #[test]
    fn save_then_load_preserves_selection() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_FILE_NAME);
        let config = HookConfig::with_enabled(&[Language::Python]);
        config.save(&path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("\"enabled\": false"));
        assert_eq!(HookConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn explicit_config_must_exist() {
        let tmp = TempDir::new().unwrap();
        let settings = LinterSettings {
            config: Some(PathBuf::from("lint/md.json")),
            ..LinterSettings::default()
        };

        assert!(resolve_tool_config(&settings, Language::Markdown, tmp.path()).is_err());

        fs::create_dir(tmp.path().join("lint")).unwrap();
        fs::write(tmp.path().join("lint/md.json"), "{}").unwrap();
        let resolved = resolve_tool_config(&settings, Language::Markdown, tmp.path()).unwrap();
        assert_eq!(resolved, Some(tmp.path().join("lint/md.json")));
    }

    #[test]
    fn conventional_config_is_discovered_in_order() {
        let tmp = TempDir::new().unwrap();
        let settings = LinterSettings::default();
        assert_eq!(
            resolve_tool_config(&settings, Language::Python, tmp.path()).unwrap(),
            None
        );

        fs::write(tmp.path().join("tox.ini"), "[flake8]\n").unwrap();
        fs::write(tmp.path().join(".flake8"), "[flake8]\n").unwrap();
        assert_eq!(
            resolve_tool_config(&settings, Language::Python, tmp.path()).unwrap(),
            Some(tmp.path().join(".flake8"))
        );
    }
}

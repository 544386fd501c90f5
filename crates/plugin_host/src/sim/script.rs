use std::fs;
use std::path::{Path, PathBuf};

use plugin_core::{ControllerConfig, NodeRef};
use plugin_logging::plugin_info;
use serde::Deserialize;
use thiserror::Error;

/// One scripted action by the simulated host or UI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub enum Step {
    /// Replace the page selection and emit a selection change.
    Select(Vec<NodeRef>),
    /// Clear the page selection and emit a selection change.
    Deselect,
    /// Post raw JSON text from the UI surface.
    Ui(String),
}

#[derive(Debug, Error)]
pub enum ScriptError {
    #[error("failed to read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
}

pub fn load_script(path: &Path) -> Result<Vec<Step>, ScriptError> {
    let steps: Vec<Step> = read_ron(path)?;
    plugin_info!("Loaded {} script step(s) from {:?}", steps.len(), path);
    Ok(steps)
}

pub fn load_config(path: &Path) -> Result<ControllerConfig, ScriptError> {
    let config = read_ron(path)?;
    plugin_info!("Loaded controller config from {:?}", path);
    Ok(config)
}

fn read_ron<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<T, ScriptError> {
    let content = fs::read_to_string(path).map_err(|source| ScriptError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&content).map_err(|source| ScriptError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use plugin_core::UiOptions;
    use tempfile::NamedTempFile;

    use super::*;

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn script_steps_parse() {
        let file = write_temp(
            r#"[
                Select([(id: "1:2", type: "FRAME"), (id: "1:3", type: "TEXT")]),
                Ui("{\"type\":\"runAction\"}"),
                Deselect,
            ]"#,
        );

        let steps = load_script(file.path()).unwrap();

        assert_eq!(
            steps,
            vec![
                Step::Select(vec![NodeRef::new("1:2", "FRAME"), NodeRef::new("1:3", "TEXT")]),
                Step::Ui(r#"{"type":"runAction"}"#.to_string()),
                Step::Deselect,
            ]
        );
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let file = write_temp(r#"(ui: (title: "Inspector", width: 320))"#);

        let config = load_config(file.path()).unwrap();

        assert_eq!(
            config.ui,
            UiOptions {
                title: "Inspector".to_string(),
                width: 320,
                ..UiOptions::default()
            }
        );
        assert!(config.skip_invisible_instance_children);
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_script(&dir.path().join("absent.ron")).unwrap_err();
        assert!(matches!(err, ScriptError::Read { .. }));
    }

    #[test]
    fn malformed_script_is_a_parse_error() {
        let file = write_temp("[Select(]");
        let err = load_script(file.path()).unwrap_err();
        assert!(matches!(err, ScriptError::Parse { .. }));
    }
}

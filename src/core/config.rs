use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Open `path` in the requested editor, falling back to
    /// `$EDITOR`/`$VISUAL` and then to the platform default.
    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        if run_editor(&editor_to_use, path) {
            success(format!(
                "Configuration file edited successfully using '{}'",
                editor_to_use
            ));
            return Ok(());
        }

        warning(format!(
            "Editor '{}' not available, falling back to '{}'",
            editor_to_use, default_editor
        ));

        if run_editor(&default_editor, path) {
            success(format!(
                "Configuration file edited successfully using fallback '{}'",
                default_editor
            ));
            Ok(())
        } else {
            Err(AppError::Config(format!(
                "failed to edit configuration file using '{}'",
                default_editor
            )))
        }
    }
}

fn run_editor(editor: &str, path: &Path) -> bool {
    matches!(Command::new(editor).arg(path).status(), Ok(s) if s.success())
}

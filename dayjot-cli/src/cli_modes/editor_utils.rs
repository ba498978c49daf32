use anyhow::{Context, Result};
use std::{
    path::Path,
    process::{Child, Command},
};

pub fn resolve_editor(editor: &Option<String>) -> String {
    editor
        .as_deref()
        .map(str::to_string)
        .or_else(|| std::env::var("VISUAL").ok())
        .or_else(|| std::env::var("EDITOR").ok())
        .unwrap_or_else(|| "vim".into())
}

/// Starts the editor on `path` without waiting for it.
///
/// `editor_cmd` may carry arguments (e.g. `code --wait`); the path goes last.
pub fn spawn_editor(editor_cmd: &str, path: &Path) -> Result<Child> {
    let mut parts = editor_cmd.split_whitespace();
    let program = parts.next().context("no editor configured")?;
    Command::new(program)
        .args(parts)
        .arg(path)
        .spawn()
        .with_context(|| format!("starting editor '{editor_cmd}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_editor_wins() {
        assert_eq!(resolve_editor(&Some("hx".to_string())), "hx");
    }

    #[test]
    fn blank_editor_is_an_error() {
        assert!(spawn_editor("  ", Path::new("/tmp/x.md")).is_err());
    }
}

//! # Session-File Persistence
//!
//! The web dashboard keeps its session in a cookie managed by the
//! browser; the console keeps the equivalent in a JSON file. The file
//! holds exactly what `/signIn` returned — user identity plus tokens —
//! and is re-read on every invocation.
//!
//! Path resolution: `$SUITEOPS_SESSION_FILE` when set, otherwise
//! `$HOME/.suiteops/session.json`, otherwise `./.suiteops-session.json`.

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};

use suiteops_client::Session;

const SESSION_ENV: &str = "SUITEOPS_SESSION_FILE";

/// Resolve the session file path.
pub fn session_path() -> PathBuf {
    if let Ok(path) = std::env::var(SESSION_ENV) {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".suiteops").join("session.json"),
        None => PathBuf::from(".suiteops-session.json"),
    }
}

/// Persist a freshly issued session.
pub fn save(session: &Session) -> Result<()> {
    let path = session_path();
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    let body = serde_json::to_string_pretty(session).context("failed to encode session")?;
    fs::write(&path, body).with_context(|| format!("failed to write {}", path.display()))
}

/// Load the stored session, if any.
pub fn load() -> Result<Option<Session>> {
    let path = session_path();
    let body = match fs::read_to_string(&path) {
        Ok(body) => body,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()))
        }
    };
    let session = serde_json::from_str(&body)
        .with_context(|| format!("corrupt session file {}", path.display()))?;
    Ok(Some(session))
}

/// Drop the stored session. Returns whether one existed.
pub fn clear() -> Result<bool> {
    let path = session_path();
    match fs::remove_file(&path) {
        Ok(()) => Ok(true),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
        Err(err) => Err(err).with_context(|| format!("failed to remove {}", path.display())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use suiteops_core::UserId;

    #[test]
    fn save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::env::set_var(SESSION_ENV, &path);

        assert!(load().unwrap().is_none());
        assert!(!clear().unwrap());

        let session = Session {
            id: UserId::new(7),
            name: Some("Ana".into()),
            email: Some("ana@example.com".into()),
            token: "tok-abc".into(),
            refresh_token: None,
        };
        save(&session).unwrap();

        let loaded = load().unwrap().expect("session should round-trip");
        assert_eq!(loaded.id, session.id);
        assert_eq!(loaded.token, session.token);
        assert_eq!(loaded.name.as_deref(), Some("Ana"));

        assert!(clear().unwrap());
        assert!(load().unwrap().is_none());

        std::env::remove_var(SESSION_ENV);
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    configs: HashMap<String, String>,
    sessions: HashMap<String, SessionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum SessionEntry {
    Path(String),
    Detailed {
        path: String,
        #[serde(default)]
        tags: Vec<String>,
    },
}

impl SessionEntry {
    fn as_path(&self) -> &str {
        match self {
            SessionEntry::Path(path) => path,
            SessionEntry::Detailed { path, .. } => path,
        }
    }

    fn tags(&self) -> &[String] {
        match self {
            SessionEntry::Path(_) => &[],
            SessionEntry::Detailed { tags, .. } => tags,
        }
    }
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn resolve_path(rel: &str) -> PathBuf {
    fixtures_root().join(rel)
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = resolve_path(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

fn load_json<T: DeserializeOwned>(rel: &str) -> Result<T> {
    let text = read_to_string(rel)?;
    serde_json::from_str(&text).with_context(|| format!("failed to parse JSON fixture {rel}"))
}

fn lookup<'a, T>(map: &'a HashMap<String, T>, kind: &str, name: &str) -> Result<&'a T> {
    map.get(name)
        .ok_or_else(|| anyhow!("unknown {kind} fixture '{name}'"))
}

/// Card configuration presets.
pub mod configs {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.configs.keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        read_to_string(rel)
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        super::load_json(rel)
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let rel = lookup(&MANIFEST.configs, "config", name)?;
        Ok(resolve_path(rel))
    }
}

/// Scripted gesture sessions.
pub mod sessions {
    use super::*;

    pub fn keys() -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST.sessions.keys().cloned().collect();
        keys.sort();
        keys
    }

    /// Session names carrying `tag`, sorted.
    pub fn tagged(tag: &str) -> Vec<String> {
        let mut keys: Vec<String> = MANIFEST
            .sessions
            .iter()
            .filter(|(_, entry)| entry.tags().iter().any(|t| t == tag))
            .map(|(name, _)| name.clone())
            .collect();
        keys.sort();
        keys
    }

    pub fn json(name: &str) -> Result<String> {
        let entry = lookup(&MANIFEST.sessions, "session", name)?;
        read_to_string(entry.as_path())
    }

    pub fn load<T: DeserializeOwned>(name: &str) -> Result<T> {
        let entry = lookup(&MANIFEST.sessions, "session", name)?;
        super::load_json(entry.as_path())
    }

    pub fn path(name: &str) -> Result<PathBuf> {
        let entry = lookup(&MANIFEST.sessions, "session", name)?;
        Ok(resolve_path(entry.as_path()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_entries_exist_on_disk() {
        for name in configs::keys() {
            let path = configs::path(&name).expect("config path");
            assert!(path.exists(), "missing config fixture {}", path.display());
        }
        for name in sessions::keys() {
            let path = sessions::path(&name).expect("session path");
            assert!(path.exists(), "missing session fixture {}", path.display());
        }
    }

    #[test]
    fn unknown_fixture_is_an_error() {
        let err = sessions::json("does-not-exist").unwrap_err();
        assert!(err.to_string().contains("unknown session fixture"));
    }

    #[test]
    fn fixtures_are_valid_json() {
        for name in sessions::keys() {
            sessions::load::<serde_json::Value>(&name)
                .unwrap_or_else(|e| panic!("session {name}: {e:#}"));
        }
        for name in configs::keys() {
            configs::load::<serde_json::Value>(&name)
                .unwrap_or_else(|e| panic!("config {name}: {e:#}"));
        }
    }
}

use anyhow::{bail, Context};
use minilatro_core::{RoundConfig, RoundState};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const SAVE_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedAction {
    #[serde(default)]
    pub discard: bool,
    #[serde(default)]
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedRound {
    pub version: u32,
    pub seed: u64,
    pub actions: Vec<SavedAction>,
}

pub fn default_save_path() -> PathBuf {
    if let Some(path) = std::env::var_os("MINILATRO_SAVE") {
        return PathBuf::from(path);
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(".minilatro_round.json"),
        None => PathBuf::from("minilatro_round.json"),
    }
}

pub fn save_round(path: &Path, seed: u64, actions: &[SavedAction]) -> anyhow::Result<()> {
    let payload = SavedRound {
        version: SAVE_SCHEMA_VERSION,
        seed,
        actions: actions.to_vec(),
    };
    let body = serde_json::to_string_pretty(&payload)?;
    fs::write(path, body).with_context(|| format!("write {}", path.display()))
}

pub fn load_round(path: &Path) -> anyhow::Result<SavedRound> {
    let body = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let payload: SavedRound =
        serde_json::from_str(&body).with_context(|| format!("parse {}", path.display()))?;
    if payload.version != SAVE_SCHEMA_VERSION {
        bail!(
            "unsupported save version {} (expected {})",
            payload.version,
            SAVE_SCHEMA_VERSION
        );
    }
    Ok(payload)
}

/// Rebuilds the round by replaying the log against a fresh deal from the
/// saved seed.
pub fn replay(saved: &SavedRound, config: RoundConfig) -> anyhow::Result<RoundState> {
    let mut round = RoundState::new(config, Some(saved.seed));
    for (step, action) in saved.actions.iter().enumerate() {
        round
            .play(&action.indices, action.discard)
            .with_context(|| format!("replay action {step} {:?}", action.indices))?;
    }
    Ok(round)
}

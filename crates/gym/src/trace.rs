use crate::{Action, GymError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum EpisodeStatus {
    Ended,
    Truncated,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub step: u32,
    pub hand_before: Vec<String>,
    pub action: Action,
    pub indices: Vec<usize>,
    pub reward: i64,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    pub hands_left: u8,
    pub discards_left: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EpisodeResult {
    pub policy: String,
    pub seed: u64,
    pub status: EpisodeStatus,
    pub total_reward: i64,
    pub steps: Vec<StepRecord>,
}

impl EpisodeResult {
    pub fn to_text_report(&self) -> String {
        let mut lines = vec![
            format!("policy: {}", self.policy),
            format!("seed: {}", self.seed),
            format!("status: {}", status_label(&self.status)),
            format!("total reward: {}", self.total_reward),
            String::new(),
            "steps:".to_string(),
        ];
        for step in &self.steps {
            lines.push(format!(
                "  step {:>3} | {} -> {:?}",
                step.step,
                step.action.short_label(),
                step.indices
            ));
            lines.push(format!("    hand: {}", step.hand_before.join(" ")));
            match (&step.category, &step.error) {
                (_, Some(error)) => lines.push(format!("    rejected: {error}")),
                (Some(category), None) => {
                    lines.push(format!("    scored: {category} for {}", step.reward))
                }
                (None, None) => lines.push("    discarded".to_string()),
            }
            lines.push(format!(
                "    hands left {} discards left {}",
                step.hands_left, step.discards_left
            ));
        }
        lines.join("\n")
    }
}

fn status_label(status: &EpisodeStatus) -> &'static str {
    match status {
        EpisodeStatus::Ended => "ended",
        EpisodeStatus::Truncated => "truncated",
    }
}

pub fn write_json(path: &Path, result: &EpisodeResult) -> Result<(), GymError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let body = serde_json::to_string_pretty(result)?;
    fs::write(path, body)?;
    Ok(())
}

pub fn write_text(path: &Path, result: &EpisodeResult) -> Result<(), GymError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, result.to_text_report())?;
    Ok(())
}

use anyhow::{bail, Context};
use minilatro_core::{HandRule, RankRule, RoundConfig, DECK_SIZE};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

const ROUND_FILE: &str = "round.json";
const HANDS_FILE: &str = "hands.json";
const RANKS_FILE: &str = "ranks.json";

/// Reads `round.json` plus the optional `hands.json` / `ranks.json` tables.
pub fn load_round_config(dir: &Path) -> anyhow::Result<RoundConfig> {
    let mut config: RoundConfig = load_json(dir.join(ROUND_FILE))?;
    let hands_path = dir.join(HANDS_FILE);
    if hands_path.exists() {
        config.hand_rules = load_json::<Vec<HandRule>>(hands_path)?;
    }
    let ranks_path = dir.join(RANKS_FILE);
    if ranks_path.exists() {
        config.rank_rules = load_json::<Vec<RankRule>>(ranks_path)?;
    }
    validate_round_config(&config).with_context(|| format!("validate {}", dir.display()))?;
    Ok(config)
}

/// Falls back to the built-in rules when `dir` has no `round.json`.
pub fn load_round_config_or_default(dir: &Path) -> anyhow::Result<RoundConfig> {
    if !dir.join(ROUND_FILE).exists() {
        log::debug!("no {} under {}, using built-in rules", ROUND_FILE, dir.display());
        return Ok(RoundConfig::default());
    }
    load_round_config(dir)
}

pub fn validate_round_config(config: &RoundConfig) -> anyhow::Result<()> {
    if config.hand_size == 0 || config.hand_size > DECK_SIZE {
        bail!("hand_size must be within 1..={DECK_SIZE}, got {}", config.hand_size);
    }
    if config.max_selected == 0 || config.max_selected > config.hand_size {
        bail!(
            "max_selected must be within 1..={}, got {}",
            config.hand_size,
            config.max_selected
        );
    }
    let mut seen = HashSet::new();
    for rule in &config.hand_rules {
        if !seen.insert(rule.category) {
            bail!("duplicate hand rule {}", rule.category.id());
        }
        if rule.base_mult < 0 || rule.base_chips < 0 {
            bail!("negative base scoring for {}", rule.category.id());
        }
    }
    let mut seen = HashSet::new();
    for rule in &config.rank_rules {
        if !seen.insert(rule.rank) {
            bail!("duplicate rank rule {:?}", rule.rank);
        }
    }
    Ok(())
}

fn load_json<T: DeserializeOwned>(path: impl AsRef<Path>) -> anyhow::Result<T> {
    let path = path.as_ref();
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let value = serde_json::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use minilatro_core::{HandCategory, Rank, ScoreTables};
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    static COUNTER: AtomicUsize = AtomicUsize::new(0);

    fn unique_temp_dir() -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("time")
            .as_nanos();
        let dir = std::env::temp_dir().join(format!(
            "minilatro_data_test_{}_{}_{}",
            std::process::id(),
            nanos,
            COUNTER.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).expect("create dir");
        dir
    }

    #[test]
    fn loads_bundled_assets() {
        let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../assets");
        let config = load_round_config(&dir).expect("load assets");
        assert_eq!(config.hand_size, 8);
        assert_eq!(config.max_selected, 5);
        assert_eq!(config.hands, 4);
        assert_eq!(config.discards, 4);
        assert_eq!(config.hand_rules.len(), 9);
        assert_eq!(config.rank_rules.len(), 13);
        let tables = ScoreTables::from_config(&config);
        for category in HandCategory::ALL {
            assert_eq!(tables.hand_base(category), category.base_scoring());
        }
        for rank in Rank::ALL {
            assert_eq!(tables.rank_chips(rank), rank.chips());
        }
    }

    #[test]
    fn round_file_fields_default() {
        let dir = unique_temp_dir();
        fs::write(dir.join(ROUND_FILE), r#"{ "hands": 6 }"#).expect("write");
        let config = load_round_config(&dir).expect("load");
        assert_eq!(config.hands, 6);
        assert_eq!(config.discards, 4);
        assert_eq!(config.hand_size, 8);
        assert!(config.four_of_a_kind);
        assert!(config.hand_rules.is_empty());
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn missing_dir_uses_defaults() {
        let dir = std::env::temp_dir().join("minilatro_data_missing_dir_for_test");
        let config = load_round_config_or_default(&dir).expect("defaults");
        assert_eq!(config, RoundConfig::default());
    }

    #[test]
    fn rejects_oversized_selection() {
        let dir = unique_temp_dir();
        fs::write(
            dir.join(ROUND_FILE),
            r#"{ "hand_size": 4, "max_selected": 5 }"#,
        )
        .expect("write");
        let err = load_round_config(&dir).expect_err("max_selected > hand_size");
        assert!(format!("{err:#}").contains("max_selected"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn rejects_duplicate_hand_rules() {
        let dir = unique_temp_dir();
        fs::write(dir.join(ROUND_FILE), "{}").expect("write");
        fs::write(
            dir.join(HANDS_FILE),
            r#"[
  { "category": "Pair", "base_chips": 10, "base_mult": 2 },
  { "category": "Pair", "base_chips": 12, "base_mult": 2 }
]"#,
        )
        .expect("write");
        let err = load_round_config(&dir).expect_err("duplicate");
        assert!(format!("{err:#}").contains("duplicate hand rule pair"));
        let _ = fs::remove_dir_all(dir);
    }

    #[test]
    fn parse_error_names_the_file() {
        let dir = unique_temp_dir();
        fs::write(dir.join(ROUND_FILE), "{ not json").expect("write");
        let err = load_round_config(&dir).expect_err("bad json");
        assert!(err.to_string().contains("round.json"));
        let _ = fs::remove_dir_all(dir);
    }
}

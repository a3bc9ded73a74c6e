use crate::{ClassifierRules, HandCategory, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HandRule {
    pub category: HandCategory,
    pub base_chips: i64,
    pub base_mult: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankRule {
    pub rank: Rank,
    pub chips: i64,
}

fn default_hand_size() -> usize {
    8
}

fn default_max_selected() -> usize {
    5
}

fn default_allowance() -> u8 {
    4
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundConfig {
    #[serde(default = "default_hand_size")]
    pub hand_size: usize,
    #[serde(default = "default_max_selected")]
    pub max_selected: usize,
    #[serde(default = "default_allowance")]
    pub hands: u8,
    #[serde(default = "default_allowance")]
    pub discards: u8,
    #[serde(default = "default_true")]
    pub four_of_a_kind: bool,
    /// Overrides for the built-in hand table; missing categories keep theirs.
    #[serde(default)]
    pub hand_rules: Vec<HandRule>,
    #[serde(default)]
    pub rank_rules: Vec<RankRule>,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            hand_size: default_hand_size(),
            max_selected: default_max_selected(),
            hands: default_allowance(),
            discards: default_allowance(),
            four_of_a_kind: true,
            hand_rules: Vec::new(),
            rank_rules: Vec::new(),
        }
    }
}

impl RoundConfig {
    pub fn classifier_rules(&self) -> ClassifierRules {
        ClassifierRules {
            four_of_a_kind: self.four_of_a_kind,
        }
    }

    pub fn hand_rule(&self, category: HandCategory) -> Option<&HandRule> {
        self.hand_rules.iter().find(|rule| rule.category == category)
    }

    pub fn rank_rule(&self, rank: Rank) -> Option<&RankRule> {
        self.rank_rules.iter().find(|rule| rule.rank == rank)
    }
}

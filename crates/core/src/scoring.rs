use crate::{classify_with_rules, Card, ClassifierRules, HandCategory, Rank, RoundConfig};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Score {
    pub chips: i64,
    pub mult: i64,
}

impl Score {
    pub fn total(&self) -> i64 {
        self.chips * self.mult
    }
}

#[derive(Debug, Clone)]
pub struct ScoreTables {
    hand_rules: HashMap<HandCategory, (i64, i64)>,
    rank_chips: HashMap<Rank, i64>,
    rules: ClassifierRules,
}

impl Default for ScoreTables {
    fn default() -> Self {
        Self::from_config(&RoundConfig::default())
    }
}

impl ScoreTables {
    pub fn from_config(config: &RoundConfig) -> Self {
        let mut hand_rules = HashMap::new();
        for category in HandCategory::ALL {
            let base = config
                .hand_rule(category)
                .map(|rule| (rule.base_chips, rule.base_mult))
                .unwrap_or_else(|| category.base_scoring());
            hand_rules.insert(category, base);
        }
        let mut rank_chips = HashMap::new();
        for rank in Rank::ALL {
            let chips = config
                .rank_rule(rank)
                .map(|rule| rule.chips)
                .unwrap_or_else(|| rank.chips());
            rank_chips.insert(rank, chips);
        }
        Self {
            hand_rules,
            rank_chips,
            rules: config.classifier_rules(),
        }
    }

    pub fn hand_base(&self, category: HandCategory) -> (i64, i64) {
        self.hand_rules
            .get(&category)
            .copied()
            .unwrap_or_else(|| category.base_scoring())
    }

    pub fn rank_chips(&self, rank: Rank) -> i64 {
        self.rank_chips
            .get(&rank)
            .copied()
            .unwrap_or_else(|| rank.chips())
    }

    pub fn rules(&self) -> ClassifierRules {
        self.rules
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub category: HandCategory,
    pub base: Score,
    pub rank_chips: i64,
    pub scoring_indices: Vec<usize>,
    pub total: Score,
}

impl ScoreBreakdown {
    pub fn value(&self) -> i64 {
        self.total.total()
    }
}

pub fn score_hand(cards: &[Card], tables: &ScoreTables) -> ScoreBreakdown {
    let hand = classify_with_rules(cards, tables.rules());
    let (base_chips, base_mult) = tables.hand_base(hand.category);
    let base = Score {
        chips: base_chips,
        mult: base_mult,
    };
    let rank_chips: i64 = hand
        .indices
        .iter()
        .map(|idx| tables.rank_chips(cards[*idx].rank))
        .sum();
    let total = Score {
        chips: base.chips + rank_chips,
        mult: base.mult,
    };
    ScoreBreakdown {
        category: hand.category,
        base,
        rank_chips,
        scoring_indices: hand.indices,
        total,
    }
}

/// Score of `cards` under the built-in tables.
pub fn score(cards: &[Card]) -> i64 {
    score_hand(cards, &ScoreTables::default()).value()
}

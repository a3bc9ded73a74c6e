use crate::{Card, Rank};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    HighCard,
    Pair,
    TwoPair,
    ThreeOfAKind,
    Straight,
    Flush,
    FullHouse,
    FourOfAKind,
    StraightFlush,
}

impl HandCategory {
    pub const ALL: [HandCategory; 9] = [
        HandCategory::HighCard,
        HandCategory::Pair,
        HandCategory::TwoPair,
        HandCategory::ThreeOfAKind,
        HandCategory::Straight,
        HandCategory::Flush,
        HandCategory::FullHouse,
        HandCategory::FourOfAKind,
        HandCategory::StraightFlush,
    ];

    pub fn id(self) -> &'static str {
        match self {
            HandCategory::HighCard => "high_card",
            HandCategory::Pair => "pair",
            HandCategory::TwoPair => "two_pair",
            HandCategory::ThreeOfAKind => "three_of_a_kind",
            HandCategory::Straight => "straight",
            HandCategory::Flush => "flush",
            HandCategory::FullHouse => "full_house",
            HandCategory::FourOfAKind => "four_of_a_kind",
            HandCategory::StraightFlush => "straight_flush",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
        }
    }

    /// Built-in `(chips, mult)` before any per-card chips.
    pub fn base_scoring(self) -> (i64, i64) {
        match self {
            HandCategory::HighCard => (5, 1),
            HandCategory::Pair => (10, 2),
            HandCategory::TwoPair => (20, 2),
            HandCategory::ThreeOfAKind => (30, 3),
            HandCategory::Straight => (30, 4),
            HandCategory::Flush => (35, 4),
            HandCategory::FullHouse => (40, 4),
            HandCategory::FourOfAKind => (60, 7),
            HandCategory::StraightFlush => (100, 8),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedHand {
    pub category: HandCategory,
    /// Positions into the classified input that count toward scoring.
    pub indices: Vec<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierRules {
    /// When false a rank held four times falls through to the pair/triple
    /// checks, matching the older scoring tables.
    pub four_of_a_kind: bool,
}

impl Default for ClassifierRules {
    fn default() -> Self {
        Self {
            four_of_a_kind: true,
        }
    }
}

const STRAIGHT_LEN: usize = 5;
const FLUSH_LEN: usize = 5;

pub fn classify(cards: &[Card]) -> ClassifiedHand {
    classify_with_rules(cards, ClassifierRules::default())
}

pub fn classify_with_rules(cards: &[Card], rules: ClassifierRules) -> ClassifiedHand {
    let rank_groups = group_positions(cards, |card| card.rank);
    let suit_groups = group_positions(cards, |card| card.suit);

    let straight = find_straight(cards, Rank::ace_high)
        .or_else(|| find_straight(cards, Rank::ace_low));
    if let Some(indices) = straight {
        let suit = cards[indices[0]].suit;
        let category = if indices.iter().all(|&idx| cards[idx].suit == suit) {
            HandCategory::StraightFlush
        } else {
            HandCategory::Straight
        };
        return ClassifiedHand { category, indices };
    }

    if let Some((_, indices)) = suit_groups
        .into_iter()
        .find(|(_, group)| group.len() >= FLUSH_LEN)
    {
        return ClassifiedHand {
            category: HandCategory::Flush,
            indices,
        };
    }

    if rules.four_of_a_kind {
        if let Some((_, quad)) = rank_groups.iter().find(|(_, group)| group.len() == 4) {
            return ClassifiedHand {
                category: HandCategory::FourOfAKind,
                indices: quad.clone(),
            };
        }
    }

    let pairs: Vec<&Vec<usize>> = rank_groups
        .iter()
        .map(|(_, group)| group)
        .filter(|group| group.len() == 2)
        .collect();
    let triple = rank_groups
        .iter()
        .map(|(_, group)| group)
        .find(|group| group.len() == 3);

    let (category, indices) = match (pairs.as_slice(), triple) {
        ([pair, ..], Some(triple)) => {
            let mut indices = (*pair).clone();
            indices.extend_from_slice(triple);
            (HandCategory::FullHouse, indices)
        }
        (_, Some(triple)) => (HandCategory::ThreeOfAKind, triple.clone()),
        ([_, _, ..], None) => (
            HandCategory::TwoPair,
            pairs.iter().flat_map(|group| group.iter().copied()).collect(),
        ),
        ([pair], None) => (HandCategory::Pair, (*pair).clone()),
        ([], None) => (
            HandCategory::HighCard,
            highest_card_index(cards).into_iter().collect(),
        ),
    };
    ClassifiedHand { category, indices }
}

/// Groups input positions by key, groups in first-seen order.
fn group_positions<K, F>(cards: &[Card], key: F) -> Vec<(K, Vec<usize>)>
where
    K: PartialEq + Copy,
    F: Fn(&Card) -> K,
{
    let mut groups: Vec<(K, Vec<usize>)> = Vec::new();
    for (idx, card) in cards.iter().enumerate() {
        let value = key(card);
        match groups.iter_mut().find(|(existing, _)| *existing == value) {
            Some((_, positions)) => positions.push(idx),
            None => groups.push((value, vec![idx])),
        }
    }
    groups
}

/// Input positions of five consecutive distinct values, lowest value first.
/// A repeated value is represented by its first position.
fn find_straight(cards: &[Card], value: fn(Rank) -> u8) -> Option<Vec<usize>> {
    let mut distinct: Vec<(u8, usize)> = Vec::with_capacity(cards.len());
    for (idx, card) in cards.iter().enumerate() {
        let v = value(card.rank);
        if !distinct.iter().any(|(seen, _)| *seen == v) {
            distinct.push((v, idx));
        }
    }
    distinct.sort_unstable_by_key(|(v, _)| *v);

    let mut run_start = 0;
    for i in 1..distinct.len() {
        if distinct[i].0 != distinct[i - 1].0 + 1 {
            run_start = i;
            continue;
        }
        if i + 1 - run_start == STRAIGHT_LEN {
            return Some(distinct[run_start..=i].iter().map(|(_, idx)| *idx).collect());
        }
    }
    None
}

fn highest_card_index(cards: &[Card]) -> Option<usize> {
    let mut best: Option<(usize, u8)> = None;
    for (idx, card) in cards.iter().enumerate() {
        let value = card.rank.ace_high();
        if best.map(|(_, v)| value > v).unwrap_or(true) {
            best = Some((idx, value));
        }
    }
    best.map(|(idx, _)| idx)
}

use crate::{Action, Env};
use minilatro_core::{score_hand, Card, RoundState};
use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

pub trait Policy {
    fn name(&self) -> &'static str;
    fn act(&mut self, env: &Env) -> Action;
}

/// Uniformly sized random selections; discards with probability
/// `discard_chance` while discards remain.
#[derive(Debug, Clone)]
pub struct RandomPolicy {
    rng: StdRng,
    pub discard_chance: f64,
}

impl RandomPolicy {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            discard_chance: 0.25,
        }
    }
}

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn act(&mut self, env: &Env) -> Action {
        let round = env.round();
        let hand = round.hand();
        let max = round.config.max_selected.min(hand.len());
        let count = if max == 0 {
            0
        } else {
            self.rng.gen_range(1..=max)
        };
        let mut positions: Vec<usize> = (0..hand.len()).collect();
        positions.shuffle(&mut self.rng);
        positions.truncate(count);
        let discard = round.discards_left() > 0 && self.rng.gen_bool(self.discard_chance);
        Action::from_hand_indices(hand, &positions, discard)
    }
}

/// Plays the best scoring subset of the hand. When that score falls below
/// `discard_below` and discards remain, throws away the lowest cards that
/// are not part of it instead.
#[derive(Debug, Clone)]
pub struct GreedyPolicy {
    pub discard_below: i64,
}

impl Default for GreedyPolicy {
    fn default() -> Self {
        Self { discard_below: 60 }
    }
}

impl Policy for GreedyPolicy {
    fn name(&self) -> &'static str {
        "greedy"
    }

    fn act(&mut self, env: &Env) -> Action {
        let round = env.round();
        let hand = round.hand();
        let Some((best, value)) = best_play(round) else {
            return Action::play(Vec::new());
        };
        if value < self.discard_below && round.discards_left() > 0 {
            let mut rest: Vec<usize> = (0..hand.len()).filter(|idx| !best.contains(idx)).collect();
            rest.sort_by_key(|idx| (hand[*idx].chips(), hand[*idx].rank.ace_high()));
            rest.truncate(round.config.max_selected);
            if !rest.is_empty() {
                return Action::from_hand_indices(hand, &rest, true);
            }
        }
        Action::from_hand_indices(hand, &best, false)
    }
}

/// Highest scoring selection of up to `max_selected` hand positions. Ties
/// keep the earliest candidate in enumeration order.
pub fn best_play(round: &RoundState) -> Option<(Vec<usize>, i64)> {
    let hand = round.hand();
    let max = round.config.max_selected.min(hand.len());
    let mut best: Option<(Vec<usize>, i64)> = None;
    for size in 1..=max {
        for combo in combinations(hand.len(), size) {
            let cards: Vec<Card> = combo.iter().map(|idx| hand[*idx]).collect();
            let value = score_hand(&cards, &round.tables).value();
            if best.as_ref().map(|(_, v)| value > *v).unwrap_or(true) {
                best = Some((combo, value));
            }
        }
    }
    best
}

/// All `k`-element subsets of `0..n` in lexicographic order.
fn combinations(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut out = Vec::new();
    if k == 0 || k > n {
        return out;
    }
    let mut combo: Vec<usize> = (0..k).collect();
    loop {
        out.push(combo.clone());
        let Some(pos) = (0..k).rev().find(|&i| combo[i] != i + n - k) else {
            break;
        };
        combo[pos] += 1;
        for i in pos + 1..k {
            combo[i] = combo[i - 1] + 1;
        }
    }
    out
}

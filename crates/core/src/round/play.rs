use super::*;
use crate::{score_hand, Event, ScoreBreakdown};

impl RoundState {
    /// Checks a selection without touching the round. The first failing rule
    /// wins, in the order discards, hands, count, bounds, duplicates.
    pub fn validate_play(&self, indices: &[usize], discard: bool) -> Result<(), PlayError> {
        if discard && self.discards_left == 0 {
            return Err(PlayError::NotEnoughDiscards);
        }
        if self.hands_left == 0 {
            return Err(PlayError::NotEnoughHands);
        }
        if indices.len() > self.config.max_selected {
            return Err(PlayError::TooManyCards);
        }
        if indices.iter().any(|&idx| idx >= self.hand.len()) {
            return Err(PlayError::InvalidIndices);
        }
        let cards: Vec<Card> = indices.iter().map(|&idx| self.hand[idx]).collect();
        for (pos, card) in cards.iter().enumerate() {
            if cards[pos + 1..].contains(card) {
                return Err(PlayError::DuplicateCards);
            }
        }
        Ok(())
    }

    /// Plays or discards the selected cards. A play returns its score.
    pub fn play(&mut self, indices: &[usize], discard: bool) -> Result<Option<i64>, PlayError> {
        let breakdown = self.play_detailed(indices, discard)?;
        Ok(breakdown.map(|breakdown| breakdown.value()))
    }

    pub fn play_detailed(
        &mut self,
        indices: &[usize],
        discard: bool,
    ) -> Result<Option<ScoreBreakdown>, PlayError> {
        self.validate_play(indices, discard)?;
        let selected = take_cards(&mut self.hand, indices);
        self.removed.extend_from_slice(&selected);
        self.draw();

        if discard {
            self.discards_left -= 1;
            log::debug!(
                "discarded {} cards, {} discards left",
                selected.len(),
                self.discards_left
            );
            self.events.push(Event::Discarded {
                count: selected.len(),
            });
            return Ok(None);
        }

        self.hands_left -= 1;
        let breakdown = score_hand(&selected, &self.tables);
        let value = breakdown.value();
        self.total_score += value;
        log::debug!(
            "played {:?} for {} ({} x {}), {} hands left",
            breakdown.category,
            value,
            breakdown.total.chips,
            breakdown.total.mult,
            self.hands_left
        );
        self.events.push(Event::HandScored {
            category: breakdown.category,
            chips: breakdown.total.chips,
            mult: breakdown.total.mult,
            total: value,
        });
        if self.is_ended() {
            log::info!("round ended with score {}", self.total_score);
            self.events.push(Event::RoundEnded {
                score: self.total_score,
            });
        }
        Ok(Some(breakdown))
    }
}

/// Removes the cards at `indices` from `hand`, returning them in selection
/// order while the rest keep their relative order.
fn take_cards(hand: &mut Vec<Card>, indices: &[usize]) -> Vec<Card> {
    let selected: Vec<Card> = indices.iter().map(|&idx| hand[idx]).collect();
    let mut position = 0;
    hand.retain(|_| {
        let keep = !indices.contains(&position);
        position += 1;
        keep
    });
    selected
}

use super::*;
use crate::{Event, DECK_SIZE};

impl RoundState {
    /// Reshuffles the full deck and deals a fresh hand. Without a seed the
    /// round's seed source picks one. Undrained events from the previous
    /// round are dropped.
    pub fn reset(&mut self, seed: Option<u64>) {
        let seed = seed.unwrap_or_else(|| self.seed_source.next_seed());
        self.rng = RngState::from_seed(seed);
        self.hands_left = self.config.hands;
        self.discards_left = self.config.discards;
        self.total_score = 0;
        self.removed.clear();
        self.hand.clear();
        self.events.clear();
        self.pile = DrawPile::shuffled(&mut self.rng);
        log::debug!("round reset with seed {seed}");
        self.events.push(Event::RoundStarted {
            seed,
            hands: self.hands_left,
            discards: self.discards_left,
        });
        self.draw();
    }

    /// Refills the hand from the top of the draw pile.
    pub fn draw(&mut self) -> &[Card] {
        let needed = self.config.hand_size.saturating_sub(self.hand.len());
        if needed > 0 {
            let mut drawn = self.pile.draw_cards(needed);
            if !drawn.is_empty() {
                log::debug!("dealt {} cards, {} left in pile", drawn.len(), self.pile.len());
                self.events.push(Event::Dealt { count: drawn.len() });
                self.hand.append(&mut drawn);
            }
        }
        self.debug_check_accounting();
        &self.hand
    }

    fn debug_check_accounting(&self) {
        debug_assert_eq!(
            self.hand.len() + self.pile.len() + self.removed.len(),
            DECK_SIZE,
            "card accounting mismatch"
        );
        debug_assert!(
            {
                let mut seen = [false; DECK_SIZE];
                self.hand
                    .iter()
                    .chain(self.pile.cards())
                    .chain(&self.removed)
                    .all(|card| !std::mem::replace(&mut seen[usize::from(card.id())], true))
            },
            "card tracked twice"
        );
    }
}

use crate::{full_deck, Card, RngState};

/// Undrawn cards. The top of the pile is the end of the vector.
#[derive(Debug, Default, Clone)]
pub struct DrawPile {
    cards: Vec<Card>,
}

impl DrawPile {
    pub fn shuffled(rng: &mut RngState) -> Self {
        let mut cards = full_deck();
        rng.shuffle(&mut cards);
        Self { cards }
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Moves up to `count` cards off the top, in draw order.
    pub fn draw_cards(&mut self, count: usize) -> Vec<Card> {
        let mut cards = Vec::with_capacity(count);
        for _ in 0..count {
            if let Some(card) = self.cards.pop() {
                cards.push(card);
            } else {
                break;
            }
        }
        cards
    }

    /// Remaining cards bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

use minilatro_core::Card;
use serde::{Deserialize, Serialize};

/// A selection of card identities (`Card::id`) plus the play/discard flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Action {
    pub cards: Vec<u8>,
    pub discard: bool,
}

impl Action {
    pub fn play(cards: Vec<u8>) -> Self {
        Self {
            cards,
            discard: false,
        }
    }

    pub fn discard(cards: Vec<u8>) -> Self {
        Self {
            cards,
            discard: true,
        }
    }

    /// Builds an action from positions in `hand`; out-of-range positions
    /// are skipped.
    pub fn from_hand_indices(hand: &[Card], indices: &[usize], discard: bool) -> Self {
        let cards = indices
            .iter()
            .filter_map(|idx| hand.get(*idx))
            .map(Card::id)
            .collect();
        Self { cards, discard }
    }

    pub fn short_label(&self) -> String {
        let cards: Vec<String> = self
            .cards
            .iter()
            .map(|id| match Card::from_id(*id) {
                Some(card) => card.to_string(),
                None => format!("#{id}"),
            })
            .collect();
        let verb = if self.discard { "discard" } else { "play" };
        format!("{verb} [{}]", cards.join(" "))
    }
}

/// Maps selected identities to hand positions. Each identity takes its first
/// match in the hand; unknown identities are dropped, repeats collapse.
pub fn selection_to_indices(hand: &[Card], cards: &[u8]) -> Vec<usize> {
    let mut indices = Vec::with_capacity(cards.len());
    for id in cards {
        let Some(idx) = hand.iter().position(|card| card.id() == *id) else {
            continue;
        };
        if !indices.contains(&idx) {
            indices.push(idx);
        }
    }
    indices
}

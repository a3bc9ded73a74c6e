use crate::{
    Card, DrawPile, EventBus, RngState, RoundConfig, ScoreTables, SeedSource, SystemTimeSeed,
};
use thiserror::Error;

mod play;
mod state;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlayError {
    #[error("too many cards selected")]
    TooManyCards,
    #[error("the same card was selected twice")]
    DuplicateCards,
    #[error("card index out of range")]
    InvalidIndices,
    #[error("no discards left")]
    NotEnoughDiscards,
    #[error("no hands left")]
    NotEnoughHands,
}

#[derive(Debug)]
pub struct RoundState {
    pub config: RoundConfig,
    pub tables: ScoreTables,
    rng: RngState,
    seed_source: Box<dyn SeedSource>,
    pile: DrawPile,
    hand: Vec<Card>,
    removed: Vec<Card>,
    hands_left: u8,
    discards_left: u8,
    total_score: i64,
    events: EventBus,
}

impl RoundState {
    pub fn new(config: RoundConfig, seed: Option<u64>) -> Self {
        Self::with_seed_source(config, Box::new(SystemTimeSeed), seed)
    }

    pub fn with_seed_source(
        config: RoundConfig,
        mut seed_source: Box<dyn SeedSource>,
        seed: Option<u64>,
    ) -> Self {
        let tables = ScoreTables::from_config(&config);
        let initial = seed.unwrap_or_else(|| seed_source.next_seed());
        let mut round = Self {
            config,
            tables,
            rng: RngState::from_seed(initial),
            seed_source,
            pile: DrawPile::default(),
            hand: Vec::new(),
            removed: Vec::new(),
            hands_left: 0,
            discards_left: 0,
            total_score: 0,
            events: EventBus::default(),
        };
        round.reset(Some(initial));
        round
    }

    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    pub fn hands_left(&self) -> u8 {
        self.hands_left
    }

    pub fn discards_left(&self) -> u8 {
        self.discards_left
    }

    pub fn draw_pile(&self) -> &DrawPile {
        &self.pile
    }

    pub fn draw_pile_len(&self) -> usize {
        self.pile.len()
    }

    /// Cards played or discarded since the last reset, in removal order.
    pub fn removed(&self) -> &[Card] {
        &self.removed
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn total_score(&self) -> i64 {
        self.total_score
    }

    pub fn is_ended(&self) -> bool {
        self.hands_left == 0
    }

    pub fn events(&mut self) -> &mut EventBus {
        &mut self.events
    }
}

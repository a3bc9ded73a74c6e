use crate::{selection_to_indices, Action, GymConfig};
use minilatro_core::{Card, Event, HandCategory, PlayError, RoundConfig, RoundState, DECK_SIZE};

/// Multi-hot view of the hand over the 52 card identities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Observation {
    pub hand: [bool; DECK_SIZE],
}

impl Observation {
    pub fn encode(hand: &[Card]) -> Self {
        let mut encoded = [false; DECK_SIZE];
        for card in hand {
            encoded[usize::from(card.id())] = true;
        }
        Self { hand: encoded }
    }

    pub fn count(&self) -> usize {
        self.hand.iter().filter(|held| **held).count()
    }

    pub fn cards(&self) -> Vec<Card> {
        self.hand
            .iter()
            .enumerate()
            .filter(|(_, held)| **held)
            .filter_map(|(id, _)| Card::from_id(id as u8))
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StepInfo {
    pub indices: Vec<usize>,
    pub category: Option<HandCategory>,
    pub error: Option<PlayError>,
    /// Round events raised by this step.
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Step {
    pub observation: Observation,
    pub reward: i64,
    pub terminated: bool,
    pub truncated: bool,
    pub info: StepInfo,
}

#[derive(Debug)]
pub struct Env {
    round: RoundState,
    config: GymConfig,
    steps: u32,
}

impl Env {
    pub fn new(round_config: RoundConfig, config: GymConfig) -> Self {
        let round = RoundState::new(round_config, config.seed);
        Self::from_round(round, config)
    }

    pub fn from_round(mut round: RoundState, config: GymConfig) -> Self {
        round.events().clear();
        Self {
            round,
            config,
            steps: 0,
        }
    }

    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        self.round.reset(seed);
        self.round.events().clear();
        self.steps = 0;
        self.observe()
    }

    pub fn observe(&self) -> Observation {
        Observation::encode(self.round.hand())
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn config(&self) -> &GymConfig {
        &self.config
    }

    /// Applies an action. Rejected actions leave the round untouched and
    /// earn `invalid_reward`.
    pub fn step(&mut self, action: &Action) -> Step {
        self.steps += 1;
        let indices = selection_to_indices(self.round.hand(), &action.cards);
        let mut info = StepInfo {
            indices: indices.clone(),
            ..StepInfo::default()
        };
        let reward = match self.round.play_detailed(&indices, action.discard) {
            Ok(Some(breakdown)) => {
                info.category = Some(breakdown.category);
                breakdown.value()
            }
            Ok(None) => 0,
            Err(err) => {
                log::debug!("rejected {}: {err}", action.short_label());
                info.error = Some(err);
                self.config.invalid_reward
            }
        };
        info.events = self.round.events().drain().collect();
        let terminated = self.round.is_ended();
        Step {
            observation: self.observe(),
            reward,
            terminated,
            truncated: !terminated && self.steps >= self.config.max_steps,
            info,
        }
    }
}

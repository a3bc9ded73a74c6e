#[derive(Debug, Clone)]
pub struct GymConfig {
    /// Seed for the first reset; `None` lets the round pick one.
    pub seed: Option<u64>,
    /// Episodes are truncated after this many steps.
    pub max_steps: u32,
    /// Reward handed back when the engine rejects an action.
    pub invalid_reward: i64,
}

impl Default for GymConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_steps: 64,
            invalid_reward: 0,
        }
    }
}

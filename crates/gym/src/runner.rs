use crate::{Env, EpisodeResult, EpisodeStatus, Policy, StepRecord};

/// Drives `policy` from the env's current state until the round ends or the
/// step budget runs out.
pub fn run_episode(env: &mut Env, policy: &mut dyn Policy) -> EpisodeResult {
    let mut steps = Vec::new();
    let mut total_reward = 0;
    let mut status = EpisodeStatus::Ended;

    while !env.round().is_ended() {
        let hand_before: Vec<String> = env.round().hand().iter().map(ToString::to_string).collect();
        let action = policy.act(env);
        let step = env.step(&action);
        total_reward += step.reward;
        steps.push(StepRecord {
            step: env.steps(),
            hand_before,
            action,
            indices: step.info.indices,
            reward: step.reward,
            category: step
                .info
                .category
                .map(|category| category.display_name().to_string()),
            error: step.info.error.map(|err| err.to_string()),
            hands_left: env.round().hands_left(),
            discards_left: env.round().discards_left(),
        });
        if step.truncated {
            status = EpisodeStatus::Truncated;
            break;
        }
    }

    log::info!(
        "{} episode finished after {} steps with reward {}",
        policy.name(),
        steps.len(),
        total_reward
    );
    EpisodeResult {
        policy: policy.name().to_string(),
        seed: env.round().seed(),
        status,
        total_reward,
        steps,
    }
}

mod input;
mod persistence;
mod render;

use anyhow::Context;
use input::{parse_line, Command};
use minilatro_core::{Card, RoundConfig, RoundState};
use minilatro_data::load_round_config_or_default;
use minilatro_gym::{run_episode, write_json, write_text, Env, GreedyPolicy, GymConfig};
use persistence::{default_save_path, load_round, replay, save_round, SavedAction};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const DEFAULT_SEED: u64 = 1234;

#[derive(Debug, Clone)]
struct CliOptions {
    auto: bool,
    seed: Option<u64>,
    save: Option<PathBuf>,
    load: Option<PathBuf>,
    trace_text: Option<PathBuf>,
    assets: PathBuf,
}

fn parse_cli_options(args: &[String]) -> CliOptions {
    let mut options = CliOptions {
        auto: false,
        seed: None,
        save: None,
        load: None,
        trace_text: None,
        assets: PathBuf::from("assets"),
    };
    let mut idx = 0usize;
    while idx < args.len() {
        let value = args.get(idx + 1);
        match (args[idx].as_str(), value) {
            ("--auto", _) => options.auto = true,
            ("--seed", Some(value)) => {
                options.seed = value.parse::<u64>().ok();
                if options.seed.is_none() {
                    log::warn!("ignoring invalid seed '{value}', using {DEFAULT_SEED}");
                }
                idx += 1;
            }
            ("--save", Some(value)) => {
                options.save = Some(PathBuf::from(value));
                idx += 1;
            }
            ("--load", Some(value)) => {
                options.load = Some(PathBuf::from(value));
                idx += 1;
            }
            ("--trace-text", Some(value)) => {
                options.trace_text = Some(PathBuf::from(value));
                idx += 1;
            }
            ("--assets", Some(value)) => {
                options.assets = PathBuf::from(value);
                idx += 1;
            }
            (other, _) => log::warn!("ignoring argument '{other}'"),
        }
        idx += 1;
    }
    options
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_cli_options(&args);
    if let Err(err) = run(options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

fn run(options: CliOptions) -> anyhow::Result<()> {
    let config = load_round_config_or_default(&options.assets)?;
    if options.auto {
        return run_auto(config, &options);
    }
    run_interactive(config, &options)
}

fn run_auto(config: RoundConfig, options: &CliOptions) -> anyhow::Result<()> {
    let gym = GymConfig {
        seed: Some(options.seed.unwrap_or(DEFAULT_SEED)),
        ..GymConfig::default()
    };
    let mut env = Env::new(config, gym);
    let mut policy = GreedyPolicy::default();
    let result = run_episode(&mut env, &mut policy);
    println!("{}", result.to_text_report());
    if let Some(path) = &options.save {
        write_json(path, &result).with_context(|| format!("write trace {}", path.display()))?;
        println!("trace written to {}", path.display());
    }
    if let Some(path) = &options.trace_text {
        write_text(path, &result).with_context(|| format!("write report {}", path.display()))?;
        println!("report written to {}", path.display());
    }
    Ok(())
}

fn run_interactive(config: RoundConfig, options: &CliOptions) -> anyhow::Result<()> {
    let (mut round, mut actions) = match &options.load {
        Some(path) => {
            let saved = load_round(path)?;
            let round = replay(&saved, config)?;
            println!(
                "resumed {} ({} actions replayed)",
                path.display(),
                saved.actions.len()
            );
            (round, saved.actions)
        }
        None => (
            RoundState::new(config, Some(options.seed.unwrap_or(DEFAULT_SEED))),
            Vec::new(),
        ),
    };

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    drain_events(&mut round);
    while !round.is_ended() {
        println!();
        println!("{}", render::format_status(&round));
        println!("{}", render::format_hand(&round));
        print!("play> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        let line = line?;
        match parse_line(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", render::help_text()),
            Ok(Command::Save(path)) => {
                let path = path
                    .or_else(|| options.save.clone())
                    .unwrap_or_else(default_save_path);
                match save_round(&path, round.seed(), &actions) {
                    Ok(()) => println!("saved to {}", path.display()),
                    Err(err) => eprintln!("save failed: {err:#}"),
                }
            }
            Ok(Command::Select { indices, discard }) => {
                apply_selection(&mut round, &mut actions, indices, discard)
            }
            Err(err) => eprintln!("{err}"),
        }
    }

    if round.is_ended() {
        println!();
        println!("round over: score {}", round.total_score());
    }
    if let Some(path) = &options.save {
        save_round(path, round.seed(), &actions)?;
        println!("saved to {}", path.display());
    }
    Ok(())
}

fn apply_selection(
    round: &mut RoundState,
    actions: &mut Vec<SavedAction>,
    indices: Vec<usize>,
    discard: bool,
) {
    let played: Vec<Card> = indices
        .iter()
        .filter_map(|idx| round.hand().get(*idx).copied())
        .collect();
    match round.play_detailed(&indices, discard) {
        Ok(Some(breakdown)) => {
            println!("{}", render::format_breakdown(&breakdown, &played));
            actions.push(SavedAction { discard, indices });
        }
        Ok(None) => {
            println!("discarded {} cards", played.len());
            actions.push(SavedAction { discard, indices });
        }
        Err(err) => eprintln!("rejected: {err}"),
    }
    drain_events(round);
}

fn drain_events(round: &mut RoundState) {
    for event in round.events().drain() {
        log::debug!("event: {event:?}");
    }
}

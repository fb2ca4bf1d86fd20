//! Survival Sim - Entry Point
//!
//! Runs batches of episodes with a built-in policy, or steps a single
//! episode interactively from stdin.

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use survival_sim::actions::catalog::{Action, ACTION_COUNT};
use survival_sim::advisory::{Advisor, FieldGuide};
use survival_sim::core::config::EnvConfig;
use survival_sim::core::error::Result;
use survival_sim::simulation::{
    run_batch, EpisodeSummary, HeuristicPolicy, Policy, RandomPolicy, SurvivalEnv,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum PolicyKind {
    Random,
    Heuristic,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Survival environment runner
#[derive(Parser, Debug)]
#[command(name = "survival-sim")]
#[command(about = "Run survival episodes with an optional first-aid advisor")]
struct Args {
    /// TOML config file (max_steps, difficulty, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Step budget per episode (overrides config)
    #[arg(long)]
    max_steps: Option<u32>,

    /// Decay multiplier, minimum 0.1 (overrides config)
    #[arg(long)]
    difficulty: Option<f32>,

    /// Base seed; episode i uses seed + i
    #[arg(long)]
    seed: Option<u64>,

    /// Number of episodes to run in parallel
    #[arg(long, default_value_t = 1)]
    episodes: usize,

    #[arg(long, value_enum, default_value_t = PolicyKind::Heuristic)]
    policy: PolicyKind,

    /// Run without the advisory collaborator
    #[arg(long)]
    no_advisor: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Step one episode by hand
    #[arg(long, short = 'i')]
    interactive: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("survival_sim=info")),
        )
        .init();

    let args = Args::parse();
    let config = build_config(&args)?;

    tracing::info!(
        "Survival Sim starting (max_steps: {}, difficulty: {:.2})",
        config.max_steps,
        config.difficulty
    );

    if args.interactive {
        return run_interactive(config, !args.no_advisor);
    }

    let base_seed = config.seed.unwrap_or_else(rand::random);
    let with_advisor = !args.no_advisor;
    let policy_kind = args.policy;

    let summaries = run_batch(
        &config,
        args.episodes,
        base_seed,
        || with_advisor.then(|| Box::new(FieldGuide::new()) as Box<dyn Advisor>),
        |seed| match policy_kind {
            PolicyKind::Random => Box::new(RandomPolicy::new(seed)) as Box<dyn Policy>,
            PolicyKind::Heuristic => Box::new(HeuristicPolicy::new()),
        },
    )?;

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&summaries)?),
        OutputFormat::Text => print_summaries(&summaries),
    }

    Ok(())
}

fn build_config(args: &Args) -> Result<EnvConfig> {
    let mut config = match &args.config {
        Some(path) => EnvConfig::load(path)?,
        None => EnvConfig::default(),
    };

    if let Some(max_steps) = args.max_steps {
        config.max_steps = max_steps;
    }
    if let Some(difficulty) = args.difficulty {
        config.difficulty = difficulty;
    }
    if args.seed.is_some() {
        config.seed = args.seed;
    }

    let config = config.clamped();
    config.validate()?;
    Ok(config)
}

fn print_summaries(summaries: &[EpisodeSummary]) {
    println!("\n=== SURVIVAL SIM ===");
    for (i, summary) in summaries.iter().enumerate() {
        println!(
            "Episode {:>3} (seed {:?}): {:?} after {} steps, day {}, health {:.1}, reward {:.2}",
            i,
            summary.seed,
            summary.end,
            summary.steps,
            summary.days,
            summary.final_health,
            summary.total_reward
        );
    }

    if summaries.is_empty() {
        return;
    }

    let survived = summaries.iter().filter(|s| s.survived()).count();
    let total_reward: f32 = summaries.iter().map(|s| s.total_reward).sum();
    let mean_reward = total_reward / summaries.len() as f32;
    println!();
    println!("Survived: {}/{}", survived, summaries.len());
    println!("Mean reward: {:.2}", mean_reward);
}

fn run_interactive(config: EnvConfig, with_advisor: bool) -> Result<()> {
    let mut env = SurvivalEnv::new(config)?;
    if with_advisor {
        env = env.with_advisor(FieldGuide::new());
    }
    env.reset(None);

    println!("\n=== SURVIVAL SIM ===");
    println!("Commands:");
    println!("  <0-{}>       - Take an action", ACTION_COUNT - 1);
    println!("  actions / a - List actions");
    println!("  status / s  - Show status");
    println!("  reset       - Start a new episode");
    println!("  quit / q    - Exit");
    println!();
    print!("{}", env.render());

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();

        match input {
            "" => continue,
            "quit" | "q" => break,
            "status" | "s" => print!("{}", env.render()),
            "actions" | "a" => {
                for id in 0..ACTION_COUNT {
                    if let Ok(action) = Action::try_from(id) {
                        println!("  {:>2}: {}", id, action);
                    }
                }
            }
            "reset" => {
                env.reset(None);
                print!("{}", env.render());
            }
            other => {
                let Ok(id) = other.parse::<i64>() else {
                    println!("Unknown command: {}", other);
                    continue;
                };

                match env.step(id) {
                    Ok(result) => {
                        println!("{} (reward {:.3})", result.info.message, result.reward);
                        if let Some(advice) = &result.info.advisory_response {
                            println!("Advice: {}", advice);
                        }
                        print!("{}", env.render());
                        if let Some(end) = result.info.episode_end {
                            println!("Episode over: {:?}. Type 'reset' to play again.", end);
                        }
                    }
                    Err(e) => println!("{}", e),
                }
            }
        }
    }

    Ok(())
}

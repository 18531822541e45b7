//! chance-lab - seeded Monte Carlo runs of two classic probability puzzles,
//! plus a hosted Monty Hall round at the console.

mod console;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use monty_hall::{
    expand_seed, run_simulation, seed_fingerprint, verify_trial, SimConfig, SwitchPolicy,
    TrialRecord,
};
use serde::Serialize;
use std::io::{stdin, stdout};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use two_children::{run_survey, SurveyConfig};

// =============================================================================
// CLI SURFACE
// =============================================================================

#[derive(Parser)]
#[command(name = "chance-lab")]
#[command(about = "Monte Carlo experiments for the Monty Hall and two-children puzzles")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Monty Hall trials
    #[command(subcommand)]
    Monty(MontyCommand),

    /// Two-children family surveys
    #[command(subcommand)]
    Children(ChildrenCommand),
}

#[derive(Subcommand)]
enum MontyCommand {
    /// Run a batch of seeded trials and report the win rate
    Simulate {
        /// Number of trials to run
        #[arg(long, default_value_t = 100_000)]
        trials: u64,
        /// Switch policy applied on every trial
        #[arg(long, value_enum, default_value = "always")]
        policy: PolicyArg,
        /// Seed for the run; drawn from OS entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Extra seed material mixed into every trial stream
        #[arg(long, default_value = "")]
        client_seed: String,
        /// Pin the contestant's first pick to this door
        #[arg(long)]
        first_pick: Option<u8>,
        /// Emit machine-readable JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
    /// Play hosted rounds at the console
    Play {
        /// Seed for the session; drawn from OS entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Extra seed material mixed into every round
        #[arg(long, default_value = "")]
        client_seed: String,
    },
    /// Replay a recorded trial from revealed seed material (exit 1 on mismatch)
    Verify {
        /// The revealed seed the trial ran under
        #[arg(long)]
        seed: u64,
        /// Client seed the trial ran under
        #[arg(long, default_value = "")]
        client_seed: String,
        /// Trial index within the run
        #[arg(long)]
        nonce: u64,
        /// Door the first pick was pinned to, if it was pinned
        #[arg(long)]
        pinned_pick: Option<u8>,
        /// The trial record as JSON, exactly as reported
        #[arg(long)]
        record: String,
    },
}

#[derive(Subcommand)]
enum ChildrenCommand {
    /// Sample families and report both conditional ratios
    Survey {
        /// Number of families to sample
        #[arg(long, default_value_t = 100_000)]
        trials: u64,
        /// Seed for the survey; drawn from OS entropy when omitted
        #[arg(long)]
        seed: Option<u64>,
        /// Extra seed material mixed into every trial stream
        #[arg(long, default_value = "")]
        client_seed: String,
        /// Emit machine-readable JSON instead of the text report
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum PolicyArg {
    Always,
    Never,
    Random,
}

impl From<PolicyArg> for SwitchPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Always => SwitchPolicy::Always,
            PolicyArg::Never => SwitchPolicy::Never,
            PolicyArg::Random => SwitchPolicy::Random,
        }
    }
}

// =============================================================================
// REPORTS
// =============================================================================

#[derive(Serialize)]
struct MontyReport {
    seed: u64,
    seed_fingerprint: String,
    policy: &'static str,
    trials: u64,
    wins: u64,
    win_rate: f64,
    margin_of_error: f64,
    theoretical_win_rate: f64,
}

#[derive(Serialize)]
struct ChildrenReport {
    seed: u64,
    seed_fingerprint: String,
    trials: u64,
    elder_girl: u64,
    both_girls: u64,
    at_least_one_girl: u64,
    p_elder_girl: f64,
    p_both_given_elder_girl: Option<f64>,
    p_both_given_at_least_one: Option<f64>,
}

fn print_monty_report(report: &MontyReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Monty Hall simulation: {}", report.policy);
    println!("  seed        {} (fingerprint {})", report.seed, report.seed_fingerprint);
    println!("  trials      {}", report.trials);
    println!("  wins        {}", report.wins);
    println!(
        "  win rate    {:.5} +/- {:.5} (95% CI)",
        report.win_rate, report.margin_of_error
    );
    println!("  theory      {:.5}", report.theoretical_win_rate);
    Ok(())
}

fn print_children_report(report: &ChildrenReport, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
        return Ok(());
    }

    println!("Two-children survey: {} families", report.trials);
    println!("  seed        {} (fingerprint {})", report.seed, report.seed_fingerprint);
    println!(
        "  elder girl  {} | both girls {} | at least one girl {}",
        report.elder_girl, report.both_girls, report.at_least_one_girl
    );
    match report.p_both_given_elder_girl {
        Some(ratio) => println!("  P(both | elder girl)     {:.5} (theory 0.50000)", ratio),
        None => println!("  P(both | elder girl)     undefined (condition never occurred)"),
    }
    match report.p_both_given_at_least_one {
        Some(ratio) => println!("  P(both | >=1 girl)       {:.5} (theory 0.33333)", ratio),
        None => println!("  P(both | >=1 girl)       undefined (condition never occurred)"),
    }
    Ok(())
}

// =============================================================================
// COMMANDS
// =============================================================================

/// Use the explicit seed, or draw one from OS entropy.
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| {
        let drawn: u64 = rand::random();
        debug!(seed = drawn, "seed drawn from OS entropy");
        drawn
    })
}

fn monty_simulate(
    trials: u64,
    policy: PolicyArg,
    seed: Option<u64>,
    client_seed: String,
    first_pick: Option<u8>,
    json: bool,
) -> Result<()> {
    let seed = resolve_seed(seed);
    let policy = SwitchPolicy::from(policy);

    let config = SimConfig {
        trials,
        policy,
        seed,
        client_seed,
        first_pick,
    };
    let summary = run_simulation(&config)?;

    let report = MontyReport {
        seed,
        seed_fingerprint: summary.seed_fingerprint.clone(),
        policy: policy.label(),
        trials: summary.trials,
        wins: summary.wins,
        win_rate: summary.win_rate(),
        margin_of_error: summary.margin_of_error(),
        theoretical_win_rate: policy.theoretical_win_rate(),
    };
    print_monty_report(&report, json)
}

fn monty_verify(
    seed: u64,
    client_seed: &str,
    nonce: u64,
    pinned_pick: Option<u8>,
    record: &str,
) -> Result<()> {
    let record: TrialRecord =
        serde_json::from_str(record).context("record is not valid trial JSON")?;

    // The switch decision is part of the record, so replay it as a fixed
    // policy. This also covers trials that ran under the random policy.
    let policy = if record.switched {
        SwitchPolicy::Always
    } else {
        SwitchPolicy::Never
    };

    let server_seed = expand_seed(seed);
    let ok = verify_trial(&server_seed, client_seed, nonce, pinned_pick, policy, &record)?;

    if !ok {
        eprintln!(
            "MISMATCH: nonce {} under fingerprint {} does not replay to this record",
            nonce,
            seed_fingerprint(&server_seed)
        );
        std::process::exit(1);
    }

    println!(
        "Verified: nonce {} under fingerprint {} replays exactly",
        nonce,
        seed_fingerprint(&server_seed)
    );
    Ok(())
}

fn children_survey(trials: u64, seed: Option<u64>, client_seed: String, json: bool) -> Result<()> {
    let seed = resolve_seed(seed);

    let config = SurveyConfig {
        trials,
        seed,
        client_seed,
    };
    let summary = run_survey(&config)?;

    let report = ChildrenReport {
        seed,
        seed_fingerprint: summary.seed_fingerprint.clone(),
        trials: summary.trials,
        elder_girl: summary.elder_girl,
        both_girls: summary.both_girls,
        at_least_one_girl: summary.at_least_one_girl,
        p_elder_girl: summary.p_elder_girl(),
        p_both_given_elder_girl: summary.p_both_given_elder_girl(),
        p_both_given_at_least_one: summary.p_both_given_at_least_one(),
    };
    print_children_report(&report, json)
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn init_tracing() {
    // Logs go to stderr so stdout stays clean for reports.
    // RUST_LOG overrides the warn default.
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Monty(MontyCommand::Simulate {
            trials,
            policy,
            seed,
            client_seed,
            first_pick,
            json,
        }) => monty_simulate(trials, policy, seed, client_seed, first_pick, json),
        Commands::Monty(MontyCommand::Play { seed, client_seed }) => {
            let seed = resolve_seed(seed);
            console::play_session(stdin().lock(), stdout().lock(), seed, &client_seed)
        }
        Commands::Monty(MontyCommand::Verify {
            seed,
            client_seed,
            nonce,
            pinned_pick,
            record,
        }) => monty_verify(seed, &client_seed, nonce, pinned_pick, &record),
        Commands::Children(ChildrenCommand::Survey {
            trials,
            seed,
            client_seed,
            json,
        }) => children_survey(trials, seed, client_seed, json),
    }
}

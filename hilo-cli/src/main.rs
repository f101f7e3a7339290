//! hilo: CLI binary for the hi-lo guessing game.
//!
//! Subcommands:
//! - play
//! - sim

use std::env;
use std::path::PathBuf;
use std::process;

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

use hilo_core::round::GuessOutcome;
use hilo_core::{Config, GameController, SecretSource};
use hilo_logging::{
    now_ms, write_manifest_atomic, GuessEventV1, NdjsonWriter, RoundEndedEventV1,
    RoundStartedEventV1, SessionManifestV1, SESSION_MANIFEST_VERSION,
};

fn print_help() {
    eprintln!(
        r#"hilo - hi-lo number guessing game

USAGE:
    hilo <COMMAND> [OPTIONS]

COMMANDS:
    play                Play interactively in the terminal
    sim                 Run a headless random-guesser simulation

OPTIONS:
    -h, --help          Print this help message
    -V, --version       Print version

Run `hilo <COMMAND> --help` for command options.
"#
    );
}

fn print_version() {
    println!("hilo {}", env!("CARGO_PKG_VERSION"));
}

fn cmd_play(args: &[String]) {
    let mut config_path: Option<PathBuf> = None;
    let mut seed: Option<u64> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"hilo play

USAGE:
    hilo play [--config cfg.yaml] [--seed S]

OPTIONS:
    --config PATH    Load a YAML config (defaults apply when omitted)
    --seed S         Fixed RNG seed for a reproducible session
"#
                );
                return;
            }
            "--config" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --config");
                    process::exit(1);
                }
                config_path = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                seed = Some(args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                }));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `hilo play`: {}", other);
                eprintln!("Run `hilo play --help` for usage.");
                process::exit(1);
            }
        }
    }

    let mut cfg = match &config_path {
        Some(p) => match Config::load(p) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Failed to load {}: {e}", p.display());
                process::exit(1);
            }
        },
        None => Config::default(),
    };
    if let Some(s) = seed {
        cfg.game.seed = Some(s);
    }

    if let Err(e) = hilo_tui::validate_config(&cfg) {
        eprintln!("Invalid config: {e}");
        process::exit(1);
    }
    if let Err(e) = hilo_tui::run(&cfg) {
        eprintln!("Terminal UI failed: {e}");
        process::exit(1);
    }
}

struct SimReport {
    games: u32,
    wins: u32,
    /// Attempts used per round (losses sit at the full budget).
    attempts: Vec<u32>,
    observed_win_rate: u32,
    single_guess_probability: f64,
}

/// Play `games` rounds with a uniform random guesser.
///
/// The guesser RNG is separate from the secret RNG so the two streams stay
/// independent; both derive from `seed`, keeping a run fully reproducible.
fn run_sim(games: u32, seed: u64, max: u32, mut events: Option<&mut NdjsonWriter>) -> SimReport {
    let mut controller = GameController::new(SecretSource::from_seed(seed));
    let mut chooser = ChaCha8Rng::seed_from_u64(seed ^ 0x9E37_79B9_7F4A_7C15);

    let raw_max = max.to_string();
    let mut wins = 0u32;
    let mut attempts = Vec::with_capacity(games as usize);

    for _ in 0..games {
        let started = controller.start_round(&raw_max);
        if let Some(w) = events.as_deref_mut() {
            let _ = w.write_event(&RoundStartedEventV1 {
                event: "round_started",
                ts_ms: now_ms(),
                max_number: started.max_number,
                max_attempts: started.max_attempts,
            });
        }

        loop {
            let guess = chooser.gen_range(0..=started.max_number);
            let outcome = controller.submit_guess(&guess.to_string());

            if let Some(w) = events.as_deref_mut() {
                log_sim_outcome(w, &controller, &outcome);
            }

            match outcome {
                GuessOutcome::Win { attempts_used, .. } => {
                    wins += 1;
                    attempts.push(attempts_used);
                    break;
                }
                GuessOutcome::Loss { .. } => {
                    attempts.push(started.max_attempts);
                    break;
                }
                GuessOutcome::Continue { .. } => {}
                GuessOutcome::Invalid { .. } | GuessOutcome::Inactive => {
                    // A generated guess is always in range; never reached.
                    break;
                }
            }
        }
    }

    let stats = controller.stats();
    SimReport {
        games,
        wins,
        attempts,
        observed_win_rate: stats.win_rate,
        single_guess_probability: stats.win_probability,
    }
}

fn log_sim_outcome(w: &mut NdjsonWriter, controller: &GameController, outcome: &GuessOutcome) {
    let ts_ms = now_ms();
    let (kind, direction, remaining) = match outcome {
        GuessOutcome::Inactive => return,
        GuessOutcome::Invalid { .. } => ("invalid", None, None),
        GuessOutcome::Continue {
            direction,
            remaining,
        } => ("continue", Some(direction.as_str()), Some(*remaining)),
        GuessOutcome::Win { .. } => ("win", None, None),
        GuessOutcome::Loss { .. } => ("loss", None, None),
    };
    let _ = w.write_event(&GuessEventV1 {
        event: "guess",
        ts_ms,
        kind,
        direction,
        remaining,
    });

    let won = matches!(outcome, GuessOutcome::Win { .. });
    if won || matches!(outcome, GuessOutcome::Loss { .. }) {
        let stats = controller.stats();
        if let Some(r) = controller.round() {
            let _ = w.write_event(&RoundEndedEventV1 {
                event: "round_ended",
                ts_ms,
                won,
                attempts_used: r.attempts_used,
                secret_number: r.secret_number,
                games_played: stats.games_played,
                wins: stats.wins,
            });
        }
    }
}

/// Print a histogram of attempts used per round (bucket size 1).
fn print_attempts_histogram(attempts: &[u32]) {
    let Some(&max_a) = attempts.iter().max() else {
        return;
    };
    let min_a = *attempts.iter().min().unwrap();

    let mut counts = vec![0usize; (max_a - min_a) as usize + 1];
    for &a in attempts {
        counts[(a - min_a) as usize] += 1;
    }
    let max_count = *counts.iter().max().unwrap_or(&1);
    let bar_width = 50usize;

    println!("\nAttempts histogram (N={}):", attempts.len());
    println!("{}", "─".repeat(70));
    for (i, &count) in counts.iter().enumerate() {
        let bar_len = (count * bar_width) / max_count.max(1);
        let bar: String = "█".repeat(bar_len);
        println!(
            "{:3} │{:<50} {:4} ({:.1}%)",
            min_a + i as u32,
            bar,
            count,
            (count as f64 / attempts.len() as f64) * 100.0
        );
    }
    println!("{}", "─".repeat(70));
}

fn cmd_sim(args: &[String]) {
    let mut games: u32 = 1000;
    let mut seed: u64 = 0;
    let mut max: u32 = 100;
    let mut no_hist = false;
    let mut out: Option<PathBuf> = None;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"hilo sim

USAGE:
    hilo sim [--games N] [--seed S] [--max M] [--no-hist] [--out DIR]

OPTIONS:
    --games N    Number of rounds to simulate (default: 1000)
    --seed S     RNG seed (default: 0)
    --max M      Upper bound for every round (default: 100)
    --no-hist    Skip printing the attempts histogram
    --out DIR    Write events.ndjson and session.json into DIR
"#
                );
                return;
            }
            "--games" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --games");
                    process::exit(1);
                }
                games = args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --games value: {}", args[i + 1]);
                    process::exit(1);
                });
                i += 2;
            }
            "--seed" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --seed");
                    process::exit(1);
                }
                seed = args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --seed value: {}", args[i + 1]);
                    process::exit(1);
                });
                i += 2;
            }
            "--max" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --max");
                    process::exit(1);
                }
                max = args[i + 1].parse().unwrap_or_else(|_| {
                    eprintln!("Invalid --max value: {}", args[i + 1]);
                    process::exit(1);
                });
                i += 2;
            }
            "--no-hist" => {
                no_hist = true;
                i += 1;
            }
            "--out" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --out");
                    process::exit(1);
                }
                out = Some(PathBuf::from(&args[i + 1]));
                i += 2;
            }
            other => {
                eprintln!("Unknown option for `hilo sim`: {}", other);
                eprintln!("Run `hilo sim --help` for usage.");
                process::exit(1);
            }
        }
    }

    if games == 0 {
        eprintln!("--games must be >= 1");
        process::exit(1);
    }

    let created_ts_ms = now_ms();
    let mut writer = match &out {
        Some(dir) => {
            if let Err(e) = std::fs::create_dir_all(dir) {
                eprintln!("Failed to create {}: {e}", dir.display());
                process::exit(1);
            }
            match NdjsonWriter::open_append(dir.join("events.ndjson")) {
                Ok(w) => Some(w),
                Err(e) => {
                    eprintln!("Failed to open events.ndjson: {e}");
                    process::exit(1);
                }
            }
        }
        None => None,
    };

    println!("Running simulation...");
    let report = run_sim(games, seed, max, writer.as_mut());
    if let Some(w) = writer.as_mut() {
        let _ = w.flush();
    }

    let mean_attempts =
        report.attempts.iter().map(|&a| f64::from(a)).sum::<f64>() / report.attempts.len() as f64;
    let min_attempts = report.attempts.iter().min().copied().unwrap_or(0);
    let max_attempts = report.attempts.iter().max().copied().unwrap_or(0);

    println!();
    println!("Evaluation:");
    println!("  - Games: {}", report.games);
    println!(
        "  - Wins: {} ({}% observed win rate)",
        report.wins, report.observed_win_rate
    );
    println!(
        "  - Single-guess win probability: {:.2}%",
        report.single_guess_probability
    );
    println!(
        "  - Attempts per round: mean={:.2}, min={}, max={}",
        mean_attempts, min_attempts, max_attempts
    );

    if !no_hist {
        print_attempts_histogram(&report.attempts);
    }

    if let Some(dir) = &out {
        let manifest = SessionManifestV1 {
            session_manifest_version: SESSION_MANIFEST_VERSION,
            session_id: format!("sim_seed{seed}"),
            created_ts_ms,
            updated_ts_ms: now_ms(),
            games_played: report.games,
            wins: report.wins,
        };
        if let Err(e) = write_manifest_atomic(dir.join("session.json"), &manifest) {
            eprintln!("Failed to write session.json: {e}");
            process::exit(1);
        }
    }
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None | Some("--help") | Some("-h") => {
            print_help();
        }
        Some("--version") | Some("-V") => {
            print_version();
        }
        Some("play") => cmd_play(&args[1..]),
        Some("sim") => cmd_sim(&args[1..]),
        Some(other) => {
            eprintln!("Unknown command: {}", other);
            print_help();
            process::exit(1);
        }
    }
}

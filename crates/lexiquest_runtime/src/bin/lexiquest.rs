//! LexiQuest CLI entry point.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use lexiquest_foundation::{Difficulty, GameMode};
use lexiquest_runtime::{
    CommandSpeaker, Game, default_catalog, init_logging, load_catalog, print_stats,
    print_word_list,
};
use lexiquest_session::{Session, SessionConfig};

/// What to do after parsing arguments.
#[derive(Default)]
enum CliCommand {
    /// Run the quiz.
    #[default]
    Play,
    /// Print the word list, optionally filtered by difficulty.
    Words(Option<Difficulty>),
    /// Print catalog statistics.
    Stats,
}

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    command: CliCommand,
    catalog: Option<PathBuf>,
    seed: Option<u64>,
    starting_level: Option<u8>,
    word_match: bool,
    no_audio: bool,
    delay_ms: Option<u64>,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--word-match" => config.word_match = true,
            "--no-audio" => config.no_audio = true,
            "--catalog" => {
                i += 1;
                if i >= args.len() {
                    return Err("--catalog requires a path".into());
                }
                config.catalog = Some(PathBuf::from(&args[i]));
            }
            "--seed" => {
                i += 1;
                if i >= args.len() {
                    return Err("--seed requires a value".into());
                }
                config.seed = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {}", args[i]))?,
                );
            }
            "--level" => {
                i += 1;
                if i >= args.len() {
                    return Err("--level requires a value".into());
                }
                config.starting_level = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --level value: {}", args[i]))?,
                );
            }
            "--delay-ms" => {
                i += 1;
                if i >= args.len() {
                    return Err("--delay-ms requires a value".into());
                }
                config.delay_ms = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --delay-ms value: {}", args[i]))?,
                );
            }
            "words" => {
                let filter = match args.get(i + 1) {
                    Some(value) if !value.starts_with('-') => {
                        i += 1;
                        Some(value.parse::<Difficulty>()?)
                    }
                    _ => None,
                };
                config.command = CliCommand::Words(filter);
            }
            "stats" => config.command = CliCommand::Stats,
            "play" => config.command = CliCommand::Play,
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("lexiquest {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let catalog = match &config.catalog {
        Some(path) => load_catalog(path)?,
        None => default_catalog()?,
    };

    match config.command {
        CliCommand::Words(filter) => print_word_list(&catalog, filter),
        CliCommand::Stats => print_stats(&catalog),
        CliCommand::Play => {
            let session_config = SessionConfig {
                seed: config.seed,
                starting_level: config.starting_level.unwrap_or(1),
                mode: if config.word_match {
                    GameMode::WordMatch
                } else {
                    GameMode::DefinitionMatch
                },
            };
            let mut session = Session::new(catalog, session_config);
            if !config.no_audio {
                session = session.with_speaker(Box::new(CommandSpeaker::detect()));
            }

            let mut game = Game::new(session)?;
            if let Some(ms) = config.delay_ms {
                game = game.with_feedback_delay(Duration::from_millis(ms));
            }
            game.run()?;
        }
    }

    Ok(())
}

fn print_help() {
    println!("lexiquest - vocabulary quiz");
    println!();
    println!("USAGE:");
    println!("  lexiquest [COMMAND] [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("  play               Run the quiz (default)");
    println!("  words [DIFFICULTY] Print the word list, optionally easy|medium|hard");
    println!("  stats              Print catalog statistics");
    println!();
    println!("OPTIONS:");
    println!("  --catalog <PATH>   Load a catalog document instead of the bundled one");
    println!("  --seed <N>         Seed the round generator for a reproducible game");
    println!("  --level <N>        Starting level (1-5, default 1)");
    println!("  --word-match       Start in word-match mode");
    println!("  --no-audio         Skip pronunciation even if a backend exists");
    println!("  --delay-ms <N>     Pause after feedback, in milliseconds");
    println!("  -h, --help         Show this help");
    println!("  -V, --version      Show the version");
    println!();
    println!("ENVIRONMENT:");
    println!("  LEXIQUEST_LOG      Log filter (falls back to RUST_LOG, then 'warn')");
}

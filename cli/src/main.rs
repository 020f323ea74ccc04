mod display;
mod interactive;

use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use gambit_agents::{play_turn, Agent, HeuristicAgent, HeuristicWeights};
use gambit_core::{perft, perft_divide, Board, Color, Game};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::interactive::InteractiveGame;

#[derive(Parser)]
#[command(name = "gambit", version, about = "Chess rules engine with a heuristic opponent")]
struct Cli {
    /// Log filter used when RUST_LOG is not set (e.g. "debug", "gambit_core=trace")
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play against the heuristic engine in the terminal
    Play {
        /// Side you play
        #[arg(long, value_enum, default_value_t = Side::White)]
        color: Side,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Let two heuristic engines play each other
    Selfplay {
        /// Stop after this many plies even if the game is not over
        #[arg(long, default_value_t = 300)]
        max_plies: u32,
        /// Only print the final position and result
        #[arg(long)]
        quiet: bool,
        #[command(flatten)]
        engine: EngineArgs,
    },
    /// Count legal move sequences from the starting position
    Count {
        #[arg(long, default_value_t = 3)]
        depth: u8,
    },
}

#[derive(Args)]
struct EngineArgs {
    /// Seed for the engine's random choices
    #[arg(long)]
    seed: Option<u64>,
    /// Weight of threats the engine makes
    #[arg(long, default_value_t = 3.0)]
    threat: f64,
    /// Weight of threats the engine faces
    #[arg(long, default_value_t = 1.0)]
    defense: f64,
    /// Weight of immediate captures
    #[arg(long, default_value_t = 2.0)]
    take: f64,
}

impl EngineArgs {
    fn agent(&self, offset: u64) -> HeuristicAgent {
        let weights = HeuristicWeights::new(self.threat, self.defense, self.take);
        match self.seed {
            Some(seed) => HeuristicAgent::with_seed(weights, seed.wrapping_add(offset)),
            None => HeuristicAgent::new(weights),
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Color {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn selfplay(max_plies: u32, quiet: bool, engine: &EngineArgs) -> ExitCode {
    let mut white = engine.agent(0);
    let mut black = engine.agent(1);
    let mut game = Game::new();
    info!(white = white.name(), black = black.name(), "self-play started");

    for _ in 0..max_plies {
        if game.is_over() {
            break;
        }
        let agent: &mut HeuristicAgent = match game.turn() {
            Color::White => &mut white,
            Color::Black => &mut black,
        };

        match play_turn(&mut game, agent) {
            Ok(report) => {
                if !quiet {
                    println!("{}. {}", game.history().len(), report.execution.mv);
                }
            }
            Err(err) => {
                error!(%err, "self-play stopped");
                return ExitCode::FAILURE;
            }
        }
    }

    println!("\n{}", display::render(game.board()));
    println!("{}", display::material(game.board()));
    match display::result(&game.status()) {
        Some(text) => println!("{}", text),
        None => println!("No result after {} plies.", game.history().len()),
    }
    ExitCode::SUCCESS
}

fn count(depth: u8) {
    let board = Board::new();
    println!("Running perft({})...", depth);

    if depth <= 3 {
        // Show move breakdown for shallow depths
        let results = perft_divide(&board, Color::White, depth);
        let mut total = 0;

        for (mv, count) in &results {
            println!("{}: {}", mv, count);
            total += count;
        }

        println!("\nTotal: {}", total);
    } else {
        let start = Instant::now();
        let nodes = perft(&board, Color::White, depth);
        let elapsed = start.elapsed();

        println!("Nodes: {}", nodes);
        println!("Time: {:.2}s", elapsed.as_secs_f64());
        println!("NPS: {:.0}", nodes as f64 / elapsed.as_secs_f64());
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Play { color, engine } => {
            let mut game = InteractiveGame::new(color.into(), engine.agent(0));
            if let Err(err) = game.run() {
                error!(%err, "terminal error");
                return ExitCode::FAILURE;
            }
            ExitCode::SUCCESS
        }
        Command::Selfplay {
            max_plies,
            quiet,
            engine,
        } => selfplay(max_plies, quiet, &engine),
        Command::Count { depth } => {
            count(depth);
            ExitCode::SUCCESS
        }
    }
}

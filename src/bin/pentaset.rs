//! pentaset CLI - deal a hand, list its sets, optionally play a game out.
//!
//! The driver only talks to the engine through `GameSession`. Rendering is
//! plain text or a JSON report.

use clap::Parser;
use serde::Serialize;
use tracing::{info, warn};

use pentaset::{completing_card, Card, GameConfig, GameSession, SymmetryGroup, SET_SIZE};

#[derive(Parser)]
#[command(name = "pentaset")]
#[command(about = "Deal a pentagon-line hand and find its sets")]
struct Args {
    /// Game seed (for reproducible deals)
    #[arg(long)]
    seed: Option<u64>,

    /// Print a JSON report instead of text
    #[arg(long)]
    json: bool,

    /// Play the game out: take the first set found, redraw when there is none
    #[arg(long)]
    autoplay: bool,

    /// Maximum number of turns when autoplaying
    #[arg(long, default_value = "100")]
    max_turns: u32,

    /// Show the card that would complete the first four cards of the hand
    #[arg(long)]
    hints: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

/// Snapshot of one hand and its sets.
#[derive(Serialize)]
struct HandReport {
    hand: Vec<Card>,
    sets: Vec<SymmetryGroup>,
    cards_remaining: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    hint: Option<Card>,
}

/// Everything the CLI observed during one run.
#[derive(Serialize)]
struct RunReport {
    seed: u64,
    turns: Vec<HandReport>,
    sets_taken: usize,
    redraws: usize,
    game_over: bool,
}

fn report(game: &GameSession, hints: bool) -> HandReport {
    let hand = game.hand();
    let hint = if hints && hand.len() >= SET_SIZE - 1 {
        completing_card(&hand[..SET_SIZE - 1])
    } else {
        None
    };

    HandReport {
        sets: game.find_all_sets(),
        cards_remaining: game.cards_remaining(),
        hand,
        hint,
    }
}

fn print_hand(turn: usize, report: &HandReport) {
    println!("Turn {}: {} cards left in the deck", turn + 1, report.cards_remaining);
    let cards: Vec<String> = report.hand.iter().map(ToString::to_string).collect();
    println!("Hand: {}", cards.join(" "));
    println!("Valid sets found: {}", report.sets.len());
    for (i, set) in report.sets.iter().enumerate() {
        let cards: Vec<String> = set.cards.iter().map(ToString::to_string).collect();
        println!("Set {} (cards {:?}): {}", i + 1, set.positions, cards.join(" "));
    }
    if let Some(hint) = report.hint {
        println!("Hint: the first four cards are completed by {}", hint);
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "warn" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = GameConfig::new();
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let mut game = GameSession::with_config(&config);
    info!(seed = game.seed(), "dealt opening hand");

    let mut run = RunReport {
        seed: game.seed(),
        turns: vec![report(&game, args.hints)],
        sets_taken: 0,
        redraws: 0,
        game_over: game.is_game_over(),
    };

    if args.autoplay {
        for _ in 0..args.max_turns {
            if game.is_game_over() {
                break;
            }
            match game.find_all_sets().first() {
                Some(set) => {
                    game.remove_set(&set.cards)?;
                    run.sets_taken += 1;
                }
                None => {
                    game.redraw_hand();
                    run.redraws += 1;
                }
            }
            run.turns.push(report(&game, args.hints));
        }
        run.game_over = game.is_game_over();
        if !run.game_over {
            warn!(max_turns = args.max_turns, "stopped before the game was over");
        }
        info!(sets = run.sets_taken, redraws = run.redraws, "autoplay finished");
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&run)?);
    } else {
        println!("Seed: {}", run.seed);
        for (turn, hand) in run.turns.iter().enumerate() {
            print_hand(turn, hand);
        }
        if args.autoplay {
            println!(
                "Sets taken: {}, redraws: {}, game over: {}",
                run.sets_taken, run.redraws, run.game_over
            );
        }
    }

    Ok(())
}

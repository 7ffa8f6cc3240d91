use chess_rules::game::{Game, STANDARD_FEN};
use chess_rules::perft::{divide, perft};
use clap::Parser;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "perft")]
#[command(about = "Count legal move paths from a chess position")]
struct Args {
    /// Search depth in plies
    #[arg(short, long, default_value_t = 3)]
    depth: u32,

    /// FEN of the root position (default: standard start)
    #[arg(short, long)]
    fen: Option<String>,

    /// Print the count below each root move
    #[arg(long)]
    divide: bool,

    /// Log every applied and undone move
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let fen = args.fen.as_deref().unwrap_or(STANDARD_FEN);
    let mut game = Game::from_fen(fen)?;
    log::info!("perft depth {} from {}", args.depth, fen);

    let start = Instant::now();
    let nodes = if args.divide {
        let split = divide(&mut game, args.depth);
        for (mv, count) in &split {
            println!("{mv}: {count}");
        }
        split.iter().map(|(_, count)| count).sum()
    } else {
        perft(&mut game, args.depth)
    };
    let elapsed = start.elapsed();

    println!("nodes: {nodes}");
    log::info!(
        "{} nodes in {:.3}s ({:.0} nps)",
        nodes,
        elapsed.as_secs_f64(),
        nodes as f64 / elapsed.as_secs_f64().max(f64::EPSILON)
    );

    Ok(())
}

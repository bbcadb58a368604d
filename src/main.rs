use clap::Parser;
use straights::{Game, GameConfig, GameOutcome, TextView};

#[derive(Parser)]
#[command(author, version, about = "Play Straights in the terminal", long_about = None)]
struct Args {
    /// Shuffle seed; 0 picks one from the clock
    #[arg(default_value_t = 0)]
    seed: u64,
    /// Seat kinds in order, e.g. "hccc" (h = human, c = computer)
    #[arg(long)]
    seats: Option<String>,
    /// Score that ends the game
    #[arg(long)]
    ceiling: Option<u32>,
    /// Log more (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log(verbose: u8) -> anyhow::Result<()> {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        _ => log::LevelFilter::Debug,
    };
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log(args.verbose)?;

    let mut config = GameConfig::default().with_seed(args.seed);
    if let Some(ceiling) = args.ceiling {
        config = config.with_score_ceiling(ceiling);
    }

    let stdin = std::io::stdin();
    let view = TextView::new(stdin.lock(), std::io::stdout());
    let mut game = Game::new(config, view)?;
    log::info!("dealing with seed {}", game.deck().seed());

    if let Some(plan) = &args.seats {
        game.seat_players(plan)?;
    }
    // Asks only for seats the plan left empty.
    if !game.seat_players_interactively()? {
        return Ok(());
    }

    match game.run()? {
        GameOutcome::Winners(winners) => log::info!("game over, {} winner(s)", winners.len()),
        GameOutcome::Quit => log::info!("game abandoned"),
    }
    Ok(())
}

use armada::{init_logging, CrosstermInput, GameEngine, TextRenderer};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;

#[derive(Parser)]
#[command(author, version, about = "Terminal naval combat against a random-firing opponent", long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[arg(long, help = "Reveal opponent ships (debugging aid)")]
    reveal: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging();

    let mut rng = match cli.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };

    let mut engine = GameEngine::new()?;
    let mut input = CrosstermInput::new()?;
    let mut renderer = TextRenderer::stdout();
    armada::run(&mut engine, &mut input, &mut renderer, &mut rng, cli.reveal)
}

// genetic-painter/src/main.rs
// Evolves a painting toward evenly sized color regions
// -----------------------------------------------------------------------------
// BUILD
//   cargo run --release -- \
//     --generations 100 --pools 10 --mutation 0.2 --recombine 5 \
//     --output painting.tiff
// -----------------------------------------------------------------------------
// Crates
//   genetic_painter – population, operators, fitness
//   image           – seed loading & result saving
//   clap            – CLI arg parsing
//   anyhow          – ergonomic errors
//   env_logger      – RUST_LOG driven progress output

use anyhow::{Context, Result, ensure};
use clap::Parser;
use genetic_painter::{Painter, PainterConfig, canvas};
use image::{Rgb, RgbImage};
use std::path::{Path, PathBuf};

// ---------------- CLI ---------------------------------------------------------
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Creates paintings according to a genetic algorithm", long_about = None)]
struct Args {
    /// Number of generations to run
    #[arg(short, long, default_value_t = 100)]
    generations: usize,

    /// Number of images in the pool
    #[arg(short, long, default_value_t = 10)]
    pools: usize,

    /// Chance that a pool member mutates each generation
    #[arg(short, long, default_value_t = 0.2)]
    mutation: f64,

    /// Number of top-ranked images chained into every child
    #[arg(short, long, default_value_t = 5)]
    recombine: usize,

    /// Canvas width (px)
    #[arg(short = 'W', long, default_value_t = 100)]
    width: u32,

    /// Canvas height (px)
    #[arg(short = 'H', long, default_value_t = 100)]
    height: u32,

    /// Path where the best painting is written; format follows the extension
    #[arg(short, long, default_value = "painting.tiff")]
    output: PathBuf,

    /// Seed for a reproducible run
    #[arg(short, long)]
    seed: Option<u64>,

    /// First seed image (default: solid red)
    #[arg(long)]
    first: Option<PathBuf>,

    /// Second seed image (default: solid blue)
    #[arg(long)]
    second: Option<PathBuf>,

    /// Log progress every N generations (0 = quiet)
    #[arg(long, default_value_t = 10)]
    log_every: usize,
}

impl Args {
    fn config(&self) -> PainterConfig {
        let config = PainterConfig::default()
            .with_generations(self.generations)
            .with_pools(self.pools)
            .with_mutation_rate(self.mutation)
            .with_recombine_depth(self.recombine)
            .with_log_interval(self.log_every);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    fn check_canvas(&self) -> Result<()> {
        ensure!(
            self.width > 0 && self.height > 0,
            "canvas must be at least 1x1, got {}x{}",
            self.width,
            self.height
        );
        Ok(())
    }
}

// ---------------- Seeds -------------------------------------------------------
fn seed_image(
    path: Option<&Path>,
    width: u32,
    height: u32,
    fallback: Rgb<u8>,
) -> Result<RgbImage> {
    match path {
        Some(path) => canvas::load_seed(path, width, height)
            .with_context(|| format!("loading seed image {}", path.display())),
        None => Ok(canvas::solid(width, height, fallback)),
    }
}

// ---------------- MAIN --------------------------------------------------------
fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = args.config();
    config.validate().context("invalid arguments")?;
    args.check_canvas().context("invalid arguments")?;

    let first = seed_image(args.first.as_deref(), args.width, args.height, canvas::RED)?;
    let second = seed_image(args.second.as_deref(), args.width, args.height, canvas::BLUE)?;
    log::info!(
        "painting {}x{} with {} pools for {} generations",
        args.width,
        args.height,
        config.pools,
        config.generations
    );

    let mut painter = Painter::new(config, &first, &second)?;
    let painting = painter.run()?;

    println!("{}", painting.fitness);
    painting
        .image
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    log::info!("saved {}", args.output.display());
    Ok(())
}

use std::path::PathBuf;

use clap::Parser;
use tracing::{error, info, warn};

use bases_fixtures::{generate, Base, Config, Framework};

#[derive(Parser)]
#[command(name = "bases-fixtures")]
#[command(about = "Generate randomized encode/decode fixtures for base16/32/64 codecs")]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base to generate fixtures for (repeatable, replaces the configured set)
    #[arg(short, long = "base")]
    bases: Vec<Base>,

    /// Shortest generated sequence (0 or 1)
    #[arg(long)]
    min_length: Option<usize>,

    /// Longest generated sequence
    #[arg(long)]
    max_length: Option<usize>,

    /// Random sequences per length
    #[arg(short, long)]
    trials: Option<usize>,

    /// Seed for a reproducible corpus
    #[arg(long)]
    seed: Option<u64>,

    /// Target test framework (catch2 or rust)
    #[arg(short, long)]
    framework: Option<Framework>,

    /// Directory the documents are written to
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Path of the codec under test in generated Rust tests
    #[arg(long)]
    codec_crate: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<Config, Box<dyn std::error::Error>> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => Config::default(),
        };

        if !self.bases.is_empty() {
            config.bases = self.bases.into_iter().collect();
        }
        if let Some(min_length) = self.min_length {
            config.size.min_length = min_length;
        }
        if let Some(max_length) = self.max_length {
            config.size.max_length = max_length;
        }
        if let Some(trials) = self.trials {
            config.size.trials_per_length = trials;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if let Some(framework) = self.framework {
            config.framework = framework;
        }
        if let Some(output_dir) = self.output_dir {
            config.output_dir = output_dir;
        }
        if let Some(codec_crate) = self.codec_crate {
            config.codec_crate = codec_crate;
        }
        Ok(config)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = Cli::parse().into_config()?;

    if config.bases.is_empty() {
        warn!("No bases configured, nothing to generate");
        return Ok(());
    }

    let mut rng = config.rng();
    match generate(&config, &mut rng) {
        Ok(paths) => {
            info!("Generated {} fixture document(s)", paths.len());
            Ok(())
        }
        Err(e) => {
            error!("Fixture generation failed: {}", e);
            Err(e.into())
        }
    }
}

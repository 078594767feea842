use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "orrery", version, about = "Render the ringed planet asset as a PNG")]
struct Cli {
    /// Planet configuration JSON. Omitted fields keep their defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long, default_value = "Locations/Taragam-3.png")]
    out: PathBuf,

    /// Also write the PNG into this asset-catalog image-set directory.
    #[arg(long)]
    image_set: Option<PathBuf>,

    /// Render at this canvas size, scaling geometry to match.
    #[arg(long)]
    size: Option<u32>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long)]
    print_config: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let cfg = effective_config(&cli)?;

    if cli.print_config {
        println!("{}", cfg.to_json_pretty()?);
        return Ok(());
    }

    let canvas = orrery::render_planet(&cfg).context("render planet")?;

    let mut targets = orrery::OutputTargets::new(&cli.out);
    if let Some(dir) = &cli.image_set {
        let filename = cli
            .out
            .file_name()
            .and_then(|n| n.to_str())
            .with_context(|| format!("output path '{}' has no file name", cli.out.display()))?;
        targets = targets.with_image_set(orrery::ImageSet::new(dir, filename));
    }
    let report = targets.write_outputs(&canvas).context("write outputs")?;

    for path in &report.written {
        tracing::info!(path = %path.display(), "wrote");
    }
    tracing::info!(bytes = report.bytes, sha256 = %report.sha256, "asset ready");
    Ok(())
}

fn read_config(path: &Path) -> anyhow::Result<orrery::PlanetConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("open config '{}'", path.display()))?;
    orrery::PlanetConfig::from_json(&text)
        .with_context(|| format!("parse config '{}'", path.display()))
}

fn effective_config(cli: &Cli) -> anyhow::Result<orrery::PlanetConfig> {
    let mut cfg = match &cli.config {
        Some(path) => read_config(path)?,
        None => orrery::PlanetConfig::default(),
    };
    if let Some(size) = cli.size {
        cfg = cfg.scaled_to(size);
    }
    cfg.validate().context("invalid planet configuration")?;
    Ok(cfg)
}

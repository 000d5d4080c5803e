use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use invitation_core::config::GalleryConfig;
use invitation_core::consts::DEFAULT_PRELOAD_MAX_SIDE;
use invitation_core::preload::preload_with_progress;

#[derive(Args)]
pub struct InfoArgs {
    /// Gallery config file (TOML)
    pub config: PathBuf,

    /// Decode every photo to check it loads
    #[arg(long)]
    pub decode: bool,

    /// Longest side photos are downscaled to while decoding
    #[arg(long, default_value_t = DEFAULT_PRELOAD_MAX_SIDE)]
    pub max_side: u32,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = GalleryConfig::load(&args.config)
        .with_context(|| format!("Failed to load config {}", args.config.display()))?;

    crate::summary::print_gallery_summary(&args.config, &config);

    if !args.decode {
        return Ok(());
    }

    let set = config.image_set();
    let pb = ProgressBar::new(set.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    pb.set_message("Decoding photos");

    let results = preload_with_progress(&set, Some(args.max_side), |_| pb.inc(1));
    pb.finish_with_message("Decoded photos");

    let mut failed = 0;
    println!();
    println!("{:>5}  {:>11}  {}", "#", "Size", "Photo");
    println!("{}", "-".repeat(40));
    for photo in &results {
        match &photo.result {
            Ok(decoded) => println!(
                "{:>5}  {:>11}  {}",
                photo.index + 1,
                format!("{}x{}", decoded.width, decoded.height),
                photo.path.display()
            ),
            Err(e) => {
                failed += 1;
                println!(
                    "{:>5}  {:>11}  {} ({e})",
                    photo.index + 1,
                    "failed",
                    photo.path.display()
                );
            }
        }
    }

    println!("\nDecoded: {}/{}", results.len() - failed, results.len());
    if failed > 0 {
        anyhow::bail!("{failed} photo(s) could not be decoded");
    }
    Ok(())
}

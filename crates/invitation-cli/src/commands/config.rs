use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use invitation_core::config::GalleryConfig;

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Number of placeholder photo entries to include
    #[arg(long, default_value = "3")]
    pub photos: usize,
}

/// Print or save a full default GalleryConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = GalleryConfig {
        photos: (1..=args.photos)
            .map(|i| PathBuf::from(format!("photos/{i:02}.jpg")))
            .collect(),
        music: Some(PathBuf::from("music/background.mp3")),
        ..GalleryConfig::default()
    };
    let toml_str = config.to_toml_string()?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}

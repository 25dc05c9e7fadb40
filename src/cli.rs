use std::path::PathBuf;

use crate::color::{self, Argb};

/// Generates UWP and iOS icon/asset sets from a single source image.
#[derive(Debug, clap::Parser)]
#[command(name = "make-icons", version)]
pub struct Cli {
    /// Input image file
    #[arg(short, long)]
    pub source: PathBuf,

    /// Output directory
    #[arg(short = 'd', long)]
    pub output_dir: PathBuf,

    /// Remove all existing files under the output directory
    #[arg(short, long)]
    pub force: bool,

    /// Background color as an ARGB hex string
    #[arg(short, long, default_value = "#00000000")]
    pub color: String,
}

/// Fully parsed run settings, immutable for the duration of the run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub force: bool,
    pub background: Argb,
}

impl Cli {
    pub fn into_config(self) -> Result<RunConfig, color::ColorParseError> {
        let background = color::parse_argb(&self.color)?;
        Ok(RunConfig {
            source: self.source,
            output_dir: self.output_dir,
            force: self.force,
            background,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_default_color_is_transparent_black() {
        let cli = Cli::parse_from(["make-icons", "-s", "logo.png", "-d", "out"]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.background.alpha, 0);
        assert_eq!(config.background.rgb, [0, 0, 0]);
        assert!(!config.force);
    }

    #[test]
    fn test_short_flags() {
        let cli = Cli::parse_from([
            "make-icons",
            "-s",
            "logo.png",
            "-d",
            "out",
            "-f",
            "-c",
            "#FF336699",
        ]);
        let config = cli.into_config().unwrap();
        assert!(config.force);
        assert_eq!(config.background.alpha, 255);
        assert_eq!(config.background.rgb, [0x33, 0x66, 0x99]);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let cli = Cli::parse_from(["make-icons", "-s", "logo.png", "-d", "out", "-c", "#123"]);
        assert!(cli.into_config().is_err());
    }
}

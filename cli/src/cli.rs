use std::path::PathBuf;

use clap::Parser;

/// Convert every image in a folder to an 800x800 white-padded WebP
#[derive(Debug, Parser)]
#[command(name = "webp_canvas", version, about)]
pub struct Cli {
    /// Folder with .jpg/.jpeg/.png/.gif/.bmp/.tiff images; output goes to a sibling `webp` folder
    pub input: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

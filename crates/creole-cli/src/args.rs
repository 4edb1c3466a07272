use clap::Parser;
use std::path::{Path, PathBuf};

/// Converts Creole markup to HTML.
#[derive(Debug, Parser)]
#[command(name = "creole", version, about)]
pub struct Args {
    /// Creole file to convert; stdin when missing or `-`
    pub input: Option<PathBuf>,

    /// Write HTML to FILE instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Read settings from FILE instead of ~/.config/creole/config.toml
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Prefix for internal page links
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Prefix for relative image paths
    #[arg(long, value_name = "URL")]
    pub image_base_url: Option<String>,

    /// Directory of existing pages, for missing-link detection
    #[arg(long, value_name = "DIR")]
    pub pages: Option<PathBuf>,

    /// Log pipeline details to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl Args {
    /// The input file, or `None` for stdin.
    pub fn input_file(&self) -> Option<&Path> {
        self.input.as_deref().filter(|path| *path != Path::new("-"))
    }
}

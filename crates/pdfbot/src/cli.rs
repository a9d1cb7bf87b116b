use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "pdfbot")]
#[command(author, version, about = "Telegram bot that turns photos into PDF documents", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot
    Run {
        /// Use webhook mode instead of long polling
        #[arg(long)]
        webhook: bool,
    },

    /// Convert a local image file to PDF without starting the bot
    Convert {
        /// Image file to convert
        input: PathBuf,

        /// Output path (defaults to the input path with a .pdf extension)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Converts an image file on disk into a one-page PDF.
///
/// Returns the path the PDF was written to.
pub fn convert_file(input: &Path, output: Option<&Path>) -> anyhow::Result<PathBuf> {
    let bytes = std::fs::read(input).with_context(|| format!("Failed to read {}", input.display()))?;
    let pdf = pdfcore::image_to_pdf(&bytes).with_context(|| format!("Failed to convert {}", input.display()))?;

    let output = output.map(Path::to_path_buf).unwrap_or_else(|| default_output_path(input));
    std::fs::write(&output, pdf).with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(output)
}

/// `photo.jpg` → `photo.pdf`
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("pdf")
}

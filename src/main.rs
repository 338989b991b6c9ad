//! CLI entry point for PBR map derivation

use clap::Parser;
use pbrmaps::io::cli::{Cli, TextureProcessor};

fn main() -> pbrmaps::Result<()> {
    let cli = Cli::parse();
    pbrmaps::io::logging::init(cli.quiet);
    let mut processor = TextureProcessor::new(cli);
    processor.process().map(|_manifest| ())
}

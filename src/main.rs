use std::path::PathBuf;

use clap::{ArgGroup, Parser};
use epub2txt::{convert_directory, convert_file};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[clap(group(ArgGroup::new("input").required(true).args(["file", "directory"])))]
struct Args {
    /// The path to the input EPUB file
    #[clap(short, long)]
    file: Option<PathBuf>,
    /// Convert every matching file in this directory, non-recursively
    #[clap(short, long)]
    directory: Option<PathBuf>,
    /// Only files with this suffix are converted in directory mode
    #[clap(short, long, default_value = ".epub")]
    suffix: String,
    /// Skip the last document in each file, often a 'Thank you for purchasing' note
    #[clap(long)]
    skip_last: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    if let Some(file) = args.file {
        convert_file(file, args.skip_last)?;
    } else if let Some(directory) = args.directory {
        convert_directory(directory, &args.suffix, args.skip_last)?;
    }
    println!("Conversion completed successfully!");
    Ok(())
}

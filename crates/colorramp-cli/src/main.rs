//! Colorramp CLI
//!
//! Converts a ColorMoves gradient into a QGIS style file.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use colorramp_engine::logging::{init_logging, LoggingConfig};
use colorramp_engine::{run_with, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "colorramp")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Convert a ColorMoves gradient into a QGIS style color ramp", long_about = None)]
struct Cli {
    /// ColorMoves gradient file (XML with `Point` elements)
    input: PathBuf,

    /// Directory for `<name>_qgis.xml` (default: current directory)
    #[arg(short, long, value_name = "DIR")]
    out_dir: Option<PathBuf>,

    /// Ramp name, also used for the output file (default: input file name)
    #[arg(short, long)]
    name: Option<String>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// When to color log output
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl Cli {
    fn logging_config(&self) -> LoggingConfig {
        let default_level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        };
        let write_style = match self.color {
            ColorChoice::Auto => env_logger::WriteStyle::Auto,
            ColorChoice::Always => env_logger::WriteStyle::Always,
            ColorChoice::Never => env_logger::WriteStyle::Never,
        };
        LoggingConfig { env_filter: None, default_level, write_style }
    }

    fn run_options(&self) -> RunOptions {
        RunOptions { out_dir: self.out_dir.clone(), name: self.name.clone() }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.logging_config());

    let written = run_with(&cli.input, &cli.run_options())?;
    println!("{}", written.display());
    Ok(())
}

use crate::config::load_config;
use crate::dump::LayoutDump;
use crate::ir::Diagram;
use crate::layout::compute_layout;
use anyhow::Result;
use clap::Parser;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "skld", version, about = "Sankey flow diagram layout engine")]
pub struct Args {
    /// Input diagram (JSON5 edge list) or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the layout JSON. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Config JSON5 file
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,

    /// Draw area width
    #[arg(short = 'w', long = "width", default_value_t = 600.0)]
    pub width: f32,

    /// Draw area height
    #[arg(short = 'H', long = "height", default_value_t = 400.0)]
    pub height: f32,

    /// Transposed orientation (ranks run top to bottom)
    #[arg(long = "inverted")]
    pub inverted: bool,

    /// Pretty-print the output JSON
    #[arg(long = "pretty")]
    pub pretty: bool,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let mut config = load_config(args.config.as_deref())?;
    config.width = args.width;
    config.height = args.height;
    if args.inverted {
        config.inverted = true;
    }

    let input = read_input(args.input.as_deref())?;
    let diagram = Diagram::parse(&input)?;
    let layout = compute_layout(&diagram, &config);
    let dump = LayoutDump::from_layout(&layout);

    match args.output.as_deref() {
        Some(path) => dump.write_json(path)?,
        None => println!("{}", dump.to_json(args.pretty)?),
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => Ok(std::fs::read_to_string(path)?),
        _ => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

//! Command-line argument definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use hackbitmap_rust::hackstructs::DEFAULT_ALPHABET;
use hackbitmap_rust::EmitMode;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Mode {
    /// Print an ASCII version of the image (`@` black, `.` white)
    Preview,
    /// One `do <func-name>(row, words...);` statement per row
    Calls,
    /// Static fields plus init/store/load functions for a class
    Template,
}

impl Mode {
    pub fn to_emit_mode(self) -> EmitMode {
        match self {
            Mode::Preview => EmitMode::Preview,
            Mode::Calls => EmitMode::FlatCall,
            Mode::Template => EmitMode::FullTemplate,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about = "Convert binary bitmap images to Jack source code", long_about = None)]
pub struct Args {
    /// Input image (binary PBM `P4` or 8-bit PGM `P5`)
    #[clap(value_parser)]
    pub file: PathBuf,

    /// What to generate
    #[clap(short, long, value_enum, default_value = "calls")]
    pub mode: Mode,

    /// Function called once per row in `calls` mode
    #[clap(long, default_value = "XXX")]
    pub func_name: String,

    /// Class owning the generated functions in `template` mode
    #[clap(long, default_value = "Main")]
    pub class_name: String,

    /// Prefix of the generated fields and functions in `template` mode
    #[clap(long, default_value = "image")]
    pub image_name: String,

    /// Parameter names for the generated store function, one per character
    #[clap(long, default_value = DEFAULT_ALPHABET)]
    pub alphabet: String,

    /// Write the result here instead of standard output
    #[clap(short, long, value_parser)]
    pub output: Option<PathBuf>,

    /// Log progress to standard error
    #[clap(short, long)]
    pub verbose: bool,

    /// Write the log into this directory instead of standard error
    #[clap(long, value_parser)]
    pub log_dir: Option<PathBuf>,

    /// Override the log file name [default: hackimg.log]
    #[clap(long, value_parser)]
    pub log_file: Option<String>,
}

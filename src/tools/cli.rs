use clap::Parser;
use log::info;
use std::{fmt::Display, fmt::Formatter};

/// What to print after encoding
#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ArgEnum)]
pub enum Mode {
    /// The encoded bit-string
    Code,
    /// The frequency and code tables
    Table,
    /// Tables, bit-string, grid size and statistics
    Full,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Where the input comes from
#[derive(Debug, PartialEq, Eq)]
pub enum Input {
    Text(String),
    File(String),
    Stdin,
}
impl Display for Input {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Input::Text(_) => write!(f, "command line text"),
            Input::File(name) => write!(f, "file {}", name),
            Input::Stdin => write!(f, "stdin"),
        }
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Huffman-encode text into a bit-string",
    long_about = "
    Counts the characters of the input, builds a Huffman tree by repeatedly merging the
    two lightest trees, and prints the input translated into the resulting prefix-free
    code. Ties between equal weights go to the character seen first, so the output is
    the same on every run."
)]
pub struct Args {
    /// File to encode. Reads stdin when neither a file nor --text is given.
    #[clap()]
    filename: Option<String>,

    /// Encode this text instead of a file
    #[clap(short = 't', long = "text", conflicts_with = "filename")]
    text: Option<String>,

    /// What to print
    #[clap(short = 'm', long = "mode", arg_enum, default_value = "code")]
    mode: Mode,

    /// Write the bits packed eight to a byte into this file instead of printing them
    #[clap(short = 'o', long = "output")]
    output: Option<String>,

    /// Sets verbosity. Repeat for more (-vvv is trace)
    #[clap(short = 'v', parse(from_occurrences))]
    verbose: u8,

    /// Only print errors
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

/// Verbosity of user information
#[derive(Debug, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Everything the user can set on the command line.
#[derive(Debug)]
pub struct HuffOpts {
    /// Where the text to encode comes from
    pub input: Input,
    /// What to print
    pub mode: Mode,
    /// Optional file for the packed output
    pub output: Option<String>,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            input: Input::Stdin,
            mode: Mode::Code,
            output: None,
            verbose: Verbosity::Warnings,
        }
    }

    /// Put command line information from CLAP into our internal structure.
    pub fn from_args(args: Args) -> Self {
        let mut opts = Self::new();
        opts.input = match (args.text, args.filename) {
            (Some(text), _) => Input::Text(text),
            (None, Some(name)) => Input::File(name),
            (None, None) => Input::Stdin,
        };
        opts.mode = args.mode;
        opts.output = args.output;
        opts.verbose = match (args.quiet, args.verbose) {
            (true, _) => Verbosity::Quiet,
            (false, 0) => Verbosity::Warnings,
            (false, 1) => Verbosity::Info,
            (false, 2) => Verbosity::Debug,
            (false, _) => Verbosity::Trace,
        };
        opts
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the command line and set the log level to match.
pub fn huffopts_init() -> HuffOpts {
    let opts = HuffOpts::from_args(Args::parse());

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- huffcode initialization ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Reading input from {}", opts.input);
    info!("Mode set to {}", opts.mode);
    if let Some(name) = &opts.output {
        info!("Writing packed output to {}", name);
    }
    opts
}

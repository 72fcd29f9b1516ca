//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use std::{
    fs::{self, File},
    io::{self, Read, Write},
};

use huffcode::tools::cli::{huffopts_init, HuffOpts, Input, Mode};
use huffcode::{EncodeReport, Error};

use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger, TerminalMode};

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    if let Err(e) = run() {
        error!("{}", e);
        eprintln!("huffcode: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    // Available log levels are Error, Warn, Info, Debug, Trace
    TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;

    let opts = huffopts_init();

    let text = read_input(&opts.input)?;
    let report = EncodeReport::from_text(&text)?;

    match &opts.output {
        Some(name) => write_packed(name, &report)?,
        None => print_report(&opts, &report)?,
    }

    info!("Done.");
    Ok(())
}

/// Get the text to encode from wherever the options say it is.
fn read_input(input: &Input) -> io::Result<String> {
    match input {
        Input::Text(text) => Ok(text.clone()),
        Input::File(name) => fs::read_to_string(name),
        Input::Stdin => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

/// Write the packed bits to a file. The first byte holds how many bits of the last
/// byte are used (0 when it is full).
fn write_packed(name: &str, report: &EncodeReport<char>) -> io::Result<()> {
    let (bytes, last_bits) = report.bits.pack();
    let mut f_out = File::create(name)?;
    f_out.write_all(&[last_bits])?;
    f_out.write_all(&bytes)?;
    info!(
        "Wrote {} bits as {} bytes to {}",
        report.bits.len(),
        bytes.len() + 1,
        name
    );
    Ok(())
}

/// Print what the mode asks for on stdout.
fn print_report(opts: &HuffOpts, report: &EncodeReport<char>) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if opts.mode != Mode::Code {
        writeln!(out, "{:<8} {:>10}  code", "symbol", "count")?;
        for (sym, count, code) in report.rows() {
            writeln!(out, "{:<8} {:>10}  {}", format!("{:?}", sym), count, code)?;
        }
    }
    if opts.mode != Mode::Table {
        writeln!(out, "{}", report.bits)?;
    }
    if opts.mode == Mode::Full {
        writeln!(out, "symbols:         {}", report.input_symbols())?;
        writeln!(out, "distinct:        {}", report.frequencies.len())?;
        writeln!(out, "bits:            {}", report.bits.len())?;
        writeln!(out, "bits per symbol: {:.3}", report.bits_per_symbol())?;
        writeln!(
            out,
            "grid:            {} columns x {} rows",
            report.grid.columns, report.grid.rows
        )?;
    }
    Ok(())
}

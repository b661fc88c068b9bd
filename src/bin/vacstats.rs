use clap::Parser;
use clap_verbosity_flag::{InfoLevel, Verbosity};
use log::{error, info};
use std::{error, fs, io, process};
use vacstats::buckets::DEFAULT_YEARS;
use vacstats::driver::{self, DriverArgs};
use vacstats::errors::Result;
use vacstats::output::{OError, Statistics};
use vacstats::report;

#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Input file (CSV); asked for if not given
    infile: Option<String>,
    /// Job title filter; asked for if not given
    #[arg(short, long)]
    filter: Option<String>,
    /// Output file (XLSX)
    #[arg(short, long, default_value = "report.xlsx")]
    outfile: String,
    /// Also write the statistics as a JSON file
    #[arg(long)]
    json: Option<String>,
    /// Report errors as a JSON file
    #[arg(long)]
    error_file: Option<String>,
    /// Produce compact JSON files
    #[arg(long)]
    compact: bool,
    /// Verbosity
    #[command(flatten)]
    verbose: Verbosity<InfoLevel>,
}

fn ask(args: &Args) -> Result<(String, String)> {
    let infile = match &args.infile {
        Some(f) => f.clone(),
        None => cliclack::input("Input file").interact()?,
    };
    let filter = match &args.filter {
        Some(f) => f.clone(),
        None => cliclack::input("Job title")
            .placeholder("empty for all vacancies")
            .required(false)
            .interact()?,
    };
    Ok((infile, filter))
}

fn store_json(filename: &str, compact: bool, stats: &Statistics) -> Result<()> {
    let file = fs::File::create(filename)?;
    let writer = io::BufWriter::new(file);
    if compact {
        serde_json::to_writer(writer, stats)?;
    } else {
        serde_json::to_writer_pretty(writer, stats)?;
    }
    info!(target: "vacstats", "statistics written: {filename}");
    Ok(())
}

fn process(args: &Args) -> Result<()> {
    let (infile, title_filter) = ask(args)?;
    let records = driver::read_file(&infile)?;
    let driver_args = DriverArgs {
        title_filter: &title_filter,
        years: DEFAULT_YEARS,
    };
    let stats = driver::calc(&driver_args, &records)?;
    report::write_report(&args.outfile, &title_filter, &stats)?;
    if let Some(filename) = &args.json {
        store_json(filename, args.compact, &stats)?;
    }
    Ok(())
}

fn store_error(error_file: &str, e: &dyn error::Error) -> Result<()> {
    let error = OError {
        error: format!("{e}"),
    };
    let file = fs::File::create(error_file)?;
    let writer = io::BufWriter::new(file);
    serde_json::to_writer(writer, &error)?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    pretty_env_logger::formatted_timed_builder()
        .filter_level(args.verbose.log_level_filter())
        .init();
    match process(&args) {
        Ok(()) => (),
        Err(e) => {
            match &args.error_file {
                Some(filename) => match store_error(filename, &*e) {
                    Ok(()) => {
                        info!(target: "vacstats", "error reported: {e}");
                    }
                    Err(e2) => {
                        error!(target: "vacstats", "{e}");
                        error!(target: "vacstats", "{e2}");
                    }
                },
                None => error!(target: "vacstats", "{e}"),
            }
            process::exit(1);
        }
    }
}

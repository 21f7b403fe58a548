use std::path::PathBuf;

use clap::Parser;
use log::error;
use palidict::{DictionaryType, RunOptions};
use palidict::dict::types::models::{DEFAULT_COLUMN_COUNT, DEFAULT_SHEET_NAME};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "palidict", version)]
#[command(about = "Generate CSV exports and a StarDict dictionary from a Pāli dictionary ODS file")]
struct Args {
    /// Path to the .ods file
    ods_file: PathBuf,

    /// Name of the sheet holding the words
    #[arg(long, default_value = DEFAULT_SHEET_NAME)]
    sheet: String,

    /// Number of columns kept per row
    #[arg(long, default_value_t = DEFAULT_COLUMN_COUNT)]
    columns: usize,

    /// Dictionary type: dpd or dps
    #[arg(long = "type", default_value = "dpd")]
    dictionary_type: DictionaryType,

    /// Output directory (defaults to the directory of the .ods file)
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Skip the CSV exports
    #[arg(long)]
    no_csv: bool,

    /// Skip the StarDict dictionary
    #[arg(long)]
    no_stardict: bool,

    /// More output (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Errors only
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn init_logging(args: &Args) {
    // -q shows errors only; -v/-vv raise the crate to debug/trace and
    // RUST_LOG takes over when neither is given.
    let filter = if args.quiet {
        EnvFilter::new("error")
    } else {
        match args.verbose {
            0 => EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
            1 => EnvFilter::new("info,palidict=debug"),
            _ => EnvFilter::new("info,palidict=trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(std::env::var_os("NO_COLOR").is_none())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let args = Args::parse();

    init_logging(&args);

    let options = RunOptions {
        sheet_name: args.sheet,
        column_count: args.columns,
        dictionary_type: args.dictionary_type,
        output_dir: args.output_dir,
        write_csv: !args.no_csv,
        write_stardict: !args.no_stardict,
        ..RunOptions::new(args.ods_file)
    };

    match palidict::run(&options) {
        Ok(summary) => {
            println!("Converted {} words.", summary.word_count);
            for path in &summary.written {
                println!("  {}", path.display());
            }
        }
        Err(e) => {
            error!("{}", e);
            eprintln!("ERROR: Failed to convert {}", options.ods_path.display());
            eprintln!("  {}", e);
            std::process::exit(1);
        }
    }
}

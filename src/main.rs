extern crate heat_pump_savings;

use anyhow::anyhow;
use clap::Parser;
use heat_pump_savings::output::{monthly_table, summary_panels, FileOutput, SinkOutput};
use heat_pump_savings::run_estimate;
use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::fmt::format::FmtSpan;

#[derive(Parser, Default, Debug)]
#[clap(author, version, about, long_about = None)]
struct EstimatorArgs {
    input_file: String,
    #[arg(
        long,
        default_value = "$",
        help = "Symbol placed in front of currency amounts"
    )]
    currency_symbol: String,
    #[arg(
        long,
        default_value_t = false,
        help = "Print the summary without writing result files"
    )]
    no_files: bool,
    #[clap(long, default_value_t = false, help = "Whether to log out spans")]
    log_spans: bool,
    #[arg(long, short, default_value_t = false, help = "Log at trace level")]
    verbose: bool,
}

fn main() -> anyhow::Result<()> {
    let args = EstimatorArgs::parse();

    // set up basic tracing
    let tracing_subscriber = {
        let max_level = if args.verbose {
            tracing::Level::TRACE
        } else {
            tracing::Level::INFO
        };
        let mut builder = tracing_subscriber::fmt::fmt().with_max_level(max_level);

        if args.log_spans {
            builder = builder.with_span_events(FmtSpan::CLOSE);
        }

        builder.finish()
    };
    tracing::subscriber::set_global_default(tracing_subscriber)
        .expect("setting tracing subscriber failed");

    let input_path = PathBuf::from(&args.input_file);
    let input = BufReader::new(File::open(&input_path)?);

    let estimate = if args.no_files {
        run_estimate(input, SinkOutput)?
    } else {
        let input_stem = input_path
            .file_stem()
            .ok_or_else(|| anyhow!("Could not determine input file name"))?
            .to_string_lossy()
            .to_string();
        let output_path = input_path.with_file_name(format!("{input_stem}__results"));
        fs::create_dir_all(&output_path)?;
        info!("writing results to {}", output_path.display());

        let file_output = FileOutput::new(output_path, format!("{input_stem}__{{}}"));
        run_estimate(input, &file_output)?
    };

    println!("{}", summary_panels(&estimate, &args.currency_symbol));
    println!("{}", monthly_table(&estimate, &args.currency_symbol));

    Ok(())
}


use log::{LevelFilter, error, info};
use std::time::Instant;

use snp_matcher::cli::compare::{CompareSettings, check_compare_settings};
use snp_matcher::cli::core::{Commands, get_cli};
use snp_matcher::comparison::run_comparison;
use snp_matcher::mismatch_solver::{MismatchConfigBuilder, MismatchError};
use snp_matcher::util::json_io::save_json;
use snp_matcher::writers::{OutputPaths, write_report_outputs};

fn run_compare(settings: CompareSettings) {
    // start the timer
    let start_time = Instant::now();

    // set up logging before we check the other settings
    let filter_level: LevelFilter = match settings.verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace
    };
    env_logger::builder()
        .format_timestamp_millis()
        .filter_level(filter_level)
        .init();

    let settings = match check_compare_settings(settings) {
        Ok(s) => s,
        Err(e) => {
            error!("Error while verifying settings: {e:#}");
            std::process::exit(exitcode::CONFIG);
        }
    };

    // set up the number of threads for rayon
    match rayon::ThreadPoolBuilder::new().num_threads(settings.threads).build_global() {
        Ok(()) => {},
        Err(e) => {
            error!("Error while building thread pool: {e}");
            std::process::exit(exitcode::OSERR);
        }
    };

    let mismatch_config = match MismatchConfigBuilder::default()
        .allow_truncation(settings.legacy_truncation)
        .build() {
        Ok(mc) => mc,
        Err(e) => {
            error!("Error while building mismatch config: {e:?}");
            std::process::exit(exitcode::SOFTWARE);
        }
    };

    // everything is compared before any output is created, so a failure never leaves a partial report
    let report = match run_comparison(&settings.reference_fn, &settings.sample_fns, mismatch_config) {
        Ok(r) => r,
        Err(e) => {
            error!("Error while comparing samples: {e:#}");
            if e.chain().any(|c| c.downcast_ref::<MismatchError>().is_some()) {
                std::process::exit(exitcode::DATAERR);
            }
            std::process::exit(exitcode::IOERR);
        }
    };

    // create the primary output folder
    info!("Creating output folder at {:?}...", settings.output_folder);
    if let Err(e) = std::fs::create_dir_all(&settings.output_folder) {
        error!("Error while creating output folder: {e}");
        std::process::exit(exitcode::IOERR);
    }

    // save the CLI options
    let cli_json = settings.output_folder.join("cli_settings.json");
    info!("Saving CLI options to {cli_json:?}...");
    if let Err(e) = save_json(&settings, &cli_json) {
        error!("Error while saving CLI options: {e:#}");
        std::process::exit(exitcode::IOERR);
    }

    let output_paths = OutputPaths::new(&settings.output_folder, &settings.output_prefix);
    if let Err(e) = write_report_outputs(&report, &output_paths) {
        error!("Error while saving output files: {e:#}");
        std::process::exit(exitcode::IOERR);
    }

    info!("Comparison completed in {} seconds.", start_time.elapsed().as_secs_f64());
}

fn main() {
    let cli = get_cli();
    match cli.command {
        Commands::Compare(settings) => {
            run_compare(*settings);
        }
    }

    info!("Process finished successfully.");
}

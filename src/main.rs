use clap::error::ErrorKind;
use clap::Parser;
use scooter::batch::{build_batch, BatchOptions};
use scooter::cli::{normalize_args, Args};
use scooter::config::Config;
use scooter::dates::MetadataDateProvider;
use scooter::executor::{execute, ExecuteError};
use scooter::logging;
use scooter::manifest::write_manifest;
use scooter::output::display_execution_result;
use scooter::progress::Progress;
use scooter::AppError;
use tracing::{debug, error, info};

fn main() {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args = match Args::try_parse_from(normalize_args(std::env::args_os())) {
        Ok(args) => args,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => fail(AppError::InvalidArguments(first_line(&e.to_string()))),
    };

    let config = Config::from_args(args);

    let result = logging::with_logging(config.verbose, || {
        debug!(?config, "Configuration resolved");
        run(&config).inspect_err(|e| error!("{}", e))
    });

    if let Err(e) = result {
        fail(e);
    }
}

fn fail(err: AppError) -> ! {
    eprintln!("Error: {}", err);
    std::process::exit(err.exit_code().into());
}

fn first_line(message: &str) -> String {
    let line = message.lines().next().unwrap_or_default();
    line.strip_prefix("error: ").unwrap_or(line).to_string()
}

fn run(config: &Config) -> Result<(), AppError> {
    let provider = MetadataDateProvider::new(config.date_source);
    let options = BatchOptions {
        exclude_dirs: config.exclude_dirs,
    };

    let batch = build_batch(&config.dir, &provider, &options)?;
    info!(count = batch.len(), dry_run = config.dry_run, "Executing batch");

    let mut progress = Progress::new(config.verbose);
    let mut stdout = std::io::stdout().lock();

    let outcome = execute(&batch, config.dry_run, &mut stdout, &mut progress);

    if config.dry_run {
        outcome?;
        return Ok(());
    }

    if let Some(path) = &config.manifest {
        let completed = match &outcome {
            Ok(moved) => *moved,
            Err(e) => e.completed(),
        };

        match write_manifest(&batch, completed, path) {
            Ok(written) => progress.manifest_written(&written),
            // The apply error is the one worth reporting
            Err(e) if outcome.is_err() => error!("Could not write manifest: {}", e),
            Err(e) => return Err(e.into()),
        }
    }

    let moved = outcome?;

    display_execution_result(moved, &mut stdout).map_err(ExecuteError::Report)?;

    Ok(())
}

use std::process::ExitCode;

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use webp_canvas::cli::Cli;
use webp_canvas_core::config::ConvertConfig;
use webp_canvas_core::error::ProcessingError;
use webp_canvas_core::folder::process_folder;

fn main() -> Result<ExitCode> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => e.exit(),
        Err(e) => {
            // Usage errors go to stdout with a plain failure code.
            print!("{}", e.render());
            return Ok(ExitCode::FAILURE);
        }
    };

    // Init logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_level()))
        .init();

    let pb = ProgressBar::new(0);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")?
            .progress_chars("█▓░"),
    );

    let result = process_folder(&cli.input, &ConvertConfig::default(), |p| {
        pb.set_length(p.total as u64);
        pb.set_position(p.index as u64);

        let name = p.source.file_name().unwrap_or_default().to_string_lossy();
        if p.success() {
            let out = p.destination.file_name().unwrap_or_default().to_string_lossy();
            pb.suspend(|| println!("Converted: {} -> {}", name, out));
        }
        pb.set_message(name.into_owned());
    });

    match result {
        Ok(report) => {
            pb.finish_with_message("Done!");
            report.print_summary();
        }
        Err(e @ ProcessingError::InputNotDirectory { .. }) => {
            // Not a usage error: report it and exit normally.
            pb.finish_and_clear();
            log::error!("{}", e);
        }
        Err(e) => {
            pb.finish_and_clear();
            return Err(e.into());
        }
    }

    Ok(ExitCode::SUCCESS)
}

//! hamwave CLI - offline audio utilities for amateur radio

use clap::Parser;
use env_logger::Env;

use hamwave::cli::{commands, Cli, Commands};
use hamwave::dsp::FilterSpec;
use hamwave::Result;

fn main() {
    // Initialize logger
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Display { input } => commands::run_display(&input),
        Commands::Spectrum {
            input,
            min_hz,
            max_hz,
        } => commands::run_spectrum(&input, min_hz, max_hz),
        Commands::Filter {
            input,
            output,
            filter_type,
            cutoff,
            cutoff_high,
            order,
            no_plot,
        } => {
            let spec = FilterSpec {
                class: filter_type.into(),
                cutoff,
                cutoff_high,
                order,
            };
            commands::run_filter(&input, &output, spec, no_plot)
        }
        Commands::NoiseLimit {
            input,
            output,
            threshold,
            no_plot,
        } => commands::run_noise_limit(&input, &output, threshold, no_plot),
    }
}

use clap::{CommandFactory, Parser};

mod bootstrap;
mod cli;
mod commands;
mod output;
mod progress;

use commands::map::MapRun;

#[tokio::main]
async fn main() {
    if let Err(error) = run().await {
        eprintln!("boardmap error: {error:#}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();
    init_tracing(cli.quiet, cli.verbose)?;
    let flags = cli.global_flags();

    if let Some(command) = &cli.command {
        let config = bootstrap::load_config()?;
        return commands::dispatch(command, &config, flags).await;
    }

    let Some(run) = map_run(&cli.map) else {
        println!("{}", missing_arguments_message(&cli.map));
        println!("{}", cli::Cli::command().render_usage());
        return Ok(());
    };

    let config = bootstrap::load_config()?;
    commands::map::handle(&run, &config, flags).await
}

/// Both positionals present, or `None` when the run should stop early.
fn map_run(args: &cli::MapArgs) -> Option<MapRun> {
    Some(MapRun {
        input: args.input.clone()?,
        echo: args.echo?,
        output: args.output.clone(),
        abbreviate_rounds: args.abbreviate_rounds,
    })
}

fn missing_arguments_message(args: &cli::MapArgs) -> &'static str {
    if args.input.is_none() {
        "Missing input! Pass a file with one company name per line."
    } else {
        "Missing an argument. boardmap takes an input file and 'true/false'."
    }
}

fn init_tracing(quiet: bool, verbose: bool) -> anyhow::Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("BOARDMAP_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

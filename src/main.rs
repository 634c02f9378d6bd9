use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use quizwiz::app::App;
use quizwiz::config::QuizConfig;
use quizwiz::util::duration::parse_duration;
use quizwiz::{error, logging, Result};

/// True/false flashcard quiz in your terminal
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
    /// Delay before the "next" button appears after answering, e.g. 500ms
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    reveal_delay: Option<Duration>,
    /// Input poll interval, e.g. 250ms
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    tick_rate: Option<Duration>,
    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    print_config: bool,
}

fn load_config(args: &Args) -> Result<QuizConfig> {
    let mut config = match &args.config {
        Some(path) => QuizConfig::load_from(path)?,
        None => QuizConfig::load()?,
    };
    if let Some(delay) = args.reveal_delay {
        config = config.with_reveal_delay(delay);
    }
    if let Some(tick_rate) = args.tick_rate {
        config = config.with_tick_rate(tick_rate);
    }
    config.validate()?;
    Ok(config)
}

async fn run(args: Args) -> Result<()> {
    let config = load_config(&args)?;

    if args.print_config {
        print!("{}", config.to_toml()?);
        return Ok(());
    }

    tracing::info!(
        reveal_delay_ms = config.reveal_delay.as_millis() as u64,
        tick_rate_ms = config.tick_rate.as_millis() as u64,
        "starting quizwiz"
    );

    let mut app = App::new(config)?;
    app.init()?;
    app.run().await
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    if let Some(path) = logging::init_tracing() {
        tracing::info!(path = %path.display(), "logging enabled");
    }

    if let Err(err) = run(args).await {
        tracing::error!(error = %err, "quizwiz exited with an error");
        eprintln!("error: {}", error::user_friendly_message(&err));
        std::process::exit(1);
    }
}

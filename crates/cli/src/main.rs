use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tracker_core::ingest::MarketstackClient;

mod render;
mod session;

use session::Session;

#[derive(Debug, Parser)]
#[command(name = "tracker", about = "Stock tracker & investment predictor")]
struct Args {
    /// Ticker to look up once and exit. Without it the tracker runs an
    /// interactive prompt.
    #[arg(long)]
    symbol: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let settings = tracker_core::config::Settings::from_env()?;
    let _sentry_guard = init_sentry(&settings);

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .with(sentry_tracing::layer())
        .init();

    let args = Args::parse();

    let provider = MarketstackClient::from_settings(&settings)?;
    let mut session = Session::new(provider);

    if let Some(symbol) = args.symbol {
        session.search(&symbol).await;
        println!("{}", render::panel_for(session.state()));
        return Ok(());
    }

    println!("Stock Tracker & Investment Predictor");
    println!("{}", render::instructions());
    println!("(empty line or 'quit' to exit)");

    loop {
        let Some(line) = read_line()? else {
            break;
        };
        let input = line.trim().to_string();
        if input.is_empty() || input.eq_ignore_ascii_case("quit") {
            break;
        }

        // One fetch at a time: the prompt does not come back until the
        // search resolves, so re-submission while loading is impossible.
        println!("{}", render::loading());
        session.search(&input).await;
        println!("{}", render::panel_for(session.state()));
    }

    Ok(())
}

fn read_line() -> anyhow::Result<Option<String>> {
    use std::io::Write;

    print!("symbol> ");
    std::io::stdout().flush().context("flush prompt failed")?;

    let mut line = String::new();
    let n = std::io::stdin()
        .read_line(&mut line)
        .context("read from stdin failed")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn init_sentry(settings: &tracker_core::config::Settings) -> Option<sentry::ClientInitGuard> {
    let dsn = settings.sentry_dsn.as_deref()?;
    Some(sentry::init((
        dsn,
        sentry::ClientOptions {
            release: sentry::release_name!(),
            ..Default::default()
        },
    )))
}

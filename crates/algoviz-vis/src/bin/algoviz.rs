//! Algoviz headless player
//!
//! Record an algorithm's event log and play it back against headless
//! handles at the configured speed.
//!
//! ```text
//! algoviz <algorithm> [options-json] [max-frames]
//! algoviz bfs '{"nodes": 8, "edges": 40, "speed": 90}'
//! ```

use std::env;

use algoviz_vis::runner::{self, RunnerConfig};
use algoviz_vis::{Algorithm, AnySession, Clock, MonotonicClock, Options, Palette, Sprite};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Frames to draw for animations that never complete on their own.
const DEFAULT_TIMES_TABLE_FRAMES: u64 = 600;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "algoviz=info,algoviz_vis=info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Parse command line args
    let args: Vec<String> = env::args().collect();

    let algorithm: Algorithm = args.get(1).map(String::as_str).unwrap_or("bfs").parse()?;

    let options = match args.get(2) {
        Some(json) => Options::from_json(json)?,
        None => Options::default(),
    };
    options.validate()?;

    let max_frames = args
        .get(3)
        .and_then(|s| s.parse().ok())
        .or((algorithm == Algorithm::TimesTable).then_some(DEFAULT_TIMES_TABLE_FRAMES));

    println!("Algoviz");
    println!("=======");
    println!();
    println!("{} at speed {}", algorithm, options.speed);
    println!("Press Ctrl-C to stop.");
    println!();

    let mut session: AnySession<Sprite> = AnySession::new(algorithm, options, Palette::default());
    let clock = MonotonicClock::new();
    let config = RunnerConfig {
        max_frames,
        ..RunnerConfig::default()
    };

    let started = clock.now();
    let outcome = runner::run(&mut session, &clock, config).await;

    println!();
    println!("Finished: {:?} after {:.1?}", outcome, clock.now() - started);
    println!("{}", serde_json::to_string_pretty(&session.status())?);

    Ok(())
}

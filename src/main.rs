use mazepath::{app::App, config::Config};
use tracing_appender::non_blocking::WorkerGuard;

/// Sends tracing output to a log file so it does not interleave with the printed maze.
/// The returned guard flushes the file when dropped.
fn init_logging(config: &Config) -> WorkerGuard {
    let file_appender = tracing_appender::rolling::never(&config.log_dir, "mazepath.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(config.log_level)
        .init();
    guard
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _guard = init_logging(&config);
    tracing::info!("Starting with {:?}", config);

    let mut app = App::new(config)?;
    app.run_session(&mut std::io::stdout())?;

    tracing::info!("Done");
    Ok(())
}

use tracing::Level;

// Logs go to stderr as json lines so that stdout only carries the console transcript.
pub fn setup_tracing(level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // keep escape codes out of redirected stderr.
        .with_ansi(false)
        .without_time()
        .json()
        .try_init();
}

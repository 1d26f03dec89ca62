use tracing_subscriber::EnvFilter;

fn main() -> iced::Result {
    // Log to stderr; TASKDECK_LOG (or the default level) controls verbosity.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("TASKDECK_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    taskdeck_gui::run()
}

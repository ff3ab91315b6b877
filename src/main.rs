//! cairn CLI entry point

fn main() {
    // Structured logging with env-based filter, defaulting to info
    let _ = cairn::LogConfig::default().init();

    cairn::cli::run();
}

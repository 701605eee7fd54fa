use log::LevelFilter;

/// Wires the global logger. Level defaults to info, overridable through
/// LOG_LEVEL (error/warn/info/debug/trace).
pub fn init() -> Result<(), fern::InitError> {
    let level = std::env::var("LOG_LEVEL")
        .ok()
        .and_then(|raw| raw.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "{} {:<5} [{}] {}",
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()?;
    Ok(())
}

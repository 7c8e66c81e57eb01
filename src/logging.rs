use env_logger;

/// Initialize the logger with the specified verbosity level
///
/// # Arguments
/// * `verbose` - Verbosity level (0=warn, 1=info, 2=debug, 3+=trace)
pub fn setup_logger(verbose: u8) {
    let env_filter = match verbose {
        0 => "vestibule=warn",
        1 => "vestibule=info",
        2 => "vestibule=debug",
        _ => "vestibule=trace",
    };

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("VESTIBULE_LOG", env_filter)
            .write_style("VESTIBULE_LOG_STYLE"),
    )
    .format_timestamp(None)
    .format_module_path(false)
    .format_target(false)
    .init();
}

use crate::error::Result;

/// Initialize terminal logger with debug or info level filtering for
/// ci-scribe output.
pub fn initialize_logger(debug: bool) -> Result<()> {
    let filter = if debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Info
    };

    let config = simplelog::ConfigBuilder::new()
        .add_filter_allow_str("ci_scribe")
        .add_filter_allow_str("generate_release_notes")
        .add_filter_allow_str("generate_ui_test")
        .build();

    simplelog::TermLogger::init(
        filter,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )?;

    Ok(())
}

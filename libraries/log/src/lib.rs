use anyhow::{anyhow, Context as _, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::fmt;

use environment::ReadFromVar as _;

pub fn init() -> Result<()> {
    let output_json = bool::read_optional_from_var("OUTPUT_JSON")
        .context(
            "Failed to determine whether logging should be in \
            machine-readable JSON format!",
        )?
        .unwrap_or(false);

    let max_level = if bool::read_optional_from_var("DEBUG_LOGGING")
        .context("Failed to determine whether debug logging is enabled!")?
        .unwrap_or(cfg!(debug_assertions))
    {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let builder = fmt()
        .with_ansi(!output_json)
        .with_file(false)
        .with_level(true)
        .with_line_number(false)
        .with_target(true)
        .with_max_level(max_level);

    if output_json {
        builder.json().try_init()
    } else {
        builder.compact().try_init()
    }
    .map_err(|error| anyhow!(error).context("Failed to initialize logging!"))
}

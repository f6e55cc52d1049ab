use anyhow::Result;
use simple_logger::{set_up_color_terminal, SimpleLogger};

/// Installs the process-wide logger that the tracing events (including the
/// debug messenger callback) are forwarded to.
pub fn init() -> Result<()> {
    set_up_color_terminal();
    let logger = SimpleLogger::new();
    logger.init()?;
    Ok(())
}

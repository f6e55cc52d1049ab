use anyhow::Result;
use hello_vulkan::{app::App, logging};

fn main() -> Result<()> {
    logging::init()?;

    let mut app = App::try_new()?;
    app.run();

    Ok(())
}

use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;

use spark_storefront::pipeline::mount;
use spark_storefront::{logging, App, StoreConfig};

fn main() -> Result<()> {
    let config = StoreConfig::parse();

    let logging_enabled = logging::init(&config).context("Failed to set up logging")?;
    if logging_enabled {
        tracing::info!(?config, "starting");
    }

    let app = App::demo(&config).context("Failed to build storefront")?;

    if config.dump {
        println!("{}", mount::dump(&app));
        return Ok(());
    }

    mount::run(Rc::new(app)).context("Terminal error")?;
    Ok(())
}

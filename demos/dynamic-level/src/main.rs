mod cli;

use clap::Parser;
use kv_bridge::prelude::*;
use log::info;
use std::sync::Arc;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    // Keep a handle on the level so it can be changed after the logger exists.
    let level = Arc::new(LevelVar::new(args.initial_level()));
    let handler = BridgeHandler::new(
        LogfmtLogger::new(std::io::stderr()),
        Some(Arc::clone(&level).into()),
    );
    let logger = Logger::new(handler)
        .with_group("example_group")
        .with([Attr::new("foo", "bar")]);

    logger.info("hello world", [])?;
    logger.debug("helpful debug info", [Attr::new("phase", "before")])?;

    info!("Switching level from {} to {}", level.level(), args.then());

    // Every logger derived from the handler sees the change immediately.
    level.set(args.then());

    logger.info("hello world", [])?;
    logger.debug("helpful debug info", [Attr::new("phase", "after")])?;

    Ok(())
}

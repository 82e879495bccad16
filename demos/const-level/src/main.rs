mod cli;

use clap::Parser;
use kv_bridge::prelude::*;
use log::info;

fn main() -> std::io::Result<()> {
    env_logger::init();

    let args = cli::Args::parse();

    // The level can be any fixed value; it never changes for this lineage.
    let handler = BridgeHandler::new(
        LogfmtLogger::new(std::io::stderr()),
        Some(args.level().into()),
    );
    let logger = Logger::new(handler)
        .with_group("example_group")
        .with([Attr::new("foo", "bar")]);
    info!("Logging at or above {}", args.level());

    for level in [Level::Debug, Level::Info, Level::Warn, Level::Error] {
        logger.log(level, args.message(), [Attr::new("sent_at", level.as_str())])?;
    }

    Ok(())
}

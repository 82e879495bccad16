use kv_bridge::prelude::*;
use log::info;

fn main() -> std::io::Result<()> {
    env_logger::init();

    // Take an existing key/value logger:
    let downstream = LogfmtLogger::new(std::io::stderr());

    // Build a structured logger whose records end up in it, at the default level:
    let logger = Logger::new(BridgeHandler::new(downstream, None));
    info!("Bridge ready, default level {}", Level::default());

    logger
        .with_group("example_group")
        .with([Attr::new("foo", "bar")])
        .info("hello world", [])
}

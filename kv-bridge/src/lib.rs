#![forbid(unsafe_code)]

//! Forward structured log records to a minimal key/value logger.
//!
//! A [`BridgeHandler`] implements the structured [`Handler`] contract and turns
//! every [`Record`] it receives (level, time, message, attributes and nested
//! groups) into one flat, ordered list of key/value pairs for a downstream
//! [`KvLog`] implementation.
//!
//! ```
//! use kv_bridge::prelude::*;
//!
//! let downstream = LogfmtLogger::new(std::io::stderr());
//! let logger = Logger::new(BridgeHandler::new(downstream, None));
//!
//! logger
//!     .with_group("example_group")
//!     .with([Attr::new("foo", "bar")])
//!     .info("hello world", [])
//!     .ok();
//! ```

mod handler;
mod level;
mod logger;
mod record;
mod sink;

pub use crate::handler::{BridgeHandler, Handler, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
pub use crate::level::{Level, LevelSource, LevelVar, Leveler};
pub use crate::logger::Logger;
pub use crate::record::{Attr, Key, LogValuer, Record, Value};
pub use crate::sink::{KeyVal, KvLog, LogfmtLogger};

///
/// Expose everything needed to wire a handler between a facade and a downstream logger
///
/// ```
/// use kv_bridge::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        Attr, BridgeHandler, Handler, KvLog, Level, LevelSource, LevelVar, Leveler,
        LogfmtLogger, Logger, Record, Value,
    };
}

//! Minimal structured logging front-end over a [`Handler`].
//!
//! `Logger` checks the level first and only builds a [`Record`] for enabled
//! levels, the way a well-behaved caller of [`Handler::handle`] must.
//!
//! # Example
//!
//! ```
//! use kv_bridge::prelude::*;
//! use std::sync::Arc;
//!
//! let level = Arc::new(LevelVar::default());
//! let handler = BridgeHandler::new(LogfmtLogger::new(Vec::new()), Some(Arc::clone(&level).into()));
//! let logger = Logger::new(handler);
//!
//! assert!(!logger.enabled(Level::Debug));
//! level.set(Level::Debug);
//! assert!(logger.enabled(Level::Debug));
//!
//! logger.debug("cache miss", [Attr::new("key", "user:42")]).unwrap();
//! ```

use crate::handler::Handler;
use crate::level::Level;
use crate::record::{Attr, Record};

#[derive(Debug, Clone)]
pub struct Logger<H> {
    handler: H,
}

impl<H: Handler> Logger<H> {
    pub fn new(handler: H) -> Self {
        Self { handler }
    }

    pub fn handler(&self) -> &H {
        &self.handler
    }

    pub fn into_handler(self) -> H {
        self.handler
    }

    pub fn enabled(&self, level: Level) -> bool {
        self.handler.enabled(level)
    }

    /// Log `msg` at `level`, stamped with the current time.
    ///
    /// Returns `Ok(())` without doing anything when `level` is disabled.
    pub fn log(
        &self,
        level: Level,
        msg: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), H::Error> {
        if !self.enabled(level) {
            return Ok(());
        }

        self.handler.handle(Record::now(level, msg).with_attrs(attrs))
    }

    pub fn debug(
        &self,
        msg: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), H::Error> {
        self.log(Level::Debug, msg, attrs)
    }

    pub fn info(
        &self,
        msg: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), H::Error> {
        self.log(Level::Info, msg, attrs)
    }

    pub fn warn(
        &self,
        msg: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), H::Error> {
        self.log(Level::Warn, msg, attrs)
    }

    pub fn error(
        &self,
        msg: impl Into<String>,
        attrs: impl IntoIterator<Item = Attr>,
    ) -> Result<(), H::Error> {
        self.log(Level::Error, msg, attrs)
    }

    /// Logger whose records all carry `attrs`.
    pub fn with(&self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::new(self.handler.with_attrs(attrs.into_iter().collect()))
    }

    /// Logger that puts later attributes under `name`.
    pub fn with_group(&self, name: &str) -> Self {
        Self::new(self.handler.with_group(name))
    }
}

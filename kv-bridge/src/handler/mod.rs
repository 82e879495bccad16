//! The handler contract and the bridging handler that implements it.

pub(crate) mod bridge;
pub(crate) mod flatten;

pub use bridge::BridgeHandler;

use crate::level::Level;
use crate::record::{Attr, Record};

/// Key the record level is written under.
pub const LEVEL_KEY: &str = "level";
/// Key the record time is written under.
pub const TIME_KEY: &str = "time";
/// Key the record message is written under.
pub const MESSAGE_KEY: &str = "msg";

/// Contract between a structured logging front-end and whatever processes its
/// records.
///
/// Callers check [`enabled`](Handler::enabled) before building a record, so
/// [`handle`](Handler::handle) does not filter again. `with_attrs` and
/// `with_group` never change the receiver; they return a handler that carries
/// the extra scope, and an empty argument returns the receiver itself.
pub trait Handler: Send + Sync {
    type Error;

    /// Whether records at `level` should be built and handled at all.
    fn enabled(&self, level: Level) -> bool;

    /// Process one record. `record.attrs` holds only the attributes of this
    /// call; attributes bound with `with_attrs` are the handler's to add.
    fn handle(&self, record: Record) -> Result<(), Self::Error>;

    /// Handler whose records also carry `attrs`, qualified by the groups open
    /// right now.
    fn with_attrs(&self, attrs: Vec<Attr>) -> Self
    where
        Self: Sized;

    /// Handler that qualifies later attributes with `name`.
    fn with_group(&self, name: &str) -> Self
    where
        Self: Sized;
}

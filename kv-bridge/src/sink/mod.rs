//! The downstream side: minimal key/value loggers.
//!
//! A downstream logger only has to accept an ordered list of key/value pairs
//! and report whether writing them worked. [`LogfmtLogger`] is a small
//! implementation that writes one logfmt line per call.

pub(crate) mod logfmt;

pub use logfmt::LogfmtLogger;

use crate::record::{Key, Value};
use std::sync::{Arc, Mutex, PoisonError};

/// One emitted key/value pair.
pub type KeyVal = (Key, Value);

/// A minimal key/value logger.
///
/// `log` receives the full, ordered pair list of one record in a single call.
/// Values are always leaves: never [`Value::Group`] and never
/// [`Value::Lazy`].
///
/// # Example
///
/// ```
/// use kv_bridge::{KeyVal, KvLog};
///
/// struct PrintLogger;
///
/// impl KvLog for PrintLogger {
///     type Error = std::convert::Infallible;
///
///     fn log(&self, keyvals: &[KeyVal]) -> Result<(), Self::Error> {
///         let line: Vec<String> = keyvals.iter().map(|(k, v)| format!("{k}={v}")).collect();
///         println!("{}", line.join(" "));
///         Ok(())
///     }
/// }
/// ```
#[cfg_attr(test, mockall::automock(type Error = String;))]
pub trait KvLog {
    type Error;

    /// Write one record.
    fn log(&self, keyvals: &[KeyVal]) -> Result<(), Self::Error>;
}

impl<L: KvLog + ?Sized> KvLog for &L {
    type Error = L::Error;

    fn log(&self, keyvals: &[KeyVal]) -> Result<(), Self::Error> {
        (**self).log(keyvals)
    }
}

impl<L: KvLog + ?Sized> KvLog for Arc<L> {
    type Error = L::Error;

    fn log(&self, keyvals: &[KeyVal]) -> Result<(), Self::Error> {
        (**self).log(keyvals)
    }
}

/// Serializes writes to a logger that cannot be shared between threads.
///
/// The lock is held only for the one `log` call. A poisoned lock is
/// recovered, since the wrapped logger carries no state a panic could leave
/// half-written.
impl<L: KvLog> KvLog for Mutex<L> {
    type Error = L::Error;

    fn log(&self, keyvals: &[KeyVal]) -> Result<(), Self::Error> {
        let logger = self.lock().unwrap_or_else(PoisonError::into_inner);
        logger.log(keyvals)
    }
}

//! Records, attributes and values as the facade hands them to a handler.

pub(crate) mod attr;
pub(crate) mod value;

pub use attr::{Attr, Key};
pub use value::{LogValuer, Value};

use crate::level::Level;
use chrono::{DateTime, Utc};

/// A single log event.
///
/// `time` is `None` when the caller did not stamp the record; handlers omit
/// the time entirely in that case. `attrs` holds only the attributes attached
/// to this call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub time: Option<DateTime<Utc>>,
    pub level: Level,
    pub message: String,
    pub attrs: Vec<Attr>,
}

impl Record {
    /// Create a record without attributes
    pub fn new(time: Option<DateTime<Utc>>, level: Level, message: impl Into<String>) -> Self {
        Self {
            time,
            level,
            message: message.into(),
            attrs: Vec::new(),
        }
    }

    /// Create a record stamped with the current time
    pub fn now(level: Level, message: impl Into<String>) -> Self {
        Self::new(Some(Utc::now()), level, message)
    }

    /// Append attributes, keeping call order
    pub fn add_attrs(&mut self, attrs: impl IntoIterator<Item = Attr>) {
        self.attrs.extend(attrs);
    }

    /// Builder form of [`add_attrs`](Record::add_attrs)
    pub fn with_attrs(mut self, attrs: impl IntoIterator<Item = Attr>) -> Self {
        self.add_attrs(attrs);
        self
    }

    pub fn num_attrs(&self) -> usize {
        self.attrs.len()
    }
}

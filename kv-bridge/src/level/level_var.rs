/// Level reference that can be changed at runtime
use crate::level::level_source::Leveler;
use crate::level::log_level::Level;
use std::fmt;
use std::sync::atomic::{AtomicI32, Ordering};

/// A level that can be changed while handlers are reading it.
///
/// Share it behind an `Arc` and pass it to a handler as a
/// [`LevelSource::Dynamic`](crate::LevelSource::Dynamic). Every handler derived
/// from that one reads the same cell, so a call to [`set`](LevelVar::set) is
/// seen by the whole lineage on its next `enabled` check.
///
/// # Example
///
/// ```
/// use kv_bridge::{Level, LevelVar};
///
/// let var = LevelVar::default();
/// assert_eq!(var.level(), Level::Info);
///
/// var.set(Level::Debug);
/// assert_eq!(var.level(), Level::Debug);
/// ```
#[derive(Debug)]
pub struct LevelVar {
    value: AtomicI32,
}

impl LevelVar {
    pub fn new(level: Level) -> Self {
        Self {
            value: AtomicI32::new(level.as_i32()),
        }
    }

    /// Current level.
    pub fn level(&self) -> Level {
        // Only `new` and `set` write the cell, so the stored value is always a valid level.
        Level::from_repr(self.value.load(Ordering::Acquire)).unwrap_or_default()
    }

    /// Replace the current level.
    pub fn set(&self, level: Level) {
        let previous = self.value.swap(level.as_i32(), Ordering::AcqRel);
        if previous != level.as_i32() {
            let previous = Level::from_repr(previous).unwrap_or_default();
            log::debug!("Level changed from {previous} to {level}");
        }
    }
}

impl Default for LevelVar {
    fn default() -> Self {
        Self::new(Level::Info)
    }
}

impl Leveler for LevelVar {
    fn level(&self) -> Level {
        LevelVar::level(self)
    }
}

impl fmt::Display for LevelVar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LevelVar({})", self.level())
    }
}

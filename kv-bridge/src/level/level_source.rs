/// Where a handler reads its minimum level from
use crate::level::level_var::LevelVar;
use crate::level::log_level::Level;
use enum_dispatch::enum_dispatch;
use std::fmt;
use std::sync::Arc;

/// Anything that can report the minimum level to emit.
///
/// Implemented by a fixed [`Level`], by [`LevelVar`], and by any `Arc` of a
/// leveler, so callers can plug in their own level source as well.
#[enum_dispatch]
pub trait Leveler: Send + Sync {
    fn level(&self) -> Level;
}

impl Leveler for Level {
    fn level(&self) -> Level {
        *self
    }
}

impl<T: Leveler + ?Sized> Leveler for Arc<T> {
    fn level(&self) -> Level {
        (**self).level()
    }
}

/// Level configuration of a handler lineage.
///
/// A `Static` level never changes. A `Dynamic` source is read on every
/// `enabled` call, and cloning the source shares the reference rather than
/// copying the current value.
#[derive(Clone)]
#[enum_dispatch(Leveler)]
pub enum LevelSource {
    Static(Level),
    Dynamic(Arc<dyn Leveler>),
}

impl Default for LevelSource {
    fn default() -> Self {
        LevelSource::Static(Level::default())
    }
}

impl From<Arc<LevelVar>> for LevelSource {
    fn from(var: Arc<LevelVar>) -> Self {
        LevelSource::Dynamic(var)
    }
}

impl fmt::Debug for LevelSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelSource::Static(level) => f.debug_tuple("Static").field(level).finish(),
            LevelSource::Dynamic(leveler) => {
                f.debug_tuple("Dynamic").field(&leveler.level()).finish()
            }
        }
    }
}

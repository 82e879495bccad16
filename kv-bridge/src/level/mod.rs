//! Levels and the sources a handler reads its threshold from.
//!
//! A [`Level`] is a plain ordered value. A [`LevelVar`] is a level reference
//! that can be changed while handlers are reading it. Both implement
//! [`Leveler`], and a [`LevelSource`] holds whichever one a handler lineage
//! was built with.

pub(crate) mod level_source;
pub(crate) mod level_var;
pub(crate) mod log_level;

pub use level_source::{LevelSource, Leveler};
pub use level_var::LevelVar;
pub use log_level::Level;

/// Log levels understood by handlers
use strum_macros::{Display, EnumIter, EnumString, FromRepr, IntoStaticStr};

/// Importance of a log record.
///
/// The numeric values leave room between the named levels so they keep the
/// same spacing as the facade they mirror: Debug=-4, Info=0, Warn=4, Error=8.
/// Levels are written out by their lowercase name and parse back
/// case-insensitively.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Default,
    Display,
    EnumIter,
    EnumString,
    FromRepr,
    IntoStaticStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[repr(i32)]
pub enum Level {
    Debug = -4,
    #[default]
    Info = 0,
    Warn = 4,
    Error = 8,
}

impl Level {
    /// The lowercase name written to the `level` key.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl From<Level> for i32 {
    fn from(level: Level) -> Self {
        level.as_i32()
    }
}

impl TryFrom<i32> for Level {
    type Error = String;

    fn try_from(value: i32) -> Result<Self, String> {
        Level::from_repr(value).ok_or_else(|| format!("Invalid log level: {value}"))
    }
}

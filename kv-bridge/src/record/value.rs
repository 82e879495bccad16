/// Attribute values, including groups and values resolved at emit time
use crate::record::attr::Attr;
use chrono::{DateTime, SecondsFormat, Utc};
use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use strum_macros::IntoStaticStr;

/// How many times [`Value::resolve`] follows a chain of lazy values before
/// giving up.
const MAX_LOG_VALUE_CALLS: usize = 100;

/// A value whose concrete form is only computed when a record is emitted.
///
/// Any `Fn() -> Value` closure is a `LogValuer`.
///
/// # Example
///
/// ```
/// use kv_bridge::{Attr, Value};
///
/// let attr = Attr::new("expensive", Value::lazy(|| Value::from(6 * 7)));
/// assert_eq!(attr.value.resolve(), Value::Int(42));
/// ```
pub trait LogValuer: Send + Sync {
    fn log_value(&self) -> Value;

    /// Name used when resolution has to give up on this valuer.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl<F> LogValuer for F
where
    F: Fn() -> Value + Send + Sync,
{
    fn log_value(&self) -> Value {
        self()
    }
}

/// The value half of an [`Attr`].
///
/// Handlers only ever pass leaf values downstream: groups are flattened into
/// prefixed keys and lazy values are resolved first.
#[derive(Clone, Default, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Value {
    #[default]
    Null,
    String(Cow<'static, str>),
    Int(i64),
    Uint(u64),
    Float(f64),
    Bool(bool),
    Duration(Duration),
    Time(DateTime<Utc>),
    Error(Arc<dyn StdError + Send + Sync>),
    Group(Vec<Attr>),
    Lazy(Arc<dyn LogValuer>),
}

impl Value {
    pub fn error(err: impl StdError + Send + Sync + 'static) -> Self {
        Value::Error(Arc::new(err))
    }

    pub fn lazy(valuer: impl LogValuer + 'static) -> Self {
        Value::Lazy(Arc::new(valuer))
    }

    /// Lowercase name of the variant, e.g. `"string"` or `"group"`.
    pub fn kind(&self) -> &'static str {
        self.into()
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Value::Group(_))
    }

    /// Replace a lazy value with what it stands for.
    ///
    /// Each valuer in a chain is called once. A chain longer than 100 links
    /// becomes an error value instead of looping forever. Any other variant is
    /// returned untouched.
    pub fn resolve(self) -> Value {
        let mut value = self;
        let mut last = "";
        for _ in 0..MAX_LOG_VALUE_CALLS {
            match value {
                Value::Lazy(valuer) => {
                    last = valuer.type_name();
                    value = valuer.log_value();
                }
                resolved => return resolved,
            }
        }

        match value {
            Value::Lazy(_) => {
                log::warn!("Gave up resolving lazy value of type {last}");
                let msg = format!("LogValue called too many times on Value of type {last}");
                Value::Error(Arc::from(Box::<dyn StdError + Send + Sync>::from(msg)))
            }
            resolved => resolved,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::String(s) => write!(f, "{s}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Uint(u) => write!(f, "{u}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Duration(d) => write!(f, "{d:?}"),
            Value::Time(t) => write!(f, "{}", t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            Value::Error(e) => write!(f, "{e}"),
            Value::Group(attrs) => {
                write!(f, "[")?;
                for (i, attr) in attrs.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{attr}")?;
                }
                write!(f, "]")
            }
            // Display is for humans; handlers resolve before anything is shown.
            Value::Lazy(valuer) => write!(f, "{}", valuer.log_value()),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "Null"),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Uint(u) => f.debug_tuple("Uint").field(u).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Duration(d) => f.debug_tuple("Duration").field(d).finish(),
            Value::Time(t) => f.debug_tuple("Time").field(t).finish(),
            Value::Error(e) => f.debug_tuple("Error").field(&e.to_string()).finish(),
            Value::Group(attrs) => f.debug_tuple("Group").field(attrs).finish(),
            Value::Lazy(valuer) => f.debug_tuple("Lazy").field(&valuer.type_name()).finish(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Uint(a), Value::Uint(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Duration(a), Value::Duration(b)) => a == b,
            (Value::Time(a), Value::Time(b)) => a == b,
            (Value::Error(a), Value::Error(b)) => a.to_string() == b.to_string(),
            (Value::Group(a), Value::Group(b)) => a == b,
            (Value::Lazy(a), Value::Lazy(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<&'static str> for Value {
    fn from(s: &'static str) -> Self {
        Value::String(Cow::Borrowed(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(Cow::Owned(s))
    }
}

impl From<Cow<'static, str>> for Value {
    fn from(s: Cow<'static, str>) -> Self {
        Value::String(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Self {
        Value::Uint(u)
    }
}

impl From<usize> for Value {
    fn from(u: usize) -> Self {
        Value::Uint(u as u64)
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<Duration> for Value {
    fn from(d: Duration) -> Self {
        Value::Duration(d)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(t: DateTime<Utc>) -> Self {
        Value::Time(t)
    }
}

impl From<Vec<Attr>> for Value {
    fn from(attrs: Vec<Attr>) -> Self {
        Value::Group(attrs)
    }
}

/// Objects become groups (keeping key order), arrays are kept as compact
/// JSON text, scalars map to the matching variant.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        use serde_json::Value as Json;

        match json {
            Json::Null => Value::Null,
            Json::Bool(b) => Value::Bool(b),
            Json::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint(u)
                } else {
                    Value::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Json::String(s) => Value::from(s),
            array @ Json::Array(_) => Value::from(array.to_string()),
            Json::Object(map) => Value::Group(
                map.into_iter()
                    .map(|(key, value)| Attr::new(key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

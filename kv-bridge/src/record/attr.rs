/// Key/value attributes attached to records and handlers
use crate::record::value::Value;
use std::borrow::Cow;
use std::fmt;

/// Attribute and output key. Static keys are borrowed; composed keys are owned.
pub type Key = Cow<'static, str>;

/// A key paired with a value.
///
/// The default attribute (empty key, [`Value::Null`]) is the "empty attr" and
/// is dropped by handlers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attr {
    pub key: Key,
    pub value: Value,
}

impl Attr {
    pub fn new(key: impl Into<Key>, value: impl Into<Value>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create a group attribute. An empty `key` inlines the members into the
    /// enclosing scope.
    pub fn group(key: impl Into<Key>, attrs: impl IntoIterator<Item = Attr>) -> Self {
        Self::new(key, Value::Group(attrs.into_iter().collect()))
    }

    pub fn is_empty(&self) -> bool {
        self.key.is_empty() && matches!(self.value, Value::Null)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_new() {
        let attr = Attr::new("foo", "bar");
        assert_eq!(attr.key, "foo");
        assert_eq!(attr.value, Value::from("bar"));
    }

    #[test]
    fn test_attr_owned_key() {
        let key = format!("req_{}", 7);
        let attr = Attr::new(key, 1);
        assert_eq!(attr.key, "req_7");
        assert!(matches!(attr.key, Cow::Owned(_)));
    }

    #[test]
    fn test_attr_default_is_empty() {
        assert!(Attr::default().is_empty());
        assert!(!Attr::new("", 0).is_empty());
        assert!(!Attr::new("k", Value::Null).is_empty());
    }

    #[test]
    fn test_attr_group() {
        let attr = Attr::group("g", [Attr::new("a", 1), Attr::new("b", true)]);
        let Value::Group(members) = &attr.value else {
            panic!("expected a group value");
        };
        assert_eq!(members.len(), 2);
        assert_eq!(attr.to_string(), "g=[a=1 b=true]");
    }

    #[test]
    fn test_attr_display() {
        assert_eq!(Attr::new("count", 42).to_string(), "count=42");
    }
}

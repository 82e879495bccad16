/// Turning attribute trees into flat, prefixed key/value pairs
use crate::record::{Attr, Key, Value};
use crate::sink::KeyVal;
use std::borrow::Cow;

/// Separator between group names and keys in a flattened key.
pub(crate) const GROUP_SEPARATOR: char = '.';

/// Append `attr` to `pairs` with every key qualified by `prefix`.
///
/// The value is resolved first, so a lazy value that produces a group is
/// flattened like any other group. Groups contribute their members only:
/// an empty group adds nothing and a group with an empty key adds no prefix
/// segment. The empty attribute is skipped.
pub(crate) fn append_attr(pairs: &mut Vec<KeyVal>, prefix: &str, attr: Attr) {
    let Attr { key, value } = attr;

    match value.resolve() {
        Value::Null if key.is_empty() => {}
        Value::Group(members) => {
            if members.is_empty() {
                return;
            }

            let nested;
            let prefix = if key.is_empty() {
                prefix
            } else {
                nested = join(prefix, &key);
                nested.as_str()
            };

            for member in members {
                append_attr(pairs, prefix, member);
            }
        }
        value => pairs.push((qualify(prefix, key), value)),
    }
}

/// `prefix.name`, or just `name` at the top level.
pub(crate) fn join(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        return name.to_string();
    }

    let mut joined = String::with_capacity(prefix.len() + 1 + name.len());
    joined.push_str(prefix);
    joined.push(GROUP_SEPARATOR);
    joined.push_str(name);
    joined
}

fn qualify(prefix: &str, key: Key) -> Key {
    if prefix.is_empty() {
        key
    } else {
        Cow::Owned(join(prefix, &key))
    }
}

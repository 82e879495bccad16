/// Line-oriented logfmt writer used as a reference downstream logger
use crate::sink::{KeyVal, KvLog};
use std::fmt::Write as _;
use std::io::{self, Write};
use std::sync::{Mutex, PoisonError};

/// Writes each record as one `key=value key=value` line.
///
/// The whole line is rendered before the writer lock is taken, so records
/// logged from several threads never interleave. Values are quoted when they
/// are empty or contain whitespace, `=`, `"` or control characters. Keys
/// cannot be quoted in logfmt, so those characters are dropped from keys
/// instead, and a key left empty is written as `?`.
///
/// # Example
///
/// ```
/// use kv_bridge::{KvLog, LogfmtLogger, Value};
///
/// let logger = LogfmtLogger::new(Vec::new());
/// logger.log(&[("msg".into(), Value::from("hello world"))]).unwrap();
///
/// assert_eq!(logger.into_inner(), b"msg=\"hello world\"\n");
/// ```
#[derive(Debug)]
pub struct LogfmtLogger<W> {
    writer: Mutex<W>,
}

impl<W: Write> LogfmtLogger<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the writer, e.g. to inspect a buffer in tests.
    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> KvLog for LogfmtLogger<W> {
    type Error = io::Error;

    fn log(&self, keyvals: &[KeyVal]) -> io::Result<()> {
        let line = encode_line(keyvals);

        let mut writer = self.writer.lock().unwrap_or_else(PoisonError::into_inner);
        writer.write_all(line.as_bytes())?;
        writer.flush()
    }
}

/// Render one record, newline included.
pub(crate) fn encode_line(keyvals: &[KeyVal]) -> String {
    let mut line = String::with_capacity(keyvals.len() * 16);
    for (i, (key, value)) in keyvals.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        push_key(&mut line, key);
        line.push('=');
        push_value(&mut line, &value.to_string());
    }
    line.push('\n');
    line
}

fn is_reserved(c: char) -> bool {
    c == '=' || c == '"' || c.is_whitespace() || c.is_control()
}

fn push_key(line: &mut String, key: &str) {
    let start = line.len();
    line.extend(key.chars().filter(|&c| !is_reserved(c)));
    if line.len() == start {
        line.push('?');
    }
}

fn push_value(line: &mut String, value: &str) {
    if !value.is_empty() && !value.chars().any(is_reserved) {
        line.push_str(value);
        return;
    }

    line.push('"');
    for c in value.chars() {
        match c {
            '"' => line.push_str("\\\""),
            '\\' => line.push_str("\\\\"),
            '\n' => line.push_str("\\n"),
            '\r' => line.push_str("\\r"),
            '\t' => line.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(line, "\\u{:04x}", u32::from(c));
            }
            c => line.push(c),
        }
    }
    line.push('"');
}

//! Helpers shared by the integration tests: an in-memory writer and a logfmt
//! decoder for reading records back.

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use kv_bridge::{BridgeHandler, Level, LevelSource, LogfmtLogger, Logger};
use std::collections::BTreeMap;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::{Arc, Mutex};

/// Cloneable writer over a shared byte buffer
#[derive(Clone, Default)]
pub struct SharedBuf {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuf {
    pub fn contents(&self) -> String {
        String::from_utf8(self.bytes.lock().unwrap().clone()).unwrap()
    }

    pub fn reset(&self) {
        self.bytes.lock().unwrap().clear();
    }
}

impl Write for SharedBuf {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub type TestHandler = BridgeHandler<LogfmtLogger<SharedBuf>>;

/// Handler writing logfmt into a buffer the test can read back
pub fn logfmt_handler(level: Option<LevelSource>) -> (TestHandler, SharedBuf) {
    let buf = SharedBuf::default();
    let handler = BridgeHandler::new(LogfmtLogger::new(buf.clone()), level);
    (handler, buf)
}

pub fn logfmt_logger(level: Option<LevelSource>) -> (Logger<TestHandler>, SharedBuf) {
    let (handler, buf) = logfmt_handler(level);
    (Logger::new(handler), buf)
}

/// Decode every line of `output` into its ordered key/value pairs.
pub fn decode(output: &str) -> Vec<Vec<(String, String)>> {
    output
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| decode_line(line).unwrap_or_else(|e| panic!("{e}: {line:?}")))
        .collect()
}

/// Decode records into maps; a repeated key keeps its last value.
pub fn decode_maps(output: &str) -> Vec<BTreeMap<String, String>> {
    decode(output)
        .into_iter()
        .map(|pairs| pairs.into_iter().collect())
        .collect()
}

pub fn keys(record: &[(String, String)]) -> Vec<&str> {
    record.iter().map(|(k, _)| k.as_str()).collect()
}

pub fn parse_level(value: &str) -> Level {
    Level::from_str(value).unwrap()
}

pub fn parse_time(value: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(value)
        .unwrap()
        .with_timezone(&Utc)
}

/// Count decoded records per `level` value.
pub fn level_counts(output: &str) -> BTreeMap<Level, usize> {
    let mut counts = BTreeMap::new();
    for record in decode_maps(output) {
        if let Some(level) = record.get("level") {
            *counts.entry(parse_level(level)).or_insert(0) += 1;
        }
    }
    counts
}

fn decode_line(line: &str) -> Result<Vec<(String, String)>, String> {
    let mut pairs = Vec::new();
    let mut chars = line.chars().peekable();

    loop {
        while chars.peek() == Some(&' ') {
            chars.next();
        }
        if chars.peek().is_none() {
            return Ok(pairs);
        }

        let mut key = String::new();
        while let Some(&c) = chars.peek() {
            if c == '=' || c == ' ' {
                break;
            }
            key.push(c);
            chars.next();
        }
        if chars.next() != Some('=') {
            return Err(format!("key {key:?} without value"));
        }

        let mut value = String::new();
        if chars.peek() == Some(&'"') {
            chars.next();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some('\\') => match chars.next() {
                        Some('n') => value.push('\n'),
                        Some('r') => value.push('\r'),
                        Some('t') => value.push('\t'),
                        Some('u') => {
                            let hex: String = chars.by_ref().take(4).collect();
                            let code = u32::from_str_radix(&hex, 16).map_err(|e| e.to_string())?;
                            value.push(char::from_u32(code).ok_or("bad escape")?);
                        }
                        Some(c) => value.push(c),
                        None => return Err("unterminated escape".to_string()),
                    },
                    Some(c) => value.push(c),
                    None => return Err("unterminated quote".to_string()),
                }
            }
        } else {
            while let Some(&c) = chars.peek() {
                if c == ' ' {
                    break;
                }
                value.push(c);
                chars.next();
            }
        }

        pairs.push((key, value));
    }
}


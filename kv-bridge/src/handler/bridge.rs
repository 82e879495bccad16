/// Handler that forwards records to a minimal key/value logger
use crate::handler::flatten::{append_attr, join};
use crate::handler::{Handler, LEVEL_KEY, MESSAGE_KEY, TIME_KEY};
use crate::level::{Level, LevelSource, Leveler};
use crate::record::{Attr, Record, Value};
use crate::sink::{KeyVal, KvLog};
use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

/// Translates structured records into flat key/value pairs for a [`KvLog`].
///
/// Every handled record becomes exactly one downstream `log` call whose pairs
/// are, in order:
///
/// 1. `level`, the lowercase level name
/// 2. `time`, only when the record has one
/// 3. `msg`
/// 4. attributes bound with [`with_attrs`](Handler::with_attrs), in bind order
/// 5. the record's own attributes, in call order
///
/// Group members are flattened into `group.key` style keys. Bound attributes
/// are flattened and resolved once, when they are bound.
///
/// Handlers are cheap to clone and immutable. Deriving one with `with_attrs`
/// or `with_group` leaves the original untouched and shares the downstream
/// logger and the level source with it.
///
/// # Example
///
/// ```
/// use kv_bridge::{Attr, BridgeHandler, Handler, Level, LogfmtLogger, Record};
///
/// let handler = BridgeHandler::new(LogfmtLogger::new(std::io::stderr()), None)
///     .with_group("example_group")
///     .with_attrs(vec![Attr::new("foo", "bar")]);
///
/// assert!(handler.enabled(Level::Info));
/// assert!(!handler.enabled(Level::Debug));
///
/// handler.handle(Record::now(Level::Info, "hello world")).unwrap();
/// ```
pub struct BridgeHandler<L> {
    state: Arc<State<L>>,
}

struct State<L> {
    logger: Arc<L>,
    level: LevelSource,
    /// Open groups joined with `.`, empty at the top level
    prefix: String,
    /// Bound attributes, already prefixed and resolved
    bound: Vec<KeyVal>,
}

impl<L: KvLog> BridgeHandler<L> {
    /// Create the root handler of a lineage.
    ///
    /// `level` of `None` filters at [`Level::Info`].
    pub fn new(logger: L, level: Option<LevelSource>) -> Self {
        Self::from_shared(Arc::new(logger), level)
    }

    /// Like [`new`](BridgeHandler::new) for a downstream logger that is
    /// already shared with other handlers.
    pub fn from_shared(logger: Arc<L>, level: Option<LevelSource>) -> Self {
        Self {
            state: Arc::new(State {
                logger,
                level: level.unwrap_or_default(),
                prefix: String::new(),
                bound: Vec::new(),
            }),
        }
    }
}

impl<L> BridgeHandler<L> {
    pub fn logger(&self) -> &Arc<L> {
        &self.state.logger
    }

    pub fn level_source(&self) -> &LevelSource {
        &self.state.level
    }

    /// Open groups, outermost first.
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.state.prefix.split('.').filter(|g| !g.is_empty())
    }

    /// Number of bound key/value pairs after flattening.
    pub fn num_bound(&self) -> usize {
        self.state.bound.len()
    }

    /// Whether both handlers are the same instance rather than equal copies.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.state, &other.state)
    }

    fn derive(&self, prefix: String, bound: Vec<KeyVal>) -> Self {
        Self {
            state: Arc::new(State {
                logger: Arc::clone(&self.state.logger),
                level: self.state.level.clone(),
                prefix,
                bound,
            }),
        }
    }
}

impl<L> Clone for BridgeHandler<L> {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
        }
    }
}

impl<L> fmt::Debug for BridgeHandler<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BridgeHandler")
            .field("level", &self.state.level)
            .field("prefix", &self.state.prefix)
            .field("bound", &self.state.bound)
            .finish()
    }
}

impl<L> Handler for BridgeHandler<L>
where
    L: KvLog + Send + Sync,
{
    type Error = L::Error;

    fn enabled(&self, level: Level) -> bool {
        level >= self.state.level.level()
    }

    fn handle(&self, record: Record) -> Result<(), L::Error> {
        let state = &*self.state;
        let Record {
            time,
            level,
            message,
            attrs,
        } = record;

        let mut pairs: Vec<KeyVal> = Vec::with_capacity(3 + state.bound.len() + attrs.len());
        pairs.push((Cow::Borrowed(LEVEL_KEY), Value::from(level.as_str())));
        if let Some(time) = time {
            pairs.push((Cow::Borrowed(TIME_KEY), Value::Time(time)));
        }
        pairs.push((Cow::Borrowed(MESSAGE_KEY), Value::from(message)));
        pairs.extend(state.bound.iter().cloned());
        for attr in attrs {
            append_attr(&mut pairs, &state.prefix, attr);
        }

        state.logger.log(&pairs)
    }

    fn with_attrs(&self, attrs: Vec<Attr>) -> Self {
        if attrs.is_empty() {
            return self.clone();
        }

        let mut bound = Vec::with_capacity(self.state.bound.len() + attrs.len());
        bound.extend(self.state.bound.iter().cloned());
        for attr in attrs {
            append_attr(&mut bound, &self.state.prefix, attr);
        }

        self.derive(self.state.prefix.clone(), bound)
    }

    fn with_group(&self, name: &str) -> Self {
        if name.is_empty() {
            return self.clone();
        }

        self.derive(join(&self.state.prefix, name), self.state.bound.clone())
    }
}

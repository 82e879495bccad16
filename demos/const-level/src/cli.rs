use kv_bridge::Level;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Minimum level to emit (can also be set via KV_BRIDGE_LEVEL env var)
    #[clap(long, env = "KV_BRIDGE_LEVEL", default_value = "debug")]
    pub level: Level,

    /// Message to log at every level
    #[clap(long, default_value = "hello world")]
    pub message: String,
}

impl Args {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

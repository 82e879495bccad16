use kv_bridge::Level;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// Level the shared level reference starts at
    #[clap(long, env = "KV_BRIDGE_LEVEL", default_value = "info")]
    pub initial_level: Level,

    /// Level the reference is switched to halfway through
    #[clap(long, default_value = "debug")]
    pub then: Level,
}

impl Args {
    pub fn initial_level(&self) -> Level {
        self.initial_level
    }

    pub fn then(&self) -> Level {
        self.then
    }
}

// src/config.rs
/// Runtime configuration, passed explicitly into each component.
#[derive(Debug, Clone)]
pub struct Config {
    pub verbose: bool,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self { verbose: false }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

use std::env;

pub const ENV_VAR_MAX_DEPTH: &str = "SERIALPACK_MAX_DEPTH";

pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Limits applied while decoding.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CodecConfig {
    /// How many containers and objects may nest inside one another.
    pub max_depth: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl CodecConfig {
    pub fn from_env() -> Self {
        let max_depth = env::var(ENV_VAR_MAX_DEPTH)
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_DEPTH);
        Self { max_depth }
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

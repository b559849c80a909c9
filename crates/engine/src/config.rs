use crate::input::InputSource;
use derive_builder::Builder;

/// Read buffer used when the input is a file.
pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into), build_fn(validate = "Self::validate"))]
pub struct Config {
    #[builder(default)]
    pub input: InputSource,
    /// Must be non-zero: an empty buffer reads as end of input.
    #[builder(default = "DEFAULT_BUFFER_CAPACITY")]
    pub buffer_capacity: usize,
    /// Announce on stderr that standard input is being read.
    #[builder(default = "true")]
    pub stdin_notice: bool,
}

impl ConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.buffer_capacity == Some(0) {
            return Err("buffer_capacity must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            stdin_notice: true,
        }
    }
}

impl Config {
    /// Whether the stdin notice should be printed for this run.
    #[must_use]
    pub fn announces_stdin(&self) -> bool {
        self.stdin_notice && self.input.is_stdin()
    }
}

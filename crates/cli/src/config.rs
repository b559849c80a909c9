// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::{AppError, Result};
use unistat_engine::config::{Config, ConfigBuilder};
use unistat_engine::error::EngineError;
use unistat_engine::input::InputSource;

impl TryFrom<Args> for Config {
    type Error = AppError;

    fn try_from(args: Args) -> Result<Self> {
        if args.files.len() > 1 {
            return Err(AppError::Usage("too many files specified".to_string()));
        }
        let stdin_notice = !args.quiet;
        let input = InputSource::from(args.files.into_iter().next());

        let config = ConfigBuilder::default()
            .input(input)
            .stdin_notice(stdin_notice)
            .build()
            .map_err(EngineError::from)?;
        Ok(config)
    }
}

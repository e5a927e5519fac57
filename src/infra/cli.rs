//! Usage: Command-line flags for the shell process.

use clap::Parser;

use crate::app_state::AppConfig;

#[cfg(test)]
mod tests;

pub(crate) const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Parser)]
#[command(name = "webtray", about, version)]
pub(crate) struct Args {
    /// Port the content server listens on
    #[arg(short = 'p', long = "port", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Open the viewer window with devtools attached
    #[arg(short = 'd', long = "debug", default_value_t = false)]
    pub debug: bool,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        Self {
            port: args.port,
            debug: args.debug,
        }
    }
}

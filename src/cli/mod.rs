//! # CLI Module
//!
//! Command handlers behind the `anghami2spotify` binary. Each handler loads
//! the settings file, builds a [`ConsoleReporter`](crate::report::ConsoleReporter)
//! and turns the outcome into a process exit code:
//!
//! - [`import`] - Full run: parse, optional text export, authorize, create the
//!   playlist, add every matched track, report what was not found
//! - [`list`] - Prints the tracks found in the export as a table
//! - [`export`] - Writes the text export only
//!
//! `list` and `export` never contact Spotify.
//!
//! ```bash
//! anghami2spotify                         # same as `import`
//! anghami2spotify --config my.toml list   # check what the export contains
//! anghami2spotify export                  # write the text file only
//! ```

mod export;
mod import;
mod list;

use std::path::Path;

pub use export::export;
pub use import::import;
pub use list::list;

use crate::{
    config::{self, Config},
    report::Reporter,
};

async fn load_config(path: &Path, reporter: &dyn Reporter) -> Option<Config> {
    match config::load(path).await {
        Ok(config) => Some(config),
        Err(e) => {
            reporter.error(&e.to_string());
            None
        }
    }
}

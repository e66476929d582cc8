//! Command implementations for the student records CLI
//!
//! Each command lives in its own module and returns [`RunStats`]:
//! - `session`: interactive report menu (default)
//! - `report`: non-interactive generation of selected reports
//! - `validate`: validation summary with every rejected line

pub mod report;
pub mod session;
pub mod shared;
pub mod validate;

pub use shared::RunStats;

use crate::Result;
use crate::cli::args::{Args, Commands};

/// Main command runner
///
/// Loads the layered configuration and dispatches to the subcommand handler.
pub async fn run(args: Args) -> Result<RunStats> {
    let config = shared::load_configuration(&args)?;

    match args.get_command() {
        Commands::Menu => session::run_menu(&config).await,
        Commands::Report(report_args) => report::run_reports(&config, &report_args).await,
        Commands::Validate => validate::run_validate(&config).await,
    }
}

//! Command trait for the expt CLI.
//!
//! Every subcommand implements [`Command`] so that `main` dispatches them the
//! same way.

use crate::error::Result;

/// Standard command trait that all expt commands implement.
///
/// # Type Parameters
/// * `Args` - The arguments type for this command
/// * `Output` - The output type returned by this command
pub trait Command {
    /// The arguments type for this command.
    type Args;

    /// The output type returned by this command.
    type Output;

    /// Create a new command instance with the given arguments.
    fn new(args: Self::Args) -> Self;

    /// Execute the command.
    fn execute(&self) -> Result<Self::Output>;

    /// Get the command name.
    fn name() -> &'static str;
}

/// Build and run a command, logging its name.
pub fn run<C: Command>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "running command");
    C::new(args).execute()
}

//! Command-line front end for `fruit-core`.
//!
//! # Flow
//! 1. Parse arguments ([`args::Cli`]); usage errors exit with [`EXIT_USAGE`].
//! 2. Install the stderr subscriber ([`logging::init`]).
//! 3. Build a `FruitClient` from `--base-url` / `--timeout` and run one
//!    lookup through [`transport::UreqTransport`].
//! 4. Print the rendered record and exit `0`, or print `Error: <message>`
//!    to stderr and exit with `FruitError::exit_code` (`2`).

pub mod args;
pub mod logging;
pub mod transport;

use std::time::Duration;

use fruit_core::{FruitClient, FruitError, OutputFormat, Transport};
use tracing::info;

pub use args::{Cli, FormatArg};
pub use transport::UreqTransport;

/// Exit status for command-line usage errors (`EX_USAGE`).
pub const EXIT_USAGE: i32 = 64;

/// Client configured from the parsed arguments.
pub fn client_for(cli: &Cli) -> FruitClient {
    FruitClient::new(cli.base_url.clone()).with_timeout(Duration::from_secs(cli.timeout))
}

/// Perform the lookup and render it in the requested format.
pub fn run<T: Transport + ?Sized>(cli: &Cli, transport: &T) -> Result<String, FruitError> {
    let record = client_for(cli)
        .fetch(&cli.fruit, transport)
        .inspect_err(|err| info!(kind = ?err, "lookup failed"))?;
    Ok(OutputFormat::from(cli.format).render(&record))
}

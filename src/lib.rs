#![deny(missing_debug_implementations)]

//! `echo-fixture` is a child process for testing code that runs child
//! processes. It echoes what it was given and exits the way it was told to,
//! so a test can check that arguments, environment variables, output
//! streams and exit codes make it across the process boundary.
//!
//! Running `echo-fixture <exit_code> <args>...`
//!
//! 1. writes one line of JSON to `stdout`:
//!    `{"args": [<args>...], "user_base": <$PYTHONUSERBASE>, "path": <$PATH>}`
//!    (`echo-fixture-without-path` leaves out `path`),
//! 2. writes `hello from stderr` to `stderr`,
//! 3. exits with `<exit_code>`, or `0` if no arguments are given.
//!
//! A missing environment variable ends the process with exit code `1`
//! before anything is written. A first argument that is not an integer
//! ends it with exit code `1` after both lines have been written.
//!
//! The same steps are available as a library through [`run`], which takes
//! the output streams and the environment as parameters:
//!
//! ```
//! use echo_fixture::{config::Config, context::Context};
//! use std::{collections::BTreeMap, ffi::OsString};
//!
//! let mut environment = BTreeMap::new();
//! environment.insert("PYTHONUSERBASE", "/home/x");
//! let arguments: Vec<OsString> = vec!["3".into(), "foo".into()];
//! let exit_code = echo_fixture::run(
//!     &mut Context::production(),
//!     &Config::without_path(),
//!     &arguments,
//!     &environment,
//! )
//! .unwrap();
//! assert_eq!(exit_code, 3);
//! ```

pub mod config;
pub mod context;
pub mod environment;
pub mod error;
pub mod exit_code;
pub mod json;
pub mod logging;
pub mod record;

use crate::{
    config::Config,
    context::Context,
    environment::{Environment, ProcessEnvironment},
    error::Stream,
    record::Record,
};
pub use error::Error;
use std::{ffi::OsString, io::Write};

/// The fixed line written to `stderr`, without its newline.
pub const STDERR_LINE: &str = "hello from stderr";

/// Echoes `arguments` and `environment` to `context` and returns the exit
/// code the process should end with. `arguments` excludes the program name.
pub fn run<Stdout, Stderr, E>(
    context: &mut Context<Stdout, Stderr>,
    config: &Config,
    arguments: &[OsString],
    environment: &E,
) -> Result<i32, Error>
where
    Stdout: Write,
    Stderr: Write,
    E: Environment + ?Sized,
{
    let record = Record::from_inputs(config, arguments, environment)?;
    tracing::debug!(?record, "read inputs");
    json::write_line(&mut context.stdout, &record)
        .and_then(|()| context.stdout.flush())
        .map_err(|error| Error::output_io_error(Stream::Stdout, error))?;
    context
        .stderr
        .write_all(format!("{}\n", STDERR_LINE).as_bytes())
        .and_then(|()| context.stderr.flush())
        .map_err(|error| Error::output_io_error(Stream::Stderr, error))?;
    let exit_code = exit_code::from_arguments(arguments)?;
    tracing::debug!(exit_code, "done");
    Ok(exit_code)
}

/// [`run`] against the current process: its arguments, its environment and
/// its standard streams.
pub fn run_process(config: &Config) -> Result<i32, Error> {
    logging::init();
    let arguments: Vec<OsString> = std::env::args_os().skip(1).collect();
    run(
        &mut Context::production(),
        config,
        &arguments,
        &ProcessEnvironment,
    )
}

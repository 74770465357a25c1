use crate::{config::Config, environment::Environment, error::Error};
use serde::Serialize;
use std::ffi::OsString;

/// What one run of the fixture echoes back.
///
/// Field order is the key order of the emitted JSON object.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Record {
    pub args: Vec<String>,
    pub user_base: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl Record {
    /// `arguments` excludes the program name. Its first element is the exit
    /// code slot and is not echoed.
    pub fn from_inputs<E>(
        config: &Config,
        arguments: &[OsString],
        environment: &E,
    ) -> Result<Record, Error>
    where
        E: Environment + ?Sized,
    {
        let args = arguments
            .iter()
            .skip(1)
            .map(|argument| argument.to_string_lossy().into_owned())
            .collect();
        let user_base = required_variable(environment, &config.user_base_variable)?;
        let path = match &config.path_variable {
            Some(name) => Some(required_variable(environment, name)?),
            None => None,
        };
        Ok(Record {
            args,
            user_base,
            path,
        })
    }
}

fn required_variable<E>(environment: &E, name: &str) -> Result<String, Error>
where
    E: Environment + ?Sized,
{
    match environment.var(name) {
        Some(value) => Ok(value.to_string_lossy().into_owned()),
        None => Err(Error::MissingEnvironmentVariable {
            name: name.to_string(),
        }),
    }
}

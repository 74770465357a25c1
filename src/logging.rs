use tracing_subscriber::EnvFilter;

/// Holds a `tracing` filter directive, e.g. `ECHO_FIXTURE_LOG=debug`.
/// A value that is not a valid filter is reported on stderr and logging
/// stays off.
pub const LOG_VARIABLE: &str = "ECHO_FIXTURE_LOG";

/// Installs a stderr subscriber if [`LOG_VARIABLE`] is set to a valid filter.
/// Otherwise nothing is installed and stderr stays reserved for the fixture's
/// own line.
pub fn init() {
    let directives = match std::env::var(LOG_VARIABLE) {
        Ok(directives) => directives,
        Err(_) => return,
    };
    match filter(&directives) {
        Ok(filter) => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(false)
                .try_init();
        }
        Err(message) => eprintln!("{}", message),
    }
}

fn filter(directives: &str) -> Result<EnvFilter, String> {
    EnvFilter::try_new(directives).map_err(|error| {
        format!(
            "echo-fixture: ignoring {}={:?}: {}",
            LOG_VARIABLE, directives, error
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_filter() {
        assert!(filter("debug").is_ok());
        assert!(filter("echo_fixture=trace,warn").is_ok());
    }

    #[test]
    fn invalid_filter_names_the_variable_and_value() {
        let message = filter("echo_fixture=loud").unwrap_err();
        assert!(
            message.starts_with("echo-fixture: ignoring ECHO_FIXTURE_LOG=\"echo_fixture=loud\": "),
            "{:?}",
            message
        );
    }
}

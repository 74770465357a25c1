/// Environment variable echoed as `user_base`.
pub const USER_BASE_VARIABLE: &str = "PYTHONUSERBASE";

/// Environment variable echoed as `path`.
pub const PATH_VARIABLE: &str = "PATH";

/// Which inputs end up in the echoed record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub user_base_variable: String,
    /// `None` leaves the `path` field out of the record entirely.
    pub path_variable: Option<String>,
}

impl Config {
    /// The variant that echoes `args` and `user_base` only.
    pub fn without_path() -> Self {
        Config {
            path_variable: None,
            ..Config::default()
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            user_base_variable: USER_BASE_VARIABLE.to_string(),
            path_variable: Some(PATH_VARIABLE.to_string()),
        }
    }
}

//! Where the echoed environment variables are looked up.

use std::{
    borrow::Borrow,
    collections::BTreeMap,
    ffi::{OsStr, OsString},
};

pub trait Environment {
    fn var(&self, name: &str) -> Option<OsString>;
}

/// The environment of the running process.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProcessEnvironment;

impl Environment for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name)
    }
}

/// A fixed set of variables, e.g. for driving [`run`](crate::run) without
/// touching the process environment.
impl<K, V> Environment for BTreeMap<K, V>
where
    K: Borrow<str> + Ord,
    V: AsRef<OsStr>,
{
    fn var(&self, name: &str) -> Option<OsString> {
        self.get(name).map(|value| value.as_ref().to_os_string())
    }
}

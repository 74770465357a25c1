//! The output streams the fixture writes to.

use std::io;

/// Where [`run`](crate::run) writes its two lines. Use
/// [`Context::production`] for the process's own `stdout` and `stderr`.
#[derive(Debug)]
pub struct Context<Stdout, Stderr> {
    pub(crate) stdout: Stdout,
    pub(crate) stderr: Stderr,
}

impl Context<io::Stdout, io::Stderr> {
    pub fn production() -> Self {
        Context {
            stdout: io::stdout(),
            stderr: io::stderr(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    impl Context<Vec<u8>, Vec<u8>> {
        pub(crate) fn test() -> Self {
            Context {
                stdout: Vec::new(),
                stderr: Vec::new(),
            }
        }

        pub(crate) fn stdout(&self) -> String {
            String::from_utf8(self.stdout.clone()).unwrap()
        }

        pub(crate) fn stderr(&self) -> String {
            String::from_utf8(self.stderr.clone()).unwrap()
        }
    }
}

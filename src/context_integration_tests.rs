fn main() {
    #[cfg(not(target_os = "windows"))]
    non_windows_tests();
}

#[cfg(not(target_os = "windows"))]
fn non_windows_tests() {
    use echo_fixture::{config::Config, context::Context};
    use gag::BufferRedirect;
    use std::{
        collections::BTreeMap,
        ffi::OsString,
        io::{self, Read},
    };

    fn with_gag<F, T>(mk_buf: fn() -> io::Result<BufferRedirect>, f: F) -> (String, T)
    where
        F: FnOnce() -> T,
    {
        let mut buf = mk_buf().unwrap();
        let result = f();
        let mut output = String::new();
        buf.read_to_string(&mut output).unwrap();
        (output, result)
    }

    let environment: BTreeMap<&str, &str> = vec![("PYTHONUSERBASE", "/home/x")]
        .into_iter()
        .collect();
    let arguments: Vec<OsString> = vec!["3".into(), "foo".into()];
    let run = || {
        echo_fixture::run(
            &mut Context::production(),
            &Config::without_path(),
            &arguments,
            &environment,
        )
    };

    {
        let (stdout, exit_code) = with_gag(BufferRedirect::stdout, run);
        assert_eq!(stdout, "{\"args\": [\"foo\"], \"user_base\": \"/home/x\"}\n");
        assert_eq!(exit_code, Ok(3));
    }

    {
        let (stderr, exit_code) = with_gag(BufferRedirect::stderr, run);
        assert_eq!(stderr, "hello from stderr\n");
        assert_eq!(exit_code, Ok(3));
    }
    eprintln!("context integration tests: SUCCESS")
}

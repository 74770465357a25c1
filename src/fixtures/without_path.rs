use echo_fixture::{config::Config, Error};

fn main() -> Result<(), Error> {
    let exit_code = echo_fixture::run_process(&Config::without_path())?;
    std::process::exit(exit_code)
}

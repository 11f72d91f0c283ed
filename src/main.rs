use std::process::ExitCode;

fn main() -> ExitCode {
    match keynote_lpm::app::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("lpm: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

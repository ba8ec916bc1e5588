mod platform;

use finder_logging::finder_error;

fn main() {
    if let Err(err) = platform::run_app() {
        finder_error!("Session aborted: {:#}", err);
        eprintln!("Unexpected error: {err:#}");
    }
}

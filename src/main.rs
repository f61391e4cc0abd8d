//! rTasklog main entrypoint.

use rtasklog::run;
use rtasklog::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

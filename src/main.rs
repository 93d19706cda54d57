//! rmigrate main entrypoint.

use rmigrate::run;
use rmigrate::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

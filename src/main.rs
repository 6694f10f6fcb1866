//! hourstats main entrypoint.

use hourstats::run;
use hourstats::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

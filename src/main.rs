//! messroll main entrypoint.

use messroll::run;
use messroll::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}

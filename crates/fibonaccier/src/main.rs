//! Fibonaccier: races two delayed recursive Fibonacci computations.

use fibonaccier_cli::ui::print_error;
use fibonaccier_lib::{app, errors};

fn main() {
    let code = match app::run(std::env::args_os(), &mut std::io::stdin().lock()) {
        Ok(code) => code,
        Err(err) => {
            print_error(&format!("{err:#}"));
            errors::exit_code(&err)
        }
    };
    std::process::exit(code);
}

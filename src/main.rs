use std::process;

fn main() {
    match boxkite::cli::run() {
        Ok(outcome) => {
            if !outcome.success {
                process::exit(1);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(2);
        }
    }
}

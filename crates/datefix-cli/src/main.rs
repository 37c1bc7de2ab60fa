use std::process::ExitCode;

use datefix_core::errors::ErrorCode;
use datefix_core::tracing::init_tracing;

fn main() -> ExitCode {
    init_tracing();

    let root = match std::env::current_dir() {
        Ok(dir) => dir,
        Err(e) => {
            tracing::error!("cannot resolve working directory: {e}");
            return ExitCode::FAILURE;
        }
    };

    match datefix_cli::run(&root) {
        Ok(reports) => {
            match serde_json::to_string_pretty(&reports) {
                Ok(summary) => println!("{summary}"),
                Err(e) => tracing::warn!("cannot render summary: {e}"),
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e.display_with_code());
            ExitCode::FAILURE
        }
    }
}

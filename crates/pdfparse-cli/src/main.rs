use std::panic;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

/// Extract and display text content from PDF or text files
#[derive(Parser, Debug)]
#[command(
    name = "PDF Parser",
    bin_name = "pdfparse",
    version = "1.0",
    about,
    long_about = None,
    after_help = "Examples:\n  pdfparse document.pdf\n  pdfparse notes.txt"
)]
struct Cli {
    /// Path to the file to process (PDF or text file)
    file_path: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    // Convert Ctrl-C into a clean failure exit instead of the default abort.
    let _ = ctrlc::set_handler(|| {
        eprintln!("\nOperation cancelled by user.");
        std::process::exit(1);
    });

    // PDF parsing can panic on pathological input; contain it at the top
    // level and report a single-line message, never a stack trace.
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(|| pdfparse_ingest::process_file(&cli.file_path));

    match outcome {
        Ok(Ok(content)) => {
            if !content.is_empty() {
                println!("{content}");
            }
            ExitCode::SUCCESS
        }
        Ok(Err(err)) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
        Err(payload) => {
            eprintln!("Unexpected error: {}", panic_message(payload.as_ref()));
            ExitCode::FAILURE
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

fn init_tracing() {
    // Default to `warn` so per-page extraction warnings are visible
    // without configuration; RUST_LOG still overrides.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

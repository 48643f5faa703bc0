/// Unwrap Lines — removes hard line-wrapping from a corpus text.
///
/// Usage: unwrap_lines <infile> <outfile> [--width <n>]
use std::process;

use animarkov::corpus::preprocess::{unwrap_paragraphs, DEFAULT_WIDTH};

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut positional = Vec::new();
    let mut width = DEFAULT_WIDTH;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--width" if i + 1 < args.len() => {
                i += 1;
                width = args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --width takes a column number");
                    process::exit(1);
                });
            }
            "--help" | "-h" => {
                println!("Usage: unwrap_lines <infile> <outfile> [--width <n>]");
                process::exit(0);
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    if positional.len() != 2 {
        eprintln!("Usage: unwrap_lines <infile> <outfile> [--width <n>]");
        process::exit(1);
    }

    let text = std::fs::read_to_string(&positional[0]).unwrap_or_else(|e| {
        eprintln!("Error reading '{}': {}", positional[0], e);
        process::exit(1);
    });

    let unwrapped = unwrap_paragraphs(&text, width);

    std::fs::write(&positional[1], unwrapped).unwrap_or_else(|e| {
        eprintln!("Error writing '{}': {}", positional[1], e);
        process::exit(1);
    });
}

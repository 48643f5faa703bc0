/// Story Trainer — builds a story model from a plain-text corpus.
///
/// Usage: story_trainer --input <story.txt> --output <model.json> [--unwrap <width>]
use std::process;

use animarkov::core::markov::save_model;
use animarkov::corpus::preprocess::unwrap_paragraphs;
use animarkov::corpus::trainer::StoryTrainer;

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut input = None;
    let mut output = None;
    let mut unwrap_width: Option<usize> = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--input" if i + 1 < args.len() => {
                i += 1;
                input = Some(args[i].clone());
            }
            "--output" if i + 1 < args.len() => {
                i += 1;
                output = Some(args[i].clone());
            }
            "--unwrap" if i + 1 < args.len() => {
                i += 1;
                unwrap_width = Some(args[i].parse().unwrap_or_else(|_| {
                    eprintln!("Error: --unwrap takes a column width");
                    process::exit(1);
                }));
            }
            "--help" | "-h" => {
                print_usage();
                process::exit(0);
            }
            other => {
                eprintln!("Unknown argument: {}", other);
                print_usage();
                process::exit(1);
            }
        }
        i += 1;
    }

    let input_path = input.unwrap_or_else(|| {
        eprintln!("Error: --input is required");
        print_usage();
        process::exit(1);
    });

    let output_path = output.unwrap_or_else(|| {
        eprintln!("Error: --output is required");
        print_usage();
        process::exit(1);
    });

    let mut text = std::fs::read_to_string(&input_path).unwrap_or_else(|e| {
        eprintln!("Error reading input file '{}': {}", input_path, e);
        process::exit(1);
    });

    if let Some(width) = unwrap_width {
        println!("Unwrapping lines at column {}...", width);
        text = unwrap_paragraphs(&text, width);
    }

    println!("Training model from '{}'...", input_path);
    let model = StoryTrainer::train(&text);

    println!(
        "Model trained: {} states, {} followups",
        model.state_count(),
        model.followup_count()
    );

    save_model(&model, std::path::Path::new(&output_path)).unwrap_or_else(|e| {
        eprintln!("Error saving model to '{}': {}", output_path, e);
        process::exit(1);
    });

    println!("Model saved to '{}'", output_path);
}

fn print_usage() {
    println!("Usage: story_trainer --input <story.txt> --output <model.json> [--unwrap <width>]");
    println!();
    println!("  --input <path>    Plain-text corpus to train from");
    println!("  --output <path>   Where to write the model JSON");
    println!("  --unwrap <width>  Rejoin lines hard-wrapped at this column first");
}

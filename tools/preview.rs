/// Preview — tells a generated story in the terminal.
///
/// Loads a trained model and prints the story token by token with the same
/// tick pacing the animated page uses. Each branch point also reports how
/// many alternatives were on the table.
///
/// Usage: preview --model <model.json> [--seed <n>] [--fast] [--options]
use std::io::Write;
use std::process;

use rand::rngs::StdRng;
use rand::SeedableRng;

use animarkov::core::driver::{StopToken, StoryDriver, StoryObserver, TickTiming};
use animarkov::core::markov::{load_model, Decision, NEWLINE_TOKEN};
use animarkov::corpus::tokenizer::is_punctuation_token;

struct ConsoleTeller {
    show_options: bool,
}

impl StoryObserver for ConsoleTeller {
    fn on_decision(&mut self, decision: &Decision<'_>) {
        for token in decision.taken {
            if token == NEWLINE_TOKEN {
                println!();
                continue;
            }
            if !is_punctuation_token(token) {
                print!(" ");
            }
            print!("{}", token);
        }
        if self.show_options && decision.options.len() > 1 {
            print!(" [{}]", decision.options.len());
        }
        std::io::stdout().flush().ok();
    }

    fn on_story_end(&mut self) {
        println!();
        println!("~ fin ~");
    }
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();

    let mut model_path = None;
    let mut seed: Option<u64> = None;
    let mut fast = false;
    let mut show_options = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--model" if i + 1 < args.len() => {
                i += 1;
                model_path = Some(args[i].clone());
            }
            "--seed" if i + 1 < args.len() => {
                i += 1;
                seed = args[i].parse().ok();
            }
            "--fast" => {
                fast = true;
            }
            "--options" => {
                show_options = true;
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

    let model_path = model_path.unwrap_or_else(|| {
        eprintln!("Error: --model is required");
        print_usage();
        process::exit(1);
    });

    let model = load_model(std::path::Path::new(&model_path)).unwrap_or_else(|e| {
        eprintln!("Error loading model '{}': {}", model_path, e);
        process::exit(1);
    });

    println!(
        "Loaded model: {} states, {} followups",
        model.state_count(),
        model.followup_count()
    );

    let timing = if fast {
        TickTiming::immediate()
    } else {
        TickTiming::default()
    };
    let mut driver = StoryDriver::with_timing(model, timing);

    let mut rng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    };

    let mut teller = ConsoleTeller { show_options };
    if let Err(e) = driver.run(&mut rng, &mut teller, &StopToken::new()) {
        eprintln!("Story failed: {}", e);
        process::exit(1);
    }
}

fn print_usage() {
    println!("Usage: preview --model <model.json> [--seed <n>] [--fast] [--options]");
    println!();
    println!("  --model <path>  Trained model JSON (see story_trainer)");
    println!("  --seed <n>      Seed the RNG for a reproducible story");
    println!("  --fast          Skip the tick delays");
    println!("  --options       Show the alternative count at branch points");
}

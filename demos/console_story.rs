/// Console Story demo — trains a model from a tiny corpus and tells a story
/// in the terminal, printing each decision's alternatives as it goes.
///
/// Run with: cargo run --example console_story
use std::io::Write;

use rand::rngs::StdRng;
use rand::SeedableRng;

use animarkov::core::driver::{StopToken, StoryDriver, StoryObserver, TickTiming, Transcript};
use animarkov::core::markov::{Decision, NEWLINE_TOKEN};
use animarkov::corpus::tokenizer::is_punctuation_token;
use animarkov::corpus::trainer::StoryTrainer;

const CORPUS: &str = "\
The fox crossed the frozen river at dawn. The crows watched the fox from the \
pines, and said nothing.

The fox crossed the meadow at dusk. The owl watched the fox from the barn, \
and said nothing.

The fox crossed the orchard at midnight, and the moon watched the fox, and \
said nothing at all.
";

struct AnimatedTeller {
    transcript: Transcript,
}

impl StoryObserver for AnimatedTeller {
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
        if decision.options.len() > 1 {
            // The fanning animation would show these; here we just count.
            print!(" ({} ways)", decision.options.len());
        }
        std::io::stdout().flush().ok();
        self.transcript.on_decision(decision);
    }

    fn on_story_end(&mut self) {
        println!();
    }
}

fn main() {
    env_logger::init();

    let model = StoryTrainer::train(CORPUS);
    println!(
        "Trained {} states from {} bytes of corpus.\n",
        model.state_count(),
        CORPUS.len()
    );

    let mut driver = StoryDriver::with_timing(
        model,
        TickTiming {
            forced: std::time::Duration::from_millis(80),
            branch: std::time::Duration::from_millis(200),
        },
    );

    let mut teller = AnimatedTeller {
        transcript: Transcript::new(),
    };
    let mut rng = StdRng::from_entropy();

    if let Err(e) = driver.run(&mut rng, &mut teller, &StopToken::new()) {
        eprintln!("story failed: {}", e);
        std::process::exit(1);
    }

    println!(
        "\nStory over after {} decisions.",
        teller.transcript.decision_count()
    );
}

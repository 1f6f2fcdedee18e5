use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_trigram_core::{ModelError, RngSource, TrigramModel, DEFAULT_MAX_LENGTH};

const SAMPLE: &str = "The cat sat on the mat. The cat ran after the dog. \
	The dog sat on the rug, and the cat sat on the dog.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=debug shows the training summary
    env_logger::init();

    // Train on the file given as first argument, or on a built-in passage
    let text = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(path)?,
        None => SAMPLE.to_owned(),
    };

    let mut model = TrigramModel::new();

    // An untrained model cannot generate anything
    match model.generate(DEFAULT_MAX_LENGTH) {
        Err(ModelError::InvalidState) => println!("Untrained model refused to generate"),
        _ => println!("Should not happen"),
    }

    // Training is additive: calling fit again would add to these counts
    model.fit(&text);
    println!(
        "Trained on {} tokens: {} contexts, {} vocabulary entries",
        model.tokens().len(),
        model.context_count(),
        model.vocabulary().len()
    );

    // Generate 10 texts using the thread RNG
    for i in 0..10 {
        println!("Generated text {}: {}", i + 1, model.generate(DEFAULT_MAX_LENGTH)?);
    }

    // A seeded source always produces the same text
    let mut source = RngSource::new(StdRng::seed_from_u64(42));
    println!("Seeded text: {}", model.generate_with(20, &mut source)?);

    Ok(())
}

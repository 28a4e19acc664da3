use rs_markov_core::model::chain::Chain;
use rs_markov_core::model::token::Token;

const CORPUS: &[&str] = &[
    "the quick brown fox jumps over the lazy dog",
    "the lazy dog sleeps in the sun",
    "a quick cat jumps over the fence",
    "the brown cat chases the quick fox",
    "a lazy fox sleeps all day",
];

fn render(tokens: &[Token<&str>]) -> String {
    tokens
        .iter()
        .filter_map(|token| token.item())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Tokenize the embedded corpus into word sequences
    let sequences: Vec<Vec<&str>> = CORPUS
        .iter()
        .map(|line| line.split_whitespace().collect())
        .collect();

    // Train an order-2 chain with plain frequency counting
    let chain = Chain::build(&sequences, 2)?;
    println!("Trained {} states over {} sentences", chain.len(), CORPUS.len());

    // Randomness is injected; any rand generator works
    let mut rng = rand::rng();

    // Fixed-order walks follow the corpus closely
    for i in 0..5 {
        println!("Plain walk {}: {}", i + 1, render(&chain.walk(&mut rng)?));
    }

    // Generalized walks relax the state through the suffix search when a
    // window has only one continuation, trading fidelity for variety
    for i in 0..5 {
        println!("Generalized walk {}: {}", i + 1, render(&chain.walk2(&mut rng)?));
    }

    // Seed a walk from a chosen beginning; the seed state is part of the
    // output
    if let Some(seed) = chain.state_with_beginning(&["the"], false, &mut rng)? {
        println!("Seeded walk: {}", render(&chain.walk_from(&seed, &mut rng)?));
    }

    // A seed longer than the chain order is rejected
    match chain.state_with_beginning(&["the", "quick", "brown"], false, &mut rng) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Seed rejected: {}", e),
    }

    // Chains combine by state-map union; later chains win on conflicts
    let other = Chain::build([["night", "falls", "fast"]], 2)?;
    let combined = chain.combine(std::slice::from_ref(&other));
    println!("Combined walk: {}", render(&combined.walk(&mut rng)?));

    Ok(())
}

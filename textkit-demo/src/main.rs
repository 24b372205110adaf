use std::env;

use textkit_core::analysis::{frequency, keywords, normalize, sentiment, statistics, tokenize, tokenizer};
use textkit_core::analysis::{NormalizationOptions, TokenMethod};
use textkit_core::io;

const SAMPLE: &str = "Rust is a wonderful language. I love how the compiler catches bugs early! \
                      Some people find the borrow checker annoying at first, but it is great once it clicks. \
                      Is it fast? Yes: Rust is fast, safe and fun.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Analyze the file given as first argument, or a built-in sample
    let text = match env::args().nth(1) {
        Some(path) => {
            println!("Analyzing '{}'", io::get_filename(&path)?);
            io::read_text_file(&path)?
        }
        None => SAMPLE.to_owned(),
    };

    // Cleaning with the default flags, then with every flag on
    println!("Cleaned (default): {}", io::excerpt(&normalize(&text, &NormalizationOptions::default()), 120));
    println!("Cleaned (all):     {}", io::excerpt(&normalize(&text, &NormalizationOptions::all()), 120));

    // Tokenization; unknown methods are rejected
    let sentences = tokenize(&text, TokenMethod::Sentence, false);
    println!("{} sentences, first: {:?}", sentences.len(), sentences.tokens().first());
    match "paragraph".parse::<TokenMethod>() {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Expected error: {e}"),
    }

    let stats = statistics::compute(&text);
    println!(
        "{} characters ({} without spaces), {} words ({} unique), {} sentences, {:.2} letters per word",
        stats.character_count,
        stats.character_count_no_spaces,
        stats.word_count,
        stats.unique_words,
        stats.sentence_count,
        stats.average_word_length
    );

    // Frequencies are computed over lowercased words
    let words = tokenizer::words(&text, true);
    let table = frequency::word_frequencies(&words, Some(5))?;
    println!("Top words ({} total, {} unique):", table.total(), table.unique());
    for entry in table.entries() {
        println!("  {:>3}  {}", entry.count, entry.text());
    }

    let bigrams = frequency::ngram_frequencies(&words, 2, Some(3))?;
    println!("Top bigrams ({} total, {} unique):", bigrams.total(), bigrams.unique());
    for entry in bigrams.entries() {
        println!("  {:>3}  {}", entry.count, entry.text());
    }

    // A zero-width n-gram is rejected
    if let Err(e) = frequency::ngram_frequencies(&words, 0, None) {
        println!("Expected error: {e}");
    }

    let mood = sentiment::analyze(&text);
    println!(
        "Sentiment: {} (score {:.3}, {} positive / {} negative words)",
        mood.label, mood.score, mood.positive_count, mood.negative_count
    );

    let report = keywords::extract_keywords(&text, keywords::DEFAULT_KEYWORD_COUNT)?;
    println!("Keywords: {}", report.keywords.join(", "));

    Ok(())
}

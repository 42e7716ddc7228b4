use rs_complete_core::{CompletionConfig, EditSession, KeyEvent, LanguageModel};

const CORPUS: &str = "the cat sat on the mat and the cats sat on the catalog \
    while the dog dug in the garden and the doge watched the dogs";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Default configuration: bigram model, 10 suggestions
    let mut config = CompletionConfig::default();

    // Orders below 2 are rejected and the previous value is kept
    match config.set_order(1) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Order 1 is invalid: {e}"),
    }
    config.set_order(3)?;
    config.top_k = 5;

    // Train once; the model is read-only from now on
    let model = LanguageModel::train(CORPUS, config.order)?;
    println!("Vocabulary: {} words, order {}", model.vocabulary_len(), model.order());

    // Direct queries
    for prefix in ["ca", "do", "th", "zebra"] {
        println!("Best match for '{}': {}", prefix, model.best_match(prefix));
        for (word, probability) in model.ranked_with_probability(prefix, config.top_k) {
            println!("    {word:<10} {probability:.6}");
        }
    }

    // Drive a session like the terminal front end would
    let mut session = EditSession::with_config(&model, &config);
    let script = [
        KeyEvent::Char('t'),
        KeyEvent::Char('h'),
        KeyEvent::AcceptSuggestion,
        KeyEvent::Char(' '),
        KeyEvent::Char('c'),
        KeyEvent::Char('a'),
        KeyEvent::CycleSuggestion,
        KeyEvent::AcceptSuggestion,
        KeyEvent::Quit,
        // Ignored: the session is terminated
        KeyEvent::Char('x'),
    ];

    for event in script {
        let state = session.dispatch(event);
        println!("{:<18} {}", format!("{event:?}"), serde_json::to_string(&state)?);
    }

    Ok(())
}

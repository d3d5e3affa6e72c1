//! End-to-end LDA walkthrough
//!
//! Loads a corpus (a JSON dataset path may be passed as the first
//! argument, otherwise a built-in sample is used), tokenizes it, builds a
//! document-term matrix, fits LDA, and prints topics, document
//! assignments, and training perplexity.

use anyhow::Result;

use topic_analytics::models::lda::{Lda, LdaConfig};
use topic_analytics::preprocessing::tokenizer::{NGramGenerator, Tokenizer};
use topic_analytics::preprocessing::vectorizer::CountVectorizer;
use topic_analytics::utils::io::DocumentDataset;

fn main() -> Result<()> {
    env_logger::init();

    let documents = load_corpus()?;
    println!("Loaded {} documents", documents.len());

    // Tokenize and add bigrams so frequent collocations become terms.
    let tokenizer = Tokenizer::for_tweets().min_length(3);
    let mut tokenized = tokenizer.tokenize_documents(&documents);
    NGramGenerator::new(2).augment_documents(&mut tokenized);

    let mut vectorizer = CountVectorizer::new().min_df(1).max_df_ratio(0.9);
    let mut dtm = vectorizer.fit_transform(&tokenized);
    println!(
        "Document-term matrix: {} documents x {} terms",
        dtm.n_documents(),
        dtm.n_terms()
    );

    // The sampler rejects zero-token rows, so drop them up front.
    let empty = dtm.empty_documents();
    if !empty.is_empty() {
        println!("Dropping {} empty documents: {:?}", empty.len(), empty);
        dtm = dtm.without_documents(&empty);
    }

    let n_topics = 3;
    let config = LdaConfig::new(n_topics)
        .alpha(0.1)
        .beta(0.01)
        .n_iterations(400)
        .burn_in(100)
        .seed(42);

    println!("\nFitting LDA with K={n_topics}...");
    let mut lda = Lda::new(config)?;
    lda.fit(&dtm.matrix)?;

    println!("\nTopics:");
    for (idx, topic) in lda.top_terms(&dtm.terms, 8)?.iter().enumerate() {
        let words: Vec<String> = topic
            .iter()
            .map(|(term, p)| format!("{term} ({p:.3})"))
            .collect();
        println!("  Topic {idx}: {}", words.join(", "));
    }

    let theta = lda.theta()?;
    let dominant = lda.dominant_topics()?;
    println!("\nDocument assignments:");
    for (doc_idx, &topic) in dominant.iter().enumerate().take(10) {
        println!(
            "  doc {:2} -> topic {} ({:.1}%)",
            doc_idx,
            topic,
            theta[[doc_idx, topic]] * 100.0
        );
    }

    let perplexity = lda.perplexity(&dtm.matrix, &theta)?;
    println!("\nTraining perplexity: {perplexity:.2}");

    Ok(())
}

fn load_corpus() -> Result<Vec<String>> {
    if let Some(path) = std::env::args().nth(1) {
        let dataset = DocumentDataset::load_json(&path)?;
        return Ok(dataset.texts());
    }

    let sample = [
        "Proud to vote yes on the clean water act amendment protecting our rivers and lakes",
        "The budget bill passed committee today with bipartisan support for infrastructure",
        "Joined the hearing on water quality standards for rural communities this morning",
        "Our amendment cuts wasteful spending from the budget while funding road repair",
        "Farmers deserve clean water and reliable irrigation, glad to support this bill",
        "Voted against the budget resolution, it shortchanges schools in our district",
        "New trail opens along the river thanks to the parks grant we secured last year",
        "Town hall tonight on the transportation budget and the bridge repair timeline",
        "The committee advanced my bill expanding broadband grants for rural schools",
        "Visited the water treatment plant to see the upgrades funded by the act",
        "Schools in our district win big in the education budget passed this week",
        "Grateful to the park volunteers keeping the river trail clean this summer",
    ];
    Ok(sample.iter().map(|s| s.to_string()).collect())
}

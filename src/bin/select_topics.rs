//! Cross-validated topic-count selection
//!
//! Builds a document-term matrix from a corpus (JSON dataset path as the
//! first argument, or a built-in sample), evaluates candidate topic counts
//! with k-fold cross-validation, and reports held-out perplexity per fold
//! plus per-K summaries.

use anyhow::Result;

use topic_analytics::preprocessing::tokenizer::Tokenizer;
use topic_analytics::preprocessing::vectorizer::CountVectorizer;
use topic_analytics::selection::{CrossValidator, CvConfig};
use topic_analytics::utils::evaluation::{best_k, summarize};
use topic_analytics::utils::io::DocumentDataset;

fn main() -> Result<()> {
    env_logger::init();

    let documents = load_corpus()?;
    let tokenizer = Tokenizer::for_tweets().min_length(3);
    let tokenized = tokenizer.tokenize_documents(&documents);

    let mut vectorizer = CountVectorizer::new().min_df(1).max_df_ratio(0.95);
    let mut dtm = vectorizer.fit_transform(&tokenized);

    let empty = dtm.empty_documents();
    if !empty.is_empty() {
        println!("Dropping {} empty documents", empty.len());
        dtm = dtm.without_documents(&empty);
    }
    println!(
        "Corpus: {} documents, {} terms",
        dtm.n_documents(),
        dtm.n_terms()
    );

    let config = CvConfig::default()
        .n_folds(4)
        .n_iterations(200)
        .burn_in(50)
        .fold_in_iterations(20)
        .seed(42);
    let harness = CrossValidator::new(config);

    let candidates = [2, 3, 4, 5, 6];
    println!("\n{:>3} {:>5} {:>12} {:>14}", "K", "fold", "perplexity", "logLikelihood");

    let mut all_scores = Vec::new();
    for &k in &candidates {
        let scores = harness.evaluate_k(&dtm.matrix, k)?;
        for score in &scores {
            println!(
                "{:>3} {:>5} {:>12.2} {:>14.2}",
                score.k, score.fold, score.perplexity, score.log_likelihood
            );
        }
        all_scores.extend(scores);
    }

    println!("\nPer-K summary:");
    let summaries = summarize(&all_scores);
    for summary in &summaries {
        println!("  {}", summary.render());
    }

    if let Some(k) = best_k(&summaries) {
        println!("\nBest-supported topic count: K={k}");
    }

    Ok(())
}

fn load_corpus() -> Result<Vec<String>> {
    if let Some(path) = std::env::args().nth(1) {
        let dataset = DocumentDataset::load_json(&path)?;
        return Ok(dataset.texts());
    }

    // Two clear themes (water/environment and budget/education) plus
    // mixed posts, enough rows for four folds.
    let sample = [
        "Clean water act amendment heads to the floor for a vote this week",
        "The river trail cleanup drew hundreds of volunteers on saturday",
        "Hearing testimony on groundwater contamination near the old mill",
        "Budget negotiations continue over school funding formulas",
        "Our schools need the education budget passed without further delay",
        "Property tax relief included in the final budget agreement",
        "Wetland restoration grant announced for the county park",
        "Teachers rallied at the capitol for classroom funding today",
        "Stormwater infrastructure upgrades funded in the public works bill",
        "The appropriations committee approved the education amendment",
        "Lake monitoring stations report improved water quality this season",
        "District budget town hall scheduled for thursday evening",
        "Fish passage project restores the creek below the dam",
        "Bipartisan support grows for the school lunch funding bill",
        "Septic upgrade rebates extended for lakeshore homeowners",
        "The budget office released revenue forecasts ahead of the vote",
    ];
    Ok(sample.iter().map(|s| s.to_string()).collect())
}

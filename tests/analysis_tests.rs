//! Analysis pipeline tests
//!
//! End-to-end checks of the public text-analysis API.

use newslens::analysis::{
    AnalysisPipeline, EntityTagger, KeywordExtractor, Keywords, LengthSummarizer, LsaSummarizer,
    Sentiment, SentimentClassifier, SentimentLexicon, StopwordFilter, Summarizer,
    UNKNOWN_COUNTRY, Vocabulary,
};
use newslens::config::AnalysisConfig;

const LONG_ARTICLE: &str = "Parlamenti miratoi buxhetin e ri për vitin e ardhshëm. \
    Deputetët debatuan gjatë për shpenzimet në arsim dhe shëndetësi. \
    Ministri i financave paraqiti parashikimet për rritjen ekonomike. \
    Opozita votoi kundër duke kritikuar mungesën e investimeve kapitale. \
    Sindikatat paralajmëruan protesta nëse pagat nuk rriten. \
    Buxheti hyn në fuqi në janar pas nënshkrimit nga presidenti.";

#[test]
fn test_stopword_filter_is_idempotent() {
    let vocabulary = Vocabulary::default();
    for filter in [&vocabulary.summary_stopwords, &vocabulary.analysis_stopwords] {
        let once = filter.filter_text(LONG_ARTICLE);
        assert_eq!(filter.filter_text(&once), once);
    }
}

#[test]
fn test_lsa_summary_is_bounded() {
    let lsa = LsaSummarizer::default();
    let summary = lsa.summarize(LONG_ARTICLE);

    let picked = lsa.best_sentences(LONG_ARTICLE);
    assert_eq!(picked.len(), 3);
    for sentence in &picked {
        assert!(LONG_ARTICLE.contains(sentence.text));
        assert!(summary.contains(sentence.text));
    }
}

#[test]
fn test_lsa_two_sentences_keeps_both_in_rank_order() {
    // 第二句词更多，排名更高，输出不回到原文顺序
    let text = "Moti sot është i kthjellët. Nesër pritet shi i dendur në veri të vendit.";
    let lsa = LsaSummarizer::default();

    let picked: Vec<&str> = lsa.best_sentences(text).iter().map(|s| s.text).collect();
    assert_eq!(
        picked,
        vec![
            "Nesër pritet shi i dendur në veri të vendit.",
            "Moti sot është i kthjellët."
        ]
    );
    assert_eq!(
        lsa.summarize(text),
        "Nesër pritet shi i dendur në veri të vendit. Moti sot është i kthjellët."
    );
}

#[test]
fn test_length_summarizer_keeps_longest_in_selection_order() {
    let summary = LengthSummarizer::default()
        .summarize("A short one. This is longer sentence here. Mid length sentence. Tiny.");
    assert_eq!(
        summary,
        "This is longer sentence here. A short one. Mid length sentence."
    );
    assert_eq!(summary.matches(". ").count(), 2);
    assert!(summary.ends_with("sentence.") && !summary.ends_with(".."));
}

#[test]
fn test_length_summarizer_identity_for_short_texts() {
    let text = "Vetëm një fjali";
    assert_eq!(LengthSummarizer::default().summarize(text), text);

    let text = "Një. Dy. Tre.";
    assert_eq!(LengthSummarizer::default().summarize(text), text);
}

#[test]
fn test_keywords_insufficient_data() {
    let extractor = KeywordExtractor::new(StopwordFilter::empty(), 10);
    let keywords = extractor.extract("Lajm");
    assert_eq!(keywords, Keywords::InsufficientData);
    assert_eq!(
        keywords.to_string(),
        "Insufficient data for keyword extraction."
    );
}

#[test]
fn test_keywords_are_sorted_and_bounded() {
    let stopwords = Vocabulary::default().analysis_stopwords;
    let extractor = KeywordExtractor::new(stopwords.clone(), 5);
    let keywords = extractor.extract(LONG_ARTICLE);
    let terms = keywords.terms();
    assert_eq!(terms.len(), 5);

    let mut sorted = terms.to_vec();
    sorted.sort();
    assert_eq!(terms, sorted.as_slice());
    assert!(terms.iter().all(|t| !stopwords.is_stopword(t)));
    assert!(terms.iter().all(|t| t.to_lowercase() == *t));
}

#[test]
fn test_sentiment_labels() {
    let classifier = SentimentClassifier::new(SentimentLexicon::default());
    assert_eq!(classifier.classify("Sukses dhe gëzim"), Sentiment::Positive);
    assert_eq!(classifier.classify("Luftë dhe vdekje"), Sentiment::Negative);
    assert_eq!(classifier.classify("Tavolina është në dhomë"), Sentiment::Neutral);
    assert_eq!(classifier.classify(""), Sentiment::Neutral);
}

#[test]
fn test_entity_tagging() {
    let tagger = EntityTagger::new(["Shqipëri", "Kosovë"]);
    assert_eq!(tagger.tag("SHQIPËRI fitoi"), "Shqipëri");
    assert_eq!(tagger.tag("Asnjë vend"), UNKNOWN_COUNTRY);
}

#[test]
fn test_pipeline_from_config_overrides() {
    let config = AnalysisConfig {
        keyword_count: 3,
        countries: Some(vec!["Parlament".to_string()]),
        ..AnalysisConfig::default()
    };
    let pipeline = AnalysisPipeline::from_config(&config);
    let analysis = pipeline.analyze(LONG_ARTICLE);

    assert_eq!(analysis.country, "Parlament");
    assert_eq!(analysis.keywords.terms().len(), 3);
    assert_eq!(analysis.summary.matches(". ").count(), 2);
    assert_eq!(analysis.text, LONG_ARTICLE);
}

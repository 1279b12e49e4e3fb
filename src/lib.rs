use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

pub mod config;
pub mod error;
pub mod lesson;
pub mod quiz;
pub mod session;

pub use config::LessonConfig;
pub use error::{Error, Result};
pub use quiz::{evaluate_quiz, Quiz, QuizOutcome};
pub use session::{Event, Session};

// ---------------------------------------------------------------------------
// Data structures
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// Classify a signed value, treating anything within `dead_zone` of zero as neutral.
    pub fn from_value(value: f64, dead_zone: f64) -> Self {
        if value > dead_zone {
            Sentiment::Positive
        } else if value < -dead_zone {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Sentiment::Positive => "\u{1F60A}",
            Sentiment::Negative => "\u{1F622}",
            Sentiment::Neutral => "\u{1F610}",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which way of reading feelings is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Approach {
    /// Count words from the happy and sad word lists.
    #[default]
    #[serde(rename = "keywords")]
    Keyword,
    /// Average the weights learned from the example sentences.
    #[serde(rename = "mini-model")]
    Weighted,
}

impl Approach {
    pub fn as_str(self) -> &'static str {
        match self {
            Approach::Keyword => "keywords",
            Approach::Weighted => "mini-model",
        }
    }
}

impl fmt::Display for Approach {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Approach {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "keywords" | "keyword" | "word-list" => Ok(Approach::Keyword),
            "mini-model" | "mini" | "weighted" | "weights" => Ok(Approach::Weighted),
            other => Err(Error::UnknownApproach(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub word: String,
    pub weight: f64,
}

/// Words that explain why a result came out the way it did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    None,
    Keywords {
        matched_positive: Vec<String>,
        matched_negative: Vec<String>,
    },
    Weights {
        contributing: Vec<Contribution>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    pub approach: String,
    pub sentiment: Sentiment,
    pub score: f64,
    pub confidence: u8,
    pub evidence: Evidence,
}

impl AnalysisResult {
    /// The fixed result shown when there is nothing to read yet.
    pub fn no_input() -> Self {
        AnalysisResult {
            approach: HP.neutral_approach.to_string(),
            sentiment: Sentiment::Neutral,
            score: 0.0,
            confidence: 0,
            evidence: Evidence::None,
        }
    }
}

/// The label of a training sentence: happy (+1) or sad (-1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "i64")]
pub enum Label {
    Positive,
    Negative,
}

impl Label {
    pub fn value(self) -> i32 {
        match self {
            Label::Positive => 1,
            Label::Negative => -1,
        }
    }
}

impl TryFrom<i64> for Label {
    type Error = String;

    fn try_from(value: i64) -> std::result::Result<Self, Self::Error> {
        match value {
            1 => Ok(Label::Positive),
            -1 => Ok(Label::Negative),
            other => Err(format!("label must be 1 or -1, got {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TrainingExample {
    pub text: String,
    pub label: Label,
}

impl TrainingExample {
    pub fn new(text: impl Into<String>, label: Label) -> Self {
        TrainingExample {
            text: text.into(),
            label,
        }
    }
}

// ---------------------------------------------------------------------------
// Hyperparameters
// ---------------------------------------------------------------------------

struct Hyperparameters {
    keyword_tokens_per_match: f64,
    weighted_dead_zone: f64,
    score_decimals: i32,
    confidence_scale: f64,
    neutral_approach: &'static str,
    keyword_approach: &'static str,
    weighted_approach: &'static str,
}

// The keyword confidence divisor (tokens / 3) is a length heuristic, not a
// calibrated probability.
static HP: Hyperparameters = Hyperparameters {
    keyword_tokens_per_match: 3.0,
    weighted_dead_zone: 0.15,
    score_decimals: 2,
    confidence_scale: 100.0,
    neutral_approach: "none",
    keyword_approach: "Keyword Match",
    weighted_approach: "Mini Model (word-weights)",
};

// ---------------------------------------------------------------------------
// Compiled patterns and built-in data
// ---------------------------------------------------------------------------

static NON_TOKEN_CHAR_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-z0-9\s]").unwrap());

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "awesome", "happy", "love", "fun", "cool", "nice", "enjoy", "amazing",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "sad", "angry", "hate", "boring", "terrible", "upset", "worst", "scary", "no",
];

const TRAINING_SENTENCES: &[(&str, Label)] = &[
    ("I love this game, it's so fun and awesome", Label::Positive),
    ("This is the worst, I hate it", Label::Negative),
    ("It was nice and cool", Label::Positive),
    ("I am sad and upset about it", Label::Negative),
    ("What an amazing day, I enjoy it", Label::Positive),
    ("Terrible event, very bad", Label::Negative),
];

static DEFAULT_LEXICON: Lazy<Lexicon> = Lazy::new(|| Lexicon {
    positive: POSITIVE_WORDS.iter().map(|w| w.to_string()).collect(),
    negative: NEGATIVE_WORDS.iter().map(|w| w.to_string()).collect(),
});

static DEFAULT_CORPUS: Lazy<Vec<TrainingExample>> = Lazy::new(|| {
    TRAINING_SENTENCES
        .iter()
        .map(|&(text, label)| TrainingExample::new(text, label))
        .collect()
});

static DEFAULT_WEIGHTS: Lazy<WeightTable> =
    Lazy::new(|| WeightTable::from_corpus(&DEFAULT_CORPUS));

/// The built-in happy and sad word lists.
pub fn default_lexicon() -> &'static Lexicon {
    &DEFAULT_LEXICON
}

/// The six labeled sentences the mini-model learns from.
pub fn default_corpus() -> &'static [TrainingExample] {
    &DEFAULT_CORPUS
}

/// Weight table of the built-in corpus, computed on first use and shared afterwards.
pub fn default_weight_table() -> &'static WeightTable {
    &DEFAULT_WEIGHTS
}

// ---------------------------------------------------------------------------
// Tokenizer
// ---------------------------------------------------------------------------

/// Break text into lowercase words made of ASCII letters and digits.
///
/// Every other character is dropped before splitting on whitespace, so
/// `"it's"` becomes `"its"` and `"well-known"` becomes `"wellknown"`.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    NON_TOKEN_CHAR_RE
        .replace_all(&lowered, "")
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// ---------------------------------------------------------------------------
// Lexicon
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    positive: BTreeSet<String>,
    negative: BTreeSet<String>,
}

impl Lexicon {
    /// Build a lexicon from raw word lists.
    ///
    /// Entries are normalized the same way input text is. Each must reduce to
    /// exactly one token, and no word may sit in both lists.
    pub fn new<P, N>(positive: P, negative: N) -> Result<Self>
    where
        P: IntoIterator,
        P::Item: AsRef<str>,
        N: IntoIterator,
        N::Item: AsRef<str>,
    {
        let positive = normalize_word_list(positive)?;
        let negative = normalize_word_list(negative)?;
        if let Some(shared) = positive.intersection(&negative).next() {
            return Err(Error::InvalidLexicon(format!(
                "'{shared}' is listed as both positive and negative"
            )));
        }
        Ok(Lexicon { positive, negative })
    }

    pub fn is_positive(&self, token: &str) -> bool {
        self.positive.contains(token)
    }

    pub fn is_negative(&self, token: &str) -> bool {
        self.negative.contains(token)
    }

    pub fn positive_words(&self) -> impl Iterator<Item = &str> {
        self.positive.iter().map(String::as_str)
    }

    pub fn negative_words(&self) -> impl Iterator<Item = &str> {
        self.negative.iter().map(String::as_str)
    }
}

impl Default for Lexicon {
    fn default() -> Self {
        DEFAULT_LEXICON.clone()
    }
}

fn normalize_word_list<I>(words: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut set = BTreeSet::new();
    for raw in words {
        let raw = raw.as_ref();
        let mut tokens = tokenize(raw);
        if tokens.len() != 1 {
            return Err(Error::InvalidLexicon(format!(
                "'{raw}' must be exactly one word"
            )));
        }
        set.extend(tokens.pop());
    }
    Ok(set)
}

// ---------------------------------------------------------------------------
// Weight table
// ---------------------------------------------------------------------------

/// Average signed label of every word seen in the training sentences.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WeightTable {
    weights: BTreeMap<String, f64>,
}

impl WeightTable {
    pub fn from_corpus(corpus: &[TrainingExample]) -> Self {
        let mut tallies: HashMap<String, (i32, u32)> = HashMap::new();
        for example in corpus {
            for token in tokenize(&example.text) {
                let tally = tallies.entry(token).or_insert((0, 0));
                tally.0 += example.label.value();
                tally.1 += 1;
            }
        }

        let weights: BTreeMap<String, f64> = tallies
            .into_iter()
            .map(|(word, (sum, times))| (word, f64::from(sum) / f64::from(times)))
            .collect();
        debug!(
            examples = corpus.len(),
            tokens = weights.len(),
            "built weight table"
        );
        WeightTable { weights }
    }

    pub fn get(&self, token: &str) -> Option<f64> {
        self.weights.get(token).copied()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// Entries in alphabetical order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.weights.iter().map(|(w, &v)| (w.as_str(), v))
    }
}

impl Serialize for WeightTable {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.weights.serialize(serializer)
    }
}

pub fn compute_weight_table(corpus: &[TrainingExample]) -> WeightTable {
    WeightTable::from_corpus(corpus)
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn to_confidence(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * HP.confidence_scale).round() as u8
}

fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Score text by counting happy and sad words.
pub fn analyze_keyword(text: &str, lexicon: &Lexicon) -> AnalysisResult {
    let tokens = tokenize(text);

    let matched_positive: Vec<String> = tokens
        .iter()
        .filter(|t| lexicon.is_positive(t))
        .cloned()
        .collect();
    let matched_negative: Vec<String> = tokens
        .iter()
        .filter(|t| lexicon.is_negative(t))
        .cloned()
        .collect();

    let score = matched_positive.len() as i64 - matched_negative.len() as i64;
    let expected_matches = (tokens.len() as f64 / HP.keyword_tokens_per_match).max(1.0);
    let confidence = to_confidence((score.unsigned_abs() as f64 / expected_matches).min(1.0));

    AnalysisResult {
        approach: HP.keyword_approach.to_string(),
        sentiment: Sentiment::from_value(score as f64, 0.0),
        score: score as f64,
        confidence,
        evidence: Evidence::Keywords {
            matched_positive,
            matched_negative,
        },
    }
}

/// Score text by averaging the learned weight of every word the table knows.
pub fn analyze_weighted(text: &str, table: &WeightTable) -> AnalysisResult {
    let contributing: Vec<Contribution> = tokenize(text)
        .into_iter()
        .filter_map(|word| table.get(&word).map(|weight| Contribution { word, weight }))
        .collect();

    let total: f64 = contributing.iter().map(|c| c.weight).sum();
    let avg = if contributing.is_empty() {
        0.0
    } else {
        total / contributing.len() as f64
    };

    AnalysisResult {
        approach: HP.weighted_approach.to_string(),
        sentiment: Sentiment::from_value(avg, HP.weighted_dead_zone),
        score: round_to(avg, HP.score_decimals),
        confidence: to_confidence(avg.abs().min(1.0)),
        evidence: Evidence::Weights { contributing },
    }
}

/// Run the selected approach, or return the "none" result for blank input.
pub fn analyze(
    text: &str,
    approach: Approach,
    lexicon: &Lexicon,
    table: &WeightTable,
) -> AnalysisResult {
    if is_blank(text) {
        trace!(%approach, "blank input, skipping analysis");
        return AnalysisResult::no_input();
    }
    match approach {
        Approach::Keyword => analyze_keyword(text, lexicon),
        Approach::Weighted => analyze_weighted(text, table),
    }
}

/// A lexicon and weight table ready to score text with either approach.
#[derive(Debug, Clone)]
pub struct SentimentAnalyzer {
    lexicon: Cow<'static, Lexicon>,
    weights: Cow<'static, WeightTable>,
}

impl SentimentAnalyzer {
    pub fn new(lexicon: Lexicon, corpus: &[TrainingExample]) -> Self {
        SentimentAnalyzer {
            lexicon: Cow::Owned(lexicon),
            weights: Cow::Owned(WeightTable::from_corpus(corpus)),
        }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn weights(&self) -> &WeightTable {
        &self.weights
    }

    pub fn analyze(&self, text: &str, approach: Approach) -> AnalysisResult {
        analyze(text, approach, &self.lexicon, &self.weights)
    }

    pub fn keyword(&self, text: &str) -> AnalysisResult {
        analyze_keyword(text, &self.lexicon)
    }

    pub fn weighted(&self, text: &str) -> AnalysisResult {
        analyze_weighted(text, &self.weights)
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        SentimentAnalyzer {
            lexicon: Cow::Borrowed(default_lexicon()),
            weights: Cow::Borrowed(default_weight_table()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(result: &AnalysisResult) -> (Vec<String>, Vec<String>) {
        match &result.evidence {
            Evidence::Keywords {
                matched_positive,
                matched_negative,
            } => (matched_positive.clone(), matched_negative.clone()),
            other => panic!("expected keyword evidence, got {other:?}"),
        }
    }

    #[test]
    fn tokenize_strips_punctuation_and_case() {
        assert_eq!(tokenize("I LOVE it!"), vec!["i", "love", "it"]);
        assert_eq!(tokenize("it's  well-known\tyes"), vec!["its", "wellknown", "yes"]);
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
        assert!(tokenize("?!... ---").is_empty());
    }

    #[test]
    fn tokenize_drops_non_ascii_letters() {
        assert_eq!(tokenize("Café 2 go \u{1F60A}"), vec!["caf", "2", "go"]);
    }

    #[test]
    fn lexicon_normalizes_and_dedups() {
        let lexicon = Lexicon::new(["Yay!", "yay", "Joy"], ["Boo"]).unwrap();
        assert_eq!(lexicon.positive_words().collect::<Vec<_>>(), vec!["joy", "yay"]);
        assert!(lexicon.is_negative("boo"));
        assert!(!lexicon.is_positive("Yay"));
    }

    #[test]
    fn lexicon_rejects_overlap_and_phrases() {
        assert!(matches!(
            Lexicon::new(["fine"], ["FINE"]),
            Err(Error::InvalidLexicon(_))
        ));
        assert!(matches!(
            Lexicon::new(["very good"], ["bad"]),
            Err(Error::InvalidLexicon(_))
        ));
        assert!(matches!(
            Lexicon::new(["!!"], ["bad"]),
            Err(Error::InvalidLexicon(_))
        ));
    }

    #[test]
    fn default_lexicon_is_disjoint() {
        let lexicon = default_lexicon();
        assert_eq!(lexicon.positive_words().count(), 10);
        assert_eq!(lexicon.negative_words().count(), 10);
        assert!(lexicon.positive_words().all(|w| !lexicon.is_negative(w)));
    }

    #[test]
    fn weight_table_averages_labels() {
        let table = default_weight_table();
        assert_eq!(table.get("love"), Some(1.0));
        assert_eq!(table.get("bad"), Some(-1.0));
        // "i" shows up in two happy and two sad sentences
        assert_eq!(table.get("i"), Some(0.0));
        // "and" appears in sentences 1, 3 (happy) and 4 (sad)
        let and = table.get("and").unwrap();
        assert!((and - 1.0 / 3.0).abs() < 1e-12);
        assert_eq!(table.get("sky"), None);
        assert!(table.iter().all(|(_, w)| (-1.0..=1.0).contains(&w)));
    }

    #[test]
    fn weight_table_counts_every_occurrence() {
        let corpus = [
            TrainingExample::new("fun fun", Label::Positive),
            TrainingExample::new("fun", Label::Negative),
        ];
        let table = compute_weight_table(&corpus);
        assert_eq!(table.len(), 1);
        let fun = table.get("fun").unwrap();
        assert!((fun - 1.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn empty_corpus_gives_empty_table() {
        let table = WeightTable::from_corpus(&[]);
        assert!(table.is_empty());
        let result = analyze_weighted("love", &table);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn keyword_counts_matches() {
        let result = analyze_keyword("I love this, it's awesome", default_lexicon());
        let (pos, neg) = words(&result);
        assert_eq!(pos, vec!["love", "awesome"]);
        assert!(neg.is_empty());
        assert_eq!(result.score, 2.0);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.confidence, 100);
        assert_eq!(result.approach, "Keyword Match");
    }

    #[test]
    fn keyword_counts_duplicates() {
        let result = analyze_keyword("bad bad good", default_lexicon());
        let (pos, neg) = words(&result);
        assert_eq!(pos, vec!["good"]);
        assert_eq!(neg, vec!["bad", "bad"]);
        assert_eq!(result.score, -1.0);
        assert_eq!(result.sentiment, Sentiment::Negative);
    }

    #[test]
    fn keyword_confidence_scales_with_length() {
        // one match in nine tokens: 1 / (9 / 3)
        let result = analyze_keyword("My cat is very cute and I love it", default_lexicon());
        assert_eq!(result.score, 1.0);
        assert_eq!(result.confidence, 33);

        // one match in seven tokens: 1 / (7 / 3) = 0.428..
        let result = analyze_keyword("The movie was okay, not too bad.", default_lexicon());
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.confidence, 43);
    }

    #[test]
    fn keyword_neutral_without_matches() {
        let result = analyze_keyword("The sky is blue", default_lexicon());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn keyword_balanced_matches_are_neutral() {
        let result = analyze_keyword("good but bad", default_lexicon());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn weighted_averages_known_words() {
        let result = analyze_weighted(
            "I love the new game, but the music is bad.",
            default_weight_table(),
        );
        // i 0, love 1, the -1, game 1, the -1, is -1, bad -1 => -2 / 7
        assert_eq!(result.sentiment, Sentiment::Negative);
        assert_eq!(result.score, -0.29);
        assert_eq!(result.confidence, 29);
        match &result.evidence {
            Evidence::Weights { contributing } => {
                let words: Vec<&str> = contributing.iter().map(|c| c.word.as_str()).collect();
                assert_eq!(words, vec!["i", "love", "the", "game", "the", "is", "bad"]);
            }
            other => panic!("expected weight evidence, got {other:?}"),
        }
    }

    #[test]
    fn weighted_dead_zone_is_neutral() {
        // "and" weighs 1/3 and "i" weighs 0
        let table = default_weight_table();
        assert_eq!(analyze_weighted("and", table).sentiment, Sentiment::Positive);
        let result = analyze_weighted("i and", table);
        assert_eq!(result.sentiment, Sentiment::Positive);
        assert_eq!(result.score, 0.17);
        let result = analyze_weighted("i i and", table);
        // 1/9 = 0.11
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.score, 0.11);
        assert_eq!(result.confidence, 11);
    }

    #[test]
    fn weighted_without_known_words() {
        let result = analyze_weighted("purple sky, blue sea", default_weight_table());
        assert_eq!(result.score, 0.0);
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0);
        assert_eq!(
            result.evidence,
            Evidence::Weights {
                contributing: vec![]
            }
        );
    }

    #[test]
    fn dispatch_short_circuits_blank_input() {
        let analyzer = SentimentAnalyzer::default();
        for approach in [Approach::Keyword, Approach::Weighted] {
            for text in ["", "   ", "\n\t"] {
                assert_eq!(analyzer.analyze(text, approach), AnalysisResult::no_input());
            }
        }
        let none = AnalysisResult::no_input();
        assert_eq!(none.approach, "none");
        assert_eq!(none.sentiment, Sentiment::Neutral);
    }

    #[test]
    fn dispatch_picks_approach() {
        let analyzer = SentimentAnalyzer::default();
        assert_eq!(
            analyzer.analyze("I love it", Approach::Keyword).approach,
            "Keyword Match"
        );
        assert_eq!(
            analyzer.analyze("I love it", Approach::Weighted).approach,
            "Mini Model (word-weights)"
        );
    }

    #[test]
    fn punctuation_only_text_is_analyzed_not_short_circuited() {
        let result = SentimentAnalyzer::default().analyze("!!!", Approach::Keyword);
        assert_eq!(result.approach, "Keyword Match");
        assert_eq!(result.sentiment, Sentiment::Neutral);
        assert_eq!(result.confidence, 0);
    }

    #[test]
    fn approach_parses_cli_names() {
        assert_eq!("keywords".parse::<Approach>().unwrap(), Approach::Keyword);
        assert_eq!("Mini-Model".parse::<Approach>().unwrap(), Approach::Weighted);
        assert!(matches!(
            "neural".parse::<Approach>(),
            Err(Error::UnknownApproach(_))
        ));
    }

    #[test]
    fn label_accepts_only_unit_signs() {
        assert_eq!(Label::try_from(1_i64), Ok(Label::Positive));
        assert_eq!(Label::try_from(-1_i64), Ok(Label::Negative));
        assert!(Label::try_from(0_i64).is_err());
    }
}

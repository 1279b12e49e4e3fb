//! Lesson configuration loaded from TOML.
//!
//! Teachers can swap in their own word lists or example sentences:
//!
//! ```toml
//! positive_words = ["yay", "brave"]
//! negative_words = ["ouch"]
//!
//! [[corpus]]
//! text = "What a brave puppy"
//! label = 1
//! ```
//!
//! Any field left out keeps the built-in lesson data.

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{Error, Result};
use crate::{default_corpus, default_lexicon, Lexicon, SentimentAnalyzer, TrainingExample};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LessonConfig {
    /// Replacement happy words
    #[serde(default)]
    pub positive_words: Option<Vec<String>>,
    /// Replacement sad words
    #[serde(default)]
    pub negative_words: Option<Vec<String>>,
    /// Replacement training sentences for the mini-model
    #[serde(default)]
    pub corpus: Option<Vec<TrainingExample>>,
}

impl LessonConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded lesson config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Validate the overrides and build an analyzer from them.
    ///
    /// Without overrides this returns the shared built-in analyzer, so the
    /// default weight table is not recomputed.
    pub fn build(&self) -> Result<SentimentAnalyzer> {
        if self.positive_words.is_none() && self.negative_words.is_none() && self.corpus.is_none() {
            return Ok(SentimentAnalyzer::default());
        }

        let lexicon = match (&self.positive_words, &self.negative_words) {
            (None, None) => default_lexicon().clone(),
            (positive, negative) => {
                let defaults = default_lexicon();
                let positive: Vec<String> = match positive {
                    Some(words) => words.clone(),
                    None => defaults.positive_words().map(str::to_string).collect(),
                };
                let negative: Vec<String> = match negative {
                    Some(words) => words.clone(),
                    None => defaults.negative_words().map(str::to_string).collect(),
                };
                Lexicon::new(positive, negative)?
            }
        };

        let corpus = match &self.corpus {
            Some(corpus) if corpus.is_empty() => return Err(Error::EmptyCorpus),
            Some(corpus) => corpus.as_slice(),
            None => default_corpus(),
        };

        Ok(SentimentAnalyzer::new(lexicon, corpus))
    }
}

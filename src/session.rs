//! Interaction state of one lesson session and the events that change it.
//!
//! The analysis result is never stored here. It is derived from the current
//! text and approach each time it is asked for.

use tracing::{debug, trace};

use crate::lesson;
use crate::quiz::{Quiz, QuizOutcome};
use crate::{AnalysisResult, Approach, SentimentAnalyzer};

const DEFAULT_INPUT: &str = "My cat is very cute and I love it";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub input_text: String,
    pub approach: Approach,
    pub explanation_visible: bool,
    pub quiz_answer: Option<usize>,
}

impl Default for Session {
    fn default() -> Self {
        Session {
            input_text: DEFAULT_INPUT.to_string(),
            approach: Approach::Keyword,
            explanation_visible: true,
            quiz_answer: None,
        }
    }
}

/// A user interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    SetInputText(String),
    SetApproach(Approach),
    ToggleExplanation,
    SetQuizAnswer(usize),
    ClearInput,
    /// Replace the input with one of the lesson's sample sentences.
    UseSample(usize),
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one event in place. Every event is accepted.
    pub fn apply(&mut self, event: Event) {
        trace!(?event, "session event");
        match event {
            Event::SetInputText(text) => self.input_text = text,
            Event::SetApproach(approach) => self.approach = approach,
            Event::ToggleExplanation => self.explanation_visible = !self.explanation_visible,
            Event::SetQuizAnswer(index) => self.quiz_answer = Some(index),
            Event::ClearInput => self.input_text.clear(),
            Event::UseSample(index) => match lesson::SAMPLES.get(index) {
                Some(sample) => self.input_text = sample.to_string(),
                None => debug!(index, "no sample at index, input unchanged"),
            },
        }
    }

    /// By-value form of [`Session::apply`].
    pub fn reduce(mut self, event: Event) -> Self {
        self.apply(event);
        self
    }

    pub fn result(&self, analyzer: &SentimentAnalyzer) -> AnalysisResult {
        analyzer.analyze(&self.input_text, self.approach)
    }

    pub fn quiz_outcome(&self, quiz: &Quiz) -> QuizOutcome {
        quiz.evaluate(self.quiz_answer)
    }

    /// Explanation for the active approach, if the learner has it open.
    pub fn explanation(&self) -> Option<&'static str> {
        self.explanation_visible
            .then(|| lesson::explanation(self.approach))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Sentiment;

    #[test]
    fn starts_with_lesson_defaults() {
        let session = Session::new();
        assert_eq!(session.input_text, "My cat is very cute and I love it");
        assert_eq!(session.approach, Approach::Keyword);
        assert!(session.explanation_visible);
        assert_eq!(session.quiz_answer, None);
    }

    #[test]
    fn result_follows_text_and_approach() {
        let analyzer = SentimentAnalyzer::default();
        let mut session = Session::new();
        assert_eq!(session.result(&analyzer).approach, "Keyword Match");

        session.apply(Event::SetApproach(Approach::Weighted));
        assert_eq!(session.result(&analyzer).approach, "Mini Model (word-weights)");

        session.apply(Event::SetInputText("Terrible event, very bad".into()));
        assert_eq!(session.result(&analyzer).sentiment, Sentiment::Negative);

        session.apply(Event::ClearInput);
        assert_eq!(session.result(&analyzer), AnalysisResult::no_input());
    }

    #[test]
    fn toggle_flips_explanation() {
        let session = Session::new().reduce(Event::ToggleExplanation);
        assert!(!session.explanation_visible);
        assert_eq!(session.explanation(), None);

        let session = session.reduce(Event::ToggleExplanation);
        assert_eq!(
            session.explanation(),
            Some(lesson::explanation(Approach::Keyword))
        );
    }

    #[test]
    fn samples_replace_input() {
        let session = Session::new().reduce(Event::UseSample(1));
        assert_eq!(session.input_text, "This homework is boring and I hate it.");

        let unchanged = session.clone().reduce(Event::UseSample(99));
        assert_eq!(unchanged, session);
    }

    #[test]
    fn quiz_answer_can_change() {
        let quiz = Quiz::default_quiz();
        let mut session = Session::new();
        assert_eq!(session.quiz_outcome(quiz), QuizOutcome::Pending);

        session.apply(Event::SetQuizAnswer(2));
        assert_eq!(session.quiz_outcome(quiz), QuizOutcome::Answered { correct: false });

        session.apply(Event::SetQuizAnswer(0));
        assert!(session.quiz_outcome(quiz).is_correct());
    }
}

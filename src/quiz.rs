//! The one-question quiz at the end of the lesson.

use serde::Serialize;

/// Result of checking the learner's pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizOutcome {
    /// No option chosen yet.
    Pending,
    Answered { correct: bool },
}

impl QuizOutcome {
    pub fn is_correct(self) -> bool {
        matches!(self, QuizOutcome::Answered { correct: true })
    }
}

/// Exact-match check; no partial credit.
pub fn evaluate_quiz(selected: Option<usize>, correct: usize) -> QuizOutcome {
    match selected {
        None => QuizOutcome::Pending,
        Some(index) => QuizOutcome::Answered {
            correct: index == correct,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Quiz {
    pub question: &'static str,
    pub sentence: &'static str,
    pub options: &'static [&'static str],
    pub correct: usize,
    pub explanation: &'static str,
}

static DEFAULT_QUIZ: Quiz = Quiz {
    question: "What does a 'positive' sentence usually show?",
    sentence: "I am so excited about my birthday party!",
    options: &[
        "It shows happy or good feelings",
        "It shows angry or bad feelings",
        "It shows nothing (neutral)",
    ],
    correct: 0,
    explanation: "Positive sentences have words that show happiness, liking, or good feelings (e.g., love, fun, amazing).",
};

impl Quiz {
    pub fn default_quiz() -> &'static Quiz {
        &DEFAULT_QUIZ
    }

    pub fn evaluate(&self, selected: Option<usize>) -> QuizOutcome {
        evaluate_quiz(selected, self.correct)
    }

    /// Message shown after an answer. The explanation is always included.
    pub fn feedback(&self, selected: Option<usize>) -> Option<String> {
        match self.evaluate(selected) {
            QuizOutcome::Pending => None,
            QuizOutcome::Answered { correct: true } => {
                Some(format!("Correct! {}", self.explanation))
            }
            QuizOutcome::Answered { correct: false } => {
                Some(format!("Not quite. {}", self.explanation))
            }
        }
    }
}

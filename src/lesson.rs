//! Static lesson text: the story, Robo's steps, sample sentences and notes for teachers.

use serde::Serialize;

use crate::quiz::Quiz;
use crate::Approach;

pub const TITLE: &str = "Sentiment Adventure: Learn Feelings with Asha & Robo";

pub const SUBTITLE: &str =
    "Interactive guide to understand how computers read feelings in text, made for 6th graders.";

pub const STORY: &[&str] = &[
    "Meet Asha, a curious student, and Robo, her friendly coding robot. Asha wonders how Robo \
     knows when a message is happy or sad. Robo decides to teach Asha using simple examples. \
     That is called Sentiment Analysis.",
    "Together they will play with sentences, try two different ways to detect feelings, and do \
     fun exercises. Let's help Asha learn how words like \"love\" or \"hate\" tell us what \
     someone feels!",
];

pub const STEPS: &[&str] = &[
    "Break sentence into words (tokenize).",
    "Check if words are happy or sad (or learned weights).",
    "Add numbers and decide: happy / sad / neutral.",
];

pub const MINI_EXPERIMENT: &str = "I love the new game, but the music is bad.";

pub const SAMPLES: &[&str] = &[
    "I had an amazing day at the park!",
    "This homework is boring and I hate it.",
    "The movie was okay, not too bad.",
    "I am so happy about my exam result!",
    "I feel sad and upset today.",
];

pub const MORE_EXERCISES: &str =
    "Ask users to input three sentences from their day and see which are positive or negative.";

pub const TEACHER_NOTES: &[&str] = &[
    "Talk through the story: use examples from students' lives.",
    "Discuss why words can be tricky (sarcasm, emojis, double meaning).",
    "Use the mini-model to explain how computers \"learn\" from examples.",
];

const KEYWORD_EXPLANATION: &str = "The app counts happy words and sad words. If there are more \
     happy words, the sentence is considered Positive. The other way around makes it Negative.";

const WEIGHTED_EXPLANATION: &str = "The mini-model learned which words usually appear in happy \
     or sad sentences (from a tiny set). It adds the learned numbers for words found and decides \
     if the sentence is happy or sad.";

const SAMPLE_LABEL_CHARS: usize = 28;

/// How the given approach reaches its answer, in kid-friendly words.
pub fn explanation(approach: Approach) -> &'static str {
    match approach {
        Approach::Keyword => KEYWORD_EXPLANATION,
        Approach::Weighted => WEIGHTED_EXPLANATION,
    }
}

/// Short button label for a sample sentence.
pub fn sample_label(sample: &str) -> String {
    if sample.chars().count() > SAMPLE_LABEL_CHARS {
        let head: String = sample.chars().take(SAMPLE_LABEL_CHARS).collect();
        format!("{head}...")
    } else {
        sample.to_string()
    }
}

/// Everything the lesson page shows besides the live analyzer.
#[derive(Debug, Clone, Serialize)]
pub struct Lesson {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub story: &'static [&'static str],
    pub steps: &'static [&'static str],
    pub mini_experiment: &'static str,
    pub samples: &'static [&'static str],
    pub quiz: &'static Quiz,
    pub more_exercises: &'static str,
    pub teacher_notes: &'static [&'static str],
}

impl Default for Lesson {
    fn default() -> Self {
        Lesson {
            title: TITLE,
            subtitle: SUBTITLE,
            story: STORY,
            steps: STEPS,
            mini_experiment: MINI_EXPERIMENT,
            samples: SAMPLES,
            quiz: Quiz::default_quiz(),
            more_exercises: MORE_EXERCISES,
            teacher_notes: TEACHER_NOTES,
        }
    }
}

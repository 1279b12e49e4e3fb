use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use sentiment_adventure::lesson::Lesson;
use sentiment_adventure::{Approach, LessonConfig, Quiz, SentimentAnalyzer};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sentiment-adventure",
    about = "Read the feeling of a sentence the way Robo teaches it",
    version
)]
struct Cli {
    /// File paths to analyze (reads stdin if none provided)
    files: Vec<String>,

    /// Approach to use: keywords or mini-model
    #[arg(short, long, default_value = "keywords")]
    approach: Approach,

    /// Lesson config (TOML) with custom word lists or example sentences
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Print the learned word weights and exit
    #[arg(long)]
    weights: bool,

    /// Print the lesson content and exit
    #[arg(long)]
    lesson: bool,

    /// Answer the quiz with the given option index and exit
    #[arg(long, value_name = "OPTION")]
    quiz: Option<usize>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> sentiment_adventure::Result<()> {
    let analyzer = match &cli.config {
        Some(path) => LessonConfig::from_file(path)?.build()?,
        None => SentimentAnalyzer::default(),
    };

    if cli.weights {
        println!("{}", serde_json::to_string_pretty(analyzer.weights())?);
        return Ok(());
    }
    if cli.lesson {
        println!("{}", serde_json::to_string_pretty(&Lesson::default())?);
        return Ok(());
    }
    if let Some(option) = cli.quiz {
        let quiz = Quiz::default_quiz();
        let report = serde_json::json!({
            "outcome": quiz.evaluate(Some(option)),
            "feedback": quiz.feedback(Some(option)),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if cli.files.is_empty() {
        let mut input = String::new();
        std::io::stdin()
            .read_to_string(&mut input)
            .map_err(|source| sentiment_adventure::Error::Io {
                path: PathBuf::from("<stdin>"),
                source,
            })?;
        let result = analyzer.analyze(&input, cli.approach);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        for path in &cli.files {
            let text = std::fs::read_to_string(path).map_err(|source| {
                sentiment_adventure::Error::Io {
                    path: PathBuf::from(path),
                    source,
                }
            })?;
            let result = analyzer.analyze(&text, cli.approach);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }
    Ok(())
}

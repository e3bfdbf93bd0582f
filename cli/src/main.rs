//! kicau CLI - Indonesian tweet sentiment classification tool
//!
//! A command-line tool for normalizing and classifying CSV batches of
//! tweets with a frozen classifier artifact.

use clap::{Parser, Subcommand};
use colored::*;
use indicatif::{ProgressBar, ProgressStyle};
use kicau::{
    service, ClassificationService, LexiconModel, NormalizedRecord, Sentiment, SentimentPipeline,
    SlangDictionary,
};
use std::path::PathBuf;
use std::time::Duration;

/// Sentiment classification for Indonesian social-media text
#[derive(Parser)]
#[command(
    name = "kicau",
    version,
    about = "Classify Indonesian tweet sentiment",
    long_about = "kicau - Indonesian tweet sentiment classification.\n\n\
                  Normalizes noisy social-media text (case folding, noise stripping,\n\
                  elongation collapse, slang substitution, stopword removal, stemming)\n\
                  and classifies it with a frozen model artifact.\n\n\
                  Usage:\n  \
                  kicau classify tweets.csv --model model.json    Classify a CSV batch\n  \
                  kicau normalize \"Aplikasinya bagus bgt!!\"        Normalize one text\n  \
                  kicau info                                      Show model overview"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a CSV batch (requires a 'full_text' column)
    Classify {
        /// Input CSV path
        input: PathBuf,

        /// Output CSV path (default: <input stem>_labeled.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Slang dictionary CSV (two columns: informal, canonical)
        #[arg(long, default_value = "kamus_slang.csv")]
        slang: PathBuf,

        /// Frozen model artifact (JSON)
        #[arg(long, default_value = "model.json")]
        model: PathBuf,

        /// Disable parallel normalization
        #[arg(long)]
        sequential: bool,
    },

    /// Normalize a single text through the full pipeline
    Normalize {
        /// Raw text to normalize
        text: String,

        /// Slang dictionary CSV (optional; substitution is skipped without it)
        #[arg(long)]
        slang: Option<PathBuf>,
    },

    /// Show training information for the frozen model
    Info,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            input,
            output,
            slang,
            model,
            sequential,
        } => cmd_classify(input, output, slang, model, sequential),
        Commands::Normalize { text, slang } => cmd_normalize(&text, slang),
        Commands::Info => cmd_info(),
    };

    if let Err(err) = result {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

/// Loads the slang dictionary, printing a warning when it degrades to an
/// empty mapping.
fn load_slang(path: &std::path::Path) -> SlangDictionary {
    let (dict, warning) = SlangDictionary::load_or_empty(path);
    if let Some(warning) = warning {
        eprintln!(
            "{} {warning} - continuing without slang substitution",
            "warning:".yellow().bold()
        );
    }
    dict
}

fn cmd_classify(
    input: PathBuf,
    output: Option<PathBuf>,
    slang: PathBuf,
    model: PathBuf,
    sequential: bool,
) -> kicau::Result<()> {
    let dict = load_slang(&slang);
    let model = LexiconModel::load(&model)?;

    let records = service::read_records_from_path(&input)?;
    println!(
        "Read {} records from {}",
        records.len().to_string().bold(),
        input.display()
    );

    let mut classifier_service =
        ClassificationService::new(SentimentPipeline::new(dict), Box::new(model));
    if sequential {
        classifier_service = classifier_service.sequential();
    }

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner} {msg}").expect("valid progress template"),
    );
    spinner.set_message("Classifying...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let results = classifier_service.classify_batch(&records)?;
    spinner.finish_and_clear();

    print_distribution(&results);

    let output = output.unwrap_or_else(|| default_output_path(&input));
    let file = std::fs::File::create(&output)?;
    service::write_records(file, &results)?;
    println!(
        "{} Wrote {} labeled records to {}",
        "done:".green().bold(),
        results.len(),
        output.display()
    );

    Ok(())
}

fn default_output_path(input: &std::path::Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "hasil".to_string());
    input.with_file_name(format!("{stem}_labeled.csv"))
}

/// Prints the label distribution of a classified batch.
fn print_distribution(results: &[NormalizedRecord]) {
    if results.is_empty() {
        return;
    }

    let total = results.len();
    println!("\n{}", "Label distribution:".bold());
    for label in [Sentiment::Positive, Sentiment::Negative, Sentiment::Neutral] {
        let count = results.iter().filter(|r| r.label == label).count();
        let percent = 100.0 * count as f64 / total as f64;
        let name = match label {
            Sentiment::Positive => label.as_str().green(),
            Sentiment::Negative => label.as_str().red(),
            Sentiment::Neutral => label.as_str().normal(),
        };
        println!("  {name:<10} {count:>6}  ({percent:>5.1}%)");
    }
    println!();
}

fn cmd_normalize(text: &str, slang: Option<PathBuf>) -> kicau::Result<()> {
    let dict = match slang {
        Some(path) => load_slang(&path),
        None => SlangDictionary::empty(),
    };

    let pipeline = SentimentPipeline::new(dict);
    println!("{}", pipeline.normalize(text));
    Ok(())
}

fn cmd_info() -> kicau::Result<()> {
    let info = kicau::TrainingInfo::frozen();

    println!("{}", "Frozen model overview".bold());
    println!("  Training tweets: {}", info.train_size);
    println!("  Test tweets:     {}", info.test_size);
    println!("  Accuracy:        {:.4}", info.accuracy);
    println!("  Weighted F1:     {:.4}", info.weighted_f1);

    println!("\n{}", "Label distribution:".bold());
    for (label, count) in info.label_distribution {
        println!("  {:<10} {count:>6}", label.as_str());
    }

    println!("\n{}", "Pipeline stages:".bold());
    for stage in [
        "1. Case folding",
        "2. Noise stripping (URLs, mentions, hashtags, digits, punctuation)",
        "3. Elongation collapse",
        "4. Slang substitution",
        "5. Tokenization",
        "6. Stopword removal (Indonesian)",
        "7. Stemming (Indonesian)",
    ] {
        println!("  {stage}");
    }

    Ok(())
}

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use colloquy::{
    compute_stats, merge_segments, parse_transcript_file, render_turn, write_conversation,
    write_conversation_plain, write_stats_csv, RenderStyle,
};

#[derive(Parser)]
#[command(name = "colloquy")]
#[command(author, version, about = "Turn-by-turn conversation rendering and statistics for diarized transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge a diarized transcript into a turn-by-turn conversation
    Render {
        /// Input transcript file (diarization JSON, {"segments": [...]})
        #[arg(short, long)]
        input: PathBuf,

        /// Directory to save transcript files into (a timestamped
        /// subdirectory is created per run)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Comma-separated speaker ids, in the order labels should be
        /// assigned; derived from the input in first-seen order if omitted
        #[arg(long, value_delimiter = ',')]
        speakers: Option<Vec<String>>,

        /// Render style for printed turns
        #[arg(long, value_enum, default_value = "markdown")]
        style: Style,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute word statistics over a diarized transcript
    Stats {
        /// Input transcript file (diarization JSON, {"segments": [...]})
        #[arg(short, long)]
        input: PathBuf,

        /// Write the statistics to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Comma-separated speaker ids, in the order labels should be
        /// assigned; derived from the input in first-seen order if omitted
        #[arg(long, value_delimiter = ',')]
        speakers: Option<Vec<String>>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Style {
    Markdown,
    Html,
}

impl From<Style> for RenderStyle {
    fn from(style: Style) -> Self {
        match style {
            Style::Markdown => RenderStyle::MarkdownBold,
            Style::Html => RenderStyle::HtmlBold,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render {
            input,
            output_dir,
            speakers,
            style,
            verbose,
        } => {
            setup_logging(verbose);
            render_conversation(input, output_dir, speakers, style.into())
        }
        Commands::Stats {
            input,
            csv,
            speakers,
            verbose,
        } => {
            setup_logging(verbose);
            show_stats(input, csv, speakers)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn render_conversation(
    input: PathBuf,
    output_dir: Option<PathBuf>,
    speakers: Option<Vec<String>>,
    style: RenderStyle,
) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let segments = parse_transcript_file(&input).context("Failed to parse input transcript")?;
    info!("Loaded {} segments", segments.len());

    let turns = merge_segments(&segments, speakers.as_deref())?;
    info!("Merged into {} turns", turns.len());

    for turn in &turns {
        println!("{}", style.render(turn));
    }

    if let Some(dir) = output_dir {
        let run_dir = dir.join(chrono::Local::now().format("%m_%d_%y_%H_%M_%S").to_string());
        std::fs::create_dir_all(&run_dir)
            .with_context(|| format!("Failed to create directory: {:?}", run_dir))?;

        let with_speakers = run_dir.join("transcription_with_speakers.txt");
        let no_speakers = run_dir.join("transcription_with_no_speakers.txt");
        write_conversation(&with_speakers, &turns)?;
        write_conversation_plain(&no_speakers, &turns)?;

        info!("Transcripts saved in {:?}", run_dir);
    }

    Ok(())
}

fn show_stats(input: PathBuf, csv: Option<PathBuf>, speakers: Option<Vec<String>>) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let segments = parse_transcript_file(&input).context("Failed to parse input transcript")?;

    let turns = merge_segments(&segments, speakers.as_deref())?;
    let rendered: Vec<String> = turns.iter().map(render_turn).collect();
    let stats = compute_stats(&rendered)?;

    println!("Total words: {}", stats.total_words);
    for (label, count) in &stats.words_by_speaker {
        println!("Words by {}: {}", label, count);
    }

    if let Some(path) = csv {
        write_stats_csv(&path, &stats)?;
        info!("Statistics written to {:?}", path);
    }

    Ok(())
}

//! `cvsift` CLI - Parse resumes and inspect the name-inference engine

use std::path::PathBuf;
use std::time::Instant;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cvsift::{mime_for_filename, validate_upload, ResumeParser};

#[derive(Parser)]
#[command(name = "cvsift")]
#[command(about = "Resume parsing engine — contact details and name inference from PDF/DOCX")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a resume and display the extracted record
    Parse {
        /// Path to the PDF or DOCX file
        file: PathBuf,

        /// Emit the record as pretty JSON
        #[arg(short, long)]
        json: bool,

        /// Include the full flattened text in the output
        #[arg(short, long)]
        full_text: bool,
    },

    /// Show the ranked name candidates the inference engine considered
    Candidates {
        /// Path to the PDF or DOCX file
        file: PathBuf,

        /// Number of candidates to display
        #[arg(short, long, default_value = "5")]
        top: usize,
    },

    /// Check a file against the upload rules without parsing it
    Validate {
        /// Path to the file
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(Level::WARN)
        .with_target(false)
        .compact()
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse {
            file,
            json,
            full_text,
        } => {
            cmd_parse(&file, json, full_text).await?;
        }
        Commands::Candidates { file, top } => {
            cmd_candidates(&file, top).await?;
        }
        Commands::Validate { file } => {
            cmd_validate(&file)?;
        }
    }

    Ok(())
}

async fn cmd_parse(file: &PathBuf, json: bool, full_text: bool) -> Result<()> {
    let parser = ResumeParser::new();

    let start = Instant::now();
    let record = parser.parse_file(file).await?;
    let elapsed = start.elapsed();

    if json {
        let mut value = serde_json::to_value(&record)?;
        if !full_text {
            if let Some(obj) = value.as_object_mut() {
                obj.remove("full_text");
            }
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    println!("📄 Parsed: {}", file.display());
    println!("   Time: {:.2}ms", elapsed.as_secs_f64() * 1000.0);
    println!();
    println!(
        "👤 Name:  {} (confidence {:.2})",
        if record.name.is_empty() {
            "<not found>"
        } else {
            &record.name
        },
        record.confidence.name
    );
    if let Some(ref source) = record.name_extracted_from {
        println!("   Source: {source}");
    }
    println!(
        "📧 Email: {} (confidence {:.2})",
        if record.email.is_empty() {
            "<not found>"
        } else {
            &record.email
        },
        record.confidence.email
    );
    println!(
        "📞 Phone: {} (confidence {:.2})",
        if record.phone.is_empty() {
            "<not found>"
        } else {
            &record.phone
        },
        record.confidence.phone
    );

    if full_text {
        println!("\n📝 Full text ({} chars):\n", record.full_text.len());
        println!("{}", record.full_text);
    }

    Ok(())
}

async fn cmd_candidates(file: &PathBuf, top: usize) -> Result<()> {
    let parser = ResumeParser::new();

    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let bytes = tokio::fs::read(file).await?;
    let content_type = mime_for_filename(&filename);
    validate_upload(content_type, &filename, bytes.len() as u64)?;

    let document = parser.extract_document(&bytes, content_type, &filename)?;
    let email = cvsift::contact::find_email(&document.text);
    let ranked = cvsift::infer::ranked_candidates(&document.text, &document.runs, email.as_deref());

    if ranked.is_empty() {
        println!("❌ No name candidates found");
        return Ok(());
    }

    println!(
        "🏆 Top {} of {} candidates:\n",
        top.min(ranked.len()),
        ranked.len()
    );
    for (i, candidate) in ranked.iter().take(top).enumerate() {
        println!(
            "{}. \"{}\" (score: {:.1}, confidence: {:.2}, weighted: {:.2})",
            i + 1,
            candidate.text,
            candidate.score,
            candidate.confidence,
            candidate.score * candidate.confidence
        );
        println!("   source: {}", candidate.source);
    }

    Ok(())
}

fn cmd_validate(file: &PathBuf) -> Result<()> {
    let filename = file
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let size = std::fs::metadata(file)?.len();
    let content_type = mime_for_filename(&filename);

    match validate_upload(content_type, &filename, size) {
        Ok(()) => {
            println!("✅ {filename} looks valid ({size} bytes, {content_type})");
            Ok(())
        }
        Err(e) => {
            println!("❌ {filename}: {e}");
            Err(e.into())
        }
    }
}

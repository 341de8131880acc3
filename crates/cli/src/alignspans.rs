//! alignspans - align Chinese glyphs with their Vietnamese glosses
//!
//! A command line tool that reads JSON span dumps produced by the text
//! extraction step ({text, bbox, page_num} records), classifies each span by
//! script, and writes the aligned glyph/gloss pairs as JSON.

use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{ArgAction, Parser};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use hanviet_core::align::{AlignParams, align_document};
use hanviet_core::model::{AlignedPair, ingest, spans_from_json};
use hanviet_core::script::{Script, ScriptClassifier};

/// Align Chinese glyphs with the Vietnamese glosses printed beneath them.
#[derive(Parser, Debug)]
#[command(name = "alignspans")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to JSON span dump files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output file path; use "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Maximum horizontal center offset, in page units, for a gloss to count
    /// as being in the same column as a glyph
    #[arg(short = 't', long, default_value = "25.0")]
    tolerance: f64,

    /// Consume each gloss at most once (one-to-one matching)
    #[arg(long, action = ArgAction::SetTrue)]
    exclusive: bool,

    /// A comma-separated list of page numbers to align (1-indexed)
    #[arg(short = 'p', long = "pagenos")]
    pagenos: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long, action = ArgAction::SetTrue)]
    pretty: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

fn parse_pagenos(spec: &str) -> anyhow::Result<Vec<u32>> {
    spec.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .with_context(|| format!("invalid page number: {part:?}"))
        })
        .collect()
}

fn process_file(path: &Path, args: &Args, params: &AlignParams) -> anyhow::Result<Vec<AlignedPair>> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let raws = spans_from_json(&json)
        .with_context(|| format!("failed to decode {}", path.display()))?;

    let classifier = ScriptClassifier::default();
    let mut spans = ingest(raws, &classifier);

    if let Some(spec) = &args.pagenos {
        let pages = parse_pagenos(spec)?;
        spans.retain(|span| pages.contains(&span.page_num));
    }

    if !spans.iter().any(|span| span.lang == Script::Chinese) {
        warn!(file = %path.display(), "no Chinese content, skipping");
        return Ok(Vec::new());
    }

    Ok(align_document(params, &spans))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = if args.debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    anyhow::ensure!(args.tolerance > 0.0, "tolerance must be a positive number");
    let params = AlignParams::new(args.tolerance, args.exclusive);

    let mut pairs = Vec::new();
    for path in &args.files {
        match process_file(path, &args, &params) {
            Ok(file_pairs) => pairs.extend(file_pairs),
            Err(e) => {
                eprintln!("Error processing {}: {:#}", path.display(), e);
                std::process::exit(1);
            }
        }
    }

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = fs::File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    if args.pretty {
        serde_json::to_writer_pretty(&mut output, &pairs)?;
    } else {
        serde_json::to_writer(&mut output, &pairs)?;
    }
    writeln!(output)?;
    output.flush()?;

    Ok(())
}

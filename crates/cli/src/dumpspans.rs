//! dumpspans - inspect classified spans in a JSON span dump
//!
//! Debug companion to alignspans: prints each page's spans with their
//! script labels and bounding boxes so layout problems can be eyeballed
//! before alignment.

use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use hanviet_core::model::{TextSpan, ingest, spans_from_json};
use hanviet_core::partition::{pages, partition};
use hanviet_core::script::ScriptClassifier;

/// Print classified spans grouped by page and script.
#[derive(Parser, Debug)]
#[command(name = "dumpspans")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more paths to JSON span dump files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Only print per-page counts, not the spans themselves
    #[arg(short = 'c', long, action = ArgAction::SetTrue)]
    counts: bool,
}

fn dump_bucket(label: &str, spans: &[TextSpan]) {
    for span in spans {
        println!("  [{label}] {} {}", span.bbox, span.text);
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let classifier = ScriptClassifier::default();

    for path in &args.files {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let spans = ingest(spans_from_json(&json)?, &classifier);

        println!("{}:", path.display());
        for page_num in pages(&spans) {
            let (cn_spans, vi_spans) = partition(&spans, page_num);
            println!(
                "page {page_num}: {} chinese, {} vietnamese",
                cn_spans.len(),
                vi_spans.len()
            );
            if !args.counts {
                dump_bucket("cn", &cn_spans);
                dump_bucket("vi", &vi_spans);
            }
        }
    }

    Ok(())
}

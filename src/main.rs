//! Command-line front end: decode a locally saved arXiv source bundle and
//! print its LaTeX comment lines. Fetching the bundle over the network is a
//! separate concern; this tool starts from bytes on disk.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use texgleaner::arxiv::{random_arxiv_id, SubmissionTable};
use texgleaner::decode::{decode_source, DecodedSource, SOURCE_UNAVAILABLE};
use texgleaner::{extract_comment_blocks, Extraction};

#[derive(Debug, Parser)]
#[clap(name = "texgleaner", version)]
struct App {
    #[clap(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Decode a source bundle and print the comment lines of each TeX file
    Show {
        /// Saved e-print payload (.tar.gz, .gz, .zip, .pdf or bare .tex)
        file: PathBuf,
        /// Declared MIME type; inferred from the file extension when omitted
        #[clap(long)]
        content_type: Option<String>,
    },
    /// List the entries decoded from a source bundle
    List {
        file: PathBuf,
        #[clap(long)]
        content_type: Option<String>,
    },
    /// Pick a random arXiv identifier from a month/submission-count table
    Lucky {
        /// JSON object mapping "yymm" to submission count
        table: PathBuf,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let app = App::parse();

    match app.cmd {
        Command::Show { file, content_type } => show(&file, content_type.as_deref()),
        Command::List { file, content_type } => list(&file, content_type.as_deref()),
        Command::Lucky { table } => lucky(&table),
    }
}

/// Map a file extension to the content-type the server would have declared.
fn guess_content_type(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("pdf") => "application/pdf",
        Some("gz") | Some("tgz") => "application/gzip",
        Some("zip") => "application/zip",
        _ => "text/plain",
    }
}

/// Fallback entry name when a gzip header carries no original file name.
fn fallback_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "source".to_string());
    format!("{stem}.tex")
}

fn show(file: &Path, content_type: Option<&str>) -> Result<()> {
    let data = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let content_type = content_type.unwrap_or_else(|| guess_content_type(file));
    log::debug!("content-type: {content_type}");

    let extraction = extract_comment_blocks(&data, content_type, &fallback_name(file))
        .with_context(|| format!("decoding {}", file.display()))?;

    match extraction {
        Extraction::Unavailable => println!("{SOURCE_UNAVAILABLE}"),
        Extraction::Blocks(blocks) if blocks.is_empty() => {
            println!("No TeX sources found in {}", file.display());
        }
        Extraction::Blocks(blocks) => {
            for block in blocks {
                println!("{}", block.name);
                println!("{}", "-".repeat(50));
                match block.comments {
                    Some(comments) => println!("{comments}"),
                    None => println!("No comments found."),
                }
                println!();
            }
        }
    }
    Ok(())
}

fn list(file: &Path, content_type: Option<&str>) -> Result<()> {
    let data = fs::read(file).with_context(|| format!("reading {}", file.display()))?;
    let content_type = content_type.unwrap_or_else(|| guess_content_type(file));

    let decoded = decode_source(&data, content_type, &fallback_name(file))
        .with_context(|| format!("decoding {}", file.display()))?;

    match decoded {
        DecodedSource::Unavailable => println!("{SOURCE_UNAVAILABLE}"),
        DecodedSource::SingleFile { name, data } => {
            println!("{:>10}  {}", data.len(), name);
            println!("\nTotal: 1 file");
        }
        DecodedSource::Bundle(entries) => {
            println!("{:>10}  {}", "Size", "Name");
            println!("{}", "-".repeat(50));
            for (name, content) in &entries {
                println!("{:>10}  {}", content.len(), name);
            }
            println!("\nTotal: {} file(s)", entries.len());
        }
    }
    Ok(())
}

fn lucky(table_path: &Path) -> Result<()> {
    let raw = fs::read_to_string(table_path)
        .with_context(|| format!("reading {}", table_path.display()))?;
    let table: SubmissionTable = serde_json::from_str::<BTreeMap<String, u64>>(&raw)
        .with_context(|| format!("parsing {}", table_path.display()))?;

    match random_arxiv_id(&table, &mut rand::rng()) {
        Some(id) => println!("{id}"),
        None => anyhow::bail!("submission table {} is empty", table_path.display()),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_from_extension() {
        assert_eq!(guess_content_type(Path::new("a.pdf")), "application/pdf");
        assert_eq!(guess_content_type(Path::new("a.tar.gz")), "application/gzip");
        assert_eq!(guess_content_type(Path::new("a.tgz")), "application/gzip");
        assert_eq!(guess_content_type(Path::new("a.zip")), "application/zip");
        assert_eq!(guess_content_type(Path::new("a.tex")), "text/plain");
        assert_eq!(guess_content_type(Path::new("noext")), "text/plain");
    }

    #[test]
    fn gzip_fallback_name_comes_from_the_file_stem() {
        assert_eq!(fallback_name(Path::new("2312.08472.gz")), "2312.08472.tex");
        assert_eq!(fallback_name(Path::new("dir/paper.zip")), "paper.tex");
    }
}

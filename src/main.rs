use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::Parser;
use quotealign::{coerce_multi_line, excerpt, quote_to_partial};
use rayon::prelude::*;

#[derive(Parser)]
#[command(
    version,
    about = "Recover the marked-up source behind a plain-text selection"
)]
struct Cli {
    #[command(flatten)]
    opts: QuoteOpts,
    /// Files holding the rich source text
    files: Vec<PathBuf>,
}

#[derive(clap::Args, Clone)]
struct QuoteOpts {
    /// Plain text the reader selected
    #[arg(long = "select", conflicts_with = "select_file")]
    select: Option<String>,
    /// Read the selected plain text from a file
    #[arg(long = "select-file", value_name = "PATH")]
    select_file: Option<PathBuf>,
    /// Treat the input as a complete [quote] block and narrow it
    #[arg(long = "quote-block")]
    quote_block: bool,
    /// Spread a single-line result over several lines
    #[arg(long = "multi-line")]
    multi_line: bool,
}

fn read_selection(opts: &QuoteOpts) -> anyhow::Result<String> {
    match (&opts.select, &opts.select_file) {
        (Some(text), _) => Ok(text.clone()),
        (None, Some(path)) => fs::read_to_string(path)
            .with_context(|| format!("reading selection from {}", path.display())),
        (None, None) => Ok(String::new()),
    }
}

fn quote_text(text: &str, selection: &str, opts: &QuoteOpts) -> String {
    let out = if opts.quote_block {
        quote_to_partial(text, selection)
    } else {
        excerpt(text, selection)
    };
    if opts.multi_line {
        coerce_multi_line(&out)
    } else {
        out
    }
}

fn quote_path(path: &Path, selection: &str, opts: &QuoteOpts) -> anyhow::Result<String> {
    let text =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(quote_text(&text, selection, opts))
}

/// Entry point for the command-line tool that quotes a selection out of rich text.
///
/// Reads the rich source from each file, or from standard input when no files
/// are given, and prints one aligned excerpt per input. Files are processed in
/// parallel and printed in argument order.
///
/// # Examples
///
/// ```sh
/// # Quote the source behind a selection
/// quotealign --select "hello world" post.txt
///
/// # Narrow a quote block read from standard input
/// cat reply.txt | quotealign --quote-block --select "hello world"
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let selection = read_selection(&cli.opts)?;

    if cli.files.is_empty() {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        println!("{}", quote_text(&input, &selection, &cli.opts));
        return Ok(());
    }

    let quoted = cli
        .files
        .par_iter()
        .map(|path| quote_path(path, &selection, &cli.opts))
        .collect::<anyhow::Result<Vec<_>>>()?;
    for text in quoted {
        println!("{text}");
    }

    Ok(())
}

//! Convert EPUB files to plain text.
//!
//! One linear pipeline: open the container, walk the spine, strip the markup
//! of each document, and join the results into a single `.txt` file next to
//! the input.

pub mod error;

use std::fs;
use std::path::{Path, PathBuf};

use epub::doc::EpubDoc;
use tracing::{debug, info, warn};

pub use crate::error::Error;

/// Extract the text of an EPUB as one string, documents in reading order.
///
/// With `skip_last` the final document is left out; it is often a note such
/// as "Thank you for purchasing this eBook".
pub fn text_from_epub(path: impl AsRef<Path>, skip_last: bool) -> Result<String, Error> {
    let path = path.as_ref();
    let mut doc = EpubDoc::new(path)?;

    let mut documents = Vec::new();
    loop {
        if let Some((markup, _mime)) = doc.get_current_str() {
            documents.push(markup);
        }
        if !doc.go_next() {
            break;
        }
    }
    if skip_last {
        documents.pop();
    }

    let mut texts = Vec::new();
    for (idx, markup) in documents.iter().enumerate() {
        // Large width so no hard line breaks get baked into the output.
        let plain = match html2text::from_read(markup.as_bytes(), 10_000) {
            Ok(plain) => plain,
            Err(err) => {
                warn!(document = idx, "html2text failed, keeping raw markup: {err}");
                markup.clone()
            }
        };
        if let Some(text) = flatten_lines(&plain) {
            texts.push(text);
        }
    }
    debug!(
        documents = documents.len(),
        kept = texts.len(),
        "Extracted document text"
    );
    Ok(texts.join("\n") + "\n")
}

/// Trim every line and drop the empty ones. `None` when nothing is left.
fn flatten_lines(text: &str) -> Option<String> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

/// Convert a single EPUB file, writing the text next to the input with a
/// `.txt` extension. Returns the output path.
pub fn convert_file(path: impl AsRef<Path>, skip_last: bool) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::NotAFile(path.display().to_string()));
    }
    let text = text_from_epub(path, skip_last)?;
    let output = path.with_extension("txt");
    fs::write(&output, text)?;
    info!(
        input = %path.display(),
        output = %output.display(),
        "Converted"
    );
    Ok(output)
}

/// Convert every file in `dir` whose name ends with `suffix`, non-recursively.
/// Returns the number of files converted; a failing file aborts the run.
pub fn convert_directory(
    dir: impl AsRef<Path>,
    suffix: &str,
    skip_last: bool,
) -> Result<usize, Error> {
    let dir = dir.as_ref();
    let mut inputs = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_file() {
            continue;
        }
        if entry.file_name().to_string_lossy().ends_with(suffix) {
            inputs.push(entry.path());
        }
    }
    inputs.sort();
    for input in &inputs {
        convert_file(input, skip_last)?;
    }
    Ok(inputs.len())
}

/*!
# Sample table parsing
Instrument exports are mostly free text; only lines with the following shape are call records:

```text
ANY* "->" WS+ ALLELE WS+ "(" TAG ")" ANY* WS ACCESSION (WS | EOL) ANY*
ALLELE    = [TAGC]+
TAG       = "het" | "homo" | "hom"
ACCESSION = "rs" DIGIT+
WS        = " " | "\t" | "\n" | "\r" | "\x0c" | "\x0b"
```

If a line contains several arrows, the right-most arrow that starts a complete record is used.
If several accessions follow the zygosity tag, the right-most one is used.
Every other line is ignored.

## Example usage
```rust
use snp_matcher::data_types::sample_calls::ZygosityTag;
use snp_matcher::parsing::sample_table::parse_call_line;

let (accession, call) = parse_call_line("foo -> T (het) bar rs1 baz").unwrap();
assert_eq!(accession, "rs1");
assert_eq!(call.allele(), "T");
assert_eq!(call.zygosity(), ZygosityTag::Het);

// free text without the arrow is not a record
assert!(parse_call_line("Exon 3 coverage OK rs1 ").is_none());
```
*/
use log::{debug, trace};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::data_types::sample_calls::{Call, SampleCalls, ZygosityTag};

/// Separates the free text prefix from the called allele
const ARROW: &str = "->";
/// Accession prefix for the loci we can call
const ACCESSION_PREFIX: &str = "rs";
/// The only characters allowed in a called allele
const NUCLEOTIDES: &[u8] = b"TAGC";
/// Closing forms of the zygosity tags, in the order we try them
const ZYGOSITY_TAGS: [(&str, ZygosityTag); 3] = [
    ("het)", ZygosityTag::Het),
    ("homo)", ZygosityTag::Homo),
    ("hom)", ZygosityTag::Hom)
];

#[derive(thiserror::Error, Debug)]
pub enum SampleTableError {
    #[error("sample table not found: {path:?}: {error}")]
    InputNotFound { path: PathBuf, error: std::io::Error },
    #[error("error while reading sample table {path:?}: {error}")]
    Io { path: PathBuf, error: std::io::Error }
}

/// Opens a sample table and parses all call records from it.
/// The file is closed before this returns.
/// # Arguments
/// * `filename` - the instrument export to parse
/// # Errors
/// * if the file cannot be opened or read
pub fn load_sample_table(filename: &Path) -> Result<SampleCalls, SampleTableError> {
    let file = File::open(filename)
        .map_err(|error| SampleTableError::InputNotFound { path: filename.to_path_buf(), error })?;
    let calls = parse_sample_table(BufReader::new(file))
        .map_err(|error| SampleTableError::Io { path: filename.to_path_buf(), error })?;
    debug!("Parsed {filename:?}: {} call lines, {} distinct loci", calls.matched_lines(), calls.len());
    Ok(calls)
}

/// Parses call records from any buffered reader.
/// Lines are decoded lossily since exports are not guaranteed to be UTF-8; the grammar itself is ASCII.
/// # Arguments
/// * `reader` - the text source
/// # Errors
/// * if reading from the source fails
pub fn parse_sample_table<R: BufRead>(reader: R) -> std::io::Result<SampleCalls> {
    let mut calls = SampleCalls::default();
    for raw_line in reader.split(b'\n') {
        let raw_line = raw_line?;
        let decoded = String::from_utf8_lossy(&raw_line);
        let line: &str = decoded.strip_suffix('\r').unwrap_or(&*decoded);
        if let Some((accession, call)) = parse_call_line(line) {
            trace!("Call record: {accession} -> {call:?}");
            if let Some(previous) = calls.insert(accession.clone(), call) {
                trace!("Overwriting earlier call for {accession}: {previous:?}");
            }
        }
    }
    Ok(calls)
}

/// Tokenizes a single line (without its terminator) into an accession and a call.
/// Returns `None` if the line is not a call record.
pub fn parse_call_line(line: &str) -> Option<(String, Call)> {
    let arrows: Vec<usize> = line.match_indices(ARROW)
        .map(|(i, _)| i)
        .collect();

    arrows.into_iter().rev()
        .find_map(|start| parse_after_arrow(&line[start + ARROW.len()..]))
}

/// Parses everything after a candidate arrow
fn parse_after_arrow(text: &str) -> Option<(String, Call)> {
    let text = skip_whitespace(text)?;

    // all nucleotides are ASCII, so the byte count is also a valid char boundary
    let allele_len = text.bytes()
        .take_while(|b| NUCLEOTIDES.contains(b))
        .count();
    if allele_len == 0 {
        return None;
    }
    let (allele, text) = text.split_at(allele_len);

    let text = skip_whitespace(text)?;
    let text = text.strip_prefix('(')?;
    let (zygosity, text) = ZYGOSITY_TAGS.iter()
        .find_map(|&(tag, zygosity)| {
            text.strip_prefix(tag).map(|rest| (zygosity, rest))
        })?;

    let accession = last_accession(text)?;
    Some((accession.to_string(), Call::new(allele.to_string(), zygosity)))
}

/// Whitespace in the record grammar is ASCII only: space, `\t`, `\n`, `\r`, `\x0c` and `\x0b`
fn is_record_space(c: char) -> bool {
    // char::is_ascii_whitespace leaves out the vertical tab
    c.is_ascii_whitespace() || c == '\x0b'
}

/// Requires at least one leading whitespace character and strips all of them
fn skip_whitespace(text: &str) -> Option<&str> {
    let trimmed = text.trim_start_matches(is_record_space);
    if trimmed.len() < text.len() {
        Some(trimmed)
    } else {
        None
    }
}

/// Finds the right-most accession token that is preceded by whitespace and followed by whitespace or the end of line
fn last_accession(text: &str) -> Option<&str> {
    text.char_indices()
        .filter(|&(_i, c)| is_record_space(c))
        .filter_map(|(i, c)| accession_at(&text[i + c.len_utf8()..]))
        .last()
}

/// Returns the accession if `text` starts with one
fn accession_at(text: &str) -> Option<&str> {
    let digits = text.strip_prefix(ACCESSION_PREFIX)?;
    let num_digits = digits.bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if num_digits == 0 {
        return None;
    }

    let end = ACCESSION_PREFIX.len() + num_digits;
    match text[end..].chars().next() {
        None => Some(&text[..end]),
        Some(c) if is_record_space(c) => Some(&text[..end]),
        Some(_) => None
    }
}

/// Derives a sample name from a table path by dropping the folder and the last extension
pub fn sample_name_from_path(filename: &Path) -> String {
    match filename.file_stem() {
        Some(stem) => stem.to_string_lossy().into_owned(),
        None => filename.display().to_string()
    }
}

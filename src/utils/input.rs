//! Loading texts and patterns
//!
//! Texts are handled as raw bytes. Files are memory-mapped and copied once
//! into the buffer the tree takes ownership of.

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Read a whole file as the text to index
pub fn read_text_file(path: &Path) -> Result<Vec<u8>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open text file {}", path.display()))?;
    let len = file
        .metadata()
        .with_context(|| format!("Failed to stat text file {}", path.display()))?
        .len();

    // Mapping an empty file fails on some platforms
    if len == 0 {
        return Ok(Vec::new());
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map text file {}", path.display()))?;
    Ok(mmap.to_vec())
}

/// Split input into whitespace-separated tokens
pub fn split_tokens(input: &[u8]) -> Vec<&[u8]> {
    input
        .split(|b| b.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Text and pattern as the first two whitespace-separated tokens of stdin
pub fn read_stdin_pair() -> Result<(Vec<u8>, Vec<u8>)> {
    let mut input = Vec::new();
    std::io::stdin()
        .lock()
        .read_to_end(&mut input)
        .context("Failed to read stdin")?;
    parse_pair(&input)
}

/// First two tokens of `input` as (text, pattern)
pub fn parse_pair(input: &[u8]) -> Result<(Vec<u8>, Vec<u8>)> {
    let tokens = split_tokens(input);
    match tokens.as_slice() {
        [text, pattern, ..] => Ok((text.to_vec(), pattern.to_vec())),
        _ => anyhow::bail!(
            "Expected a text and a pattern, found {} token(s)",
            tokens.len()
        ),
    }
}

/// Parse a byte given as decimal (`36`), hex (`0x24`) or a single ASCII char (`$`)
pub fn parse_byte(s: &str) -> Result<u8> {
    if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        return u8::from_str_radix(hex, 16).with_context(|| format!("Invalid hex byte: {}", s));
    }
    if let Ok(value) = s.parse::<u8>() {
        return Ok(value);
    }
    match s.as_bytes() {
        [b] if b.is_ascii() => Ok(*b),
        _ => anyhow::bail!("Invalid byte: {} (use 0-255, 0xNN or a single ASCII character)", s),
    }
}

//! Preparing caller text for a PDF literal string.
//!
//! Text goes through three steps before it reaches a content stream: it is trimmed and
//! cut to its first line ([`first_line`]), encoded to one byte per character
//! ([`encode_latin1`]), and escaped for the `( … )` literal syntax ([`escape_literal`]).

use crate::error::ValidationError;

/// Escape text so it can sit between the parentheses of a PDF literal string.
///
/// Backslashes are escaped before parentheses; the other order would escape the
/// backslashes that the parenthesis escapes introduce.
pub fn escape_literal(text: &str) -> String {
    text.replace('\\', "\\\\")
        .replace('(', "\\(")
        .replace(')', "\\)")
}

/// The trimmed text up to its first line break (`\n`, `\r\n`, or a lone `\r`).
/// Fails if nothing but whitespace remains.
pub fn first_line(text: &str) -> Result<&str, ValidationError> {
    text.trim()
        .split(['\n', '\r'])
        .next()
        .map(str::trim_end)
        .filter(|line| !line.is_empty())
        .ok_or(ValidationError::EmptyText)
}

/// Whether a character maps to a single byte under both Latin-1 and WinAnsiEncoding
pub fn is_encodable(ch: char) -> bool {
    matches!(ch, '\t' | ' '..='~' | '\u{A0}'..='\u{FF}')
}

/// Encode text as one byte per character. The first character that has no single-byte
/// form is reported with its character index.
pub fn encode_latin1(text: &str) -> Result<Vec<u8>, ValidationError> {
    text.chars()
        .enumerate()
        .map(|(index, character)| {
            if is_encodable(character) {
                Ok(character as u32 as u8)
            } else {
                Err(ValidationError::UnsupportedCharacter { character, index })
            }
        })
        .collect()
}

/// Validate caller text and produce the escaped bytes of the line that will be shown.
pub fn prepare(text: &str) -> Result<Vec<u8>, ValidationError> {
    let line = first_line(text)?;
    // validate before escaping so indices count characters of the shown line
    encode_latin1(line)?;
    encode_latin1(&escape_literal(line))
}

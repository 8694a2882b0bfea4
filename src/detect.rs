//! Input format detection and validation.

use crate::error::{Error, Result};

/// Recognized input formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// Plain UTF-8 text without structure
    PlainText,
    /// A serialized [`Document`](crate::Document) (`{"text": ..., "elements": [...]}`)
    DocumentJson,
    /// A Docs-style structure (`{"body": {"content": [...]}}`)
    DocsJson,
}

impl std::fmt::Display for InputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            InputFormat::PlainText => "plain text",
            InputFormat::DocumentJson => "document JSON",
            InputFormat::DocsJson => "Docs JSON",
        };
        f.write_str(name)
    }
}

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Decode input bytes as UTF-8, dropping a leading byte order mark.
///
/// # Returns
/// * `Err(Error::Encoding)` if the bytes are not valid UTF-8
/// * `Err(Error::UnknownFormat)` if the bytes look binary (contain NUL)
pub fn decode_text(data: &[u8]) -> Result<&str> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    if data.contains(&0) {
        return Err(Error::UnknownFormat);
    }
    std::str::from_utf8(data).map_err(|e| {
        Error::Encoding(format!(
            "input is not valid UTF-8 (invalid byte at offset {})",
            e.valid_up_to()
        ))
    })
}

/// Detect the input format from bytes.
///
/// JSON objects with a `body` key are Docs structures, those with a `text`
/// key are serialized documents; anything else that decodes is plain text.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<InputFormat> {
    let text = decode_text(data)?;
    Ok(detect_format_from_str(text))
}

/// Detect the input format of already-decoded text.
pub fn detect_format_from_str(text: &str) -> InputFormat {
    let trimmed = text.trim_start();
    if !trimmed.starts_with('{') {
        return InputFormat::PlainText;
    }
    match serde_json::from_str::<serde_json::Value>(trimmed) {
        Ok(serde_json::Value::Object(map)) if map.contains_key("body") => InputFormat::DocsJson,
        Ok(serde_json::Value::Object(map)) if map.contains_key("text") => {
            InputFormat::DocumentJson
        }
        _ => InputFormat::PlainText,
    }
}

/// Check if bytes decode as analyzable input.
pub fn is_supported(data: &[u8]) -> bool {
    decode_text(data).is_ok()
}

//! Rendering of analysis reports to output formats.

mod json;
mod markdown;

pub use json::{from_json, to_json, JsonFormat};
pub use markdown::{to_markdown, MarkdownRenderer};

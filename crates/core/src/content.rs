//! Content rendering: raw HTML passthrough and block-document conversion.
//!
//! Post bodies exist in two encodings. Older rows hold raw HTML, which is
//! injected verbatim. Newer rows hold a block document: an ordered
//! list of typed blocks (`{ time, version, blocks: [...] }`) produced by
//! the admin rich-text editor. Rendering preserves block order; a block
//! of an unknown type is skipped, never an error.

use serde::Deserialize;
use serde_json::Value;

/// A block document as stored in `posts.body`.
#[derive(Debug, Deserialize)]
pub struct BlockDocument {
    pub blocks: Vec<Block>,
}

/// A single typed block. `data` stays loosely typed until dispatch so a
/// malformed block degrades to a skip instead of failing the document.
#[derive(Debug, Deserialize)]
pub struct Block {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Deserialize)]
struct HeaderData {
    text: String,
    #[serde(default = "default_header_level")]
    level: u8,
}

fn default_header_level() -> u8 {
    2
}

#[derive(Debug, Deserialize)]
struct ParagraphData {
    text: String,
}

#[derive(Debug, Deserialize)]
struct ListData {
    #[serde(default)]
    style: String,
    items: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    file: ImageFile,
    #[serde(default)]
    caption: String,
}

#[derive(Debug, Deserialize)]
struct ImageFile {
    url: String,
}

#[derive(Debug, Deserialize)]
struct TableData {
    content: Vec<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct EmbedData {
    embed: String,
    #[serde(default)]
    caption: String,
}

#[derive(Debug, Deserialize)]
struct QuoteData {
    text: String,
    #[serde(default)]
    caption: String,
}

#[derive(Debug, Deserialize)]
struct RawData {
    html: String,
}

/// Render a stored body to HTML.
///
/// Bodies that parse as a block document are converted block by block;
/// anything else is treated as raw HTML and returned verbatim.
pub fn render(body: &str) -> String {
    match serde_json::from_str::<BlockDocument>(body) {
        Ok(doc) => render_blocks(&doc),
        Err(_) => body.to_string(),
    }
}

/// Convert a block document to an HTML string, preserving block order.
pub fn render_blocks(doc: &BlockDocument) -> String {
    let mut html = String::new();
    for block in &doc.blocks {
        html.push_str(&render_block(block));
    }
    html
}

fn render_block(block: &Block) -> String {
    match block.kind.as_str() {
        "header" => match HeaderData::deserialize(&block.data) {
            Ok(data) => {
                let level = data.level.clamp(1, 6);
                format!("<h{level}>{}</h{level}>", escape_text(&data.text))
            }
            Err(_) => String::new(),
        },
        // Paragraph text carries the editor's inline markup (bold, links)
        // and is injected as-is.
        "paragraph" => match ParagraphData::deserialize(&block.data) {
            Ok(data) => format!("<p>{}</p>", data.text),
            Err(_) => String::new(),
        },
        "list" => match ListData::deserialize(&block.data) {
            Ok(data) => {
                let tag = if data.style == "ordered" { "ol" } else { "ul" };
                let mut out = format!("<{tag}>");
                for item in &data.items {
                    out.push_str("<li>");
                    out.push_str(&escape_text(item));
                    out.push_str("</li>");
                }
                out.push_str(&format!("</{tag}>"));
                out
            }
            Err(_) => String::new(),
        },
        "image" => match ImageData::deserialize(&block.data) {
            Ok(data) => format!(
                "<figure><img src=\"{}\" alt=\"{}\" /><figcaption>{}</figcaption></figure>",
                escape_attr(&data.file.url),
                escape_attr(&data.caption),
                escape_text(&data.caption)
            ),
            Err(_) => String::new(),
        },
        "table" => match TableData::deserialize(&block.data) {
            Ok(data) => {
                let mut out = String::from("<table>");
                for row in &data.content {
                    out.push_str("<tr>");
                    for cell in row {
                        out.push_str("<td>");
                        out.push_str(&escape_text(cell));
                        out.push_str("</td>");
                    }
                    out.push_str("</tr>");
                }
                out.push_str("</table>");
                out
            }
            Err(_) => String::new(),
        },
        "embed" => match EmbedData::deserialize(&block.data) {
            Ok(data) => format!(
                "<figure><iframe src=\"{}\" frameborder=\"0\" allowfullscreen></iframe><figcaption>{}</figcaption></figure>",
                escape_attr(&data.embed),
                escape_text(&data.caption)
            ),
            Err(_) => String::new(),
        },
        "quote" => match QuoteData::deserialize(&block.data) {
            Ok(data) => format!(
                "<blockquote><p>{}</p><cite>{}</cite></blockquote>",
                data.text,
                escape_text(&data.caption)
            ),
            Err(_) => String::new(),
        },
        "delimiter" => "<hr />".to_string(),
        "raw" => match RawData::deserialize(&block.data) {
            Ok(data) => data.html,
            Err(_) => String::new(),
        },
        // Unknown block types must not crash the conversion.
        _ => String::new(),
    }
}

/// Escape text for element content.
fn escape_text(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Escape text for a double-quoted attribute value.
fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}

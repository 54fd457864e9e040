//! Single-pass serializer for the minimal report document.
//!
//! The document is five objects in a fixed order: catalog, pages, page,
//! contents, font. Offsets are recorded while the objects are written and the
//! cross-reference table is emitted from those recordings — nothing is
//! backpatched, so drift between a recorded and an actual position is caught
//! as [`RenderError::Invariant`] instead of silently corrupting the file.

use crate::content;
use crate::RenderError;
use chrono::{DateTime, Utc};
use markbook_types::Record;

const HEADER: &[u8] = b"%PDF-1.4\n";

// US Letter media box, points.
const PAGE_WIDTH: u32 = 612;
const PAGE_HEIGHT: u32 = 792;

// Text column geometry.
const FONT_RESOURCE: &str = "F1";
const FONT_SIZE: u32 = 11;
const LEADING: u32 = 16;
const MARGIN_LEFT: u32 = 72;
const TOP_BASELINE: u32 = 768;

// Object ids are positional: the writer numbers objects in the order they are
// added, so the fixed five-object layout pins each role's id.
const CATALOG_ID: u32 = 1;
const PAGES_ID: u32 = 2;
const PAGE_ID: u32 = 3;
const CONTENTS_ID: u32 = 4;
const FONT_ID: u32 = 5;

/// Renders `record` into a complete single-page document.
///
/// Given well-formed text this always succeeds; the error paths are the
/// escaper meeting a character it cannot represent and the writer's own
/// offset cross-check.
pub fn render(record: &Record, generated_at: DateTime<Utc>) -> Result<Vec<u8>, RenderError> {
    let lines = content::report_lines(record, generated_at);
    render_lines(&lines)
}

fn render_lines(lines: &[String]) -> Result<Vec<u8>, RenderError> {
    let stream = content_stream(lines)?;

    let mut writer = DocumentWriter::new();
    let ids = [
        writer.add(format!("<< /Type /Catalog /Pages {PAGES_ID} 0 R >>")),
        writer.add(format!(
            "<< /Type /Pages /Kids [{PAGE_ID} 0 R] /Count 1 >>"
        )),
        writer.add(format!(
            "<< /Type /Page /Parent {PAGES_ID} 0 R \
             /MediaBox [0 0 {PAGE_WIDTH} {PAGE_HEIGHT}] \
             /Contents {CONTENTS_ID} 0 R \
             /Resources << /Font << /{FONT_RESOURCE} {FONT_ID} 0 R >> >> >>"
        )),
        writer.add(stream_object(&stream)),
        writer.add("<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica >>".to_string()),
    ];

    if ids != [CATALOG_ID, PAGES_ID, PAGE_ID, CONTENTS_ID, FONT_ID] {
        return Err(RenderError::Invariant(
            "object ids drifted from the fixed five-object layout".to_string(),
        ));
    }

    let out = writer.finish(CATALOG_ID)?;
    log::debug!("rendered report document ({} bytes)", out.len());
    Ok(out)
}

/// Wraps a content stream body in its stream object. The declared `/Length`
/// counts exactly the bytes between the `stream` and `endstream` keyword
/// lines.
fn stream_object(body: &str) -> String {
    format!("<< /Length {} >>\nstream\n{}\nendstream", body.len(), body)
}

/// Builds the page content stream body: text block setup, then one
/// vertical-advance instruction followed by one text-show instruction per
/// line.
fn content_stream(lines: &[String]) -> Result<String, RenderError> {
    let mut ops = String::new();
    ops.push_str("BT\n");
    ops.push_str(&format!("/{FONT_RESOURCE} {FONT_SIZE} Tf\n"));
    ops.push_str(&format!("{MARGIN_LEFT} {TOP_BASELINE} Td\n"));
    for line in lines {
        ops.push_str(&format!("0 -{LEADING} Td\n"));
        ops.push_str(&format!("({}) Tj\n", escape_text(line)?));
    }
    ops.push_str("ET");
    Ok(ops)
}

/// Escapes the characters reserved by the literal-string syntax, plus the
/// whitespace controls that would otherwise break an instruction mid-string.
/// Text is otherwise treated as opaque bytes.
fn escape_text(text: &str) -> Result<String, RenderError> {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '(' => escaped.push_str("\\("),
            ')' => escaped.push_str("\\)"),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            ch if ch.is_control() => {
                return Err(RenderError::Encode(format!(
                    "control character U+{:04X} has no literal-string escape",
                    ch as u32
                )));
            }
            ch => escaped.push(ch),
        }
    }
    Ok(escaped)
}

/// Ordered object collection serialized in one pass.
struct DocumentWriter {
    objects: Vec<String>,
}

impl DocumentWriter {
    fn new() -> Self {
        Self {
            objects: Vec::new(),
        }
    }

    /// Appends an object body and returns the id it was assigned. Ids are
    /// sequential from 1 in insertion order.
    fn add(&mut self, body: String) -> u32 {
        self.objects.push(body);
        self.objects.len() as u32
    }

    /// Serializes header, objects, cross-reference table and trailer.
    ///
    /// A running byte-offset accumulator is threaded through the pass: each
    /// object's start is recorded the moment it is written, the table is
    /// emitted from those recordings, and a final cross-check refuses to
    /// return a document whose table does not point where it claims.
    fn finish(self, root_id: u32) -> Result<Vec<u8>, RenderError> {
        let mut out: Vec<u8> = Vec::with_capacity(1024);
        out.extend_from_slice(HEADER);

        // Entry 0 is the synthetic free-list head; real objects start at 1.
        let mut offsets: Vec<usize> = Vec::with_capacity(self.objects.len() + 1);
        offsets.push(0);

        for (index, body) in self.objects.iter().enumerate() {
            offsets.push(out.len());
            out.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", index + 1, body).as_bytes());
        }

        let xref_start = out.len();
        out.extend_from_slice(format!("xref\n0 {}\n", self.objects.len() + 1).as_bytes());
        out.extend_from_slice(b"0000000000 65535 f \n");
        for offset in &offsets[1..] {
            out.extend_from_slice(format!("{offset:010} 00000 n \n").as_bytes());
        }

        out.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root {} 0 R >>\nstartxref\n{}\n%%EOF",
                self.objects.len() + 1,
                root_id,
                xref_start
            )
            .as_bytes(),
        );

        verify_offsets(&out, &offsets)?;
        Ok(out)
    }
}

/// Confirms each recorded offset is the exact byte where `N 0 obj` begins.
fn verify_offsets(out: &[u8], offsets: &[usize]) -> Result<(), RenderError> {
    for (id, &offset) in offsets.iter().enumerate().skip(1) {
        let marker = format!("{id} 0 obj");
        if !out[offset..].starts_with(marker.as_bytes()) {
            return Err(RenderError::Invariant(format!(
                "object {id} recorded at byte {offset} but not serialized there"
            )));
        }
    }
    Ok(())
}

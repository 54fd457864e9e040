//! Structural properties of the rendered document: declared stream length,
//! cross-reference offsets, trailer size, and offset-driven recovery of the
//! object graph.

use chrono::{DateTime, TimeZone, Utc};
use markbook_pdf::render;
use markbook_types::Record;

fn generated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 17, 10, 30, 0).unwrap()
}

fn sample_record() -> Record {
    Record {
        id: 42,
        name: "Maya Iyer".to_string(),
        email: "maya@example.com".to_string(),
        phone: "555-0100".to_string(),
        class: "10".to_string(),
        section: "B".to_string(),
        roll: 7,
        system_access: true,
        guardian_name: "Ravi Iyer".to_string(),
        guardian_phone: "555-0101".to_string(),
        relation_of_guardian: "Father".to_string(),
        current_address: "12 Elm Street".to_string(),
        permanent_address: "34 Oak Avenue".to_string(),
        admission_date: "2020-01-15T00:00:00Z".to_string(),
        reporter_name: "A. Clerk".to_string(),
    }
}

fn rendered() -> String {
    let bytes = render(&sample_record(), generated_at()).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// Parses the cross-reference table using only the document's own
/// `startxref` pointer, returning the recorded offset per object id.
fn xref_offsets(doc: &str) -> Vec<usize> {
    let startxref = doc
        .rfind("startxref\n")
        .expect("document has a startxref keyword");
    let after = &doc[startxref + "startxref\n".len()..];
    let xref_start: usize = after
        .lines()
        .next()
        .expect("startxref is followed by an offset")
        .trim()
        .parse()
        .expect("startxref offset is numeric");

    let table = &doc[xref_start..];
    assert!(table.starts_with("xref\n"), "startxref points at the table");

    let mut lines = table.lines();
    assert_eq!(lines.next(), Some("xref"));
    let subsection = lines.next().expect("table has a subsection header");
    let count: usize = subsection
        .split_whitespace()
        .nth(1)
        .expect("subsection header has a count")
        .parse()
        .unwrap();

    let free_head = lines.next().expect("table has a free-list head entry");
    assert_eq!(free_head, "0000000000 65535 f ");

    let mut offsets = Vec::new();
    for _ in 1..count {
        let entry = lines.next().expect("table has an entry per object");
        assert_eq!(entry.len(), 19, "fixed-width entry: {entry:?}");
        assert!(entry.ends_with(" 00000 n "));
        offsets.push(entry[..10].parse().unwrap());
    }
    offsets
}

#[test]
fn starts_with_the_version_header() {
    assert!(rendered().starts_with("%PDF-1.4\n"));
}

#[test]
fn trailer_counts_objects_plus_free_list_head() {
    let doc = rendered();
    assert!(doc.contains("trailer\n<< /Size 6 /Root 1 0 R >>"));
    assert!(doc.ends_with("%%EOF"));
}

#[test]
fn xref_offsets_point_at_each_object() {
    let doc = rendered();
    let offsets = xref_offsets(&doc);
    assert_eq!(offsets.len(), 5);

    for (index, &offset) in offsets.iter().enumerate() {
        let marker = format!("{} 0 obj\n", index + 1);
        assert!(
            doc[offset..].starts_with(&marker),
            "object {} recorded at {} but found {:?}",
            index + 1,
            offset,
            &doc[offset..offset + 12.min(doc.len() - offset)]
        );
    }
}

#[test]
fn offsets_recover_the_five_objects_in_order() {
    let doc = rendered();
    let offsets = xref_offsets(&doc);

    // Offsets must be strictly increasing: objects are serialized in id
    // order in a single pass.
    assert!(offsets.windows(2).all(|pair| pair[0] < pair[1]));

    let bodies: Vec<&str> = offsets
        .iter()
        .map(|&offset| {
            let end = doc[offset..]
                .find("endobj")
                .expect("object terminates with endobj");
            &doc[offset..offset + end]
        })
        .collect();

    assert!(bodies[0].contains("/Type /Catalog"));
    assert!(bodies[1].contains("/Type /Pages"));
    assert!(bodies[2].contains("/Type /Page "));
    assert!(bodies[3].contains("stream"));
    assert!(bodies[4].contains("/BaseFont /Helvetica"));

    // The reference graph stays inside the document: catalog -> pages ->
    // page -> contents/font.
    assert!(bodies[0].contains("/Pages 2 0 R"));
    assert!(bodies[1].contains("/Kids [3 0 R]"));
    assert!(bodies[2].contains("/Contents 4 0 R"));
    assert!(bodies[2].contains("/F1 5 0 R"));
}

#[test]
fn declared_stream_length_matches_the_body() {
    let doc = rendered();

    let length_at = doc.find("/Length ").expect("contents declares a length");
    let declared: usize = doc[length_at + "/Length ".len()..]
        .split_whitespace()
        .next()
        .unwrap()
        .parse()
        .unwrap();

    let body_start = doc.find("stream\n").expect("contents has a stream keyword") + "stream\n".len();
    let body_end = doc.find("\nendstream").expect("contents has an endstream keyword");
    assert_eq!(declared, body_end - body_start);
}

#[test]
fn report_text_appears_as_show_instructions() {
    let doc = rendered();
    assert!(doc.contains("(STUDENT REPORT) Tj"));
    assert!(doc.contains("(Name: Maya Iyer) Tj"));
    assert!(doc.contains("(Admission Date: 15-Jan-2020) Tj"));
    assert!(doc.contains("(Generated on: 17-May-2024 10:30:00) Tj"));
}

#[test]
fn reserved_characters_are_escaped_in_the_stream() {
    let record = Record {
        name: r"Weird (name) with \ inside".to_string(),
        ..sample_record()
    };
    let doc = String::from_utf8(render(&record, generated_at()).unwrap()).unwrap();

    assert!(doc.contains(r"(Name: Weird \(name\) with \\ inside) Tj"));
    // The structure is unaffected: the table still resolves.
    let offsets = xref_offsets(&doc);
    assert_eq!(offsets.len(), 5);
}

#[test]
fn rendering_is_deterministic() {
    let first = render(&sample_record(), generated_at()).unwrap();
    let second = render(&sample_record(), generated_at()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_record_still_renders_a_valid_document() {
    let doc = String::from_utf8(render(&Record::default(), generated_at()).unwrap()).unwrap();
    let offsets = xref_offsets(&doc);
    assert_eq!(offsets.len(), 5);
    assert!(doc.contains("(Admission Date: ) Tj"));
}

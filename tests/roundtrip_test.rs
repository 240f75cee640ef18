//! Library-level tests covering parse → emit → read-back.

use depxml::diagnostics::Diagnostics;
use depxml::models::Dependency;
use depxml::parser::{self, MalformedLinePolicy};
use depxml::xml;
use pretty_assertions::assert_eq;
use std::io::Cursor;
use std::path::Path;

const INPUT: &str = "\
groupId = org.apache.commons;
artifactId = commons-lang3;
version = 3.14.0;

groupId = com.google.guava;
artifactId = guava;
version = 33.0.0-jre;

groupId = junit;
artifactId = junit;
version = 4.13.2;
";

fn parse(input: &str) -> Vec<Dependency> {
    parser::parse_reader(
        Cursor::new(input),
        Path::new("inline.txt"),
        MalformedLinePolicy::Skip,
        &mut Diagnostics::new(),
    )
    .unwrap()
}

#[test]
fn test_emitted_document_reads_back() {
    let deps = parse(INPUT);
    assert_eq!(deps.len(), 3);

    let mut output = Vec::new();
    xml::write(&mut output, &deps, false).unwrap();

    let read_back = xml::parse(Cursor::new(output)).unwrap();
    assert_eq!(read_back, deps);
    assert_eq!(read_back[1].artifact_id(), "guava");
    assert_eq!(read_back[1].version(), "33.0.0-jre");
}

#[test]
fn test_emitter_is_deterministic() {
    let deps = parse(INPUT);

    let mut first = Vec::new();
    xml::write(&mut first, &deps, false).unwrap();
    let mut second = Vec::new();
    xml::write(&mut second, &deps, false).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_windows_line_endings() {
    let deps = parse("groupId = g;\r\nartifactId = a;\r\nversion = 1;\r\n");
    assert_eq!(deps, vec![Dependency::new("g", "a", "1").unwrap()]);
}

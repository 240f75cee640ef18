//! `<dependencies>` XML writer and reader.
//!
//! The writer produces a fixed layout, four spaces per nesting level and no
//! newline after the closing root tag:
//!
//! ```text
//! <dependencies>
//!     <dependency>
//!         <groupId>org.example</groupId>
//!         <artifactId>mylib</artifactId>
//!         <version>1.2.3</version>
//!     </dependency>
//! </dependencies>
//! ```
//!
//! Field values are written verbatim unless escaping is requested.

use crate::errors::ConverterError;
use crate::models::Dependency;
use quick_xml::de::from_reader;
use quick_xml::escape::escape;
use serde::Deserialize;
use std::borrow::Cow;
use std::fs::File;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

fn field_text(value: &str, escape_values: bool) -> Cow<'_, str> {
    if escape_values {
        escape(value)
    } else {
        Cow::Borrowed(value)
    }
}

/// Write the dependency list as XML.
pub fn write<W: Write>(
    mut writer: W,
    dependencies: &[Dependency],
    escape_values: bool,
) -> io::Result<()> {
    writer.write_all(b"<dependencies>\n")?;
    for dependency in dependencies {
        writeln!(writer, "    <dependency>")?;
        writeln!(
            writer,
            "        <groupId>{}</groupId>",
            field_text(dependency.group_id(), escape_values)
        )?;
        writeln!(
            writer,
            "        <artifactId>{}</artifactId>",
            field_text(dependency.artifact_id(), escape_values)
        )?;
        writeln!(
            writer,
            "        <version>{}</version>",
            field_text(dependency.version(), escape_values)
        )?;
        writeln!(writer, "    </dependency>")?;
    }
    writer.write_all(b"</dependencies>")?;
    writer.flush()
}

/// Create (or truncate) `path` and write the dependency list to it.
///
/// A failure may leave the file partially written.
pub fn write_file(
    path: &Path,
    dependencies: &[Dependency],
    escape_values: bool,
) -> Result<(), ConverterError> {
    File::create(path)
        .and_then(|file| write(BufWriter::new(file), dependencies, escape_values))
        .map_err(|e| ConverterError::write(path, e))
}

#[derive(Debug, Deserialize)]
#[serde(rename = "dependencies")]
struct DependencyList {
    #[serde(rename = "dependency", default)]
    dependencies: Vec<Dependency>,
}

/// Read a `<dependencies>` document back into records.
pub fn parse<R: BufRead>(reader: R) -> Result<Vec<Dependency>, ConverterError> {
    let list: DependencyList = from_reader(reader).map_err(|e| {
        ConverterError::ParseError(format!("Failed to parse dependencies XML: {}", e))
    })?;
    Ok(list.dependencies)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn render(dependencies: &[Dependency], escape_values: bool) -> String {
        let mut output = Vec::new();
        write(&mut output, dependencies, escape_values).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_write_single_dependency() {
        let deps = vec![Dependency::new("org.example", "mylib", "1.2.3").unwrap()];
        let expected = "<dependencies>\n    <dependency>\n        <groupId>org.example</groupId>\n        <artifactId>mylib</artifactId>\n        <version>1.2.3</version>\n    </dependency>\n</dependencies>";
        assert_eq!(render(&deps, false), expected);
    }

    #[test]
    fn test_write_empty_list() {
        assert_eq!(render(&[], false), "<dependencies>\n</dependencies>");
    }

    #[test]
    fn test_values_written_verbatim_by_default() {
        let deps = vec![Dependency::new("a&b", "<x>", "1").unwrap()];
        let xml = render(&deps, false);
        assert!(xml.contains("<groupId>a&b</groupId>"));
        assert!(xml.contains("<artifactId><x></artifactId>"));
    }

    #[test]
    fn test_values_escaped_on_request() {
        let deps = vec![Dependency::new("a&b", "<x>", "\"1\"").unwrap()];
        let xml = render(&deps, true);
        assert!(xml.contains("<groupId>a&amp;b</groupId>"));
        assert!(xml.contains("<artifactId>&lt;x&gt;</artifactId>"));
        assert!(xml.contains("<version>&quot;1&quot;</version>"));
    }

    #[test]
    fn test_parse_reads_back_written_document() {
        let deps = vec![
            Dependency::new("org.example", "mylib", "1.2.3").unwrap(),
            Dependency::new("com.acme", "widgets", "4.0.0-SNAPSHOT").unwrap(),
        ];
        let xml = render(&deps, false);
        assert_eq!(parse(Cursor::new(xml)).unwrap(), deps);
    }

    #[test]
    fn test_parse_unescapes_escaped_values() {
        let deps = vec![Dependency::new("a&b", "<x>", "1").unwrap()];
        let xml = render(&deps, true);
        assert_eq!(parse(Cursor::new(xml)).unwrap(), deps);
    }

    #[test]
    fn test_parse_empty_document() {
        assert!(parse(Cursor::new("<dependencies>\n</dependencies>")).unwrap().is_empty());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse(Cursor::new("<dependencies><dependency><groupId>g</groupId>")).is_err());
    }
}

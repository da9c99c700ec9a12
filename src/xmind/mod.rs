//! XMind container reading.
//!
//! An `.xmind` file is a ZIP archive whose `content.json` member holds a JSON
//! array of sheets. Reading is split into two independent steps:
//!
//! - [`extract_member`]: pull the raw bytes of one named archive member
//! - [`parse_sheets`]: deserialize those bytes into [`Sheet`] trees
//!
//! [`read_xmind`] and [`read_xmind_from_reader`] compose both.

use std::io::{Read, Seek};
use std::path::Path;

use serde::Deserialize;
use serde_json::error::Category;
use tracing::debug;
use zip::ZipArchive;

use crate::error::{Error, Result};
use crate::model::Sheet;

/// Name of the archive member holding the sheet array.
pub const CONTENT_MEMBER: &str = "content.json";

/// Read an XMind file from disk into its sheets.
///
/// # Example
///
/// ```no_run
/// use xmind2md::read_xmind;
///
/// let sheets = read_xmind("path/to/map.xmind")?;
/// for sheet in &sheets {
///     println!("{}", sheet.title);
/// }
/// # Ok::<(), xmind2md::Error>(())
/// ```
pub fn read_xmind<P: AsRef<Path>>(path: P) -> Result<Vec<Sheet>> {
    let path = path.as_ref();
    debug!("opening {}", path.display());
    let file = std::fs::File::open(path)?;
    read_xmind_from_reader(file)
}

/// Read an XMind document from any [`Read`] + [`Seek`] source.
///
/// Useful for reading from memory buffers.
///
/// ```no_run
/// use std::io::Cursor;
/// use xmind2md::xmind::read_xmind_from_reader;
///
/// let data: Vec<u8> = std::fs::read("map.xmind")?;
/// let sheets = read_xmind_from_reader(Cursor::new(data))?;
/// # Ok::<(), xmind2md::Error>(())
/// ```
pub fn read_xmind_from_reader<R: Read + Seek>(reader: R) -> Result<Vec<Sheet>> {
    let bytes = extract_member(reader, CONTENT_MEMBER)?;
    parse_sheets(&bytes)
}

/// Return the bytes of the archive member called `name`.
///
/// Directory entries never match. A missing member is reported as
/// [`Error::MissingMember`], separate from ZIP and parse failures.
pub fn extract_member<R: Read + Seek>(reader: R, name: &str) -> Result<Vec<u8>> {
    let mut archive = ZipArchive::new(reader)?;

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        if file.is_dir() || file.name() != name {
            continue;
        }

        debug!("{name} found ({} bytes)", file.size());
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        return Ok(data);
    }

    Err(Error::MissingMember(name.to_string()))
}

/// Deserialize a `content.json` payload into its sheets.
///
/// Syntax errors surface as [`Error::Json`]; well-formed JSON of the wrong
/// shape (an object, or an array of non-sheets) as [`Error::InvalidDocument`].
///
/// Topic trees may nest arbitrarily deep, so serde_json's recursion limit
/// is lifted and the stack grows on demand while descending.
pub fn parse_sheets(bytes: &[u8]) -> Result<Vec<Sheet>> {
    let mut de = serde_json::Deserializer::from_slice(bytes);
    de.disable_recursion_limit();
    let sheets = Vec::<Sheet>::deserialize(serde_stacker::Deserializer::new(&mut de))
        .map_err(classify)?;
    de.end()?;

    debug!("parsed {} sheet(s)", sheets.len());
    Ok(sheets)
}

fn classify(err: serde_json::Error) -> Error {
    match err.classify() {
        Category::Data => Error::InvalidDocument(err.to_string()),
        _ => Error::Json(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::ZipWriter;
    use zip::write::SimpleFileOptions;

    fn build_archive(members: &[(&str, &[u8])]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options = SimpleFileOptions::default();
        for (name, data) in members {
            zip.start_file(*name, options).unwrap();
            zip.write_all(data).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    const CONTENT: &[u8] = br#"[{"id":"s1","title":"Plan","rootTopic":{"id":"r","title":"Root"}}]"#;

    #[test]
    fn test_extract_member() {
        let archive = build_archive(&[("metadata.json", &b"{}"[..]), ("content.json", CONTENT)]);
        let data = extract_member(Cursor::new(archive), CONTENT_MEMBER).unwrap();
        assert_eq!(data, CONTENT);
    }

    #[test]
    fn test_extract_member_missing() {
        let archive = build_archive(&[("content.xml", &b"<xmap-content/>"[..])]);
        let err = extract_member(Cursor::new(archive), CONTENT_MEMBER).unwrap_err();
        assert!(matches!(err, Error::MissingMember(ref name) if name == "content.json"));
    }

    #[test]
    fn test_extract_member_ignores_nested_path() {
        let archive = build_archive(&[("Thumbnails/content.json", CONTENT)]);
        let err = extract_member(Cursor::new(archive), CONTENT_MEMBER).unwrap_err();
        assert!(matches!(err, Error::MissingMember(_)));
    }

    #[test]
    fn test_not_a_zip() {
        let err = extract_member(Cursor::new(b"plain text".to_vec()), CONTENT_MEMBER).unwrap_err();
        assert!(matches!(err, Error::Zip(_)));
    }

    #[test]
    fn test_parse_sheets() {
        let sheets = parse_sheets(CONTENT).unwrap();
        assert_eq!(sheets.len(), 1);
        assert_eq!(sheets[0].title, "Plan");
        assert_eq!(sheets[0].root_topic.title, "Root");
    }

    #[test]
    fn test_parse_sheets_syntax_error() {
        let err = parse_sheets(b"[{").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_parse_sheets_wrong_shape() {
        let err = parse_sheets(br#"{"title": "not an array"}"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));

        let err = parse_sheets(br#"[{"title": "no root"}]"#).unwrap_err();
        assert!(matches!(err, Error::InvalidDocument(_)));
    }

    #[test]
    fn test_parse_sheets_trailing_garbage() {
        let mut bytes = CONTENT.to_vec();
        bytes.extend_from_slice(b" ]");
        assert!(matches!(parse_sheets(&bytes).unwrap_err(), Error::Json(_)));
    }

    #[test]
    fn test_parse_deeply_nested_topics() {
        const DEPTH: usize = 20_000;
        let mut json = String::from(r#"[{"id":"s","title":"Deep","rootTopic":"#);
        for i in 0..DEPTH {
            json.push_str(&format!(r#"{{"id":"n{i}","title":"n{i}","children":{{"attached":["#));
        }
        json.push_str(r#"{"id":"leaf","title":"leaf"}"#);
        for _ in 0..DEPTH {
            json.push_str("]}}");
        }
        json.push_str("}]");

        let sheets = parse_sheets(json.as_bytes()).unwrap();
        assert_eq!(sheets[0].root_topic.title, "n0");
        assert_eq!(sheets[0].root_topic.subtree_len(), DEPTH + 1);
    }

    #[test]
    fn test_read_xmind_from_reader() {
        let archive = build_archive(&[("content.json", CONTENT)]);
        let sheets = read_xmind_from_reader(Cursor::new(archive)).unwrap();
        assert_eq!(sheets[0].id, "s1");
    }
}

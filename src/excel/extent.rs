//! Physical row extents of the first worksheet
//!
//! calamine skips cells that carry a style but no value (`<c r="C2" s="1"/>`).
//! That is how the exporter stores empty cells, and how Excel stores a cell
//! whose content was cleared. A row holding such a cell is still full width,
//! so the sheet XML is scanned once for the last `<c>` element of every row.

use crate::error::{LabelError, LabelResult};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufRead, BufReader, Read, Seek};
use std::path::Path;
use zip::ZipArchive;

/// Zero-based row index → number of cells up to its last physical cell
pub type RowExtents = BTreeMap<u32, u32>;

const WORKBOOK_PART: &str = "xl/workbook.xml";
const WORKBOOK_RELS_PART: &str = "xl/_rels/workbook.xml.rels";

/// Scan the first worksheet of an .xlsx file for its row extents
pub fn read_row_extents(path: &Path) -> LabelResult<RowExtents> {
    let file = File::open(path)?;
    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(archive_error)?;

    let sheet_part = first_sheet_part(&mut archive)?;
    let sheet = archive.by_name(&sheet_part).map_err(archive_error)?;
    scan_rows(BufReader::new(sheet))
}

/// Resolve the archive path of the first `<sheet>` listed in the workbook
fn first_sheet_part<R: Read + Seek>(archive: &mut ZipArchive<R>) -> LabelResult<String> {
    let workbook = read_part(archive, WORKBOOK_PART)?;
    let sheet = first_element(&workbook, b"sheet", |_| Ok(true))?
        .ok_or_else(|| LabelError::Spreadsheet("Workbook has no worksheets".to_string()))?;
    let rel_id = attribute(&sheet, b"id")?
        .ok_or_else(|| LabelError::Spreadsheet("Worksheet entry has no relationship id".to_string()))?;

    let rels = read_part(archive, WORKBOOK_RELS_PART)?;
    let relationship = first_element(&rels, b"Relationship", |e| {
        Ok(attribute(e, b"Id")?.as_deref() == Some(rel_id.as_str()))
    })?
    .ok_or_else(|| LabelError::Spreadsheet(format!("Worksheet relationship {} not found", rel_id)))?;
    let target = attribute(&relationship, b"Target")?.ok_or_else(|| {
        LabelError::Spreadsheet(format!("Worksheet relationship {} has no target", rel_id))
    })?;

    Ok(part_path(&target))
}

/// Relationship targets are relative to `xl/` unless absolute
fn part_path(target: &str) -> String {
    match target.strip_prefix('/') {
        Some(absolute) => absolute.to_string(),
        None if target.starts_with("xl/") => target.to_string(),
        None => format!("xl/{}", target),
    }
}

fn read_part<R: Read + Seek>(archive: &mut ZipArchive<R>, name: &str) -> LabelResult<String> {
    let mut part = archive.by_name(name).map_err(archive_error)?;
    let mut content = String::new();
    part.read_to_string(&mut content)?;
    Ok(content)
}

fn first_element(
    xml: &str,
    name: &[u8],
    matches: impl Fn(&BytesStart) -> LabelResult<bool>,
) -> LabelResult<Option<BytesStart<'static>>> {
    let mut reader = Reader::from_str(xml);
    loop {
        match reader.read_event().map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) if e.local_name().as_ref() == name => {
                if matches(&e)? {
                    return Ok(Some(e.into_owned()));
                }
            }
            Event::Eof => return Ok(None),
            _ => {}
        }
    }
}

/// Value of the attribute with local name `name` (namespace prefix ignored)
fn attribute(element: &BytesStart, name: &[u8]) -> LabelResult<Option<String>> {
    for attr in element.attributes() {
        let attr = attr
            .map_err(|e| LabelError::Spreadsheet(format!("Malformed worksheet XML: {}", e)))?;
        if attr.key.local_name().as_ref() == name {
            return Ok(Some(String::from_utf8_lossy(&attr.value).into_owned()));
        }
    }
    Ok(None)
}

/// Record, for every `<row>`, one past the column of its last `<c>`.
///
/// Rows and cells without an `r` reference follow the previous one, the way
/// spreadsheet readers number them.
fn scan_rows<B: BufRead>(input: B) -> LabelResult<RowExtents> {
    let mut reader = Reader::from_reader(input);
    let mut buf = Vec::new();
    let mut extents = RowExtents::new();
    let mut row = 0u32;
    let mut next_row = 0u32;
    let mut next_col = 0u32;

    loop {
        match reader.read_event_into(&mut buf).map_err(xml_error)? {
            Event::Start(e) | Event::Empty(e) => match e.local_name().as_ref() {
                b"row" => {
                    row = match attribute(&e, b"r")? {
                        Some(reference) => row_index(&reference)?,
                        None => next_row,
                    };
                    next_row = row + 1;
                    next_col = 0;
                }
                b"c" => {
                    let col = match attribute(&e, b"r")? {
                        Some(reference) => column_index(&reference)?,
                        None => next_col,
                    };
                    next_col = col + 1;
                    let width = extents.entry(row).or_insert(0);
                    *width = (*width).max(col + 1);
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    Ok(extents)
}

/// `"12"` → 11
fn row_index(reference: &str) -> LabelResult<u32> {
    reference
        .parse::<u32>()
        .ok()
        .and_then(|row| row.checked_sub(1))
        .ok_or_else(|| bad_reference(reference))
}

/// Column of a cell reference: `"A7"` → 0, `"AB3"` → 27
fn column_index(reference: &str) -> LabelResult<u32> {
    let letters: Vec<u8> = reference
        .bytes()
        .take_while(u8::is_ascii_alphabetic)
        .collect();
    if letters.is_empty() {
        return Err(bad_reference(reference));
    }

    let col = letters.iter().fold(0u32, |acc, letter| {
        acc.saturating_mul(26)
            .saturating_add(u32::from(letter.to_ascii_uppercase() - b'A') + 1)
    });
    Ok(col - 1)
}

fn bad_reference(reference: &str) -> LabelError {
    LabelError::Spreadsheet(format!("Invalid cell reference '{}'", reference))
}

fn archive_error(e: zip::result::ZipError) -> LabelError {
    LabelError::Spreadsheet(format!("Failed to read workbook archive: {}", e))
}

fn xml_error(e: quick_xml::Error) -> LabelError {
    LabelError::Spreadsheet(format!("Malformed worksheet XML: {}", e))
}

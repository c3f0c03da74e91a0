//! Minimal WordprocessingML (.docx) writer: one paragraph per line of text.

use std::io::{Cursor, Write};

use quick_xml::escape::escape;
use zip::{write::SimpleFileOptions, CompressionMethod, ZipWriter};

use super::export_error;
use crate::errors::AppResult;

const CONTENT_TYPES_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"><Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/><Default Extension="xml" ContentType="application/xml"/><Override PartName="/word/document.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml"/></Types>"#;

const RELS_XML: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"><Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument" Target="word/document.xml"/></Relationships>"#;

const DOCUMENT_HEAD: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>"#;

const DOCUMENT_TAIL: &str = r#"<w:sectPr><w:pgSz w:w="11906" w:h="16838"/></w:sectPr></w:body></w:document>"#;

/// Builds `word/document.xml` for the given text.
pub fn document_xml(text: &str) -> String {
    let mut xml = String::from(DOCUMENT_HEAD);

    for line in text.split('\n') {
        xml.push_str("<w:p><w:r>");
        for (index, segment) in line.split('\t').enumerate() {
            if index > 0 {
                xml.push_str("<w:tab/>");
            }
            // XML 1.0 cannot carry most control characters; none of them are visible.
            let segment: String = segment.chars().filter(|c| !c.is_control()).collect();
            if !segment.is_empty() {
                xml.push_str(r#"<w:t xml:space="preserve">"#);
                xml.push_str(&escape(segment.as_str()));
                xml.push_str("</w:t>");
            }
        }
        xml.push_str("</w:r></w:p>");
    }

    xml.push_str(DOCUMENT_TAIL);
    xml
}

/// Packages the text as a Word document.
pub fn export_docx(text: &str) -> AppResult<Vec<u8>> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    let parts = [
        ("[Content_Types].xml", CONTENT_TYPES_XML.to_string()),
        ("_rels/.rels", RELS_XML.to_string()),
        ("word/document.xml", document_xml(text)),
    ];

    for (name, body) in parts {
        writer.start_file(name, options).map_err(export_error)?;
        writer.write_all(body.as_bytes()).map_err(export_error)?;
    }

    let bytes = writer.finish().map_err(export_error)?.into_inner();
    log::info!("Exported {} lines to DOCX ({} bytes)", text.lines().count(), bytes.len());
    Ok(bytes)
}

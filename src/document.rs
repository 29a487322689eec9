use std::fs::File;
use std::io::{Seek, Write};
use std::path::Path;

use docx_rs::{BreakType, Docx, Paragraph, Run, Style, StyleType};
use log::info;

use crate::error::ConvertError;

/// 文件固定標題。
pub const DOCUMENT_HEADING: &str = "Converted Tamil Document";

const HEADING_STYLE_ID: &str = "Title";
const HEADING_SIZE: usize = 56;

pub fn write_document(text: &str, output: &Path) -> Result<(), ConvertError> {
    let file = File::create(output)?;
    pack_document(text, file)?;
    info!("文件已儲存：{}", output.display());
    Ok(())
}

fn pack_document<W: Write + Seek>(text: &str, writer: W) -> Result<(), ConvertError> {
    build_document(text)
        .build()
        .pack(writer)
        .map_err(|e| ConvertError::Document(e.to_string()))
}

fn build_document(text: &str) -> Docx {
    Docx::new()
        .add_style(
            Style::new(HEADING_STYLE_ID, StyleType::Paragraph)
                .name("Title")
                .size(HEADING_SIZE)
                .bold(),
        )
        .add_paragraph(
            Paragraph::new()
                .style(HEADING_STYLE_ID)
                .add_run(Run::new().add_text(DOCUMENT_HEADING)),
        )
        .add_paragraph(body_paragraph(text))
}

// OCR 輸出原文保留：換行轉為段落內換行，不做修剪或合併。
fn body_paragraph(text: &str) -> Paragraph {
    let mut run = Run::new();
    for (index, line) in text.split('\n').enumerate() {
        if index > 0 {
            run = run.add_break(BreakType::TextWrapping);
        }
        run = run.add_text(line);
    }
    Paragraph::new().add_run(run)
}

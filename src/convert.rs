use std::path::Path;

use log::info;

use crate::document::write_document;
use crate::error::ConvertError;
use crate::ocr::{configure_tessdata, extract_text, load_image, OCR_LANGUAGE};

pub fn execute_conversion(input: &Path, output: &Path) -> Result<String, ConvertError> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound(input.to_path_buf()));
    }

    configure_tessdata();

    info!(
        "開始轉換，輸入影像：{}，輸出文件：{}，語言：{}",
        input.display(),
        output.display(),
        OCR_LANGUAGE
    );

    let image = load_image(input)?;
    let text = extract_text(&image)?;
    info!("OCR 完成，擷取 {} 個字元", text.chars().count());

    write_document(&text, output)?;

    Ok(text)
}

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Missing arguments")]
    MissingArguments,
    #[error("{0}")]
    InvalidArguments(String),
    #[error("輸入路徑 '{}' 不存在", .0.display())]
    InputNotFound(PathBuf),
    #[error("無法載入影像：{0}")]
    ImageLoad(rusty_tesseract::TessError),
    #[error("OCR 辨識失敗：{0}")]
    Ocr(rusty_tesseract::TessError),
    #[error("文件產生失敗：{0}")]
    Document(String),
    #[error("{0}")]
    Io(#[from] std::io::Error),
}

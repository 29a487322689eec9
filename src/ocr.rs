use std::env;
use std::path::{Path, PathBuf};

use log::info;
use rusty_tesseract::{Args, Image};

use crate::error::ConvertError;

/// 固定辨識語言：泰米爾文。
pub const OCR_LANGUAGE: &str = "tam";

const TESSDATA_DIR: &str = "tessdata";
const TESSDATA_ENV: &str = "TESSDATA_PREFIX";

pub fn resolve_tessdata(base: &Path) -> Option<PathBuf> {
    let dir = base.join(TESSDATA_DIR);
    if dir.is_dir() {
        dir.canonicalize().ok()
    } else {
        None
    }
}

pub fn configure_tessdata() {
    if let Some(dir) = resolve_tessdata(Path::new(".")) {
        env::set_var(TESSDATA_ENV, &dir);
        info!("使用本地語言資料目錄：{}", dir.display());
    }
}

pub fn load_image(path: &Path) -> Result<Image, ConvertError> {
    Image::from_path(path).map_err(ConvertError::ImageLoad)
}

pub fn extract_text(image: &Image) -> Result<String, ConvertError> {
    let args = Args {
        lang: OCR_LANGUAGE.to_string(),
        ..Args::default()
    };
    rusty_tesseract::image_to_string(image, &args).map_err(ConvertError::Ocr)
}

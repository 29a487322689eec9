pub mod cli;
pub mod convert;
pub mod document;
pub mod error;
pub mod ocr;
pub mod report;

use std::path::Path;

use clap::Parser;
use log::error;

use crate::convert::execute_conversion;
use crate::error::ConvertError;
use crate::report::ConversionResult;

#[derive(Parser)]
#[command(
    name = "image_to_docx",
    about = "將影像檔案經 OCR 辨識後轉換為 Word 文件",
    long_about = "對單一影像檔案執行泰米爾文 OCR 辨識，並將辨識結果寫入新的 Word 文件。\n結果以單行 JSON 輸出至標準輸出。"
)]
pub struct Cli {
    pub input: String,
    pub output: String,
    #[arg(long, default_value = "info", value_parser = ["info", "warn", "error"])]
    pub log_level: String,
}

pub fn process_args(args: Vec<String>) -> ConversionResult {
    // 參數不足時直接回報，不進入轉換流程、不觸碰檔案系統。
    if args.len() < 3 {
        setup_logging("info");
        let e = ConvertError::MissingArguments;
        error!("轉換失敗：{}", e);
        return ConversionResult::failed(&e);
    }

    // 解析失敗同樣以單行 JSON 回報，標準輸出不得出現 clap 的用法訊息。
    let cli = match Cli::try_parse_from(&args) {
        Ok(cli) => cli,
        Err(parse_err) => {
            setup_logging("info");
            let e = ConvertError::InvalidArguments(parse_err.to_string());
            error!("轉換失敗：{}", e);
            return ConversionResult::failed(&e);
        }
    };
    setup_logging(&cli.log_level);

    match execute_conversion(Path::new(&cli.input), Path::new(&cli.output)) {
        Ok(text) => ConversionResult::completed(text, cli.output),
        Err(e) => {
            error!("轉換失敗：{}", e);
            ConversionResult::failed(&e)
        }
    }
}

pub fn setup_logging(log_level: &str) {
    let log_level_filter = match log_level {
        "info" => log::LevelFilter::Info,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log_level_filter)
        .try_init()
        .ok();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_arguments_yields_missing_arguments_failure() {
        let result = process_args(vec!["image_to_docx".to_string()]);
        assert_eq!(
            result.to_json(),
            r#"{"status":"failed","error":"Missing arguments"}"#
        );
        assert_eq!(result.exit_code(), 1);
    }

    #[test]
    fn single_argument_yields_missing_arguments_failure() {
        let result = process_args(vec![
            "image_to_docx".to_string(),
            "input.png".to_string(),
        ]);
        assert_eq!(
            result.to_json(),
            r#"{"status":"failed","error":"Missing arguments"}"#
        );
    }

    #[test]
    fn flag_only_invocation_yields_failed_result() {
        let result = process_args(vec![
            "image_to_docx".to_string(),
            "--log-level".to_string(),
            "info".to_string(),
        ]);
        assert_eq!(result.exit_code(), 1);
        assert!(result.to_json().starts_with(r#"{"status":"failed""#));
    }

    #[test]
    fn nonexistent_input_yields_failed_result() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.png");
        let output = dir.path().join("out.docx");

        let result = process_args(vec![
            "image_to_docx".to_string(),
            input.to_string_lossy().into_owned(),
            output.to_string_lossy().into_owned(),
        ]);

        assert_eq!(result.exit_code(), 1);
        assert!(result.to_json().starts_with(r#"{"status":"failed""#));
        assert!(!output.exists());
    }
}

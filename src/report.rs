use serde::Serialize;

use crate::error::ConvertError;

/// 每次執行輸出唯一一筆結果，標籤決定行程結束碼。
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ConversionResult {
    Completed {
        #[serde(rename = "extractedText")]
        extracted_text: String,
        #[serde(rename = "convertedPath")]
        converted_path: String,
    },
    Failed {
        error: String,
    },
}

impl ConversionResult {
    pub fn completed(extracted_text: String, converted_path: String) -> Self {
        ConversionResult::Completed {
            extracted_text,
            converted_path,
        }
    }

    pub fn failed(error: &ConvertError) -> Self {
        ConversionResult::Failed {
            error: error.to_string(),
        }
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap()
    }

    pub fn emit(&self) {
        println!("{}", self.to_json());
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            ConversionResult::Completed { .. } => 0,
            ConversionResult::Failed { .. } => 1,
        }
    }
}

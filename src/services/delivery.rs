//! 文件投递服务 - 业务能力层
//!
//! 只负责"把二进制写到输出目录"，文件名从工作表标题推导。

use regex::Regex;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::debug;

use crate::config::Config;
use crate::error::DeliveryError;

/// 标题为空时的默认文件名
const DEFAULT_BASE_NAME: &str = "Worksheet";

/// 文件投递服务
pub struct Delivery {
    output_folder: String,
}

impl Delivery {
    /// 创建新的投递服务
    pub fn new(config: &Config) -> Self {
        Self {
            output_folder: config.output_folder.clone(),
        }
    }

    /// 使用自定义输出目录创建
    pub fn with_folder(folder: impl Into<String>) -> Self {
        Self {
            output_folder: folder.into(),
        }
    }

    /// 从工作表标题推导文件名：`<标题 或 Worksheet>.docx`
    ///
    /// 文件系统非法字符替换为下划线
    pub fn file_name(&self, worksheet_title: &str) -> String {
        let base = worksheet_title.trim();
        let base = if base.is_empty() {
            DEFAULT_BASE_NAME
        } else {
            base
        };

        let sanitized = if let Ok(re) = Regex::new(r#"[\\/:*?"<>|]"#) {
            re.replace_all(base, "_").into_owned()
        } else {
            base.to_string()
        };

        format!("{}.docx", sanitized)
    }

    /// 把导出的二进制写到输出目录
    ///
    /// # 参数
    /// - `blob`: 序列化完成的 docx 二进制
    /// - `file_name`: 目标文件名（含扩展名）
    ///
    /// # 返回
    /// 返回写入的完整路径
    pub async fn deliver(&self, blob: &[u8], file_name: &str) -> Result<PathBuf, DeliveryError> {
        fs::create_dir_all(&self.output_folder)
            .await
            .map_err(|e| DeliveryError::create_dir_failed(self.output_folder.clone(), e))?;

        let path = Path::new(&self.output_folder).join(file_name);
        debug!("写入导出文件: {}", path.display());

        fs::write(&path, blob)
            .await
            .map_err(|e| DeliveryError::write_failed(path.display().to_string(), e))?;

        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery() -> Delivery {
        Delivery::with_folder("unused")
    }

    #[test]
    fn test_file_name_from_title() {
        assert_eq!(
            delivery().file_name("Physics Unit Test"),
            "Physics Unit Test.docx"
        );
    }

    #[test]
    fn test_file_name_falls_back_when_title_empty() {
        assert_eq!(delivery().file_name(""), "Worksheet.docx");
        assert_eq!(delivery().file_name("   "), "Worksheet.docx");
    }

    #[test]
    fn test_file_name_sanitizes_illegal_chars() {
        assert_eq!(
            delivery().file_name("Unit 1: Motion / Forces?"),
            "Unit 1_ Motion _ Forces_.docx"
        );
    }

    #[tokio::test]
    async fn test_deliver_writes_file() {
        let folder = std::env::temp_dir().join("worksheet_docx_export_delivery_test");
        let delivery = Delivery::with_folder(folder.to_string_lossy().to_string());

        let path = delivery.deliver(b"PK-fake", "t.docx").await.unwrap();
        let written = tokio::fs::read(&path).await.unwrap();
        assert_eq!(written, b"PK-fake");

        let _ = tokio::fs::remove_dir_all(&folder).await;
    }
}

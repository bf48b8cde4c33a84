use crate::models::worksheet::{ExportOptions, Worksheet};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

/// 一个待导出的工作表文档：工作表本体 + 可选的随附导出选项
///
/// 本地 TOML 文件通过 `[export]` 表携带导出选项；
/// 存储服务来源的工作表没有随附选项，由配置默认值补齐。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorksheetDocument {
    #[serde(flatten)]
    pub worksheet: Worksheet,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportOptions>,
}

/// 从 TOML 文件加载一个工作表文档
pub async fn load_toml_to_worksheet(toml_file_path: &Path) -> Result<WorksheetDocument> {
    let content = fs::read_to_string(toml_file_path)
        .await
        .with_context(|| format!("无法读取TOML文件: {}", toml_file_path.display()))?;

    let document: WorksheetDocument = toml::from_str(&content)
        .with_context(|| format!("无法解析TOML文件: {}", toml_file_path.display()))?;

    Ok(document)
}

/// 从文件夹中加载所有 TOML 工作表文档
///
/// 单个文件解析失败只告警跳过，不影响其余文件。
pub async fn load_all_toml_files(folder_path: &str) -> Result<Vec<WorksheetDocument>> {
    let folder = PathBuf::from(folder_path);

    if !folder.exists() {
        anyhow::bail!("文件夹不存在: {}", folder_path);
    }

    let mut documents = Vec::new();
    let mut entries = fs::read_dir(&folder)
        .await
        .with_context(|| format!("无法读取文件夹: {}", folder_path))?;

    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|s| s.to_str()) == Some("toml") {
            tracing::info!(
                "正在加载: {}",
                path.file_name().unwrap_or_default().to_string_lossy()
            );

            match load_toml_to_worksheet(&path).await {
                Ok(document) => {
                    let section_count = document
                        .worksheet
                        .sections
                        .as_ref()
                        .map(|s| s.len())
                        .unwrap_or(0);
                    tracing::info!("成功加载 {} 个章节", section_count);
                    documents.push(document);
                }
                Err(e) => {
                    tracing::warn!("加载文件失败 {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(documents)
}

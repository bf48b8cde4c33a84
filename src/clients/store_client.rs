//! 工作表存储客户端
//!
//! 封装托管文档库的 CRUD 接口：工作表按 opaque id 存取，按 owner 列表。
//! 导出核心不直接调用这里，只有编排层在配置了 owner 时用它拉取工作表。

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::models::Worksheet;

/// 工作表存储客户端
pub struct WorksheetStore {
    base_url: String,
    token: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct CreatedResponse {
    id: String,
}

impl WorksheetStore {
    /// 创建新的存储客户端
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.store_api_base_url.clone(),
            token: config.store_token.clone(),
            http: reqwest::Client::new(),
        }
    }

    /// 创建工作表，返回存储服务分配的 id
    pub async fn create(&self, owner_id: &str, worksheet: &Worksheet) -> Result<String> {
        let url = format!("{}/api/worksheets?owner={}", self.base_url, owner_id);
        debug!("创建工作表: {}", url);

        let response: CreatedResponse = self
            .http
            .post(&url)
            .bearer_auth(&self.token)
            .json(worksheet)
            .send()
            .await
            .with_context(|| format!("创建工作表请求失败: {}", url))?
            .error_for_status()
            .context("创建工作表返回错误状态")?
            .json()
            .await
            .context("解析创建工作表响应失败")?;

        Ok(response.id)
    }

    /// 按 id 读取工作表
    pub async fn get(&self, worksheet_id: &str) -> Result<Worksheet> {
        let url = format!("{}/api/worksheets/{}", self.base_url, worksheet_id);
        debug!("读取工作表: {}", url);

        let worksheet = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("读取工作表请求失败: {}", url))?
            .error_for_status()
            .context("读取工作表返回错误状态")?
            .json()
            .await
            .context("解析工作表响应失败")?;

        Ok(worksheet)
    }

    /// 按 id 更新工作表
    pub async fn update(&self, worksheet_id: &str, worksheet: &Worksheet) -> Result<()> {
        let url = format!("{}/api/worksheets/{}", self.base_url, worksheet_id);
        debug!("更新工作表: {}", url);

        self.http
            .put(&url)
            .bearer_auth(&self.token)
            .json(worksheet)
            .send()
            .await
            .with_context(|| format!("更新工作表请求失败: {}", url))?
            .error_for_status()
            .context("更新工作表返回错误状态")?;

        Ok(())
    }

    /// 按 id 删除工作表
    pub async fn delete(&self, worksheet_id: &str) -> Result<()> {
        let url = format!("{}/api/worksheets/{}", self.base_url, worksheet_id);
        debug!("删除工作表: {}", url);

        self.http
            .delete(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("删除工作表请求失败: {}", url))?
            .error_for_status()
            .context("删除工作表返回错误状态")?;

        Ok(())
    }

    /// 按 owner 列出全部工作表
    pub async fn list_by_owner(&self, owner_id: &str) -> Result<Vec<Worksheet>> {
        let url = format!("{}/api/worksheets?owner={}", self.base_url, owner_id);
        debug!("列出工作表: {}", url);

        let worksheets = self
            .http
            .get(&url)
            .bearer_auth(&self.token)
            .send()
            .await
            .with_context(|| format!("列出工作表请求失败: {}", url))?
            .error_for_status()
            .context("列出工作表返回错误状态")?
            .json()
            .await
            .context("解析工作表列表响应失败")?;

        Ok(worksheets)
    }
}

//! 批量导出器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责批量工作表导出和统计。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：启动运行日志
//! 2. **批量加载**：扫描 TOML 目录，或在配置了 owner 时从存储服务拉取
//! 3. **并发控制**：使用 Semaphore 限制同时导出的工作表数量
//! 4. **分批处理**：每批完成后再开始下一批
//! 5. **全局统计**：汇总所有工作表的导出结果
//!
//! ## 设计特点
//!
//! - 并发只发生在不同工作表之间；单份工作表内部的图片获取
//!   和章节渲染保持严格顺序（顺序正确性优先于延迟）
//! - 单份导出失败不影响其余工作表

use crate::clients::WorksheetStore;
use crate::config::Config;
use crate::models::{self, WorksheetDocument};
use crate::workflow::{ExportCtx, ExportFlow};
use anyhow::Result;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{error, info, warn};

/// 应用主结构
pub struct App {
    config: Config,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        crate::utils::logging::init_log_file(&config.output_log_file)?;

        log_startup(&config);

        Ok(Self { config })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let all_documents = self.load_worksheets().await?;

        if all_documents.is_empty() {
            warn!("⚠️ 没有找到待导出的工作表，程序结束");
            return Ok(());
        }

        let total = all_documents.len();
        log_worksheets_loaded(total, self.config.max_concurrent_exports);

        let stats = self.export_all(all_documents).await?;

        print_final_stats(&stats, &self.config);

        Ok(())
    }

    /// 加载待导出的工作表
    async fn load_worksheets(&self) -> Result<Vec<WorksheetDocument>> {
        if !self.config.store_owner_id.is_empty() {
            info!(
                "\n🌐 正在从存储服务拉取工作表 (owner: {})...",
                self.config.store_owner_id
            );
            let store = WorksheetStore::new(&self.config);
            let worksheets = store.list_by_owner(&self.config.store_owner_id).await?;
            // 存储来源的工作表没有随附导出选项，统一用配置默认值
            return Ok(worksheets
                .into_iter()
                .map(|worksheet| WorksheetDocument {
                    worksheet,
                    export: None,
                })
                .collect());
        }

        info!("\n📁 正在扫描待导出的工作表...");
        models::load_all_toml_files(&self.config.worksheet_folder).await
    }

    /// 分批导出所有工作表
    async fn export_all(&self, all_documents: Vec<WorksheetDocument>) -> Result<ExportStats> {
        let semaphore = Arc::new(Semaphore::new(self.config.max_concurrent_exports));
        let total = all_documents.len();
        let mut stats = ExportStats {
            total,
            ..Default::default()
        };

        for batch_start in (0..total).step_by(self.config.max_concurrent_exports) {
            let batch_end = (batch_start + self.config.max_concurrent_exports).min(total);
            let batch_documents = &all_documents[batch_start..batch_end];
            let batch_num = (batch_start / self.config.max_concurrent_exports) + 1;
            let total_batches = (total + self.config.max_concurrent_exports - 1)
                / self.config.max_concurrent_exports;

            log_batch_start(batch_num, total_batches, batch_start + 1, batch_end, total);

            let batch_result = self
                .export_batch(batch_documents, batch_start, semaphore.clone())
                .await?;

            stats.success += batch_result.success;
            stats.failed += batch_result.failed;

            log_batch_complete(batch_num, &batch_result);
        }

        Ok(stats)
    }

    /// 导出单个批次
    async fn export_batch(
        &self,
        batch_documents: &[WorksheetDocument],
        batch_start: usize,
        semaphore: Arc<Semaphore>,
    ) -> Result<BatchResult> {
        let mut batch_handles = Vec::new();

        for (idx, document) in batch_documents.iter().enumerate() {
            let worksheet_index = batch_start + idx + 1;
            let permit = semaphore.clone().acquire_owned().await?;

            let document = document.clone();
            let config = self.config.clone();

            let handle = tokio::spawn(async move {
                let _permit = permit;

                let flow = ExportFlow::new(&config);
                let ctx = ExportCtx::new(worksheet_index, document.worksheet.title.clone());
                let options = document
                    .export
                    .clone()
                    .unwrap_or_else(|| config.default_export_options());

                match flow.run(&document.worksheet, &options, &ctx).await {
                    Ok(path) => Ok(path),
                    Err(e) => {
                        error!("{} ❌ 导出失败: {}", ctx, e);
                        Err(e)
                    }
                }
            });
            batch_handles.push((worksheet_index, handle));
        }

        let mut result = BatchResult::default();

        for (worksheet_index, handle) in batch_handles {
            match handle.await {
                Ok(Ok(_)) => {
                    result.success += 1;
                }
                Ok(Err(_)) => {
                    result.failed += 1;
                }
                Err(e) => {
                    error!("[工作表 {}] 任务执行失败: {}", worksheet_index, e);
                    result.failed += 1;
                }
            }
        }

        Ok(result)
    }
}

/// 导出统计
#[derive(Debug, Default)]
struct ExportStats {
    success: usize,
    failed: usize,
    total: usize,
}

/// 批次导出结果
#[derive(Debug, Default)]
struct BatchResult {
    success: usize,
    failed: usize,
}

// ========== 日志辅助函数 ==========

fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 批量工作表导出模式");
    info!("📊 最大并发数: {}", config.max_concurrent_exports);
    info!("📂 输出目录: {}", config.output_folder);
    info!("{}", "=".repeat(60));
}

fn log_worksheets_loaded(total: usize, max_concurrent: usize) {
    info!("✓ 找到 {} 个待导出的工作表", total);
    info!("📋 将以每批 {} 个的方式导出", max_concurrent);
    info!("💡 每批完成后再开始下一批\n");
}

fn log_batch_start(batch_num: usize, total_batches: usize, start: usize, end: usize, total: usize) {
    info!("\n{}", "=".repeat(60));
    info!("📦 开始导出第 {}/{} 批", batch_num, total_batches);
    info!("📄 本批工作表: {}-{} / 共 {} 个", start, end, total);
    info!("{}", "=".repeat(60));
}

fn log_batch_complete(batch_num: usize, result: &BatchResult) {
    info!("\n{}", "─".repeat(60));
    info!(
        "✓ 第 {} 批完成: 成功 {}/{}",
        batch_num,
        result.success,
        result.success + result.failed
    );
    info!("{}", "─".repeat(60));
}

fn print_final_stats(stats: &ExportStats, config: &Config) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部导出完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", stats.success, stats.total);
    info!("❌ 失败: {}", stats.failed);
    info!("{}", "=".repeat(60));
    info!("\n日志已保存至: {}", config.output_log_file);
}

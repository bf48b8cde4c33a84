//! 工作表导出流程 - 流程层
//!
//! 核心职责：定义"一份工作表"的完整导出流程
//!
//! 流程顺序：
//! 1. 校验导出输入（任何网络请求之前，失败即整体失败）
//! 2. 组装并序列化 docx（图片逐题顺序获取，失败就地降级）
//! 3. 投递到输出目录
//!
//! 每次导出只产生一条成功或失败通知；只有输入校验、序列化、
//! 投递失败会向外传播，单张图片失败不会。

use anyhow::Result;
use std::path::PathBuf;
use tracing::info;

use crate::clients::ImageClient;
use crate::config::Config;
use crate::models::{ExportOptions, Worksheet};
use crate::services::{Delivery, DocumentAssembler};
use crate::utils::logging::truncate_text;
use crate::workflow::export_ctx::ExportCtx;

/// 工作表导出流程
///
/// - 编排完整的导出流程
/// - 不持有工作表列表，只处理单份工作表
/// - 只依赖业务能力（services）
pub struct ExportFlow {
    assembler: DocumentAssembler<ImageClient>,
    delivery: Delivery,
    verbose_logging: bool,
}

impl ExportFlow {
    /// 创建新的导出流程
    pub fn new(config: &Config) -> Self {
        Self {
            assembler: DocumentAssembler::new(ImageClient::new(config)),
            delivery: Delivery::new(config),
            verbose_logging: config.verbose_logging,
        }
    }

    /// 导出一份工作表，返回写入的文件路径
    pub async fn run(
        &self,
        worksheet: &Worksheet,
        options: &ExportOptions,
        ctx: &ExportCtx,
    ) -> Result<PathBuf> {
        if self.verbose_logging {
            info!("{} 📝 标题: {}", ctx, truncate_text(&worksheet.title, 40));
        }

        info!("{} 📄 开始组装文档...", ctx);
        let blob = self.assembler.assemble(worksheet, options).await?;

        let file_name = self.delivery.file_name(&worksheet.title);
        let path = self.delivery.deliver(&blob, &file_name).await?;

        info!("{} ✅ 导出完成: {}", ctx, path.display());
        Ok(path)
    }
}

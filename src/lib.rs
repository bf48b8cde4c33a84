//! # Worksheet DOCX Export
//!
//! 把工作表（试卷）批量导出为格式化 docx 文档的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 外部接口层（Clients）
//! - `clients/` - 封装所有对外的网络调用
//! - `ImageClient` - 按 URL 获取题目配图
//! - `WorksheetStore` - 工作表存储服务的 CRUD 客户端
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，只处理单个对象
//! - `SectionRenderer` - 单个章节 → 有序块序列
//! - `DocumentAssembler` - 整卷组装 + 校验 + 序列化
//! - `Delivery` - 写出导出文件
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一份工作表"的完整导出流程
//! - `ExportCtx` - 上下文封装（索引 + 标题）
//! - `ExportFlow` - 流程编排（校验 → 组装 → 投递）
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/` - 批量导出器，管理并发和统计
//!
//! ## 顺序保证
//!
//! 导出顺序必须与输入顺序一致：章节按位置映射 SECTION-A/B/C…，
//! 章节内题目按原始顺序编号，配图逐题顺序等待。并发只发生在
//! 不同工作表之间。

pub mod clients;
pub mod config;
pub mod docx;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

#[cfg(test)]
mod test_data;

// 重新导出常用类型
pub use clients::{ImageClient, ImageFetcher, WorksheetStore};
pub use config::Config;
pub use docx::{DocBlock, DocRun, DocxWriter};
pub use error::{ExportError, ExportResult};
pub use models::{ExportOptions, Question, Section, Worksheet, WorksheetDocument};
pub use orchestrator::App;
pub use services::{Delivery, DocumentAssembler, SectionRenderer};
pub use workflow::{ExportCtx, ExportFlow};

//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 负责批量导出和统计，是整个系统的"指挥中心"。
//!
//! ## 层次关系
//!
//! ```text
//! orchestrator::App (处理 Vec<WorksheetDocument>)
//!     ↓
//! workflow::ExportFlow (处理单份 Worksheet)
//!     ↓
//! services (能力层：渲染 / 组装 / 投递)
//!     ↓
//! clients (外部接口：图片获取 / 工作表存储)
//! ```

pub mod batch_exporter;

pub use batch_exporter::App;

//! 导出上下文
//!
//! 封装"我正在导出第几份工作表"这一信息

use std::fmt::Display;

/// 导出上下文
#[derive(Debug, Clone)]
pub struct ExportCtx {
    /// 工作表索引（仅用于日志显示，从1开始）
    pub worksheet_index: usize,

    /// 工作表标题
    pub title: String,
}

impl ExportCtx {
    /// 创建新的导出上下文
    pub fn new(worksheet_index: usize, title: impl Into<String>) -> Self {
        Self {
            worksheet_index,
            title: title.into(),
        }
    }
}

impl Display for ExportCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[工作表 {} \"{}\"]", self.worksheet_index, self.title)
    }
}

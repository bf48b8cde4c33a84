//! 文档中间结构
//!
//! 渲染层先产出 `DocBlock` 序列，再由 writer 统一转成 docx。
//! 中间结构只描述内容和样式，不依赖 docx 库类型，便于直接断言
//! 块顺序和文本内容。

/// 段落对齐方式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAlign {
    Left,
    Center,
}

/// 一个样式化的文本片段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocRun {
    pub text: String,
    pub bold: bool,
    pub italics: bool,
    pub underline: bool,
    /// 字号（半磅），None 使用文档默认值
    pub size: Option<usize>,
    /// 颜色（十六进制 RGB），None 使用文档默认值
    pub color: Option<String>,
}

impl DocRun {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: false,
            italics: false,
            underline: false,
            size: None,
            color: None,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italics(mut self) -> Self {
        self.italics = true;
        self
    }

    pub fn underline(mut self) -> Self {
        self.underline = true;
        self
    }

    pub fn size(mut self, size: usize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// 段落块
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParagraphBlock {
    pub align: BlockAlign,
    /// 段前间距（twip）
    pub spacing_before: u32,
    /// 段后间距（twip）
    pub spacing_after: u32,
    /// 是否使用 0.25 英寸悬挂缩进（编号段落用）
    pub hanging_indent: bool,
    pub runs: Vec<DocRun>,
}

impl ParagraphBlock {
    pub fn new() -> Self {
        Self {
            align: BlockAlign::Left,
            spacing_before: 0,
            spacing_after: 0,
            hanging_indent: false,
            runs: Vec::new(),
        }
    }

    pub fn center(mut self) -> Self {
        self.align = BlockAlign::Center;
        self
    }

    pub fn spacing(mut self, before: u32, after: u32) -> Self {
        self.spacing_before = before;
        self.spacing_after = after;
        self
    }

    pub fn hanging_indent(mut self) -> Self {
        self.hanging_indent = true;
        self
    }

    pub fn add_run(mut self, run: DocRun) -> Self {
        self.runs.push(run);
        self
    }

    /// 拼接段落的纯文本内容
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl Default for ParagraphBlock {
    fn default() -> Self {
        Self::new()
    }
}

/// 内嵌图片块，固定展示尺寸（像素）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBlock {
    pub data: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
    pub spacing_before: u32,
    pub spacing_after: u32,
}

/// 输出文档中的一个结构单元
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocBlock {
    Paragraph(ParagraphBlock),
    Image(ImageBlock),
}

impl DocBlock {
    /// 段落块的纯文本内容；图片块返回 None
    pub fn plain_text(&self) -> Option<String> {
        match self {
            DocBlock::Paragraph(p) => Some(p.plain_text()),
            DocBlock::Image(_) => None,
        }
    }
}

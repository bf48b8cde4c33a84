//! docx 输出层
//!
//! - `block`：与 docx 库无关的文档中间结构（DocBlock / DocRun）
//! - `writer`：把中间结构写成 docx 二进制

pub mod block;
pub mod writer;

pub use block::{BlockAlign, DocBlock, DocRun, ImageBlock, ParagraphBlock};
pub use writer::DocxWriter;

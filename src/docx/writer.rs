//! DocBlock 序列 → docx 二进制
//!
//! 文档级默认样式在这里统一应用：正文 Times New Roman 12 磅，
//! 四边 1 英寸页边距。

use std::io::Cursor;

use docx_rs::{
    AlignmentType, Docx, LineSpacing, PageMargin, Paragraph, Pic, Run, RunFonts,
    SpecialIndentType,
};

use crate::docx::block::{BlockAlign, DocBlock, DocRun, ImageBlock, ParagraphBlock};
use crate::error::SerializationError;

/// 像素到 EMU 的换算系数（96 dpi）
const EMU_PER_PX: u32 = 9525;
/// 悬挂缩进宽度：0.25 英寸（twip）
const HANGING_INDENT_TWIP: i32 = 360;
/// 页边距：1 英寸（twip）
const PAGE_MARGIN_TWIP: i32 = 1440;

/// docx 写出器
pub struct DocxWriter {
    font: String,
    /// 默认字号（半磅）
    default_size: usize,
}

impl DocxWriter {
    pub fn new() -> Self {
        Self {
            font: "Times New Roman".to_string(),
            default_size: 24,
        }
    }

    /// 把块序列序列化为一个 docx 二进制
    ///
    /// 序列化失败对整次导出是致命的，不产生部分文件。
    pub fn write(&self, blocks: &[DocBlock]) -> Result<Vec<u8>, SerializationError> {
        let mut docx = Docx::new()
            .default_fonts(RunFonts::new().ascii(&self.font).hi_ansi(&self.font))
            .default_size(self.default_size)
            .page_margin(
                PageMargin::new()
                    .top(PAGE_MARGIN_TWIP)
                    .bottom(PAGE_MARGIN_TWIP)
                    .left(PAGE_MARGIN_TWIP)
                    .right(PAGE_MARGIN_TWIP),
            );

        for block in blocks {
            let paragraph = match block {
                DocBlock::Paragraph(p) => convert_paragraph(p),
                DocBlock::Image(img) => convert_image(img),
            };
            docx = docx.add_paragraph(paragraph);
        }

        let mut cursor = Cursor::new(Vec::new());
        docx.build()
            .pack(&mut cursor)
            .map_err(SerializationError::pack_failed)?;

        Ok(cursor.into_inner())
    }
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

fn convert_paragraph(block: &ParagraphBlock) -> Paragraph {
    let mut paragraph = Paragraph::new().line_spacing(
        LineSpacing::new()
            .before(block.spacing_before)
            .after(block.spacing_after),
    );

    if block.align == BlockAlign::Center {
        paragraph = paragraph.align(AlignmentType::Center);
    }

    if block.hanging_indent {
        paragraph = paragraph.indent(
            Some(HANGING_INDENT_TWIP),
            Some(SpecialIndentType::Hanging(HANGING_INDENT_TWIP)),
            None,
            None,
        );
    }

    for run in &block.runs {
        paragraph = paragraph.add_run(convert_run(run));
    }

    paragraph
}

fn convert_run(run: &DocRun) -> Run {
    let mut r = Run::new().add_text(run.text.as_str());

    if run.bold {
        r = r.bold();
    }
    if run.italics {
        r = r.italic();
    }
    if run.underline {
        r = r.underline("single");
    }
    if let Some(size) = run.size {
        r = r.size(size);
    }
    if let Some(color) = &run.color {
        r = r.color(color.as_str());
    }

    r
}

fn convert_image(block: &ImageBlock) -> Paragraph {
    // 图片内容在获取阶段已做过解码校验
    let pic = Pic::new(&block.data).size(
        block.width_px * EMU_PER_PX,
        block.height_px * EMU_PER_PX,
    );

    Paragraph::new()
        .line_spacing(
            LineSpacing::new()
                .before(block.spacing_before)
                .after(block.spacing_after),
        )
        .add_run(Run::new().add_image(pic))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::docx::block::{DocRun, ParagraphBlock};
    use crate::test_data::TINY_PNG;

    #[test]
    fn test_write_paragraphs_produces_zip_blob() {
        let blocks = vec![
            DocBlock::Paragraph(
                ParagraphBlock::new()
                    .center()
                    .add_run(DocRun::text("MID TERM TEST").bold().size(28)),
            ),
            DocBlock::Paragraph(
                ParagraphBlock::new()
                    .spacing(120, 240)
                    .add_run(DocRun::text("1. ").bold())
                    .add_run(DocRun::text("What is inertia?")),
            ),
        ];

        let bytes = DocxWriter::new().write(&blocks).unwrap();
        // docx 本质是 zip，检查魔数
        assert_eq!(&bytes[0..2], b"PK");
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_write_with_image_block() {
        let blocks = vec![DocBlock::Image(ImageBlock {
            data: TINY_PNG.to_vec(),
            width_px: 400,
            height_px: 300,
            spacing_before: 120,
            spacing_after: 240,
        })];

        let bytes = DocxWriter::new().write(&blocks).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }

    #[test]
    fn test_write_empty_block_list() {
        let bytes = DocxWriter::new().write(&[]).unwrap();
        assert_eq!(&bytes[0..2], b"PK");
    }
}

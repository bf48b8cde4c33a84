//! 文档组装服务 - 业务能力层
//!
//! 把整卷（封头 + 总则 + 全部章节）组装为一个线性块序列，
//! 应用文档级样式后序列化为 docx 二进制。
//!
//! 输入校验在任何网络请求之前完成，失败即整体失败，不产生部分文档。
//! 章节按输入顺序逐个渲染（不并发），保证全局块顺序，也约束了
//! 峰值网络并发。

use crate::clients::ImageFetcher;
use crate::docx::{DocBlock, DocRun, DocxWriter, ParagraphBlock};
use crate::error::{ExportResult, InvalidInputError};
use crate::models::{ExportOptions, Section, Worksheet};
use crate::services::section_renderer::SectionRenderer;

/// "Time:" 与 "M.M.:" 之间的固定间隔
const META_LINE_SPACER: &str =
    "                                                                    ";

/// 文档组装服务
pub struct DocumentAssembler<F: ImageFetcher> {
    renderer: SectionRenderer<F>,
    writer: DocxWriter,
}

impl<F: ImageFetcher> DocumentAssembler<F> {
    /// 创建新的文档组装服务
    pub fn new(fetcher: F) -> Self {
        Self {
            renderer: SectionRenderer::new(fetcher),
            writer: DocxWriter::new(),
        }
    }

    /// 校验导出输入
    ///
    /// 必填导出选项非空、总分为正、工作表携带章节列表。
    /// 上游表单已做过一轮校验，这里按约定再做一次防御性校验。
    pub fn validate<'a>(
        worksheet: &'a Worksheet,
        options: &ExportOptions,
    ) -> Result<&'a [Section], InvalidInputError> {
        if options.school_name.trim().is_empty() {
            return Err(InvalidInputError::EmptyField {
                field: "schoolName",
            });
        }
        if options.subject.trim().is_empty() {
            return Err(InvalidInputError::EmptyField { field: "subject" });
        }
        if options.class_name.trim().is_empty() {
            return Err(InvalidInputError::EmptyField { field: "class" });
        }
        if options.time.trim().is_empty() {
            return Err(InvalidInputError::EmptyField { field: "time" });
        }
        if options.max_marks == 0 {
            return Err(InvalidInputError::NonPositiveMaxMarks {
                value: options.max_marks,
            });
        }

        worksheet
            .sections
            .as_deref()
            .ok_or(InvalidInputError::MissingSections)
    }

    /// 组装并序列化整卷
    pub async fn assemble(
        &self,
        worksheet: &Worksheet,
        options: &ExportOptions,
    ) -> ExportResult<Vec<u8>> {
        let blocks = self.build_blocks(worksheet, options).await?;
        let blob = self.writer.write(&blocks)?;
        Ok(blob)
    }

    /// 组装整卷的块序列（固定顺序：封头 → 总则 → 各章节）
    pub async fn build_blocks(
        &self,
        worksheet: &Worksheet,
        options: &ExportOptions,
    ) -> ExportResult<Vec<DocBlock>> {
        let sections = Self::validate(worksheet, options)?;

        let mut blocks = Vec::new();

        // 封头：考试名称、学校（大写）、班级（大写），各占一行居中
        blocks.push(centered_heading(&options.exam_title, 0, 120));
        blocks.push(centered_heading(&options.school_name.to_uppercase(), 0, 120));
        blocks.push(centered_heading(&options.class_name.to_uppercase(), 0, 240));

        // 时间与总分同一行，固定间隔分开
        blocks.push(DocBlock::Paragraph(
            ParagraphBlock::new()
                .spacing(0, 120)
                .add_run(DocRun::text("Time: "))
                .add_run(DocRun::text(options.time.to_uppercase()))
                .add_run(DocRun::text(META_LINE_SPACER))
                .add_run(DocRun::text("M.M.: "))
                .add_run(DocRun::text(options.max_marks.to_string())),
        ));

        // 科目行，居中
        blocks.push(DocBlock::Paragraph(
            ParagraphBlock::new()
                .center()
                .spacing(120, 240)
                .add_run(DocRun::text("SUBJECT: "))
                .add_run(DocRun::text(options.subject.to_uppercase())),
        ));

        // 总则标题；条目为空时只输出标题
        blocks.push(DocBlock::Paragraph(
            ParagraphBlock::new()
                .spacing(0, 120)
                .add_run(DocRun::text("General Instructions:").bold().underline()),
        ));
        for (index, instruction) in worksheet.general_instructions.iter().enumerate() {
            blocks.push(DocBlock::Paragraph(
                ParagraphBlock::new()
                    .spacing(0, 120)
                    .hanging_indent()
                    .add_run(DocRun::text(format!("{}. ", index + 1)).bold())
                    .add_run(DocRun::text(instruction.as_str())),
            ));
        }

        // 各章节按输入顺序逐个渲染
        for (index, section) in sections.iter().enumerate() {
            let section_blocks = self.renderer.render_section(section, index).await;
            blocks.extend(section_blocks);
        }

        Ok(blocks)
    }
}

fn centered_heading(text: &str, before: u32, after: u32) -> DocBlock {
    DocBlock::Paragraph(
        ParagraphBlock::new()
            .center()
            .spacing(before, after)
            .add_run(DocRun::text(text).bold().size(28)),
    )
}

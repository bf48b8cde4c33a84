//! 章节渲染服务 - 业务能力层
//!
//! 只负责"一个章节 → 有序块序列"，不关心整卷结构。
//!
//! 顺序保证：章节内块序列固定为 标题 → 说明 → 逐题（题干、[图片或占位]），
//! 与题目输入顺序一致。图片逐题顺序等待，绝不因异步完成顺序打乱输出。

use tracing::warn;

use crate::clients::ImageFetcher;
use crate::docx::{DocBlock, DocRun, ImageBlock, ParagraphBlock};
use crate::models::Section;

/// 图片固定展示宽度（像素）
const IMAGE_WIDTH_PX: u32 = 400;
/// 图片固定展示高度（像素）
const IMAGE_HEIGHT_PX: u32 = 300;
/// 图片获取失败时的占位文本
const PLACEHOLDER_TEXT: &str = "[Image could not be loaded]";

/// 章节渲染服务
///
/// 职责：
/// - 只处理单个 Section
/// - 每题配图单独获取、单独降级
/// - 不出现 Vec<Section>
pub struct SectionRenderer<F: ImageFetcher> {
    fetcher: F,
}

impl<F: ImageFetcher> SectionRenderer<F> {
    /// 创建新的章节渲染服务
    pub fn new(fetcher: F) -> Self {
        Self { fetcher }
    }

    /// 渲染一个章节为有序块序列
    ///
    /// # 参数
    /// - `section`: 章节数据
    /// - `section_index`: 章节在整卷中的位置（0 起）
    pub async fn render_section(&self, section: &Section, section_index: usize) -> Vec<DocBlock> {
        let label = section_label(section_index);
        let marks = section.marks_per_question;
        let mut blocks = Vec::new();

        // 章节标题：标签由位置决定，与存储的 title 无关
        blocks.push(DocBlock::Paragraph(
            ParagraphBlock::new()
                .center()
                .spacing(240, 120)
                .add_run(DocRun::text(&label).bold().underline().size(24)),
        ));

        // 章节说明行
        blocks.push(DocBlock::Paragraph(
            ParagraphBlock::new().spacing(120, 120).add_run(DocRun::text(format!(
                "{} type questions. Each question carries {} mark{}.",
                section.kind,
                marks,
                plural_suffix(marks)
            ))),
        ));

        for (q_index, question) in section.questions.iter().enumerate() {
            let number = q_index + 1;

            // 题干段落：编号与分值后缀加粗，正文常规
            let spacing_after = if question.image_url.is_some() { 120 } else { 240 };
            blocks.push(DocBlock::Paragraph(
                ParagraphBlock::new()
                    .spacing(120, spacing_after)
                    .hanging_indent()
                    .add_run(DocRun::text(format!("{}. ", number)).bold())
                    .add_run(DocRun::text(question.text.as_str()))
                    .add_run(
                        DocRun::text(format!(" [{} Mark{}]", marks, plural_suffix(marks))).bold(),
                    ),
            ));

            // 配图：逐题顺序等待；失败就地降级为占位块，不影响编号和排版
            if let Some(url) = &question.image_url {
                match self.fetcher.fetch_image(url).await {
                    Ok(data) => {
                        blocks.push(DocBlock::Image(ImageBlock {
                            data,
                            width_px: IMAGE_WIDTH_PX,
                            height_px: IMAGE_HEIGHT_PX,
                            spacing_before: 120,
                            spacing_after: 240,
                        }));
                    }
                    Err(e) => {
                        warn!("[{}] 题目 {} 图片获取失败: {}", label, number, e);
                        blocks.push(DocBlock::Paragraph(
                            ParagraphBlock::new().spacing(120, 240).add_run(
                                DocRun::text(PLACEHOLDER_TEXT)
                                    .italics()
                                    .color("FF0000")
                                    .size(20),
                            ),
                        ));
                    }
                }
            }
        }

        blocks
    }
}

/// 0 起章节序号 → 导出标签 SECTION-A/B/C…
///
/// 超过 26 个章节后字母回绕
fn section_label(section_index: usize) -> String {
    let letter = (b'A' + (section_index % 26) as u8) as char;
    format!("SECTION-{}", letter)
}

fn plural_suffix(marks: u32) -> &'static str {
    if marks > 1 {
        "s"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use crate::test_data::StubFetcher;

    fn section(marks: u32, questions: Vec<Question>) -> Section {
        Section {
            title: "随便起的名字".to_string(),
            kind: "MCQ based-question".to_string(),
            marks_per_question: marks,
            questions,
        }
    }

    fn question(text: &str, image_url: Option<&str>) -> Question {
        Question {
            text: text.to_string(),
            image_url: image_url.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_section_label_from_position() {
        assert_eq!(section_label(0), "SECTION-A");
        assert_eq!(section_label(1), "SECTION-B");
        assert_eq!(section_label(25), "SECTION-Z");
        // 回绕
        assert_eq!(section_label(26), "SECTION-A");
    }

    #[tokio::test]
    async fn test_label_ignores_stored_title() {
        let renderer = SectionRenderer::new(StubFetcher);
        let sec = section(1, vec![]);

        let blocks = renderer.render_section(&sec, 2).await;
        // 标题块用位置标签，不用 section.title
        assert_eq!(blocks[0].plain_text().unwrap(), "SECTION-C");
    }

    #[tokio::test]
    async fn test_pluralization_single_mark() {
        let renderer = SectionRenderer::new(StubFetcher);
        let sec = section(1, vec![question("Define velocity.", None)]);

        let blocks = renderer.render_section(&sec, 0).await;
        assert_eq!(
            blocks[1].plain_text().unwrap(),
            "MCQ based-question type questions. Each question carries 1 mark."
        );
        assert_eq!(
            blocks[2].plain_text().unwrap(),
            "1. Define velocity. [1 Mark]"
        );
    }

    #[tokio::test]
    async fn test_pluralization_multiple_marks() {
        let renderer = SectionRenderer::new(StubFetcher);
        let sec = section(2, vec![question("Explain refraction.", None)]);

        let blocks = renderer.render_section(&sec, 0).await;
        assert_eq!(
            blocks[1].plain_text().unwrap(),
            "MCQ based-question type questions. Each question carries 2 marks."
        );
        assert_eq!(
            blocks[2].plain_text().unwrap(),
            "1. Explain refraction. [2 Marks]"
        );
    }

    #[tokio::test]
    async fn test_missing_text_renders_empty() {
        let renderer = SectionRenderer::new(StubFetcher);
        let sec = section(1, vec![question("", None)]);

        let blocks = renderer.render_section(&sec, 0).await;
        assert_eq!(blocks[2].plain_text().unwrap(), "1.  [1 Mark]");
    }

    #[tokio::test]
    async fn test_image_failure_isolated() {
        let renderer = SectionRenderer::new(StubFetcher);
        let sec = section(
            1,
            vec![
                question("Q1", Some("https://img/ok-1.png")),
                question("Q2", Some("https://img/broken.png")),
                question("Q3", Some("https://img/ok-3.png")),
            ],
        );

        let blocks = renderer.render_section(&sec, 0).await;
        // 标题 + 说明 + 3 × (题干 + 图片或占位)
        assert_eq!(blocks.len(), 8);

        assert_eq!(blocks[2].plain_text().unwrap(), "1. Q1 [1 Mark]");
        assert!(matches!(blocks[3], DocBlock::Image(_)));

        // 第二题图片失败 → 红色斜体占位块，编号不受影响
        assert_eq!(blocks[4].plain_text().unwrap(), "2. Q2 [1 Mark]");
        match &blocks[5] {
            DocBlock::Paragraph(p) => {
                assert_eq!(p.plain_text(), PLACEHOLDER_TEXT);
                assert!(p.runs[0].italics);
                assert_eq!(p.runs[0].color.as_deref(), Some("FF0000"));
            }
            DocBlock::Image(_) => panic!("失败的图片不应产出图片块"),
        }

        assert_eq!(blocks[6].plain_text().unwrap(), "3. Q3 [1 Mark]");
        assert!(matches!(blocks[7], DocBlock::Image(_)));
    }

    #[tokio::test]
    async fn test_question_order_preserved() {
        let renderer = SectionRenderer::new(StubFetcher);
        let questions: Vec<Question> = (1..=5)
            .map(|i| question(&format!("第{}题", i), None))
            .collect();
        let sec = section(1, questions);

        let blocks = renderer.render_section(&sec, 0).await;
        let texts: Vec<String> = blocks[2..]
            .iter()
            .filter_map(|b| b.plain_text())
            .collect();
        for (i, text) in texts.iter().enumerate() {
            assert!(text.starts_with(&format!("{}. 第{}题", i + 1, i + 1)));
        }
    }
}

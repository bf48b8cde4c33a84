//! 工作表数据模型
//!
//! 对应存储服务中的文档结构（camelCase 字段）。
//! 导出流程把这些类型当作只读快照使用，不做任何修改。

use serde::{Deserialize, Serialize};

/// 工作表：一份完整的试卷，由有序章节组成
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Worksheet {
    /// 文档 id，由存储服务分配
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 总则说明，按原始顺序编号输出
    #[serde(default)]
    pub general_instructions: Vec<String>,
    /// 章节列表；旧记录可能缺失该字段，导出前必须校验
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
}

/// 章节：同一分值的一组题目
///
/// 章节顺序有意义：导出标签 SECTION-A/B/C… 由位置决定，
/// 与用户可编辑的 `title` 无关。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub title: String,
    /// 题型描述，自由文本，例如 "MCQ based-question"
    #[serde(rename = "type")]
    pub kind: String,
    /// 每题分值，约定 >= 1
    pub marks_per_question: u32,
    pub questions: Vec<Question>,
}

/// 题目：题干文本 + 可选配图
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

// 旧版存储记录中题目可能是裸字符串（只有题干），
// 在反序列化边界统一归一化为对象形式，渲染层不再区分
impl<'de> Deserialize<'de> for Question {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct QuestionVisitor;

        impl<'de> Visitor<'de> for QuestionVisitor {
            type Value = Question;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("题目对象或裸题干字符串")
            }

            fn visit_str<E>(self, value: &str) -> Result<Question, E>
            where
                E: de::Error,
            {
                Ok(Question {
                    text: value.to_string(),
                    image_url: None,
                })
            }

            fn visit_map<A>(self, mut map: A) -> Result<Question, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut text: Option<String> = None;
                let mut image_url: Option<String> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "text" => text = Some(map.next_value()?),
                        "imageUrl" => image_url = map.next_value()?,
                        _ => {
                            let _ = map.next_value::<de::IgnoredAny>()?;
                        }
                    }
                }

                Ok(Question {
                    text: text.unwrap_or_default(),
                    image_url,
                })
            }
        }

        deserializer.deserialize_any(QuestionVisitor)
    }
}

/// 导出选项：每次导出由用户提供的值对象，不随工作表持久化
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    pub exam_title: String,
    pub school_name: String,
    pub subject: String,
    #[serde(rename = "class")]
    pub class_name: String,
    pub time: String,
    pub max_marks: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_from_object() {
        let q: Question =
            serde_json::from_str(r#"{"text": "什么是光合作用?", "imageUrl": "https://x/a.png"}"#)
                .unwrap();
        assert_eq!(q.text, "什么是光合作用?");
        assert_eq!(q.image_url.as_deref(), Some("https://x/a.png"));
    }

    #[test]
    fn test_question_from_legacy_string() {
        // 旧版记录：题目是裸字符串
        let q: Question = serde_json::from_str(r#""State Ohm's law.""#).unwrap();
        assert_eq!(q.text, "State Ohm's law.");
        assert!(q.image_url.is_none());
    }

    #[test]
    fn test_question_missing_text_defaults_to_empty() {
        let q: Question = serde_json::from_str(r#"{"imageUrl": "https://x/b.png"}"#).unwrap();
        assert_eq!(q.text, "");
        assert_eq!(q.image_url.as_deref(), Some("https://x/b.png"));
    }

    #[test]
    fn test_worksheet_from_toml() {
        let content = r#"
title = "物理第一单元"
description = "期中复习"
generalInstructions = ["All questions are compulsory.", "Use blue or black pen only."]

[[sections]]
title = "Section One"
type = "MCQ based-question"
marksPerQuestion = 1

[[sections.questions]]
text = "Which unit measures current?"

[[sections.questions]]
text = "Define resistance."
imageUrl = "https://x/resistor.png"
"#;
        let ws: Worksheet = toml::from_str(content).unwrap();
        assert_eq!(ws.title, "物理第一单元");
        assert_eq!(ws.general_instructions.len(), 2);
        let sections = ws.sections.as_ref().unwrap();
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].kind, "MCQ based-question");
        assert_eq!(sections[0].marks_per_question, 1);
        assert_eq!(sections[0].questions.len(), 2);
        assert!(sections[0].questions[0].image_url.is_none());
    }

    #[test]
    fn test_worksheet_without_sections_field() {
        // 旧记录可能整个缺失 sections 字段
        let ws: Worksheet = serde_json::from_str(r#"{"title": "Old sheet"}"#).unwrap();
        assert!(ws.sections.is_none());
    }
}

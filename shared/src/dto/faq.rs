use serde::{Deserialize, Serialize};

use super::profile::Language;

/// One FAQ entry from `GET /api/faqs`.
///
/// Question and answer come in all three interface languages; the client picks
/// one with [`FaqDto::question`] / [`FaqDto::answer`] instead of refetching on
/// a language switch.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FaqDto {
    pub id: i64,
    #[serde(rename = "questionUz")]
    pub question_uz: String,
    #[serde(rename = "questionRu")]
    pub question_ru: String,
    #[serde(rename = "questionEn")]
    pub question_en: String,
    #[serde(rename = "answerUz")]
    pub answer_uz: String,
    #[serde(rename = "answerRu")]
    pub answer_ru: String,
    #[serde(rename = "answerEn")]
    pub answer_en: String,
    #[serde(rename = "displayOrder")]
    pub display_order: i32,
    pub active: bool,
}

impl FaqDto {
    /// Question text in the given language.
    pub fn question(&self, language: Language) -> &str {
        match language {
            Language::Uz => &self.question_uz,
            Language::Ru => &self.question_ru,
            Language::En => &self.question_en,
        }
    }

    /// Answer text in the given language.
    pub fn answer(&self, language: Language) -> &str {
        match language {
            Language::Uz => &self.answer_uz,
            Language::Ru => &self.answer_ru,
            Language::En => &self.answer_en,
        }
    }
}

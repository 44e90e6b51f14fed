//! Topic records - questions and study material attached to a lesson

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{check_optional, require_text};
use super::{ValidationError, MAX_SHORT_TEXT};

/// Maximum length for the solution video URL
const MAX_URL_LEN: usize = 255;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Topic {
    #[serde(rename = "konu_id")]
    pub id: i32,
    #[serde(rename = "konu_adi")]
    pub name: String,
    #[serde(rename = "konu_seviyesi")]
    pub level: Option<i16>,
    #[serde(rename = "konu_tipi")]
    pub kind: Option<String>,
    #[serde(rename = "konu_metni")]
    pub body: Option<String>,
    #[serde(rename = "konu_dogruCevap")]
    pub correct_answer: Option<String>,
    #[serde(rename = "konu_ipucu")]
    pub hint: Option<String>,
    #[serde(rename = "konu_cozumMetni")]
    pub solution_text: Option<String>,
    #[serde(rename = "konu_cozumVideoUrl")]
    pub solution_video_url: Option<String>,
    #[serde(rename = "ders_id")]
    pub lesson_id: Option<i32>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewTopic {
    #[serde(rename = "konu_adi")]
    pub name: String,
    #[serde(rename = "konu_seviyesi", default)]
    pub level: Option<i16>,
    #[serde(rename = "konu_tipi", default)]
    pub kind: Option<String>,
    #[serde(rename = "konu_metni", default)]
    pub body: Option<String>,
    #[serde(rename = "konu_dogruCevap", default)]
    pub correct_answer: Option<String>,
    #[serde(rename = "konu_ipucu", default)]
    pub hint: Option<String>,
    #[serde(rename = "konu_cozumMetni", default)]
    pub solution_text: Option<String>,
    #[serde(rename = "konu_cozumVideoUrl", default)]
    pub solution_video_url: Option<String>,
    #[serde(rename = "ders_id", default)]
    pub lesson_id: Option<i32>,
}

impl NewTopic {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("konu_adi", &self.name, MAX_SHORT_TEXT)?;
        check_optional("konu_tipi", self.kind.as_deref(), MAX_SHORT_TEXT)?;
        check_optional("konu_dogruCevap", self.correct_answer.as_deref(), MAX_SHORT_TEXT)?;
        check_optional("konu_ipucu", self.hint.as_deref(), MAX_SHORT_TEXT)?;
        check_optional("konu_cozumVideoUrl", self.solution_video_url.as_deref(), MAX_URL_LEN)
    }
}

//! Chatbot interactions - one question/answer exchange per row

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::timestamp;
use super::validation::check_optional;
use super::{ValidationError, MAX_SHORT_TEXT};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ChatbotInteraction {
    #[serde(rename = "chatbot_id")]
    pub id: i32,
    #[serde(rename = "chatbot_soruMetni")]
    pub question: Option<String>,
    #[serde(rename = "chatbot_cevapMetni")]
    pub answer: Option<String>,
    #[serde(rename = "chatbot_zamanDamgasi")]
    pub asked_at: Option<NaiveDateTime>,
    /// Emotion inferred from the question, e.g. "stressed"
    #[serde(rename = "chatbot_duyguCikarimi")]
    pub emotion: Option<String>,
    #[serde(rename = "ogrenci_id")]
    pub student_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewChatbotInteraction {
    #[serde(rename = "chatbot_soruMetni", default)]
    pub question: Option<String>,
    #[serde(rename = "chatbot_cevapMetni", default)]
    pub answer: Option<String>,
    #[serde(rename = "chatbot_zamanDamgasi", default, deserialize_with = "timestamp::option")]
    pub asked_at: Option<NaiveDateTime>,
    #[serde(rename = "chatbot_duyguCikarimi", default)]
    pub emotion: Option<String>,
    #[serde(rename = "ogrenci_id", default)]
    pub student_id: Option<i32>,
}

impl NewChatbotInteraction {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional("chatbot_duyguCikarimi", self.emotion.as_deref(), MAX_SHORT_TEXT)
    }
}

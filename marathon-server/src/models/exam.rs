//! Exam simulation records

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::timestamp;
use super::validation::check_optional;
use super::{ValidationError, MAX_SHORT_TEXT};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct ExamSimulation {
    #[serde(rename = "sinav_id")]
    pub id: i32,
    #[serde(rename = "sinav_adi")]
    pub name: Option<String>,
    #[serde(rename = "sinav_baslangicSaati")]
    pub started_at: Option<NaiveDateTime>,
    #[serde(rename = "sinav_bitisSaati")]
    pub ended_at: Option<NaiveDateTime>,
    #[serde(rename = "sinav_puan")]
    pub score: Option<f64>,
    #[serde(rename = "sinav_dogruCevapSayisi")]
    pub correct_count: Option<i16>,
    #[serde(rename = "sinav_yanlisCevapSayisi")]
    pub incorrect_count: Option<i16>,
    #[serde(rename = "sinav_tarihi")]
    pub exam_date: Option<NaiveDate>,
    #[serde(rename = "sinav_kullanilanSenaryo")]
    pub scenario: Option<String>,
    #[serde(rename = "sinav_detayliAnalizMetni")]
    pub analysis: Option<String>,
}

/// Create exam simulation request; every field is optional
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewExamSimulation {
    #[serde(rename = "sinav_adi", default)]
    pub name: Option<String>,
    #[serde(rename = "sinav_baslangicSaati", default, deserialize_with = "timestamp::option")]
    pub started_at: Option<NaiveDateTime>,
    #[serde(rename = "sinav_bitisSaati", default, deserialize_with = "timestamp::option")]
    pub ended_at: Option<NaiveDateTime>,
    #[serde(rename = "sinav_puan", default)]
    pub score: Option<f64>,
    #[serde(rename = "sinav_dogruCevapSayisi", default)]
    pub correct_count: Option<i16>,
    #[serde(rename = "sinav_yanlisCevapSayisi", default)]
    pub incorrect_count: Option<i16>,
    #[serde(rename = "sinav_tarihi", default)]
    pub exam_date: Option<NaiveDate>,
    #[serde(rename = "sinav_kullanilanSenaryo", default)]
    pub scenario: Option<String>,
    #[serde(rename = "sinav_detayliAnalizMetni", default)]
    pub analysis: Option<String>,
}

impl NewExamSimulation {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_optional("sinav_adi", self.name.as_deref(), MAX_SHORT_TEXT)
    }
}

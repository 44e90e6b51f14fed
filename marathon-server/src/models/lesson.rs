//! Lesson records

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::timestamp;
use super::validation::require_text;
use super::{ValidationError, MAX_SHORT_TEXT};

/// Stored lesson session
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(rename = "ders_id")]
    pub id: i32,
    #[serde(rename = "ders_adi")]
    pub name: String,
    #[serde(rename = "ders_baslangicSaati")]
    pub started_at: Option<NaiveDateTime>,
    #[serde(rename = "ders_bitisSaati")]
    pub ended_at: Option<NaiveDateTime>,
    /// 0/1 completion flag
    #[serde(rename = "ders_tamamlandiMi")]
    pub completed: Option<i16>,
    #[serde(rename = "ders_kazanilanHalkaSayisi")]
    pub rings_earned: Option<i16>,
    #[serde(rename = "ders_odakPuani")]
    pub focus_score: Option<f64>,
    #[serde(rename = "ders_enerjiSeviyesi")]
    pub energy_level: Option<f64>,
    #[serde(rename = "ders_tarihi")]
    pub lesson_date: Option<NaiveDate>,
}

/// Create lesson request
#[derive(Debug, Clone, Deserialize)]
pub struct NewLesson {
    #[serde(rename = "ders_adi")]
    pub name: String,
    #[serde(rename = "ders_baslangicSaati", default, deserialize_with = "timestamp::option")]
    pub started_at: Option<NaiveDateTime>,
    #[serde(rename = "ders_bitisSaati", default, deserialize_with = "timestamp::option")]
    pub ended_at: Option<NaiveDateTime>,
    #[serde(rename = "ders_tamamlandiMi", default)]
    pub completed: Option<i16>,
    #[serde(rename = "ders_kazanilanHalkaSayisi", default)]
    pub rings_earned: Option<i16>,
    #[serde(rename = "ders_odakPuani", default)]
    pub focus_score: Option<f64>,
    #[serde(rename = "ders_enerjiSeviyesi", default)]
    pub energy_level: Option<f64>,
    #[serde(rename = "ders_tarihi", default)]
    pub lesson_date: Option<NaiveDate>,
}

impl NewLesson {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("ders_adi", &self.name, MAX_SHORT_TEXT)
    }
}

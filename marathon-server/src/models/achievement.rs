//! Achievements (rewards) a student can earn

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::require_text;
use super::{ValidationError, MAX_SHORT_TEXT};

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Achievement {
    #[serde(rename = "basarim_id")]
    pub id: i32,
    #[serde(rename = "basarim_adi")]
    pub name: String,
    #[serde(rename = "basarim_kazanmaTarihi")]
    pub earned_on: Option<NaiveDate>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewAchievement {
    #[serde(rename = "basarim_adi")]
    pub name: String,
    #[serde(rename = "basarim_kazanmaTarihi", default)]
    pub earned_on: Option<NaiveDate>,
}

impl NewAchievement {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("basarim_adi", &self.name, MAX_SHORT_TEXT)
    }
}

//! Daily study statistics for a student

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Statistic {
    #[serde(rename = "istatistik_id")]
    pub id: i32,
    #[serde(rename = "istatistik_tarihi")]
    pub stat_date: Option<NaiveDate>,
    #[serde(rename = "istatistik_gunlukcalismaSuresi")]
    pub daily_study_duration: Option<f64>,
    #[serde(rename = "istatistik_tamamlananModulSayisi")]
    pub completed_modules: Option<i16>,
    #[serde(rename = "istatistik_ortalamaodakPuani")]
    pub average_focus_score: Option<f64>,
    #[serde(rename = "istatistik_cozulenSoruSayisi")]
    pub solved_questions: Option<i16>,
    #[serde(rename = "istatistik_dogruCevapOrani")]
    pub correct_ratio: Option<f64>,
    #[serde(rename = "istatistik_kazanilanHalkaSayisi")]
    pub rings_earned: Option<i16>,
    #[serde(rename = "istatistik_molaSayisi")]
    pub break_count: Option<i16>,
    #[serde(rename = "istatistik_toplamMolaSuresi")]
    pub total_break_duration: Option<f64>,
    #[serde(rename = "istatistik_uykuKalitesi")]
    pub sleep_quality: Option<f64>,
    #[serde(rename = "istatistik_notlar")]
    pub notes: Option<String>,
    #[serde(rename = "ogrenci_id")]
    pub student_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewStatistic {
    #[serde(rename = "istatistik_tarihi", default)]
    pub stat_date: Option<NaiveDate>,
    #[serde(rename = "istatistik_gunlukcalismaSuresi", default)]
    pub daily_study_duration: Option<f64>,
    #[serde(rename = "istatistik_tamamlananModulSayisi", default)]
    pub completed_modules: Option<i16>,
    #[serde(rename = "istatistik_ortalamaodakPuani", default)]
    pub average_focus_score: Option<f64>,
    #[serde(rename = "istatistik_cozulenSoruSayisi", default)]
    pub solved_questions: Option<i16>,
    #[serde(rename = "istatistik_dogruCevapOrani", default)]
    pub correct_ratio: Option<f64>,
    #[serde(rename = "istatistik_kazanilanHalkaSayisi", default)]
    pub rings_earned: Option<i16>,
    #[serde(rename = "istatistik_molaSayisi", default)]
    pub break_count: Option<i16>,
    #[serde(rename = "istatistik_toplamMolaSuresi", default)]
    pub total_break_duration: Option<f64>,
    #[serde(rename = "istatistik_uykuKalitesi", default)]
    pub sleep_quality: Option<f64>,
    #[serde(rename = "istatistik_notlar", default)]
    pub notes: Option<String>,
    #[serde(rename = "ogrenci_id", default)]
    pub student_id: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_is_valid() {
        let new: NewStatistic = serde_json::from_str("{}").unwrap();
        assert_eq!(new.student_id, None);
        assert_eq!(new.correct_ratio, None);
    }

    #[test]
    fn values_are_stored_as_sent() {
        let new: NewStatistic = serde_json::from_str(
            r#"{"istatistik_dogruCevapOrani": 120.0, "istatistik_molaSayisi": -1, "ogrenci_id": 3}"#,
        )
        .unwrap();
        assert_eq!(new.correct_ratio, Some(120.0));
        assert_eq!(new.break_count, Some(-1));
        assert_eq!(new.student_id, Some(3));
    }

    #[test]
    fn counts_must_be_integers() {
        assert!(serde_json::from_str::<NewStatistic>(r#"{"istatistik_molaSayisi": 1.5}"#).is_err());
    }
}

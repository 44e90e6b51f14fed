//! Student records, create shape and partial-update patch
//!
//! JSON keys keep the `ogrenci_*` names the web client sends; columns use
//! English snake_case.

use chrono::{NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::timestamp;
use super::validation::{check_optional, require_text};
use super::{Patch, ValidationError};

/// Maximum length for short text columns (`VARCHAR(45)`)
pub const MAX_SHORT_TEXT: usize = 45;

/// Loose address check: one `@`, no whitespace, a dot in the domain
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex"));

/// Stored student.
///
/// The password hash is read from the database but never serialized.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "ogrenci_id")]
    pub id: i32,
    #[serde(rename = "ogrenci_kullaniciAdi")]
    pub username: String,
    #[serde(rename = "ogrenci_email")]
    pub email: String,
    #[serde(skip)]
    pub password_hash: String,
    #[serde(rename = "ogrenci_ad")]
    pub first_name: String,
    #[serde(rename = "ogrenci_soyad")]
    pub last_name: String,
    #[serde(rename = "ogrenci_dogumTarihi")]
    pub birth_date: NaiveDate,
    #[serde(rename = "ogrenci_okulSeviyesi")]
    pub school_level: Option<String>,
    #[serde(rename = "ogrenci_adhdSeviyesi")]
    pub adhd_level: Option<String>,
    #[serde(rename = "ogrenci_kayitTarihi")]
    pub registered_on: Option<String>,
    #[serde(rename = "ogrenci_odakSuresi")]
    pub focus_duration: Option<f64>,
    #[serde(rename = "ogrenci_soruCozmeHizi")]
    pub solve_speed: Option<f64>,
    #[serde(rename = "ogrenci_basariOrani")]
    pub success_rate: Option<f64>,
    #[serde(rename = "ogrenci_dikkatSeviyesi")]
    pub attention_level: Option<f64>,
    #[serde(rename = "ogrenci_mevcutSeviye")]
    pub current_level: Option<i16>,
    #[serde(rename = "ogrenci_ogrenmeStili")]
    pub learning_style: Option<String>,
    #[serde(rename = "ogrenci_sonGuncellemeTarihi")]
    pub updated_at: NaiveDateTime,
}

/// Create student request.
///
/// Carries either a precomputed `ogrenci_sifreHashed` or a plaintext
/// `ogrenci_sifre`, which is hashed before storage.
#[derive(Debug, Clone, Deserialize)]
pub struct NewStudent {
    #[serde(rename = "ogrenci_kullaniciAdi")]
    pub username: String,
    #[serde(rename = "ogrenci_email")]
    pub email: String,
    #[serde(rename = "ogrenci_sifreHashed", default)]
    pub password_hash: Option<String>,
    #[serde(rename = "ogrenci_sifre", default)]
    pub password: Option<String>,
    #[serde(rename = "ogrenci_ad")]
    pub first_name: String,
    #[serde(rename = "ogrenci_soyad")]
    pub last_name: String,
    #[serde(rename = "ogrenci_dogumTarihi")]
    pub birth_date: NaiveDate,
    #[serde(rename = "ogrenci_okulSeviyesi", default)]
    pub school_level: Option<String>,
    #[serde(rename = "ogrenci_adhdSeviyesi", default)]
    pub adhd_level: Option<String>,
    #[serde(rename = "ogrenci_kayitTarihi", default)]
    pub registered_on: Option<String>,
    #[serde(rename = "ogrenci_odakSuresi", default)]
    pub focus_duration: Option<f64>,
    #[serde(rename = "ogrenci_soruCozmeHizi", default)]
    pub solve_speed: Option<f64>,
    #[serde(rename = "ogrenci_basariOrani", default)]
    pub success_rate: Option<f64>,
    #[serde(rename = "ogrenci_dikkatSeviyesi", default)]
    pub attention_level: Option<f64>,
    #[serde(rename = "ogrenci_mevcutSeviye", default)]
    pub current_level: Option<i16>,
    #[serde(rename = "ogrenci_ogrenmeStili", default)]
    pub learning_style: Option<String>,
    /// Defaults to the insert time when absent
    #[serde(rename = "ogrenci_sonGuncellemeTarihi", default, deserialize_with = "timestamp::option")]
    pub updated_at: Option<NaiveDateTime>,
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), ValidationError> {
        require_text("ogrenci_kullaniciAdi", &self.username, MAX_SHORT_TEXT)?;
        validate_email(&self.email)?;
        require_text("ogrenci_ad", &self.first_name, MAX_SHORT_TEXT)?;
        require_text("ogrenci_soyad", &self.last_name, MAX_SHORT_TEXT)?;

        match (&self.password, &self.password_hash) {
            (Some(plain), _) => require_text("ogrenci_sifre", plain, 255)?,
            (None, Some(hash)) => require_text("ogrenci_sifreHashed", hash, 255)?,
            (None, None) => return Err(ValidationError::Missing { field: "ogrenci_sifreHashed" }),
        }

        check_optional("ogrenci_okulSeviyesi", self.school_level.as_deref(), MAX_SHORT_TEXT)?;
        check_optional("ogrenci_adhdSeviyesi", self.adhd_level.as_deref(), MAX_SHORT_TEXT)?;
        check_optional("ogrenci_kayitTarihi", self.registered_on.as_deref(), MAX_SHORT_TEXT)?;
        check_optional("ogrenci_ogrenmeStili", self.learning_style.as_deref(), MAX_SHORT_TEXT)?;
        Ok(())
    }
}

/// Partial update for a student.
///
/// Only keys present in the body are written.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentPatch {
    #[serde(rename = "ogrenci_kullaniciAdi", default)]
    pub username: Patch<String>,
    #[serde(rename = "ogrenci_email", default)]
    pub email: Patch<String>,
    #[serde(rename = "ogrenci_sifreHashed", default)]
    pub password_hash: Patch<String>,
    /// Plaintext replacement password; hashed into `password_hash`
    #[serde(rename = "ogrenci_sifre", default)]
    pub password: Option<String>,
    #[serde(rename = "ogrenci_ad", default)]
    pub first_name: Patch<String>,
    #[serde(rename = "ogrenci_soyad", default)]
    pub last_name: Patch<String>,
    #[serde(rename = "ogrenci_dogumTarihi", default)]
    pub birth_date: Patch<NaiveDate>,
    #[serde(rename = "ogrenci_okulSeviyesi", default)]
    pub school_level: Patch<String>,
    #[serde(rename = "ogrenci_adhdSeviyesi", default)]
    pub adhd_level: Patch<String>,
    #[serde(rename = "ogrenci_kayitTarihi", default)]
    pub registered_on: Patch<String>,
    #[serde(rename = "ogrenci_odakSuresi", default)]
    pub focus_duration: Patch<f64>,
    #[serde(rename = "ogrenci_soruCozmeHizi", default)]
    pub solve_speed: Patch<f64>,
    #[serde(rename = "ogrenci_basariOrani", default)]
    pub success_rate: Patch<f64>,
    #[serde(rename = "ogrenci_dikkatSeviyesi", default)]
    pub attention_level: Patch<f64>,
    #[serde(rename = "ogrenci_mevcutSeviye", default)]
    pub current_level: Patch<i16>,
    #[serde(rename = "ogrenci_ogrenmeStili", default)]
    pub learning_style: Patch<String>,
    #[serde(rename = "ogrenci_sonGuncellemeTarihi", default, deserialize_with = "timestamp::patch")]
    pub updated_at: Patch<NaiveDateTime>,
}

impl StudentPatch {
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.username.require_non_null("ogrenci_kullaniciAdi")?;
        self.email.require_non_null("ogrenci_email")?;
        self.password_hash.require_non_null("ogrenci_sifreHashed")?;
        self.first_name.require_non_null("ogrenci_ad")?;
        self.last_name.require_non_null("ogrenci_soyad")?;
        self.birth_date.require_non_null("ogrenci_dogumTarihi")?;
        self.updated_at.require_non_null("ogrenci_sonGuncellemeTarihi")?;

        if let Some(username) = self.username.as_value() {
            require_text("ogrenci_kullaniciAdi", username, MAX_SHORT_TEXT)?;
        }
        if let Some(email) = self.email.as_value() {
            validate_email(email)?;
        }
        if let Some(hash) = self.password_hash.as_value() {
            require_text("ogrenci_sifreHashed", hash, 255)?;
        }
        if let Some(plain) = &self.password {
            require_text("ogrenci_sifre", plain, 255)?;
        }
        if let Some(name) = self.first_name.as_value() {
            require_text("ogrenci_ad", name, MAX_SHORT_TEXT)?;
        }
        if let Some(name) = self.last_name.as_value() {
            require_text("ogrenci_soyad", name, MAX_SHORT_TEXT)?;
        }

        check_optional("ogrenci_okulSeviyesi", self.school_level.as_value().map(String::as_str), MAX_SHORT_TEXT)?;
        check_optional("ogrenci_adhdSeviyesi", self.adhd_level.as_value().map(String::as_str), MAX_SHORT_TEXT)?;
        check_optional("ogrenci_kayitTarihi", self.registered_on.as_value().map(String::as_str), MAX_SHORT_TEXT)?;
        check_optional("ogrenci_ogrenmeStili", self.learning_style.as_value().map(String::as_str), MAX_SHORT_TEXT)?;
        Ok(())
    }
}

fn validate_email(email: &str) -> Result<(), ValidationError> {
    require_text("ogrenci_email", email, MAX_SHORT_TEXT)?;
    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidFormat {
            field: "ogrenci_email",
            reason: "must be an email address",
        });
    }
    Ok(())
}

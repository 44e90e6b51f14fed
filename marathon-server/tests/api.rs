//! End-to-end API tests against a live PostgreSQL.
//!
//! Run with `DATABASE_URL` pointing at a scratch database:
//!
//! ```text
//! cargo test -p marathon-server --test api -- --ignored
//! ```

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use marathon_server::auth::{decode_token, legacy_encoding};
use marathon_server::db::{create_pool, migrations};
use marathon_server::{build_router, AppState, DbConfig, ServerConfig};

async fn app() -> Router {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let pool = create_pool(&DbConfig::from_env().unwrap())
        .await
        .expect("DATABASE_URL must point at a reachable database");
    migrations::run(&pool).await.unwrap();
    build_router(AppState { pool }, &ServerConfig::default())
}

async fn call(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn put_json(uri: &str, body: Value) -> Request<Body> {
    Request::put(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn login_form(email: &str, password: &str) -> Request<Body> {
    let body = format!(
        "email={}&password={}",
        email.replace('@', "%40"),
        password
    );
    Request::post("/login")
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap()
}

/// A student body with unique username/email.
fn student_body(tag: &str) -> (String, Value) {
    let suffix = &Uuid::new_v4().simple().to_string()[..8];
    let email = format!("{tag}{suffix}@x.com");
    let body = json!({
        "ogrenci_kullaniciAdi": format!("{tag}{suffix}"),
        "ogrenci_email": email,
        "ogrenci_sifreHashed": legacy_encoding(&email, "password"),
        "ogrenci_ad": "Alice",
        "ogrenci_soyad": "Smith",
        "ogrenci_dogumTarihi": "2012-04-01",
        "ogrenci_okulSeviyesi": "5",
        "ogrenci_odakSuresi": 12.5
    });
    (email, body)
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_then_get_returns_same_student() {
    let app = app().await;
    let (email, body) = student_body("alice");

    let (status, created) = call(&app, post_json("/ogrenciler/", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["ogrenci_email"], email);
    assert!(created.get("ogrenci_sifreHashed").is_none());

    let id = created["ogrenci_id"].as_i64().unwrap();
    let (status, fetched) = call(&app, get(&format!("/ogrenciler/{id}"))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_ids_are_404() {
    let app = app().await;
    for uri in [
        "/ogrenciler/2147483647",
        "/dersler/2147483647",
        "/konular/2147483647",
        "/sinavlar/2147483647",
        "/istatistikler/2147483647",
        "/basarimlar/2147483647",
        "/chatbot/2147483647",
    ] {
        let (status, body) = call(&app, get(uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body["error"], "not_found");
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn limit_and_skip_page_in_id_order() {
    let app = app().await;
    for i in 0..3 {
        let (status, _) = call(
            &app,
            post_json("/basarimlar/", json!({ "basarim_adi": format!("rozet {i}") })),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, all) = call(&app, get("/basarimlar/?limit=100")).await;
    let all = all.as_array().unwrap().clone();
    assert!(all.len() >= 3);

    let (_, page) = call(&app, get("/basarimlar?skip=1&limit=2")).await;
    let page = page.as_array().unwrap();
    assert_eq!(page.len(), 2);
    assert_eq!(page[0], all[1]);
    assert_eq!(page[1], all[2]);

    let (_, none) = call(&app, get("/basarimlar/?limit=0")).await;
    assert!(none.as_array().unwrap().is_empty());
}

#[tokio::test]
#[ignore = "requires database"]
async fn partial_update_changes_only_supplied_fields() {
    let app = app().await;
    let (_, body) = student_body("bob");
    let (_, created) = call(&app, post_json("/ogrenciler/", body)).await;
    let id = created["ogrenci_id"].as_i64().unwrap();

    let (status, updated) = call(
        &app,
        put_json(
            &format!("/ogrenciler/{id}"),
            json!({ "ogrenci_ad": "Robert", "ogrenci_okulSeviyesi": null }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["ogrenci_ad"], "Robert");
    assert_eq!(updated["ogrenci_okulSeviyesi"], Value::Null);
    assert_eq!(updated["ogrenci_soyad"], created["ogrenci_soyad"]);
    assert_eq!(updated["ogrenci_odakSuresi"], created["ogrenci_odakSuresi"]);

    let (status, _) = call(
        &app,
        put_json("/ogrenciler/2147483647", json!({ "ogrenci_ad": "Nobody" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn duplicate_email_fails_and_keeps_first() {
    let app = app().await;
    let (email, body) = student_body("carol");
    let (_, first) = call(&app, post_json("/ogrenciler/", body.clone())).await;

    let mut dup = body;
    dup["ogrenci_kullaniciAdi"] = json!(format!("other{}", &Uuid::new_v4().simple().to_string()[..8]));
    let (status, err) = call(&app, post_json("/ogrenciler/", dup)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err["error"], "internal_error");

    let id = first["ogrenci_id"].as_i64().unwrap();
    let (_, still) = call(&app, get(&format!("/ogrenciler/{id}"))).await;
    assert_eq!(still["ogrenci_email"], email);
}

#[tokio::test]
#[ignore = "requires database"]
async fn login_with_legacy_hash() {
    let app = app().await;
    let (email, body) = student_body("alice");
    let (_, created) = call(&app, post_json("/ogrenciler/", body)).await;
    let id = created["ogrenci_id"].as_i64().unwrap() as i32;

    let (status, ok) = call(&app, login_form(&email, "password")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(ok["user"]["ogrenci_id"], created["ogrenci_id"]);
    let token = ok["token"].as_str().unwrap();
    assert_eq!(decode_token(token), Some((id, email.clone())));
    assert_eq!(
        STANDARD.decode(token).unwrap(),
        format!("{id}:{email}").into_bytes()
    );

    let (status, _) = call(&app, login_form(&email, "wrong")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = call(&app, login_form("nobody@nowhere.test", "password")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn login_with_plaintext_registration() {
    let app = app().await;
    let (email, mut body) = student_body("dave");
    body.as_object_mut().unwrap().remove("ogrenci_sifreHashed");
    body["ogrenci_sifre"] = json!("hunter2");

    let (status, _) = call(&app, post_json("/ogrenciler/", body)).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, login_form(&email, "hunter2")).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = call(&app, login_form(&email, "hunter3")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
#[ignore = "requires database"]
async fn links_and_nested_listings() {
    let app = app().await;
    let (_, body) = student_body("erin");
    let (_, student) = call(&app, post_json("/ogrenciler/", body)).await;
    let sid = student["ogrenci_id"].as_i64().unwrap();

    let (_, lesson) = call(&app, post_json("/dersler/", json!({ "ders_adi": "Matematik" }))).await;
    let lid = lesson["ders_id"].as_i64().unwrap();

    let (_, topic) = call(
        &app,
        post_json("/konular/", json!({ "konu_adi": "Kesirler", "ders_id": lid })),
    )
    .await;
    assert_eq!(topic["ders_id"], lid);

    // Linking twice is fine.
    for _ in 0..2 {
        let (status, _) = call(&app, post_json(&format!("/ogrenciler/{sid}/dersler/{lid}"), json!({}))).await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    let (_, lessons) = call(&app, get(&format!("/ogrenciler/{sid}/dersler"))).await;
    assert_eq!(lessons.as_array().unwrap(), &vec![lesson]);

    let (_, topics) = call(&app, get(&format!("/dersler/{lid}/konular"))).await;
    assert_eq!(topics.as_array().unwrap(), &vec![topic]);

    let (status, body) = call(
        &app,
        post_json(&format!("/ogrenciler/{sid}/sinavlar/2147483647"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "exam simulation 2147483647 not found");

    let (status, body) = call(
        &app,
        post_json(&format!("/ogrenciler/2147483647/dersler/{lid}"), json!({})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "student 2147483647 not found");

    let (_, stat) = call(
        &app,
        post_json(
            "/istatistikler/",
            json!({ "istatistik_dogruCevapOrani": 87.5, "ogrenci_id": sid }),
        ),
    )
    .await;
    let (_, stats) = call(&app, get(&format!("/ogrenciler/{sid}/istatistikler"))).await;
    assert_eq!(stats.as_array().unwrap(), &vec![stat]);

    let (_, chat) = call(
        &app,
        post_json(
            "/chatbot/",
            json!({ "chatbot_soruMetni": "Kesir nedir?", "ogrenci_id": sid }),
        ),
    )
    .await;
    let (_, chats) = call(&app, get(&format!("/ogrenciler/{sid}/chatbot"))).await;
    assert_eq!(chats.as_array().unwrap(), &vec![chat]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn topic_with_dangling_lesson_is_500() {
    let app = app().await;
    let (status, body) = call(
        &app,
        post_json("/konular/", json!({ "konu_adi": "Yetim", "ders_id": 2147483647 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("foreign key"));
}

/// Create through `collection`, fetch by id, and check that both responses
/// carry every submitted field unchanged.
async fn assert_create_then_get(
    app: &Router,
    collection: &str,
    id_key: &str,
    body: Value,
) -> Value {
    let (status, created) = call(app, post_json(&format!("/{collection}/"), body.clone())).await;
    assert_eq!(status, StatusCode::OK, "{collection}: {created}");
    for (key, value) in body.as_object().unwrap() {
        assert_eq!(&created[key], value, "{collection}.{key}");
    }

    let id = created[id_key].as_i64().unwrap();
    let (status, fetched) = call(app, get(&format!("/{collection}/{id}"))).await;
    assert_eq!(status, StatusCode::OK, "{collection}/{id}");
    assert_eq!(fetched, created, "{collection}/{id}");
    created
}

#[tokio::test]
#[ignore = "requires database"]
async fn create_then_get_returns_same_record_for_every_entity() {
    let app = app().await;
    let (_, body) = student_body("frank");
    let (_, student) = call(&app, post_json("/ogrenciler/", body)).await;
    let sid = student["ogrenci_id"].as_i64().unwrap();

    let lesson = assert_create_then_get(
        &app,
        "dersler",
        "ders_id",
        json!({
            "ders_adi": "Fen Bilimleri",
            "ders_baslangicSaati": "2024-05-01T09:30:00",
            "ders_bitisSaati": "2024-05-01T10:15:00",
            "ders_tamamlandiMi": 1,
            "ders_kazanilanHalkaSayisi": 3,
            "ders_odakPuani": 82.5,
            "ders_enerjiSeviyesi": 0.75,
            "ders_tarihi": "2024-05-01"
        }),
    )
    .await;
    let lid = lesson["ders_id"].as_i64().unwrap();

    assert_create_then_get(
        &app,
        "konular",
        "konu_id",
        json!({
            "konu_adi": "Hücre",
            "konu_seviyesi": 2,
            "konu_tipi": "test",
            "konu_metni": "Hücrenin yapısı",
            "konu_dogruCevap": "B",
            "konu_ipucu": "Zar",
            "konu_cozumMetni": "Hücre zarı seçici geçirgendir.",
            "konu_cozumVideoUrl": "https://video.example.com/hucre",
            "ders_id": lid
        }),
    )
    .await;

    assert_create_then_get(
        &app,
        "sinavlar",
        "sinav_id",
        json!({
            "sinav_adi": "Deneme 1",
            "sinav_baslangicSaati": "2024-05-02T13:00:00",
            "sinav_bitisSaati": "2024-05-02T14:20:30",
            "sinav_puan": 91.25,
            "sinav_dogruCevapSayisi": 36,
            "sinav_yanlisCevapSayisi": 4,
            "sinav_tarihi": "2024-05-02",
            "sinav_kullanilanSenaryo": "uzay",
            "sinav_detayliAnalizMetni": "Kesirlerde hızlandı."
        }),
    )
    .await;

    assert_create_then_get(
        &app,
        "istatistikler",
        "istatistik_id",
        json!({
            "istatistik_tarihi": "2024-05-03",
            "istatistik_gunlukcalismaSuresi": 95.5,
            "istatistik_tamamlananModulSayisi": 4,
            "istatistik_ortalamaodakPuani": 77.25,
            "istatistik_cozulenSoruSayisi": 120,
            "istatistik_dogruCevapOrani": 87.5,
            "istatistik_kazanilanHalkaSayisi": 9,
            "istatistik_molaSayisi": 3,
            "istatistik_toplamMolaSuresi": 22.5,
            "istatistik_uykuKalitesi": 6.5,
            "istatistik_notlar": "Öğleden sonra yorgun.",
            "ogrenci_id": sid
        }),
    )
    .await;

    assert_create_then_get(
        &app,
        "basarimlar",
        "basarim_id",
        json!({
            "basarim_adi": "İlk Halka",
            "basarim_kazanmaTarihi": "2024-05-04"
        }),
    )
    .await;

    assert_create_then_get(
        &app,
        "chatbot",
        "chatbot_id",
        json!({
            "chatbot_soruMetni": "Fotosentez nedir?",
            "chatbot_cevapMetni": "Bitkilerin ışıkla besin üretmesi.",
            "chatbot_zamanDamgasi": "2024-05-05T18:45:12",
            "chatbot_duyguCikarimi": "merak",
            "ogrenci_id": sid
        }),
    )
    .await;
}

#[tokio::test]
#[ignore = "requires database"]
async fn browser_timestamps_are_stored_in_utc() {
    let app = app().await;
    let (status, chat) = call(
        &app,
        post_json(
            "/chatbot/",
            json!({ "chatbot_zamanDamgasi": "2024-05-05T18:45:12.000Z" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(chat["chatbot_zamanDamgasi"], "2024-05-05T18:45:12");

    let (_, mut body) = student_body("gina");
    body["ogrenci_sonGuncellemeTarihi"] = json!("2026-10-19T12:34:56.789+03:00");
    let (status, student) = call(&app, post_json("/ogrenciler/", body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(student["ogrenci_sonGuncellemeTarihi"], "2026-10-19T09:34:56.789");
}

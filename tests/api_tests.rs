mod common;

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate, Utc};
use regex::Regex;
use reqwest::StatusCode;
use serde_json::{Value, json};

use applicant_generator::config::Config;

fn keys(value: &Value) -> BTreeSet<&str> {
    value
        .as_object()
        .expect("expected a JSON object")
        .keys()
        .map(String::as_str)
        .collect()
}

fn set(names: &[&'static str]) -> BTreeSet<&'static str> {
    names.iter().copied().collect()
}

fn age_on(today: NaiveDate, dob: NaiveDate) -> i32 {
    let mut age = today.year() - dob.year();
    if (today.month(), today.day()) < (dob.month(), dob.day()) {
        age -= 1;
    }
    age
}

// ── Health & static ─────────────────────────────────────────────

#[tokio::test]
async fn health_returns_ok() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/health")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.unwrap(), "ok");
}

#[tokio::test]
async fn index_renders_generator_form() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let content_type = resp.headers()["content-type"].to_str().unwrap().to_string();
    assert!(content_type.starts_with("text/html"));

    let html = resp.text().await.unwrap();
    assert!(html.contains("id=\"configForm\""));
    assert!(html.contains("CO_APPLICANT"));
    assert!(html.contains("WIDOWED"));
    assert!(html.contains("<option value=\"MAIN\" selected>"));
}

#[tokio::test]
async fn static_assets_are_served() {
    let app = common::spawn_app().await;

    let resp = app.client.get(app.url("/static/js/app.js")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(resp.text().await.unwrap().contains("/api/generate"));

    let resp = app.client.get(app.url("/static/missing.js")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn security_and_cors_headers_present() {
    let app = common::spawn_app().await;

    let resp = app
        .client
        .post(app.url("/api/generate"))
        .header("origin", "http://localhost:3000")
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let headers = resp.headers();
    assert_eq!(headers["x-content-type-options"], "nosniff");
    assert_eq!(headers["x-frame-options"], "DENY");
    assert_eq!(headers["access-control-allow-origin"], "*");
}

// ── Payload shape ───────────────────────────────────────────────

#[tokio::test]
async fn payload_has_fixed_shape() {
    let app = common::spawn_app().await;

    let (body, status) = app.generate(&json!({})).await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(
        keys(&body),
        set(&[
            "applicants",
            "companyApplicants",
            "asset",
            "dealer",
            "financialCalculation",
            "status",
        ])
    );
    assert_eq!(body["applicants"].as_array().unwrap().len(), 1);
    assert!(body["companyApplicants"].as_array().unwrap().is_empty());
    assert_eq!(body["status"], "PENDING");

    assert_eq!(
        body["asset"],
        json!({ "type": "VEHICLE", "make": "Toyota", "model": "Corolla", "year": 2020, "price": 15000 })
    );
    assert_eq!(body["dealer"], json!({ "name": "Test Dealer", "code": "TD001" }));
    assert_eq!(
        body["financialCalculation"],
        json!({ "deposit": 3000, "loanAmount": 12000, "term": 36, "rate": 5.9 })
    );

    let applicant = &body["applicants"][0];
    assert_eq!(
        keys(applicant),
        set(&[
            "id",
            "role",
            "title",
            "firstName",
            "lastName",
            "gender",
            "maritalStatus",
            "dateOfBirth",
            "address",
            "contact",
            "employment",
            "bankDetails",
        ])
    );
    assert_eq!(keys(&applicant["address"]), set(&["line1", "city", "postcode", "country"]));
    assert_eq!(keys(&applicant["contact"]), set(&["email", "phone", "mobile"]));
    assert_eq!(keys(&applicant["employment"]), set(&["status", "income", "employer"]));
    assert_eq!(keys(&applicant["bankDetails"]), set(&["accountNumber", "sortCode"]));
}

#[tokio::test]
async fn generated_fields_are_in_range() {
    let app = common::spawn_app().await;
    let account = Regex::new(r"^\d{8}$").unwrap();
    let sort_code = Regex::new(r"^\d{2}-\d{2}-\d{2}$").unwrap();

    for _ in 0..20 {
        let (body, status) = app.generate(&json!({})).await;
        assert_eq!(status, StatusCode::OK);
        let applicant = &body["applicants"][0];

        assert_eq!(applicant["role"], "MAIN");
        assert!(["MALE", "FEMALE"].contains(&applicant["gender"].as_str().unwrap()));
        assert!(
            ["SINGLE", "MARRIED", "DIVORCED", "WIDOWED"]
                .contains(&applicant["maritalStatus"].as_str().unwrap())
        );
        assert!(uuid::Uuid::parse_str(applicant["id"].as_str().unwrap()).is_ok());

        let dob = NaiveDate::parse_from_str(applicant["dateOfBirth"].as_str().unwrap(), "%Y-%m-%d")
            .unwrap();
        let age = age_on(Utc::now().date_naive(), dob);
        assert!((18..=70).contains(&age), "age {age} out of range");

        let income = applicant["employment"]["income"].as_u64().unwrap();
        assert!((20_000..=60_000).contains(&income));
        assert_eq!(applicant["employment"]["status"], "EMPLOYED");
        assert_eq!(applicant["address"]["country"], "GB");

        assert!(account.is_match(applicant["bankDetails"]["accountNumber"].as_str().unwrap()));
        assert!(sort_code.is_match(applicant["bankDetails"]["sortCode"].as_str().unwrap()));
        assert!(applicant["contact"]["email"].as_str().unwrap().contains('@'));
    }
}

// ── Config overrides ────────────────────────────────────────────

#[tokio::test]
async fn config_overrides_are_honoured() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .generate(&json!({
            "role": "CO_APPLICANT",
            "gender": "FEMALE",
            "maritalStatus": "WIDOWED",
        }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let applicant = &body["applicants"][0];
    assert_eq!(applicant["role"], "CO_APPLICANT");
    assert_eq!(applicant["gender"], "FEMALE");
    assert_eq!(applicant["maritalStatus"], "WIDOWED");
    assert!(["Mrs", "Ms", "Miss", "Dr"].contains(&applicant["title"].as_str().unwrap()));
}

#[tokio::test]
async fn null_override_falls_back_to_random_choice() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .generate(&json!({ "gender": null, "maritalStatus": null, "role": null }))
        .await;
    assert_eq!(status, StatusCode::OK);
    let applicant = &body["applicants"][0];
    assert!(["MALE", "FEMALE"].contains(&applicant["gender"].as_str().unwrap()));
    assert!(
        ["SINGLE", "MARRIED", "DIVORCED", "WIDOWED"]
            .contains(&applicant["maritalStatus"].as_str().unwrap())
    );
    assert_eq!(applicant["role"], "MAIN");
}

#[tokio::test]
async fn falsy_body_returns_default_payload() {
    let app = common::spawn_app().await;

    for raw in ["[]", "0", "false", "\"\""] {
        let (body, status) = app.generate_raw("application/json", raw).await;
        assert_eq!(status, StatusCode::OK, "body {raw}");
        assert_eq!(body["applicants"][0]["role"], "MAIN");
    }
}

#[tokio::test]
async fn unknown_keys_ignored_and_values_taken_verbatim() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .generate(&json!({ "gender": "UNSPECIFIED", "colour": "blue" }))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applicants"][0]["gender"], "UNSPECIFIED");
    assert_eq!(body["applicants"][0]["role"], "MAIN");
    assert!(body.get("colour").is_none());
}

#[tokio::test]
async fn consecutive_calls_get_fresh_ids() {
    let app = common::spawn_app().await;
    let config = json!({ "role": "MAIN" });

    let (first, _) = app.generate(&config).await;
    let (second, _) = app.generate(&config).await;
    assert_ne!(first["applicants"][0]["id"], second["applicants"][0]["id"]);
}

// ── Body handling ───────────────────────────────────────────────

#[tokio::test]
async fn empty_body_uses_defaults() {
    let app = common::spawn_app().await;

    let resp = app.client.post(app.url("/api/generate")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["applicants"][0]["role"], "MAIN");

    let (body, status) = app.generate_raw("application/json", "null").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applicants"][0]["role"], "MAIN");
}

#[tokio::test]
async fn json_accepted_without_json_content_type() {
    let app = common::spawn_app().await;

    let (body, status) = app
        .generate_raw("text/plain", r#"{"role":"GUARANTOR"}"#)
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["applicants"][0]["role"], "GUARANTOR");
}

#[tokio::test]
async fn malformed_body_returns_structured_error() {
    let app = common::spawn_app().await;

    let (body, status) = app.generate_raw("application/json", "{not json").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("invalid JSON"));

    let (body, status) = app.generate_raw("application/json", "[1, 2]").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().contains("array"));

    let (body, status) = app.generate(&json!({ "role": 7 })).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].as_str().unwrap().starts_with("Invalid config"));
}

#[tokio::test]
async fn oversized_body_rejected() {
    let app = common::spawn_app_with(Config {
        max_body_size: 64,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/static").to_string(),
        ..Config::default()
    })
    .await;

    let padding = "x".repeat(256);
    let (_, status) = app.generate(&json!({ "role": "MAIN", "padding": padding })).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
}

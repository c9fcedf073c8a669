//! End-to-end tests against the running relay with the mock provider.

mod common;

use serde_json::{json, Value};

use sms_relay::config::RelayConfig;

fn base_config() -> RelayConfig {
    let mut config = RelayConfig::default();
    config.sender.default_from = "01080348069".to_string();
    config
}

#[tokio::test]
async fn health_reports_service_and_provider() {
    let url = common::spawn_relay(base_config()).await;

    let body: Value = reqwest::get(format!("{url}/"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["service"], "sms-relay");
    assert_eq!(body["provider"], "mock");
}

#[tokio::test]
async fn config_exposes_provider_and_default_from() {
    let url = common::spawn_relay(base_config()).await;

    let body: Value = reqwest::get(format!("{url}/api/sms/config"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["provider"], "mock");
    assert_eq!(body["defaultFrom"], "01080348069");
}

#[tokio::test]
async fn send_echoes_under_mock_provider() {
    let url = common::spawn_relay(base_config()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{url}/api/sms"))
        .json(&json!({ "to": "010-1234-5678", "text": "hello" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert!(res.headers().contains_key("x-request-id"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["provider"], "mock");
    // Recipient is normalized to digits before it reaches the gateway.
    assert_eq!(body["echo"]["to"], "01012345678");
    assert_eq!(body["echo"]["from"], "01080348069");
}

#[tokio::test]
async fn send_rejects_missing_to_or_text() {
    let url = common::spawn_relay(base_config()).await;
    let client = reqwest::Client::new();

    for payload in [
        json!({ "text": "hi" }),
        json!({ "to": "01012345678" }),
        json!({ "to": "no digits here", "text": "hi" }),
        json!({}),
    ] {
        let res = client
            .post(format!("{url}/api/sms"))
            .json(&payload)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 400, "payload: {payload}");
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["ok"], false);
        assert_eq!(body["error"], "missing to/text");
    }
}

#[tokio::test]
async fn bearer_gate_guards_send_but_not_config() {
    let mut config = base_config();
    config.auth.token = "hunter2".to_string();
    let url = common::spawn_relay(config).await;
    let client = reqwest::Client::new();
    let payload = json!({ "to": "01012345678", "text": "hi", "dry": true });

    // No token → 401.
    let res = client
        .post(format!("{url}/api/sms"))
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "unauthorized");

    // Wrong token → 401.
    let res = client
        .post(format!("{url}/api/sms"))
        .header("Authorization", "Bearer nope")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 401);

    // Correct token → accepted.
    let res = client
        .post(format!("{url}/api/sms"))
        .header("Authorization", "Bearer hunter2")
        .json(&payload)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    // The config probe stays open for the front-end.
    let res = reqwest::get(format!("{url}/api/sms/config")).await.unwrap();
    assert_eq!(res.status(), 200);
}

#[tokio::test]
async fn roster_normalizes_table_payload() {
    let url = common::spawn_relay(base_config()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{url}/api/roster"))
        .json(&json!({
            "headers": ["담당선생", "학생이름", "학부모전화", "학생전화"],
            "rows": [
                ["김선생", "홍길동", "010-1234-5678", "010-9876-5432"],
                ["김선생", "", "010-0000-0000", ""]
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["teacherCount"], 1);
    assert_eq!(body["studentCount"], 1);
    let student = &body["roster"][0]["students"][0];
    assert_eq!(body["roster"][0]["teacher"], "김선생");
    assert_eq!(student["name"], "홍길동");
    assert_eq!(student["parentPhone"], "01012345678");
    assert_eq!(student["studentPhone"], "01098765432");
}

#[tokio::test]
async fn roster_names_missing_columns() {
    let url = common::spawn_relay(base_config()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{url}/api/roster"))
        .json(&json!({ "headers": ["foo", "bar"], "rows": [["a", "b"]] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 422);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "column-detection-failure");
    assert_eq!(body["missing"], json!(["teacher", "name"]));
}

#[tokio::test]
async fn roster_distinguishes_empty_input() {
    let url = common::spawn_relay(base_config()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{url}/api/roster"))
        .json(&json!({ "headers": ["teacher", "name"], "rows": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 422);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "empty-input");
}

#[tokio::test]
async fn roster_accepts_flat_json_list() {
    let url = common::spawn_relay(base_config()).await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{url}/api/roster"))
        .json(&json!([
            { "teacher": "Kim", "name": "Lee", "phone": "010-1111-2222" },
            { "teacher": "Kim", "name": "Lee" }
        ]))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["studentCount"], 2);
    let students = body["roster"][0]["students"].as_array().unwrap();
    assert_ne!(students[0]["id"], students[1]["id"]);
}

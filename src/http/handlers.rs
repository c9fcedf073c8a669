//! Route handlers.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::gateway::OutboundMessage;
use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::roster::{build_roster, normalize_phone, roster_from_json, Roster};

/// `GET /` — liveness document, mirrors what the front-end polls.
pub async fn health(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "ok": true,
        "service": "sms-relay",
        "provider": state.gateway.provider(),
    }))
}

/// `GET /api/sms/config` — what the front-end needs before sending.
pub async fn sms_config(State(state): State<AppState>) -> Json<Value> {
    Json(json!({
        "provider": state.gateway.provider(),
        "defaultFrom": state.config.sender.default_from,
    }))
}

#[derive(Debug, Deserialize)]
pub struct SendRequest {
    #[serde(default)]
    pub to: String,
    #[serde(default)]
    pub from: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub dry: bool,
}

/// `POST /api/sms` — relay a single message.
pub async fn sms_send(
    State(state): State<AppState>,
    Json(req): Json<SendRequest>,
) -> Result<Response, ApiError> {
    let to = normalize_phone(&req.to);
    let text = req.text.trim().to_string();
    if to.is_empty() || text.is_empty() {
        return Err(ApiError::BadRequest("missing to/text".to_string()));
    }

    let from = resolve_from(&req.from, &state);
    let message = OutboundMessage { to, from, text };

    tracing::debug!(
        provider = %state.gateway.provider(),
        dry = req.dry,
        text_len = message.text.chars().count(),
        "relaying message"
    );

    let outcome = state.gateway.send(&message, req.dry).await?;
    Ok(relay_outcome(outcome))
}

/// Per-student report fields, all optional; numbers and strings are both
/// accepted since spreadsheet exports are inconsistent about types.
#[derive(Debug, Deserialize)]
pub struct BulkStudent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub subject: Value,
    #[serde(default)]
    pub chapter: Value,
    #[serde(default)]
    pub diligence: Value,
    #[serde(default)]
    pub progress: Value,
    #[serde(default)]
    pub focus: Value,
    #[serde(default)]
    pub basic: Value,
    #[serde(default)]
    pub intermediate: Value,
    #[serde(default)]
    pub advanced: Value,
    #[serde(default, alias = "specialNotes")]
    pub special_notes: Value,
}

#[derive(Debug, Deserialize)]
pub struct SendBulkRequest {
    /// Overrides `sender.message_header` for this batch.
    #[serde(default)]
    pub header: Option<String>,
    /// Overrides `sender.message_title` for this batch.
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dry: bool,
    pub students: Vec<BulkStudent>,
}

/// The historical client posted a bare student list; keep accepting it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BulkPayload {
    Wrapped(SendBulkRequest),
    Flat(Vec<BulkStudent>),
}

/// `POST /api/sms/bulk` — render one report message per student and
/// relay the batch. Students without a usable name or phone are skipped,
/// same best-effort policy as the roster builder.
pub async fn sms_send_bulk(
    State(state): State<AppState>,
    Json(payload): Json<BulkPayload>,
) -> Result<Response, ApiError> {
    let request = match payload {
        BulkPayload::Wrapped(r) => r,
        BulkPayload::Flat(students) => SendBulkRequest {
            header: None,
            title: None,
            dry: false,
            students,
        },
    };

    let header = request
        .header
        .unwrap_or_else(|| state.config.sender.message_header.clone());
    let title = request
        .title
        .unwrap_or_else(|| state.config.sender.message_title.clone());
    let from = resolve_from("", &state);

    let mut messages = Vec::new();
    let mut skipped = 0usize;
    for student in &request.students {
        let name = student.name.trim();
        let to = normalize_phone(&student.phone);
        if name.is_empty() || to.is_empty() {
            skipped += 1;
            continue;
        }
        messages.push(OutboundMessage {
            to,
            from: from.clone(),
            text: render_report(&header, &title, name, student),
        });
    }

    if messages.is_empty() {
        return Err(ApiError::BadRequest("missing students".to_string()));
    }
    if skipped > 0 {
        tracing::warn!(skipped, "bulk send skipped students without name/phone");
    }

    let outcome = state.gateway.send_bulk(&messages, request.dry).await?;
    Ok(relay_outcome(outcome))
}

/// `POST /api/roster` — normalize a roster payload. Pure transform; the
/// service stores nothing and the caller owns the result.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum RosterPayload {
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Json(Value),
}

pub async fn roster_normalize(
    Json(payload): Json<RosterPayload>,
) -> Result<Json<Value>, ApiError> {
    let roster = match &payload {
        RosterPayload::Table { headers, rows } => build_roster(headers, rows)?,
        RosterPayload::Json(value) => roster_from_json(value)?,
    };
    Ok(Json(roster_response(&roster)))
}

fn roster_response(roster: &Roster) -> Value {
    json!({
        "ok": true,
        "teacherCount": roster.teacher_count(),
        "studentCount": roster.record_count(),
        "roster": roster,
    })
}

fn resolve_from(requested: &str, state: &AppState) -> String {
    let requested = normalize_phone(requested);
    if requested.is_empty() {
        normalize_phone(&state.config.sender.default_from)
    } else {
        requested
    }
}

fn relay_outcome(outcome: crate::gateway::SendOutcome) -> Response {
    let status =
        StatusCode::from_u16(outcome.status).unwrap_or(StatusCode::BAD_GATEWAY);
    (status, Json(outcome.body)).into_response()
}

/// Render the academy report body, one line per section, matching the
/// message layout parents have been receiving.
fn render_report(header: &str, title: &str, name: &str, s: &BulkStudent) -> String {
    let mut lines: Vec<String> = Vec::new();
    if !header.is_empty() {
        lines.push(header.to_string());
    }
    lines.push(format!("{name} 학생"));
    if !title.is_empty() {
        lines.push(title.to_string());
    }
    lines.push(format!("진도: {} {}", text_of(&s.subject), text_of(&s.chapter)));
    lines.push(format!("성실도: {}/10", text_of(&s.diligence)));
    lines.push(format!("진도 소화도: {}/10", text_of(&s.progress)));
    lines.push(format!("이해도: {}/10", text_of(&s.focus)));
    lines.push(format!(
        "기본: {}/10, 중간: {}/10, 심화: {}/10",
        text_of(&s.basic),
        text_of(&s.intermediate),
        text_of(&s.advanced)
    ));
    lines.push(format!("특이사항: {}", text_of(&s.special_notes)));
    lines.join("\n")
}

fn text_of(value: &Value) -> String {
    match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn student(fields: Value) -> BulkStudent {
        serde_json::from_value(fields).unwrap()
    }

    #[test]
    fn test_render_report_full() {
        let s = student(json!({
            "name": "홍길동",
            "phone": "010-1234-5678",
            "subject": "수학",
            "chapter": "2단원",
            "diligence": 9,
            "progress": 8,
            "focus": "7",
            "basic": 10,
            "intermediate": 8,
            "advanced": 6,
            "specialNotes": "숙제 우수"
        }));
        let text = render_report("[서울더함수학학원]", "6월 월간보고", "홍길동", &s);
        assert_eq!(
            text,
            "[서울더함수학학원]\n홍길동 학생\n6월 월간보고\n진도: 수학 2단원\n성실도: 9/10\n진도 소화도: 8/10\n이해도: 7/10\n기본: 10/10, 중간: 8/10, 심화: 6/10\n특이사항: 숙제 우수"
        );
    }

    #[test]
    fn test_render_report_without_header_or_title() {
        let s = student(json!({ "name": "Lee", "phone": "0101" }));
        let text = render_report("", "", "Lee", &s);
        assert!(text.starts_with("Lee 학생\n진도:"));
        assert!(text.contains("특이사항: "));
    }

    #[test]
    fn test_bulk_payload_accepts_bare_list() {
        let payload: BulkPayload =
            serde_json::from_value(json!([{ "name": "a", "phone": "010" }])).unwrap();
        assert!(matches!(payload, BulkPayload::Flat(ref v) if v.len() == 1));
    }

    #[test]
    fn test_roster_payload_shapes() {
        let table: RosterPayload = serde_json::from_value(json!({
            "headers": ["teacher", "name"],
            "rows": [["Kim", "Lee"]]
        }))
        .unwrap();
        assert!(matches!(table, RosterPayload::Table { .. }));

        let object: RosterPayload =
            serde_json::from_value(json!({ "Kim": [{ "name": "Lee" }] })).unwrap();
        assert!(matches!(object, RosterPayload::Json(_)));
    }
}

//! Output formatting helpers for human-readable and JSON output.

use localaccount::{
    clock::millis_to_datetime,
    user::{SessionRecord, UserRecord},
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

impl OutputFormat {
    pub fn from_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Human
        }
    }
}

/// Render a millisecond timestamp as RFC 3339.
pub fn format_millis(millis: u64) -> String {
    millis_to_datetime(millis).to_rfc3339()
}

/// Print `rows` as label/value pairs with the values aligned.
pub fn print_fields(rows: &[(&str, String)]) {
    let width = rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    for (label, value) in rows {
        println!("{:<width$}  {}", format!("{label}:"), value, width = width + 1);
    }
}

/// Profile view. The password is never printed.
pub fn user_json(user: &UserRecord) -> serde_json::Value {
    serde_json::json!({
        "nickname": user.nickname,
        "gender": user.gender,
        "dob": user.dob,
        "status": user.status,
        "createdAt": user.created_at,
    })
}

pub fn print_user(user: &UserRecord) {
    print_fields(&[
        ("Nickname", user.nickname.clone()),
        ("Gender", user.gender.clone()),
        ("Birthday", user.dob.clone()),
        ("Status", user.status.clone()),
        ("Created", format_millis(user.created_at)),
    ]);
}

pub fn session_json(session: Option<&SessionRecord>) -> serde_json::Value {
    match session {
        Some(session) => serde_json::json!({ "nick": session.nick, "at": session.at }),
        None => serde_json::Value::Null,
    }
}

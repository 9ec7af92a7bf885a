//! Wire types of the course API and its error.
//!
//! Records are delivered with any field possibly null or missing, they are
//! kept that way here. Only [`Lesson`], the payload of a save, enforces its
//! required keys.

pub mod client;

use serde::{Deserialize, Serialize};

use crate::services::http::NotSuccessResponseInfo;

pub use client::ApiClient;

/// `code` value of a successful response envelope.
pub const SUCCESS_CODE: i64 = 200;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never got a response: connection failure or timeout.
    #[error("Request failed: {0}")]
    Transport(String),
    /// The server answered with a non-2xx HTTP status.
    #[error("Server responded with status {status_code}: {text}")]
    Unsuccessful { status_code: u16, text: String },
    /// The envelope `code` is not 200.
    #[error("Request rejected ({code}): {}", message.as_deref().unwrap_or("no message"))]
    Rejected { code: i64, message: Option<String> },
    /// The body could not be decoded.
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            Self::Parse(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(error: serde_json::Error) -> Self {
        Self::Parse(error.to_string())
    }
}

impl From<NotSuccessResponseInfo> for ApiError {
    fn from(info: NotSuccessResponseInfo) -> Self {
        Self::Unsuccessful {
            status_code: info.status_code,
            text: info.text,
        }
    }
}

impl ApiError {
    /// Whether the server answered and refused the request, as opposed to the
    /// request never completing.
    pub fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected { .. } | Self::Unsuccessful { .. })
    }
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    /// Splits a successful envelope from a rejected one.
    pub fn into_result(self) -> Result<Envelope<T>, ApiError> {
        if self.code == SUCCESS_CODE {
            Ok(self)
        } else {
            Err(ApiError::Rejected {
                code: self.code,
                message: self.message,
            })
        }
    }
}

/// Acknowledgement of a write.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ack {
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub started_at: Option<String>,
    pub price: Option<f64>,
    pub user_teacher_id: Option<u64>,
    pub photo_path: Option<String>,
    pub category_id: Option<u64>,
    pub is_available: Option<bool>,
    pub is_subscribed: Option<bool>,
    pub category: Option<Category>,
    #[serde(default)]
    pub sections: Option<Vec<Section>>,
    pub teacher: Option<Teacher>,
}

impl Course {
    pub fn sections(&self) -> &[Section] {
        self.sections.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: Option<u64>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub id: Option<u64>,
    pub course_id: Option<u64>,
    pub name: Option<String>,
    pub capacity: Option<u64>,
    pub days_of_week: Option<Vec<DaysOfWeek>>,
    pub sessions: Option<Vec<ClassSession>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaysOfWeek {
    pub duration: Option<u32>,
    pub time: Option<String>,
    pub day: Option<u8>,
}

/// A scheduled occurrence of a lesson in a section.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSession {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson_id: Option<u64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    // Misspelled on the server side.
    #[serde(rename = "duaration", skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lesson: Option<Box<LessonRecord>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Teacher {
    pub id: Option<u64>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub role_id: Option<u64>,
    pub national_number: Option<String>,
    pub central_number: Option<String>,
    pub birth_date: Option<String>,
    pub father_name: Option<String>,
    pub mother_name: Option<String>,
    pub personal_picture: Option<String>,
}

/// Lesson as listed by the API.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LessonRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sessions: Option<Vec<ClassSession>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_id: Option<u64>,
}

/// Lesson as sent to be saved. `id` is 0 for a lesson not yet created.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Lesson {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub sessions: Vec<ClassSession>,
    pub course_id: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignUpRequest {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub access_token: String,
    pub name: String,
    pub img: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SignUpResponse {
    pub code: i64,
    #[serde(default)]
    pub message: Option<String>,
    pub user: Option<User>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lesson_payload_keys() {
        let lesson = Lesson {
            id: 0,
            name: String::new(),
            description: String::new(),
            sessions: Vec::new(),
            course_id: 4,
        };
        assert_eq!(
            serde_json::to_value(&lesson).unwrap(),
            serde_json::json!({
                "id": 0,
                "name": "",
                "description": "",
                "sessions": [],
                "course_id": 4,
            })
        );
    }

    #[test]
    fn course_with_missing_fields() {
        let course: Course = serde_json::from_str(
            r#"{
                "id": 3,
                "name": "Algebra",
                "category": { "id": 1, "type": null },
                "sections": [
                    { "id": 1, "name": "Morning", "capacity": null,
                      "sessions": [{ "id": 9, "duaration": 45, "section_id": 1 }] },
                    { "id": 2, "name": "Evening" }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(course.id, Some(3));
        assert_eq!(course.sections().len(), 2);
        let sessions = course.sections()[0].sessions.as_ref().unwrap();
        assert_eq!(sessions[0].duration, Some(45));
        assert!(Course::default().sections().is_empty());
    }

    #[test]
    fn lesson_list_with_null_fields() {
        let envelope: Envelope<Vec<LessonRecord>> = serde_json::from_str(
            r#"{
                "code": 200,
                "data": [
                    { "id": 1, "name": "Sets", "description": null, "course_id": 7 },
                    { "id": 2, "sessions": [
                        { "id": 4, "duaration": null, "lesson": { "id": 2, "name": "Maps" } }
                    ] },
                    {}
                ]
            }"#,
        )
        .unwrap();
        let lessons = envelope.into_result().unwrap().data.unwrap();
        assert_eq!(lessons.len(), 3);
        assert_eq!(lessons[0].description, None);
        assert_eq!(lessons[1].course_id, None);
        let nested = lessons[1].sessions.as_ref().unwrap()[0]
            .lesson
            .as_ref()
            .unwrap();
        assert_eq!(nested.name.as_deref(), Some("Maps"));
        assert_eq!(nested.course_id, None);
        assert_eq!(lessons[2], LessonRecord::default());
    }

    #[test]
    fn envelope_code() {
        let ok: Envelope<Course> = serde_json::from_str(r#"{ "code": 200 }"#).unwrap();
        assert!(ok.into_result().is_ok());

        let rejected: Envelope<Course> =
            serde_json::from_str(r#"{ "code": 422, "message": "name taken" }"#).unwrap();
        assert_eq!(
            rejected.into_result().unwrap_err(),
            ApiError::Rejected {
                code: 422,
                message: Some("name taken".to_string())
            }
        );
    }
}

use std::time::Duration;

use reqwest::Response;
use serde::{de::DeserializeOwned, Serialize};

use super::{
    Ack, ApiError, Course, Envelope, Lesson, LessonRecord, SignUpRequest, SignUpResponse, User,
};
use crate::services::http::ResponseExt;

/// Client of the course API.
///
/// Every request carries the timeout given at construction, an expired
/// request is reported as [`ApiError::Transport`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    lesson_endpoint: String,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        lesson_endpoint: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            lesson_endpoint: lesson_endpoint.into(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
    ) -> Result<Envelope<T>, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        parse(response).await
    }

    async fn post_json<B: Serialize>(
        &self,
        token: Option<&str>,
        path: &str,
        body: &B,
    ) -> Result<Response, ApiError> {
        let mut request = self.http.post(self.url(path)).json(body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        Ok(request.send().await?)
    }

    /// Creates or updates a lesson, `lesson.id == 0` being a creation.
    pub async fn save_lesson(&self, token: &str, lesson: &Lesson) -> Result<Ack, ApiError> {
        tracing::info!(
            "Saving lesson {} of course {}",
            lesson.id,
            lesson.course_id
        );
        let response = self
            .post_json(Some(token), &self.lesson_endpoint, lesson)
            .await?;
        let envelope: Envelope<serde_json::Value> = parse(response).await?;
        Ok(Ack {
            message: envelope.message,
        })
    }

    pub async fn course(&self, token: &str, course_id: u64) -> Result<Course, ApiError> {
        let envelope: Envelope<Course> = self
            .get(token, &format!("/api/courses/{}", course_id))
            .await?;
        envelope
            .data
            .ok_or_else(|| ApiError::Parse("Missing course in response".to_string()))
    }

    pub async fn lessons(
        &self,
        token: &str,
        course_id: u64,
    ) -> Result<Vec<LessonRecord>, ApiError> {
        let envelope: Envelope<Vec<LessonRecord>> = self
            .get(token, &format!("/api/courses/{}/lessons", course_id))
            .await?;
        Ok(envelope.data.unwrap_or_default())
    }

    pub async fn sign_up(&self, request: &SignUpRequest) -> Result<User, ApiError> {
        let response = self
            .post_json(None, "/api/auth/signup", request)
            .await?
            .check_success()
            .await?;
        let body = response.bytes().await?;
        let res: SignUpResponse = serde_json::from_slice(&body)?;
        if res.code != super::SUCCESS_CODE {
            return Err(ApiError::Rejected {
                code: res.code,
                message: res.message,
            });
        }
        res.user
            .ok_or_else(|| ApiError::Parse("Missing user in response".to_string()))
    }
}

/// Checks the HTTP status then the envelope code of a response.
async fn parse<T: DeserializeOwned>(response: Response) -> Result<Envelope<T>, ApiError> {
    let response = response.check_success().await?;
    let body = response.bytes().await?;
    let envelope: Envelope<T> = serde_json::from_slice(&body)?;
    envelope.into_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::api::ClassSession;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer, timeout: Duration) -> ApiClient {
        ApiClient::new(server.base_url(), "/api/lessons/save", timeout).unwrap()
    }

    fn new_lesson(course_id: u64) -> Lesson {
        Lesson {
            id: 0,
            name: String::new(),
            description: String::new(),
            sessions: Vec::new(),
            course_id,
        }
    }

    #[tokio::test]
    async fn save_lesson_sends_payload_once() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/api/lessons/save")
                    .header("authorization", "Bearer token-1")
                    .json_body(json!({
                        "id": 0,
                        "name": "",
                        "description": "",
                        "sessions": [],
                        "course_id": 7,
                    }));
                then.status(200)
                    .json_body(json!({ "code": 200, "message": "saved" }));
            })
            .await;

        let ack = client(&server, Duration::from_secs(5))
            .save_lesson("token-1", &new_lesson(7))
            .await
            .unwrap();
        assert_eq!(ack.message.as_deref(), Some("saved"));
        mock.assert_hits_async(1).await;
    }

    #[tokio::test]
    async fn save_lesson_keeps_sessions() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/lessons/save").json_body(json!({
                    "id": 12,
                    "name": "Limits",
                    "description": "Intro",
                    "sessions": [{ "id": 3, "duaration": 60 }],
                    "course_id": 7,
                }));
                then.status(200).json_body(json!({ "code": 200 }));
            })
            .await;

        let lesson = Lesson {
            id: 12,
            name: "Limits".to_string(),
            description: "Intro".to_string(),
            sessions: vec![ClassSession {
                id: Some(3),
                duration: Some(60),
                ..Default::default()
            }],
            course_id: 7,
        };
        client(&server, Duration::from_secs(5))
            .save_lesson("t", &lesson)
            .await
            .unwrap();
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn envelope_code_other_than_200_is_a_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/lessons/save");
                then.status(200)
                    .json_body(json!({ "code": 400, "message": "invalid course" }));
            })
            .await;

        let err = client(&server, Duration::from_secs(5))
            .save_lesson("t", &new_lesson(1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                code: 400,
                message: Some("invalid course".to_string())
            }
        );
        assert!(err.is_rejection());
    }

    #[tokio::test]
    async fn http_error_status_is_a_rejection() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/lessons/save");
                then.status(500).body("boom");
            })
            .await;

        let err = client(&server, Duration::from_secs(5))
            .save_lesson("t", &new_lesson(1))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ApiError::Unsuccessful {
                status_code: 500,
                text: "boom".to_string()
            }
        );
    }

    #[tokio::test]
    async fn slow_server_times_out() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/lessons/save");
                then.status(200)
                    .delay(Duration::from_secs(2))
                    .json_body(json!({ "code": 200 }));
            })
            .await;

        let err = client(&server, Duration::from_millis(200))
            .save_lesson("t", &new_lesson(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
        assert!(!err.is_rejection());
    }

    #[tokio::test]
    async fn unreachable_server_is_a_transport_failure() {
        let client = ApiClient::new("http://127.0.0.1:1", "/x", Duration::from_secs(1)).unwrap();
        let err = client.save_lesson("t", &new_lesson(1)).await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn undecodable_body_is_a_parse_failure() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/api/lessons/save");
                then.status(200).body("<html>");
            })
            .await;

        let err = client(&server, Duration::from_secs(5))
            .save_lesson("t", &new_lesson(1))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Parse(_)));
    }

    #[tokio::test]
    async fn course_and_lessons() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/api/courses/7")
                    .header("authorization", "Bearer t");
                then.status(200).json_body(json!({
                    "code": 200,
                    "data": { "id": 7, "name": "Algebra", "sections": [{ "id": 1, "name": "A" }] }
                }));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/courses/7/lessons");
                then.status(200).json_body(json!({
                    "code": 200,
                    "data": [
                        { "id": 1, "name": "Sets", "description": "", "course_id": 7 },
                        { "id": 2, "name": "Maps", "description": null }
                    ]
                }));
            })
            .await;

        let client = client(&server, Duration::from_secs(5));
        let course = client.course("t", 7).await.unwrap();
        assert_eq!(course.name.as_deref(), Some("Algebra"));
        assert_eq!(course.sections().len(), 1);

        let lessons = client.lessons("t", 7).await.unwrap();
        assert_eq!(lessons.len(), 2);
        assert_eq!(lessons[0].name.as_deref(), Some("Sets"));
        assert_eq!(lessons[0].sessions, None);
        assert_eq!(lessons[1].description, None);
        assert_eq!(lessons[1].course_id, None);
    }

    #[tokio::test]
    async fn sign_up() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/api/auth/signup").json_body(json!({
                    "username": "ada",
                    "email": "ada@example.com",
                    "password": "pw",
                }));
                then.status(200).json_body(json!({
                    "code": 200,
                    "user": { "access_token": "tok", "name": "Ada", "img": "/a.jpg" }
                }));
            })
            .await;

        let user = client(&server, Duration::from_secs(5))
            .sign_up(&SignUpRequest {
                username: "ada".to_string(),
                email: "ada@example.com".to_string(),
                password: "pw".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(user.access_token, "tok");
        mock.assert_async().await;
    }
}

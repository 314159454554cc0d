use std::future::Future;
use std::time::Duration;

use futures_util::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use tuni_types::{ChatReply, ChatRequest, ChatResponse};

use crate::config::ChatConfig;
use crate::interop::read_cookie;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("failed to serialize request: {0}")]
    Encode(String),
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: {0}")]
    Status(u16),
    #[error("failed to parse JSON: {0}")]
    Decode(String),
    #[error("response carried neither reply nor error")]
    Malformed,
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
}

/// POST one message to the chat endpoint.
///
/// Any non-2xx status is a failure regardless of body. A 2xx body must carry
/// `reply` or `error`.
pub async fn send_chat_message(config: &ChatConfig, message: &str) -> Result<ChatReply, ApiError> {
    let url = config.chat_url();
    let csrf = read_cookie(&config.csrf_cookie).unwrap_or_default();
    let request = build_chat_request(&url, &config.csrf_header, &csrf, message)?;
    dioxus_logger::tracing::debug!("POST {}", url);

    let timeout_ms = u32::try_from(config.request_timeout.as_millis()).unwrap_or(u32::MAX);
    let timer = TimeoutFuture::new(timeout_ms);

    race_timeout(Box::pin(post(request)), Box::pin(timer), config.request_timeout).await
}

/// JSON POST carrying the CSRF token; an absent cookie is sent as `""`
pub fn build_chat_request(
    url: &str,
    csrf_header: &str,
    csrf_token: &str,
    message: &str,
) -> Result<Request, ApiError> {
    let body = ChatRequest {
        message: message.to_string(),
    };

    Request::post(url)
        .header(csrf_header, csrf_token)
        .json(&body)
        .map_err(|e| ApiError::Encode(e.to_string()))
}

async fn post(request: Request) -> Result<ChatReply, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_else(|e| {
        dioxus_logger::tracing::warn!("Failed to read chat response body: {}", e);
        String::new()
    });

    classify_response(status, &body)
}

/// Turn a status and raw body into a reply or a transport error
pub fn classify_response(status: u16, body: &str) -> Result<ChatReply, ApiError> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status(status));
    }

    let data: ChatResponse =
        serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;

    data.interpret().ok_or(ApiError::Malformed)
}

async fn race_timeout<F, T>(exchange: F, timer: T, timeout: Duration) -> Result<ChatReply, ApiError>
where
    F: Future<Output = Result<ChatReply, ApiError>> + Unpin,
    T: Future + Unpin,
{
    match select(exchange, timer).await {
        Either::Left((result, _)) => result,
        Either::Right(_) => Err(ApiError::Timeout(timeout)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures_util::future::{pending, ready};
    use futures_util::FutureExt;

    #[test]
    fn error_messages_name_the_cause() {
        assert_eq!(ApiError::Status(500).to_string(), "HTTP error: 500");
        assert_eq!(
            ApiError::Timeout(Duration::from_secs(30)).to_string(),
            "request timed out after 30s"
        );
        assert!(ApiError::Malformed.to_string().contains("neither"));
    }

    #[test]
    fn reply_body_on_success() {
        let reply = classify_response(200, r#"{"reply":"Hi there!"}"#).unwrap();
        assert_eq!(reply, ChatReply::Reply("Hi there!".to_string()));
    }

    #[test]
    fn error_payload_on_success_is_a_reply() {
        let reply = classify_response(201, r#"{"error":"rate limited"}"#).unwrap();
        assert_eq!(reply, ChatReply::Error("rate limited".to_string()));
    }

    #[test]
    fn non_success_status_fails_even_with_reply_body() {
        let err = classify_response(500, r#"{"reply":"x"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Status(500)));

        let err = classify_response(302, "").unwrap_err();
        assert!(matches!(err, ApiError::Status(302)));
    }

    #[test]
    fn non_json_success_body_is_decode_error() {
        let err = classify_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));

        let err = classify_response(200, "").unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn success_body_without_fields_is_malformed() {
        let err = classify_response(200, r#"{"status":"ok"}"#).unwrap_err();
        assert!(matches!(err, ApiError::Malformed));
    }

    #[test]
    fn timer_winning_the_race_is_a_timeout() {
        let timeout = Duration::from_secs(30);
        let outcome = race_timeout(pending::<Result<ChatReply, ApiError>>(), ready(()), timeout)
            .now_or_never()
            .expect("race settles immediately");
        assert!(matches!(outcome, Err(ApiError::Timeout(d)) if d == timeout));
    }

    #[test]
    fn response_winning_the_race_is_returned() {
        let answer = ready(Ok(ChatReply::Reply("fast".to_string())));
        let outcome = race_timeout(answer, pending::<()>(), Duration::from_secs(30))
            .now_or_never()
            .expect("race settles immediately");
        assert_eq!(outcome.unwrap(), ChatReply::Reply("fast".to_string()));
    }
}

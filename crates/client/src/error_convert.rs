use serde::Deserialize;
use shared_types::AppError;

/// Error body returned by the repository API.
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    error_description: Option<String>,
}

/// Convert a transport-level reqwest error into an AppError.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::internal(format!("Unexpected response body: {err}"));
    }
    if err.is_builder() {
        return AppError::internal(format!("Invalid request: {err}"));
    }
    if let Some(status) = err.status() {
        return AppError::from_status(status.as_u16(), err.to_string());
    }
    AppError::network(format!("Could not reach the server: {err}"))
}

/// Convert a non-success response into an AppError.
///
/// An embedded `AppError` wins, then the API's own error body, then the bare
/// status code.
pub fn response_to_app_error(status: u16, body: &str) -> AppError {
    if let Some(err) = AppError::from_error_text(body) {
        return err;
    }
    if let Ok(api) = serde_json::from_str::<ApiErrorBody>(body) {
        if let Some(message) = api.error_description.or(api.error) {
            return AppError::from_status(api.code.unwrap_or(status), message);
        }
    }
    let message = if body.trim().is_empty() {
        format!("Request failed with status {status}")
    } else {
        body.trim().to_string()
    };
    AppError::from_status(status, message)
}

/// Validate a request body before it is sent.
#[cfg(feature = "validation")]
pub trait ValidateRequest {
    fn validate_request(&self) -> Result<(), AppError>;
}

#[cfg(feature = "validation")]
impl<T: validator::Validate> ValidateRequest for T {
    fn validate_request(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn embedded_app_error_is_preserved() {
        let err = response_to_app_error(500, r#"{"kind":"Forbidden","message":"nope"}"#);
        assert_eq!(err.kind, AppErrorKind::Forbidden);
        assert_eq!(err.message, "nope");
    }

    #[test]
    fn api_error_body_supplies_message() {
        let err = response_to_app_error(
            404,
            r#"{"code":404,"error":"Not Found","error_description":"No item abc/1"}"#,
        );
        assert_eq!(err.kind, AppErrorKind::NotFound);
        assert_eq!(err.message, "No item abc/1");
    }

    #[test]
    fn plain_body_falls_back_to_status() {
        let err = response_to_app_error(401, "");
        assert_eq!(err.kind, AppErrorKind::Unauthorized);
        assert_eq!(err.message, "Request failed with status 401");
        assert_eq!(response_to_app_error(502, "bad gateway").message, "bad gateway");
    }
}

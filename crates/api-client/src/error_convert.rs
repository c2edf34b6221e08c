use shared_types::AppError;

/// Convert a reqwest::Error into an AppError.
///
/// Body decoding failures become `Decode`; everything else means no usable
/// response arrived and becomes `Network`.
pub fn reqwest_to_app_error(err: reqwest::Error) -> AppError {
    if err.is_decode() {
        return AppError::decode(err.to_string());
    }
    if let Some(status) = err.status() {
        return AppError::from_response(status.as_u16(), "");
    }
    AppError::network(err.to_string())
}

/// Convert a serde_json::Error from a response body into an AppError.
pub fn json_to_app_error(err: serde_json::Error) -> AppError {
    AppError::decode(format!("Unexpected response body: {err}"))
}

/// Extension trait providing `.into_app_error()` on reqwest::Error.
pub trait ReqwestErrorExt {
    fn into_app_error(self) -> AppError;
}

impl ReqwestErrorExt for reqwest::Error {
    fn into_app_error(self) -> AppError {
        reqwest_to_app_error(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::AppErrorKind;

    #[test]
    fn json_errors_are_decode_errors() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let app = json_to_app_error(err);
        assert_eq!(app.kind, AppErrorKind::Decode);
        assert_eq!(app.friendly_message(), shared_types::GENERIC_ERROR_MESSAGE);
    }
}

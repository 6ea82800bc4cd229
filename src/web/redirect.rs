use axum::http::StatusCode;
use axum::response::Redirect;
use url::form_urlencoded;

/// 303 to the error page carrying `code` and `message` in the query string.
/// A blank message is left out.
pub fn to_error(code: StatusCode, message: &str) -> Redirect {
    let mut params = form_urlencoded::Serializer::new(String::new());
    params.append_pair("code", code.as_str());
    if !message.trim().is_empty() {
        params.append_pair("message", message);
    }
    Redirect::to(&format!("/error?{}", params.finish()))
}

/// 303 back to `path` with a flash message for the page to show.
pub fn with_message(path: &str, message: &str) -> Redirect {
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("msg", message)
        .finish();
    Redirect::to(&format!("{path}?{query}"))
}

#[cfg(test)]
mod pdf_fixture;

#[cfg(test)]
pub mod fixtures {
    pub use super::pdf_fixture::pdf_with_pages;

    use crate::models::domain::{Difficulty, GenerationRequest, Language};

    pub const PARIS: &str = "Paris is the capital of France.";

    /// The request used throughout the prompt tests.
    pub fn paris_request() -> GenerationRequest {
        GenerationRequest::new(5, Difficulty::Easy, Language::English, PARIS)
            .expect("fixture request is valid")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use actix_web::http::StatusCode;

    /// Asserts that a status code represents an error (4xx or 5xx)
    pub fn assert_error_status(status: StatusCode) {
        assert!(
            status.is_client_error() || status.is_server_error(),
            "Expected error status, got: {}",
            status
        );
    }

    /// Asserts that a status code represents success (2xx)
    pub fn assert_success_status(status: StatusCode) {
        assert!(
            status.is_success(),
            "Expected success status, got: {}",
            status
        );
    }

    /// Keeps only the characters a reader would actually see.
    pub fn visible_chars(text: &str) -> String {
        text.chars().filter(|c| !c.is_whitespace()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::test_helpers::*;

    #[test]
    fn test_fixtures_pdf_has_header() {
        let bytes = pdf_with_pages(&["one"]);
        assert!(bytes.starts_with(b"%PDF-1.5"));
    }

    #[test]
    fn test_fixtures_paris_request() {
        let request = paris_request();
        assert_eq!(request.count(), 5);
        assert_eq!(request.source_text(), PARIS);
    }

    #[test]
    fn test_visible_chars_strips_whitespace() {
        assert_eq!(visible_chars(" a\tb\nc "), "abc");
    }
}

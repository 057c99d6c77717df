//! Status code classification.
//!
//! Five mutually exclusive closed-open bands partition `[100, 600)`. Codes
//! outside that range carry no band; every predicate on them is false.

use super::Response;
use http::StatusCode;

/// One of the five HTTP status bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusBand {
    /// `[100, 200)`
    Informational,
    /// `[200, 300)`
    Successful,
    /// `[300, 400)`
    Redirect,
    /// `[400, 500)`
    ClientError,
    /// `[500, 600)`
    ServerError,
}

impl StatusBand {
    /// Classify a raw status code.
    pub fn classify(code: u16) -> Option<Self> {
        match code {
            100..=199 => Some(StatusBand::Informational),
            200..=299 => Some(StatusBand::Successful),
            300..=399 => Some(StatusBand::Redirect),
            400..=499 => Some(StatusBand::ClientError),
            500..=599 => Some(StatusBand::ServerError),
            _ => None,
        }
    }

    /// Classify a typed status code.
    pub fn of(status: StatusCode) -> Option<Self> {
        Self::classify(status.as_u16())
    }

    /// Client or server error.
    pub fn is_failure(self) -> bool {
        matches!(self, StatusBand::ClientError | StatusBand::ServerError)
    }
}

impl Response {
    /// Band this response's status falls in.
    pub fn band(&self) -> Option<StatusBand> {
        StatusBand::of(self.status())
    }

    /// 1xx status.
    pub fn informational(&self) -> bool {
        self.band() == Some(StatusBand::Informational)
    }

    /// 2xx status.
    pub fn successful(&self) -> bool {
        self.band() == Some(StatusBand::Successful)
    }

    /// 3xx status.
    pub fn redirect(&self) -> bool {
        self.band() == Some(StatusBand::Redirect)
    }

    /// 4xx status.
    pub fn client_error(&self) -> bool {
        self.band() == Some(StatusBand::ClientError)
    }

    /// 5xx status.
    pub fn server_error(&self) -> bool {
        self.band() == Some(StatusBand::ServerError)
    }

    /// Client or server error.
    pub fn failed(&self) -> bool {
        self.band().is_some_and(StatusBand::is_failure)
    }

    /// Status is 200 OK.
    pub fn ok(&self) -> bool {
        self.status() == StatusCode::OK
    }

    /// Status is 201 Created.
    pub fn created(&self) -> bool {
        self.status() == StatusCode::CREATED
    }

    /// Status is 202 Accepted.
    pub fn accepted(&self) -> bool {
        self.status() == StatusCode::ACCEPTED
    }

    /// Status is 204 No Content.
    pub fn no_content(&self) -> bool {
        self.status() == StatusCode::NO_CONTENT
    }

    /// Status is 301 Moved Permanently.
    pub fn moved_permanently(&self) -> bool {
        self.status() == StatusCode::MOVED_PERMANENTLY
    }

    /// Status is 302 Found.
    pub fn found(&self) -> bool {
        self.status() == StatusCode::FOUND
    }

    /// Status is 304 Not Modified.
    pub fn not_modified(&self) -> bool {
        self.status() == StatusCode::NOT_MODIFIED
    }

    /// Status is 400 Bad Request.
    pub fn bad_request(&self) -> bool {
        self.status() == StatusCode::BAD_REQUEST
    }

    /// Status is 401 Unauthorized.
    pub fn unauthorized(&self) -> bool {
        self.status() == StatusCode::UNAUTHORIZED
    }

    /// Status is 402 Payment Required.
    pub fn payment_required(&self) -> bool {
        self.status() == StatusCode::PAYMENT_REQUIRED
    }

    /// Status is 403 Forbidden.
    pub fn forbidden(&self) -> bool {
        self.status() == StatusCode::FORBIDDEN
    }

    /// Status is 404 Not Found.
    pub fn not_found(&self) -> bool {
        self.status() == StatusCode::NOT_FOUND
    }

    /// Status is 408 Request Timeout.
    pub fn request_timeout(&self) -> bool {
        self.status() == StatusCode::REQUEST_TIMEOUT
    }

    /// Status is 409 Conflict.
    pub fn conflict(&self) -> bool {
        self.status() == StatusCode::CONFLICT
    }

    /// Status is 422 Unprocessable Entity.
    pub fn unprocessable_entity(&self) -> bool {
        self.status() == StatusCode::UNPROCESSABLE_ENTITY
    }

    /// Status is 429 Too Many Requests.
    pub fn too_many_requests(&self) -> bool {
        self.status() == StatusCode::TOO_MANY_REQUESTS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_has_exactly_one_band() {
        for code in 100u16..600 {
            let band = StatusBand::classify(code);
            assert!(band.is_some(), "code {code} must classify");

            let memberships = [
                StatusBand::Informational,
                StatusBand::Successful,
                StatusBand::Redirect,
                StatusBand::ClientError,
                StatusBand::ServerError,
            ]
            .into_iter()
            .filter(|b| Some(*b) == band)
            .count();
            assert_eq!(memberships, 1, "code {code} must be in exactly one band");
        }
    }

    #[test]
    fn test_band_boundaries_are_closed_open() {
        assert_eq!(StatusBand::classify(199), Some(StatusBand::Informational));
        assert_eq!(StatusBand::classify(200), Some(StatusBand::Successful));
        assert_eq!(StatusBand::classify(299), Some(StatusBand::Successful));
        assert_eq!(StatusBand::classify(300), Some(StatusBand::Redirect));
        assert_eq!(StatusBand::classify(399), Some(StatusBand::Redirect));
        assert_eq!(StatusBand::classify(400), Some(StatusBand::ClientError));
        assert_eq!(StatusBand::classify(499), Some(StatusBand::ClientError));
        assert_eq!(StatusBand::classify(500), Some(StatusBand::ServerError));
        assert_eq!(StatusBand::classify(599), Some(StatusBand::ServerError));
        assert_eq!(StatusBand::classify(99), None);
        assert_eq!(StatusBand::classify(600), None);
    }

    #[test]
    fn test_failure_is_client_or_server_error() {
        for code in 100u16..600 {
            let band = StatusBand::classify(code).unwrap();
            assert_eq!(band.is_failure(), (400..600).contains(&code));
        }
    }
}

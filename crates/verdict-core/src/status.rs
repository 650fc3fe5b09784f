use http::StatusCode;
use strum::{EnumIter, IntoStaticStr};

/// Response class of a status code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusClass {
    Informational,
    Success,
    Redirection,
    ClientError,
    ServerError,
}

/// Declares the status table once and derives every lookup from it
///
/// Each row is `Variant => numeric status, "CODE", "Reason Phrase"`.
macro_rules! status_table {
    ($($variant:ident => $num:literal, $code:literal, $reason:literal;)+) => {
        /// Closed set of HTTP statuses an error can be bound to
        ///
        /// Every member maps to exactly one status code, one mnemonic `code`
        /// and one reason phrase. The mapping is fixed at compile time.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
        pub enum Status {
            $($variant,)+
        }

        impl Status {
            /// Numeric HTTP status
            pub const fn as_u16(self) -> u16 {
                match self {
                    $(Self::$variant => $num,)+
                }
            }

            /// Default mnemonic placed in `ErrorBody::code`
            pub const fn code(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }

            /// Default reason phrase placed in `ErrorBody::message`
            pub const fn reason(self) -> &'static str {
                match self {
                    $(Self::$variant => $reason,)+
                }
            }

            /// Look a member up by numeric status
            pub const fn from_u16(status: u16) -> Option<Self> {
                match status {
                    $($num => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

status_table! {
    // 1xx
    Continue => 100, "CONTINUE", "Continue";
    SwitchingProtocols => 101, "SWITCHING_PROTOCOLS", "Switching Protocols";
    Processing => 102, "PROCESSING", "Processing";
    EarlyHints => 103, "EARLY_HINTS", "Early Hints";

    // 2xx
    Ok => 200, "OK", "OK";
    Created => 201, "CREATED", "Created";
    Accepted => 202, "ACCEPTED", "Accepted";
    NonAuthoritativeInformation => 203, "NON_AUTHORITATIVE_INFORMATION", "Non-Authoritative Information";
    NoContent => 204, "NO_CONTENT", "No Content";
    ResetContent => 205, "RESET_CONTENT", "Reset Content";
    PartialContent => 206, "PARTIAL_CONTENT", "Partial Content";
    MultiStatus => 207, "MULTI_STATUS", "Multi-Status";
    AlreadyReported => 208, "ALREADY_REPORTED", "Already Reported";
    ImUsed => 226, "IM_USED", "IM Used";

    // 3xx
    MultipleChoices => 300, "MULTIPLE_CHOICES", "Multiple Choices";
    MovedPermanently => 301, "MOVED_PERMANENTLY", "Moved Permanently";
    Found => 302, "FOUND", "Found";
    SeeOther => 303, "SEE_OTHER", "See Other";
    NotModified => 304, "NOT_MODIFIED", "Not Modified";
    UseProxy => 305, "USE_PROXY", "Use Proxy";
    TemporaryRedirect => 307, "TEMPORARY_REDIRECT", "Temporary Redirect";
    PermanentRedirect => 308, "PERMANENT_REDIRECT", "Permanent Redirect";

    // 4xx
    BadRequest => 400, "BAD_REQUEST", "Bad Request";
    Unauthorized => 401, "UNAUTHORIZED", "Unauthorized";
    PaymentRequired => 402, "PAYMENT_REQUIRED", "Payment Required";
    Forbidden => 403, "FORBIDDEN", "Forbidden";
    NotFound => 404, "NOT_FOUND", "Not Found";
    MethodNotAllowed => 405, "METHOD_NOT_ALLOWED", "Method Not Allowed";
    NotAcceptable => 406, "NOT_ACCEPTABLE", "Not Acceptable";
    ProxyAuthRequired => 407, "PROXY_AUTH_REQUIRED", "Proxy Authentication Required";
    RequestTimeout => 408, "REQUEST_TIMEOUT", "Request Timeout";
    Conflict => 409, "CONFLICT", "Conflict";
    Gone => 410, "GONE", "Gone";
    LengthRequired => 411, "LENGTH_REQUIRED", "Length Required";
    PreconditionFailed => 412, "PRECONDITION_FAILED", "Precondition Failed";
    RequestEntityTooLarge => 413, "REQUEST_ENTITY_TOO_LARGE", "Request Entity Too Large";
    RequestUriTooLong => 414, "REQUEST_URI_TOO_LONG", "Request URI Too Long";
    UnsupportedMediaType => 415, "UNSUPPORTED_MEDIA_TYPE", "Unsupported Media Type";
    RequestedRangeNotSatisfiable => 416, "REQUESTED_RANGE_NOT_SATISFIABLE", "Requested Range Not Satisfiable";
    ExpectationFailed => 417, "EXPECTATION_FAILED", "Expectation Failed";
    Teapot => 418, "TEAPOT", "I'm a teapot";
    MisdirectedRequest => 421, "MISDIRECTED_REQUEST", "Misdirected Request";
    UnprocessableEntity => 422, "UNPROCESSABLE_ENTITY", "Unprocessable Entity";
    Locked => 423, "LOCKED", "Locked";
    FailedDependency => 424, "FAILED_DEPENDENCY", "Failed Dependency";
    TooEarly => 425, "TOO_EARLY", "Too Early";
    UpgradeRequired => 426, "UPGRADE_REQUIRED", "Upgrade Required";
    PreconditionRequired => 428, "PRECONDITION_REQUIRED", "Precondition Required";
    TooManyRequests => 429, "TOO_MANY_REQUESTS", "Too Many Requests";
    RequestHeaderFieldsTooLarge => 431, "REQUEST_HEADER_FIELDS_TOO_LARGE", "Request Header Fields Too Large";
    UnavailableForLegalReasons => 451, "UNAVAILABLE_FOR_LEGAL_REASONS", "Unavailable For Legal Reasons";

    // 5xx
    InternalServerError => 500, "INTERNAL_SERVER_ERROR", "Internal Server Error";
    NotImplemented => 501, "NOT_IMPLEMENTED", "Not Implemented";
    BadGateway => 502, "BAD_GATEWAY", "Bad Gateway";
    ServiceUnavailable => 503, "SERVICE_UNAVAILABLE", "Service Unavailable";
    GatewayTimeout => 504, "GATEWAY_TIMEOUT", "Gateway Timeout";
    HttpVersionNotSupported => 505, "HTTP_VERSION_NOT_SUPPORTED", "HTTP Version Not Supported";
    VariantAlsoNegotiates => 506, "VARIANT_ALSO_NEGOTIATES", "Variant Also Negotiates";
    InsufficientStorage => 507, "INSUFFICIENT_STORAGE", "Insufficient Storage";
    LoopDetected => 508, "LOOP_DETECTED", "Loop Detected";
    NotExtended => 510, "NOT_EXTENDED", "Not Extended";
    NetworkAuthenticationRequired => 511, "NETWORK_AUTHENTICATION_REQUIRED", "Network Authentication Required";
}

impl Status {
    /// HTTP status code for this member
    ///
    /// # Panics
    ///
    /// Never in practice: every table entry lies within `100..=999`
    pub fn status_code(self) -> StatusCode {
        StatusCode::from_u16(self.as_u16()).expect("status table holds only valid codes")
    }

    /// Look a member up by [`StatusCode`]
    pub fn from_status_code(status: StatusCode) -> Option<Self> {
        Self::from_u16(status.as_u16())
    }

    pub const fn class(self) -> StatusClass {
        match self.as_u16() {
            100..=199 => StatusClass::Informational,
            200..=299 => StatusClass::Success,
            300..=399 => StatusClass::Redirection,
            400..=499 => StatusClass::ClientError,
            _ => StatusClass::ServerError,
        }
    }

    /// Variant name, e.g. `NotFound`
    pub fn name(self) -> &'static str {
        self.into()
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.as_u16(), self.reason())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn table_covers_every_common_status() {
        assert_eq!(Status::iter().count(), 62);
    }

    #[test]
    fn numeric_codes_are_unique_and_round_trip() {
        let mut seen = HashSet::new();
        for status in Status::iter() {
            assert!(seen.insert(status.as_u16()), "duplicate status {status}");
            assert_eq!(Status::from_u16(status.as_u16()), Some(status));
            assert_eq!(status.status_code().as_u16(), status.as_u16());
        }
    }

    #[test]
    fn mnemonics_are_unique_screaming_snake_case() {
        let mut seen = HashSet::new();
        for status in Status::iter() {
            let code = status.code();
            assert!(seen.insert(code), "duplicate code {code}");
            assert!(
                code.chars().all(|c| c.is_ascii_uppercase() || c == '_'),
                "{code} is not SCREAMING_SNAKE_CASE"
            );
        }
    }

    #[test]
    fn classes_follow_leading_digit() {
        assert_eq!(Status::EarlyHints.class(), StatusClass::Informational);
        assert_eq!(Status::ImUsed.class(), StatusClass::Success);
        assert_eq!(Status::PermanentRedirect.class(), StatusClass::Redirection);
        assert_eq!(Status::Teapot.class(), StatusClass::ClientError);
        assert_eq!(Status::NetworkAuthenticationRequired.class(), StatusClass::ServerError);
    }

    #[test]
    fn unknown_codes_have_no_member() {
        assert_eq!(Status::from_u16(306), None);
        assert_eq!(Status::from_u16(999), None);
        assert_eq!(Status::from_status_code(StatusCode::NOT_FOUND), Some(Status::NotFound));
    }

    #[test]
    fn display_and_name() {
        assert_eq!(Status::NotFound.to_string(), "404 Not Found");
        assert_eq!(Status::NotFound.name(), "NotFound");
    }
}

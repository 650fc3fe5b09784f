use http::StatusCode;
use serde::Serialize;
use thiserror::Error;

use crate::{ErrorBody, Status};

/// Failures reported by body accessors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The error value does not embed an [`ErrorBody`]
    #[error("error does not carry a structured body")]
    NotStructured,
}

/// An error that embeds an [`ErrorBody`]
///
/// Implemented by [`StatusError`] and by application-defined error types that
/// want their body localized and handed to a fallback handler.
pub trait StructuredError: std::error::Error + Send + Sync + 'static {
    fn body(&self) -> &ErrorBody;

    fn body_mut(&mut self) -> &mut ErrorBody;
}

/// Error bound to one member of the status taxonomy
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{status}: {}", .body.message)]
pub struct StatusError {
    status: Status,
    body: ErrorBody,
}

impl StatusError {
    /// Error for `status` with the default code and reason phrase
    pub fn new(status: Status) -> Self {
        Self {
            status,
            body: ErrorBody::new(status.code(), status.reason()),
        }
    }

    /// Taxonomy member this error belongs to
    pub const fn status(&self) -> Status {
        self.status
    }

    /// HTTP status written on the response
    pub fn status_code(&self) -> StatusCode {
        self.status.status_code()
    }

    /// Borrow the wire body
    pub const fn body(&self) -> &ErrorBody {
        &self.body
    }

    /// Consume the error, keeping only its body
    pub fn into_body(self) -> ErrorBody {
        self.body
    }

    /// Attach a payload; `null` or unserializable values leave `data` unset
    #[must_use]
    pub fn with_data(mut self, data: impl Serialize) -> Self {
        self.body = self.body.with_data(data);
        self
    }

    /// Replace the default reason phrase
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.body.message = message.into();
        self
    }

    /// Replace the default code
    #[must_use]
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.body.code = code.into();
        self
    }
}

impl StructuredError for StatusError {
    fn body(&self) -> &ErrorBody {
        &self.body
    }

    fn body_mut(&mut self) -> &mut ErrorBody {
        &mut self.body
    }
}

impl From<Status> for StatusError {
    fn from(status: Status) -> Self {
        Self::new(status)
    }
}

/// One constructor per taxonomy member; rows marked `data` take a payload
macro_rules! constructors {
    ($($(#[$doc:meta])* $name:ident => $variant:ident $(($data:ident))?;)+) => {
        impl StatusError {
            $(constructors!(@one $(#[$doc])* $name, $variant $(, $data)?);)+
        }
    };
    (@one $(#[$doc:meta])* $name:ident, $variant:ident) => {
        $(#[$doc])*
        pub fn $name() -> Self {
            Self::new(Status::$variant)
        }
    };
    (@one $(#[$doc:meta])* $name:ident, $variant:ident, $data:ident) => {
        $(#[$doc])*
        pub fn $name($data: impl Serialize) -> Self {
            Self::new(Status::$variant).with_data($data)
        }
    };
}

constructors! {
    continue_ => Continue;
    switching_protocols => SwitchingProtocols;
    processing => Processing;
    early_hints => EarlyHints;

    ok => Ok(data);
    created => Created(data);
    accepted => Accepted(data);
    non_authoritative_information => NonAuthoritativeInformation(data);
    no_content => NoContent(data);
    reset_content => ResetContent(data);
    partial_content => PartialContent(data);
    multi_status => MultiStatus(data);
    already_reported => AlreadyReported(data);
    im_used => ImUsed(data);

    multiple_choices => MultipleChoices;
    moved_permanently => MovedPermanently;
    found => Found;
    see_other => SeeOther;
    not_modified => NotModified;
    use_proxy => UseProxy;
    temporary_redirect => TemporaryRedirect;
    permanent_redirect => PermanentRedirect;

    /// Also the generic response for anything the dispatcher cannot place
    bad_request => BadRequest;
    unauthorized => Unauthorized;
    payment_required => PaymentRequired;
    forbidden => Forbidden;
    not_found => NotFound;
    method_not_allowed => MethodNotAllowed;
    not_acceptable => NotAcceptable;
    proxy_auth_required => ProxyAuthRequired;
    request_timeout => RequestTimeout;
    conflict => Conflict;
    gone => Gone;
    length_required => LengthRequired;
    precondition_failed => PreconditionFailed;
    request_entity_too_large => RequestEntityTooLarge;
    request_uri_too_long => RequestUriTooLong;
    unsupported_media_type => UnsupportedMediaType;
    requested_range_not_satisfiable => RequestedRangeNotSatisfiable;
    expectation_failed => ExpectationFailed;
    teapot => Teapot;
    misdirected_request => MisdirectedRequest;
    unprocessable_entity => UnprocessableEntity;
    locked => Locked;
    failed_dependency => FailedDependency;
    too_early => TooEarly;
    upgrade_required => UpgradeRequired;
    precondition_required => PreconditionRequired;
    too_many_requests => TooManyRequests;
    request_header_fields_too_large => RequestHeaderFieldsTooLarge;
    unavailable_for_legal_reasons => UnavailableForLegalReasons;

    internal_server_error => InternalServerError;
    not_implemented => NotImplemented;
    bad_gateway => BadGateway;
    service_unavailable => ServiceUnavailable;
    gateway_timeout => GatewayTimeout;
    http_version_not_supported => HttpVersionNotSupported;
    variant_also_negotiates => VariantAlsoNegotiates;
    insufficient_storage => InsufficientStorage;
    loop_detected => LoopDetected;
    not_extended => NotExtended;
    network_authentication_required => NetworkAuthenticationRequired;
}

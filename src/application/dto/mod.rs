pub mod audit_request;
pub mod audit_response;

pub use audit_request::AuditRequest;
pub use audit_response::AuditResponse;

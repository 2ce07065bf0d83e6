/// Data Transfer Objects for application layer
mod compliance_request;
mod compliance_response;
mod output_format;

pub use compliance_request::ComplianceRequest;
pub use compliance_response::ComplianceResponse;
pub use output_format::OutputFormat;

pub mod client_meta;
pub mod cors;
pub mod request_tracing;

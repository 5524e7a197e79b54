//! Inbound adapters translating external requests into catalogue port calls.

pub mod http;

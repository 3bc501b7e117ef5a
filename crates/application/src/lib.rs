//! Ferrous rDNS Application Layer
pub mod pipeline;
pub mod ports;
pub mod use_cases;

//! Ferrous rDNS Infrastructure Layer
pub mod dns;
pub mod output;
pub mod system;

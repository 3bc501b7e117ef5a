pub mod message_builder;
pub mod response_parser;

pub use message_builder::{reverse_domain, MessageBuilder};
pub use response_parser::{PtrResponse, ResponseParser};

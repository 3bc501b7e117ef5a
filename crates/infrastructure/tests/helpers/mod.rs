pub mod dns_server_mock;

pub use dns_server_mock::{MockDnsServer, MockPtrBehavior};
pub mod memory_sink;

pub use memory_sink::MemorySink;

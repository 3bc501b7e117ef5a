pub mod ptr;
pub mod transport;

pub use ptr::{MessageBuilder, PtrResponse, ResponseParser};
pub use transport::{create_transport, DnsTransport, Transport, TransportResponse};

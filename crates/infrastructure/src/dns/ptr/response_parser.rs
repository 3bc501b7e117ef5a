use ferrous_rdns_domain::DomainError;
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::RData;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct PtrResponse {
    pub id: u16,

    pub rcode: ResponseCode,

    pub truncated: bool,

    /// PTR targets in answer order, as fully qualified names.
    pub hostnames: Vec<String>,
}

impl PtrResponse {
    /// Hostnames for a successful answer; NXDOMAIN and server failures
    /// become errors.
    pub fn into_hostnames(self) -> Result<Vec<String>, DomainError> {
        match self.rcode {
            ResponseCode::NoError => Ok(self.hostnames),
            ResponseCode::NXDomain => Err(DomainError::NxDomain),
            rcode => Err(DomainError::InvalidDnsResponse(format!(
                "Server answered {}",
                ResponseParser::rcode_to_status(rcode)
            ))),
        }
    }
}

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<PtrResponse, DomainError> {
        if response_bytes.len() < 12 {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response too short: {} bytes",
                response_bytes.len()
            )));
        }
        let id = u16::from_be_bytes([response_bytes[0], response_bytes[1]]);

        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let rcode = message.response_code();
        let truncated = message.truncated();

        let mut hostnames = Vec::new();
        for record in message.answers() {
            if let RData::PTR(ptr) = record.data() {
                hostnames.push(ptr.to_utf8());
            }
        }

        debug!(
            id,
            rcode = ?rcode,
            hostnames = hostnames.len(),
            truncated,
            "PTR response parsed"
        );

        Ok(PtrResponse {
            id,
            rcode,
            truncated,
            hostnames,
        })
    }

    /// Parses a response and checks it answers the query with `expected_id`.
    pub fn parse_for(expected_id: u16, response_bytes: &[u8]) -> Result<PtrResponse, DomainError> {
        let response = Self::parse(response_bytes)?;
        if response.id != expected_id {
            return Err(DomainError::InvalidDnsResponse(format!(
                "Response ID {} does not match query ID {}",
                response.id, expected_id
            )));
        }
        Ok(response)
    }

    pub fn rcode_to_status(rcode: ResponseCode) -> &'static str {
        match rcode {
            ResponseCode::NoError => "NOERROR",
            ResponseCode::NXDomain => "NXDOMAIN",
            ResponseCode::ServFail => "SERVFAIL",
            ResponseCode::Refused => "REFUSED",
            ResponseCode::NotImp => "NOTIMP",
            ResponseCode::FormErr => "FORMERR",
            _ => "UNKNOWN",
        }
    }
}

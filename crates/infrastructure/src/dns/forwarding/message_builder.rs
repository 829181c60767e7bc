//! DNS Message Builder
//!
//! Constructs address queries in wire format using `hickory-proto`.

use alotame_domain::DomainError;
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::{DNSClass, Name, RecordType};
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build an IPv4 address query for `domain` and serialize it.
    ///
    /// The query carries:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section for `domain` / A / IN
    ///
    /// Returns the ID alongside the bytes so the caller can match the reply.
    pub fn build_query_with_id(domain: &str) -> Result<(u16, Vec<u8>), DomainError> {
        let name = Self::fully_qualified(domain)?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordType::A);
        query.set_query_class(DNSClass::IN);

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Parse `domain` and force the trailing root label.
    fn fully_qualified(domain: &str) -> Result<Name, DomainError> {
        let trimmed = domain.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidDomainName(
                "domain name is empty".to_string(),
            ));
        }

        let mut name = Name::from_str(trimmed).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", domain, e))
        })?;
        name.set_fqdn(true);
        Ok(name)
    }

    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}

use alotame_domain::{AnswerRecord, DnsAnswer, DomainError, ResponseStatus};
use hickory_proto::op::{Message, ResponseCode};
use hickory_proto::rr::{RData, Record};
use tracing::debug;

pub struct ResponseParser;

impl ResponseParser {
    pub fn parse(response_bytes: &[u8]) -> Result<DnsAnswer, DomainError> {
        let message = Message::from_vec(response_bytes).map_err(|e| {
            DomainError::InvalidDnsResponse(format!("Failed to parse DNS response: {}", e))
        })?;

        let status = Self::status_of(message.response_code());
        let answers: Vec<AnswerRecord> = message.answers().iter().map(Self::to_record).collect();

        debug!(
            rcode = status.as_str(),
            answers = answers.len(),
            truncated = message.truncated(),
            "DNS response parsed"
        );

        Ok(DnsAnswer {
            status,
            answers,
            truncated: message.truncated(),
        })
    }

    /// Transaction ID read straight from the header.
    pub fn response_id(response_bytes: &[u8]) -> Result<u16, DomainError> {
        match response_bytes {
            [hi, lo, ..] => Ok(u16::from_be_bytes([*hi, *lo])),
            _ => Err(DomainError::InvalidDnsResponse(format!(
                "response too short: {} bytes",
                response_bytes.len()
            ))),
        }
    }

    pub fn status_of(rcode: ResponseCode) -> ResponseStatus {
        match rcode {
            ResponseCode::NoError => ResponseStatus::NoError,
            ResponseCode::NXDomain => ResponseStatus::NxDomain,
            ResponseCode::ServFail => ResponseStatus::ServFail,
            ResponseCode::Refused => ResponseStatus::Refused,
            other => ResponseStatus::Other(u16::from(other)),
        }
    }

    fn to_record(record: &Record) -> AnswerRecord {
        match record.data() {
            RData::A(a) => AnswerRecord::A(a.0),
            RData::AAAA(aaaa) => AnswerRecord::Aaaa(aaaa.0),
            RData::CNAME(canonical) => AnswerRecord::Cname(canonical.to_utf8()),
            _ => AnswerRecord::Other {
                record_type: record.record_type().to_string(),
            },
        }
    }
}

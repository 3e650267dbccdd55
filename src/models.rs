//! Core data structures for mbox log export.
//!
//! Defines the recognized header fields, the parsed message record,
//! the fixed-width log row and batch processing statistics.

use crate::constants::LOG_COLUMN_COUNT;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Header fields extracted from a message
///
/// Matching is exact and case-sensitive; any other field name is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeaderField {
    DeliveredTo,
    Received,
    XGoogleSmtpSource,
    XReceived,
    ArcSeal,
    ArcMessageSignature,
    ArcAuthenticationResults,
    ReturnPath,
    ReceivedSpf,
    AuthenticationResults,
    DkimSignature,
    Date,
    From,
    MessageId,
    Subject,
    MimeVersion,
    XSgEid,
    To,
    XEntityId,
    ContentType,
    ContentTransferEncoding,
}

impl HeaderField {
    #[cfg(test)]
    pub(crate) const ALL: [HeaderField; 21] = [
        HeaderField::DeliveredTo,
        HeaderField::Received,
        HeaderField::XGoogleSmtpSource,
        HeaderField::XReceived,
        HeaderField::ArcSeal,
        HeaderField::ArcMessageSignature,
        HeaderField::ArcAuthenticationResults,
        HeaderField::ReturnPath,
        HeaderField::ReceivedSpf,
        HeaderField::AuthenticationResults,
        HeaderField::DkimSignature,
        HeaderField::Date,
        HeaderField::From,
        HeaderField::MessageId,
        HeaderField::Subject,
        HeaderField::MimeVersion,
        HeaderField::XSgEid,
        HeaderField::To,
        HeaderField::XEntityId,
        HeaderField::ContentType,
        HeaderField::ContentTransferEncoding,
    ];

    /// Look up a field by its exact header name
    pub fn from_name(name: &str) -> Option<Self> {
        let field = match name {
            "Delivered-To" => HeaderField::DeliveredTo,
            "Received" => HeaderField::Received,
            "X-Google-Smtp-Source" => HeaderField::XGoogleSmtpSource,
            "X-Received" => HeaderField::XReceived,
            "ARC-Seal" => HeaderField::ArcSeal,
            "ARC-Message-Signature" => HeaderField::ArcMessageSignature,
            "ARC-Authentication-Results" => HeaderField::ArcAuthenticationResults,
            "Return-Path" => HeaderField::ReturnPath,
            "Received-SPF" => HeaderField::ReceivedSpf,
            "Authentication-Results" => HeaderField::AuthenticationResults,
            "DKIM-Signature" => HeaderField::DkimSignature,
            "Date" => HeaderField::Date,
            "From" => HeaderField::From,
            "Message-ID" => HeaderField::MessageId,
            "Subject" => HeaderField::Subject,
            "MIME-Version" => HeaderField::MimeVersion,
            "X-SG-EID" => HeaderField::XSgEid,
            "To" => HeaderField::To,
            "X-Entity-ID" => HeaderField::XEntityId,
            "Content-Type" => HeaderField::ContentType,
            "Content-Transfer-Encoding" => HeaderField::ContentTransferEncoding,
            _ => return None,
        };
        Some(field)
    }

    /// Header name as it appears in a message
    pub fn name(&self) -> &'static str {
        match self {
            HeaderField::DeliveredTo => "Delivered-To",
            HeaderField::Received => "Received",
            HeaderField::XGoogleSmtpSource => "X-Google-Smtp-Source",
            HeaderField::XReceived => "X-Received",
            HeaderField::ArcSeal => "ARC-Seal",
            HeaderField::ArcMessageSignature => "ARC-Message-Signature",
            HeaderField::ArcAuthenticationResults => "ARC-Authentication-Results",
            HeaderField::ReturnPath => "Return-Path",
            HeaderField::ReceivedSpf => "Received-SPF",
            HeaderField::AuthenticationResults => "Authentication-Results",
            HeaderField::DkimSignature => "DKIM-Signature",
            HeaderField::Date => "Date",
            HeaderField::From => "From",
            HeaderField::MessageId => "Message-ID",
            HeaderField::Subject => "Subject",
            HeaderField::MimeVersion => "MIME-Version",
            HeaderField::XSgEid => "X-SG-EID",
            HeaderField::To => "To",
            HeaderField::XEntityId => "X-Entity-ID",
            HeaderField::ContentType => "Content-Type",
            HeaderField::ContentTransferEncoding => "Content-Transfer-Encoding",
        }
    }

    /// Whether the value may continue on following space-indented lines
    pub fn is_folded(&self) -> bool {
        matches!(
            self,
            HeaderField::Received
                | HeaderField::XReceived
                | HeaderField::ArcSeal
                | HeaderField::ArcMessageSignature
                | HeaderField::ArcAuthenticationResults
                | HeaderField::AuthenticationResults
                | HeaderField::DkimSignature
                | HeaderField::XSgEid
        )
    }

    /// Whether occurrences accumulate instead of overwriting each other
    pub fn is_multi_valued(&self) -> bool {
        matches!(self, HeaderField::Received)
    }
}

/// Structured result of parsing one message file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage {
    fields: BTreeMap<HeaderField, String>,
    received: Vec<String>,
    content: String,
}

impl ParsedMessage {
    /// Value of a single-valued field, empty if the header was absent
    pub fn get(&self, field: HeaderField) -> &str {
        self.fields.get(&field).map(String::as_str).unwrap_or("")
    }

    /// Received header values in file order
    pub fn received(&self) -> &[String] {
        &self.received
    }

    /// Raw body text following the header/body boundary
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn message_id(&self) -> &str {
        self.get(HeaderField::MessageId)
    }

    pub fn date(&self) -> &str {
        self.get(HeaderField::Date)
    }

    pub fn return_path(&self) -> &str {
        self.get(HeaderField::ReturnPath)
    }

    pub fn subject(&self) -> &str {
        self.get(HeaderField::Subject)
    }

    pub fn to(&self) -> &str {
        self.get(HeaderField::To)
    }

    /// Record a header value, appending for multi-valued fields
    pub(crate) fn set(&mut self, field: HeaderField, value: String) {
        if field.is_multi_valued() {
            self.received.push(value);
        } else {
            self.fields.insert(field, value);
        }
    }

    pub(crate) fn set_content(&mut self, content: String) {
        self.content = content;
    }
}

/// Fixed-order CSV projection of a parsed message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRow(pub [String; LOG_COLUMN_COUNT]);

impl LogRow {
    /// Column values in output order
    pub fn fields(&self) -> &[String] {
        &self.0
    }
}

/// Processing statistics
#[derive(Debug, Default, Serialize)]
pub struct ProcessingStats {
    pub files_discovered: usize,
    pub files_processed: usize,
    pub files_failed: usize,
    pub rows_written: usize,
    pub output_path: PathBuf,
    pub processing_time_ms: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_field_names_round_trip() {
        for field in HeaderField::ALL {
            assert_eq!(HeaderField::from_name(field.name()), Some(field));
        }
    }

    #[test]
    fn test_header_field_matching_is_exact() {
        assert_eq!(HeaderField::from_name("subject"), None);
        assert_eq!(HeaderField::from_name(" Subject"), None);
        assert_eq!(HeaderField::from_name("Message-Id"), None);
        assert_eq!(HeaderField::from_name("X-Mailer"), None);
    }

    #[test]
    fn test_folded_fields() {
        let folded: Vec<_> = HeaderField::ALL
            .iter()
            .filter(|f| f.is_folded())
            .map(|f| f.name())
            .collect();
        assert_eq!(
            folded,
            vec![
                "Received",
                "X-Received",
                "ARC-Seal",
                "ARC-Message-Signature",
                "ARC-Authentication-Results",
                "Authentication-Results",
                "DKIM-Signature",
                "X-SG-EID",
            ]
        );
    }

    #[test]
    fn test_absent_fields_are_empty() {
        let message = ParsedMessage::default();
        for field in HeaderField::ALL {
            assert_eq!(message.get(field), "");
        }
        assert!(message.received().is_empty());
        assert_eq!(message.content(), "");
    }

    #[test]
    fn test_set_overwrites_single_and_appends_received() {
        let mut message = ParsedMessage::default();
        message.set(HeaderField::Subject, "first".to_string());
        message.set(HeaderField::Subject, "second".to_string());
        message.set(HeaderField::Received, "hop 1".to_string());
        message.set(HeaderField::Received, "hop 2".to_string());

        assert_eq!(message.subject(), "second");
        assert_eq!(message.received(), ["hop 1", "hop 2"]);
        assert_eq!(message.get(HeaderField::Received), "");
    }
}

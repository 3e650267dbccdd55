//! CSV log rendering.
//!
//! Projects parsed messages onto the fixed 18-column delivery log layout.
//! Fields are wrapped in double quotes without any escaping.

use crate::constants::{CSV_FIELD_SEPARATOR, CSV_ROW_SEPARATOR, LOG_HEADERS, log_values};
use crate::models::{LogRow, ParsedMessage};

impl From<&ParsedMessage> for LogRow {
    fn from(message: &ParsedMessage) -> Self {
        // Sender is taken from Return-Path, not From
        LogRow([
            message.message_id().to_string(),
            message.date().to_string(),
            message.date().to_string(),
            message.return_path().to_string(),
            String::new(),
            message.subject().to_string(),
            log_values::DIRECTION.to_string(),
            log_values::ATTACHMENTS.to_string(),
            message.to().to_string(),
            log_values::EVENT_TARGET.to_string(),
            message.date().to_string(),
            log_values::EVENT_STATUS.to_string(),
            String::new(),
            log_values::HAS_ENCRYPTION.to_string(),
            String::new(),
            log_values::EVENT_DESCRIPTION.to_string(),
            String::new(),
            String::new(),
        ])
    }
}

impl LogRow {
    /// Render as one CSV line with every field double-quoted
    pub fn to_csv_line(&self) -> String {
        self.fields()
            .iter()
            .map(|field| format!("\"{}\"", field))
            .collect::<Vec<_>>()
            .join(CSV_FIELD_SEPARATOR)
    }
}

/// Header row of the log
pub fn header_line() -> String {
    LOG_HEADERS.join(CSV_FIELD_SEPARATOR)
}

/// Render the complete report: header row followed by one row per message
pub fn render_report(messages: &[ParsedMessage]) -> String {
    let mut rows = Vec::with_capacity(messages.len() + 1);
    rows.push(header_line());
    rows.extend(messages.iter().map(|m| LogRow::from(m).to_csv_line()));
    rows.join(CSV_ROW_SEPARATOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::parse_message;

    const FULL: &str = "Delivered-To: inbox@example.com\r\nReceived: by 10.0.0.1\r\n with SMTP id a1\r\nReturn-Path: <bounce@sender.com>\r\nDate: Tue, 2 Jan 2024 10:00:00 +0000\r\nFrom: Sender <from@sender.com>\r\nMessage-ID: <id-42@sender.com>\r\nSubject: Quarterly update\r\nMIME-Version: 1.0\r\nTo: inbox@example.com\r\nContent-Type: text/plain\r\n\r\nHello";

    #[test]
    fn test_header_line() {
        assert_eq!(
            header_line(),
            "Message ID,Start date,End date,Sender,Message size,Subject,Direction,Attachments,Recipient address,Event target,Event date,Event status,Event target IP address,Has encryption,Event SMTP reply code,Event description,Client Type,Device User Session ID"
        );
    }

    #[test]
    fn test_log_row_mapping() {
        let message = parse_message(FULL.as_bytes());
        let row = LogRow::from(&message);

        let date = "Tue, 2 Jan 2024 10:00:00 +0000";
        let expected = [
            "<id-42@sender.com>",
            date,
            date,
            "<bounce@sender.com>",
            "",
            "Quarterly update",
            "Received",
            "0",
            "inbox@example.com",
            "GMAIL_INBOX",
            date,
            "DELIVERED",
            "",
            "Not encrypted",
            "",
            "No Error",
            "",
            "",
        ];
        assert_eq!(row.fields(), expected);
    }

    #[test]
    fn test_minimal_message_row() {
        let raw = "Message-ID: <abc@x>\r\nDate: Mon\r\nFrom: a@b.com\r\nTo: c@d.com\r\nReturn-Path: a@b.com\r\nSubject: Hi\r\n\r\nBody text";
        let line = LogRow::from(&parse_message(raw.as_bytes())).to_csv_line();

        assert!(line.starts_with(
            "\"<abc@x>\",\"Mon\",\"Mon\",\"a@b.com\",\"\",\"Hi\",\"Received\",\"0\",\"c@d.com\","
        ));
        assert_eq!(
            line,
            "\"<abc@x>\",\"Mon\",\"Mon\",\"a@b.com\",\"\",\"Hi\",\"Received\",\"0\",\"c@d.com\",\"GMAIL_INBOX\",\"Mon\",\"DELIVERED\",\"\",\"Not encrypted\",\"\",\"No Error\",\"\",\"\""
        );
    }

    #[test]
    fn test_empty_message_keeps_row_width() {
        let line = LogRow::from(&ParsedMessage::default()).to_csv_line();
        assert_eq!(line.matches("\",\"").count(), 17);
        assert!(line.starts_with("\"\",\"\",\"\",\"\",\"\",\"\",\"Received\""));
    }

    #[test]
    fn test_no_escaping_of_quotes_or_commas() {
        let raw = "Subject: \"Hello\", world\r\n\r\n";
        let line = LogRow::from(&parse_message(raw.as_bytes())).to_csv_line();

        assert!(line.contains(",\"\"Hello\", world\","));
    }

    #[test]
    fn test_render_report() {
        assert_eq!(render_report(&[]), header_line());

        let messages = vec![
            parse_message(FULL.as_bytes()),
            parse_message(b"Subject: Second\r\n\r\n"),
        ];
        let report = render_report(&messages);
        let lines: Vec<&str> = report.split('\n').collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], header_line());
        assert!(lines[1].starts_with("\"<id-42@sender.com>\""));
        assert!(lines[2].contains("\"Second\""));
        assert!(!report.ends_with('\n'));
    }
}

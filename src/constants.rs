//! Application constants for the mbox log exporter
//!
//! Output naming, the fixed CSV layout and the literal values written
//! into every log row.

// =============================================================================
// Directories and Output Naming
// =============================================================================

/// Default import directory holding one raw message per file
pub const DEFAULT_IMPORT_DIRECTORY: &str = "../import";

/// Default export directory for the generated log
pub const DEFAULT_EXPORT_DIRECTORY: &str = "../export";

/// Output file name prefix
pub const EXPORT_PREFIX: &str = "output_";

/// Output file extension
pub const EXPORT_EXTENSION: &str = ".csv";

/// Index of the single report block written per run
pub const EXPORT_BLOCK_INDEX: usize = 1;

/// Default (inert) block count
pub const DEFAULT_EXPORT_BLOCK_COUNT: usize = 0;

// =============================================================================
// Message Format
// =============================================================================

/// Physical line delimiter of input messages
pub const LINE_DELIMITER: &str = "\r\n";

/// Separator between a header field name and its value
pub const FIELD_DELIMITER: &str = ": ";

/// Leading character marking a folded continuation line
pub const CONTINUATION_MARKER: char = ' ';

/// Separator used when unfolding continuation lines and joining body lines
pub const UNFOLD_SEPARATOR: &str = "\n";

// =============================================================================
// CSV Layout
// =============================================================================

/// Number of columns in every log row
pub const LOG_COLUMN_COUNT: usize = 18;

/// Header row column names, in output order
pub const LOG_HEADERS: [&str; LOG_COLUMN_COUNT] = [
    "Message ID",
    "Start date",
    "End date",
    "Sender",
    "Message size",
    "Subject",
    "Direction",
    "Attachments",
    "Recipient address",
    "Event target",
    "Event date",
    "Event status",
    "Event target IP address",
    "Has encryption",
    "Event SMTP reply code",
    "Event description",
    "Client Type",
    "Device User Session ID",
];

/// Column separator
pub const CSV_FIELD_SEPARATOR: &str = ",";

/// Row separator (rows are joined, no trailing separator)
pub const CSV_ROW_SEPARATOR: &str = "\n";

/// Literal values written into every log row
pub mod log_values {
    pub const DIRECTION: &str = "Received";
    pub const ATTACHMENTS: &str = "0";
    pub const EVENT_TARGET: &str = "GMAIL_INBOX";
    pub const EVENT_STATUS: &str = "DELIVERED";
    pub const HAS_ENCRYPTION: &str = "Not encrypted";
    pub const EVENT_DESCRIPTION: &str = "No Error";
}

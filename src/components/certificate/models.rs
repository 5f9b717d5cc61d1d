use serde::{Deserialize, Serialize};

use crate::utils::time::{format_long_date, parse_timestamp};

/// Placeholder shown when a signatory has no name
pub const DEFAULT_SIGNATORY_NAME: &str = "Signatory Name";

/// Placeholder shown when a signatory has no title
pub const DEFAULT_SIGNATORY_TITLE: &str = "Designation";

/// Placeholder shown when no recipient name can be resolved
pub const DEFAULT_RECIPIENT_NAME: &str = "Recipient Name";

/// A certificate signatory with a name/title pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Signatory {
    pub name: Option<String>,
    pub title: Option<String>,
}

impl Signatory {
    /// Name to render, falling back to the fixed placeholder
    pub fn display_name(&self) -> &str {
        non_empty(self.name.as_deref()).unwrap_or(DEFAULT_SIGNATORY_NAME)
    }

    /// Title to render, falling back to the fixed placeholder
    pub fn display_title(&self) -> &str {
        non_empty(self.title.as_deref()).unwrap_or(DEFAULT_SIGNATORY_TITLE)
    }
}

/// Recipient data driving a certificate preview
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct CertificateData {
    /// Recipient's own name
    pub name: Option<String>,
    /// Associate name used when the recipient name is absent
    pub associate: Option<String>,
    /// Free-text certificate body; a templated sentence is used when absent
    pub message: Option<String>,
    /// Issue date as supplied by the backend
    pub issue_date: Option<String>,
    /// Signatories in display order, left to right
    pub signatories: Vec<Signatory>,
}

impl CertificateData {
    /// Resolve the recipient name: name, then associate, then placeholder
    pub fn recipient_name(&self) -> &str {
        non_empty(self.name.as_deref())
            .or_else(|| non_empty(self.associate.as_deref()))
            .unwrap_or(DEFAULT_RECIPIENT_NAME)
    }

    /// Certificate body text, templated from the recipient when absent
    pub fn message_text(&self) -> String {
        match non_empty(self.message.as_deref()) {
            Some(message) => message.to_string(),
            None => format!(
                "This certificate is proudly presented to {} in grateful \
                 recognition of their dedicated service.",
                self.recipient_name()
            ),
        }
    }

    /// Issue date formatted as "Month DD, YYYY", or the raw string when it
    /// cannot be parsed. None when no date was supplied at all.
    pub fn issue_date_text(&self) -> Option<String> {
        let raw = non_empty(self.issue_date.as_deref())?;
        Some(match parse_timestamp(raw) {
            Some(dt) => format_long_date(&dt),
            None => raw.to_string(),
        })
    }
}

/// Treat empty and whitespace-only strings as absent
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|s| !s.is_empty())
}

use crate::wallet::{WalletError, WalletErrorCode};

/// Longest slice of collaborator text echoed into the activity log
pub const DETAIL_LIMIT: usize = 100;

/// User-facing category of a failed transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FailureCategory {
    InsufficientFunds,
    InvalidRecipient,
    /// Anything else, with the (truncated) collaborator text
    Generic(String),
}

impl FailureCategory {
    /// Structured codes win; without one, fall back to matching the
    /// collaborator's error text.
    pub fn classify(err: &WalletError) -> Self {
        if err.code == Some(WalletErrorCode::InsufficientFunds) {
            return FailureCategory::InsufficientFunds;
        }

        let text = err.message.as_str();
        if text.contains("InstructionError") && text.contains("Custom:1") {
            FailureCategory::InsufficientFunds
        } else if text.contains("Invalid public key") {
            FailureCategory::InvalidRecipient
        } else if text.is_empty() {
            FailureCategory::Generic("unknown error".to_string())
        } else {
            FailureCategory::Generic(text.chars().take(DETAIL_LIMIT).collect())
        }
    }

    /// Activity log line
    pub fn log_message(&self) -> String {
        match self {
            FailureCategory::InsufficientFunds => "Failed: Insufficient funds for transfer.".to_string(),
            FailureCategory::InvalidRecipient => "Failed: Invalid Recipient Address.".to_string(),
            FailureCategory::Generic(detail) => format!("Failed: {}", detail),
        }
    }

    /// Annotation shown under the form
    pub fn form_message(&self) -> &'static str {
        match self {
            FailureCategory::InsufficientFunds => "Insufficient funds.",
            FailureCategory::InvalidRecipient => "Invalid Recipient Address.",
            FailureCategory::Generic(_) => "Transaction failed. See activity log.",
        }
    }
}

//! Transfer form state machine.
//!
//! ```text
//! Editing ──review ok──▶ AwaitingConfirmation ──confirm──▶ Submitting ──ok──▶ Completed
//!    ▲  ╲ review err                 │ cancel                    │ err
//!    │   ╰──▶ Editing (+error)       ▼                           ▼
//!    ╰───────────────────────────  Editing                    Failed (editable)
//! ```

use crate::wallet::sol_to_lamports_floor;
use solana_sdk::pubkey::{ParsePubkeyError, Pubkey};
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

pub const INVALID_INPUT_MESSAGE: &str = "Please enter a valid recipient address and amount.";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Editing,
    AwaitingConfirmation,
    Submitting,
    Completed,
    Failed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be a positive number of SOL worth at least one lamport")]
    InvalidAmount,
    #[error("invalid recipient address: {0}")]
    InvalidRecipient(#[from] ParsePubkeyError),
}

/// Form input that passed validation and is waiting to be signed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidatedTransfer {
    pub recipient: Pubkey,
    /// Amount as the user typed it
    pub amount: String,
    pub lamports: u64,
}

pub fn validate_transfer(recipient: &str, amount: &str) -> Result<ValidatedTransfer, ValidationError> {
    let amount = amount.trim();
    let lamports = amount
        .parse::<f64>()
        .ok()
        .and_then(sol_to_lamports_floor)
        .filter(|lamports| *lamports > 0)
        .ok_or(ValidationError::InvalidAmount)?;
    let recipient = Pubkey::from_str(recipient.trim())?;

    Ok(ValidatedTransfer {
        recipient,
        amount: amount.to_string(),
        lamports,
    })
}

#[derive(Debug, Default)]
pub struct TransferForm {
    recipient: String,
    amount: String,
    validation_error: Option<String>,
    phase: FormPhase,
    pending: Option<ValidatedTransfer>,
}

impl TransferForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    pub fn amount(&self) -> &str {
        &self.amount
    }

    pub fn validation_error(&self) -> Option<&str> {
        self.validation_error.as_deref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Transfer shown in the confirmation prompt or currently being signed
    pub fn pending(&self) -> Option<&ValidatedTransfer> {
        self.pending.as_ref()
    }

    pub fn is_editable(&self) -> bool {
        matches!(
            self.phase,
            FormPhase::Editing | FormPhase::Completed | FormPhase::Failed
        )
    }

    /// Whether the review control is enabled
    pub fn can_review(&self) -> bool {
        self.is_editable() && !self.recipient.trim().is_empty() && !self.amount.trim().is_empty()
    }

    pub fn set_recipient(&mut self, value: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.recipient = value.into();
        self.touch();
        true
    }

    pub fn set_amount(&mut self, value: impl Into<String>) -> bool {
        if !self.is_editable() {
            return false;
        }
        self.amount = value.into();
        self.touch();
        true
    }

    fn touch(&mut self) {
        if self.phase == FormPhase::Completed {
            self.phase = FormPhase::Editing;
        }
    }

    /// Validate the inputs and open the confirmation gate.
    pub fn review(&mut self) -> bool {
        if !self.is_editable() {
            return false;
        }

        self.validation_error = None;
        match validate_transfer(&self.recipient, &self.amount) {
            Ok(transfer) => {
                self.pending = Some(transfer);
                self.phase = FormPhase::AwaitingConfirmation;
                true
            }
            Err(err) => {
                debug!(error = %err, "transfer input rejected");
                self.validation_error = Some(INVALID_INPUT_MESSAGE.to_string());
                self.phase = FormPhase::Editing;
                false
            }
        }
    }

    pub fn cancel(&mut self) -> bool {
        if self.phase != FormPhase::AwaitingConfirmation {
            return false;
        }
        self.pending = None;
        self.phase = FormPhase::Editing;
        true
    }

    /// Take the reviewed transfer and move to `Submitting`.
    pub fn confirm(&mut self) -> Option<ValidatedTransfer> {
        if self.phase != FormPhase::AwaitingConfirmation {
            return None;
        }
        let transfer = self.pending.clone()?;
        self.validation_error = None;
        self.phase = FormPhase::Submitting;
        Some(transfer)
    }

    pub fn complete(&mut self) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.recipient.clear();
        self.amount.clear();
        self.pending = None;
        self.validation_error = None;
        self.phase = FormPhase::Completed;
        true
    }

    pub fn fail(&mut self, message: impl Into<String>) -> bool {
        if self.phase != FormPhase::Submitting {
            return false;
        }
        self.pending = None;
        self.validation_error = Some(message.into());
        self.phase = FormPhase::Failed;
        true
    }
}

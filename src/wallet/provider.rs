use async_trait::async_trait;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};
use std::fmt;
use thiserror::Error;

/// Machine-readable reason attached to a wallet failure when the
/// collaborator can tell what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalletErrorCode {
    /// The payer cannot cover the transfer (or its fee).
    InsufficientFunds,
    /// An operation that needs a session was called without one.
    NotConnected,
}

/// Failure reported by a wallet collaborator.
///
/// `message` is the collaborator's free text; `code` is set when the
/// collaborator recognised the failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct WalletError {
    pub code: Option<WalletErrorCode>,
    pub message: String,
}

impl WalletError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
        }
    }

    pub fn with_code(code: WalletErrorCode, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: message.into(),
        }
    }
}

/// Opaque transaction identifier returned after a successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SignatureId(pub String);

impl fmt::Display for SignatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<solana_sdk::signature::Signature> for SignatureId {
    fn from(signature: solana_sdk::signature::Signature) -> Self {
        Self(signature.to_string())
    }
}

/// Token the relayer should charge when fees are not fully sponsored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeeToken {
    Sol,
    #[default]
    Usdc,
}

impl FeeToken {
    pub fn symbol(&self) -> &'static str {
        match self {
            FeeToken::Sol => "SOL",
            FeeToken::Usdc => "USDC",
        }
    }
}

/// Submission options handed to the wallet alongside the instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TransactionOptions {
    pub fee_token: FeeToken,
}

impl TransactionOptions {
    pub fn paying_fees_in(fee_token: FeeToken) -> Self {
        Self { fee_token }
    }
}

/// Smart-wallet session provider: authenticates the user, owns the signing
/// key and relays signed transactions.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Authenticate and return the wallet address.
    ///
    /// `epoch` identifies the caller's session. Calls may resolve out of
    /// order, so a provider must ignore a `connect` or `disconnect` whose
    /// epoch is not newer than the last one it applied.
    async fn connect(&self, epoch: u64) -> Result<Pubkey, WalletError>;

    async fn disconnect(&self, epoch: u64) -> Result<(), WalletError>;

    /// Sign `instructions` as the connected wallet and submit them.
    async fn sign_and_send(
        &self,
        instructions: Vec<Instruction>,
        options: TransactionOptions,
    ) -> Result<SignatureId, WalletError>;
}

/// Read access to account balances on the ledger.
#[async_trait]
pub trait BalanceReader: Send + Sync {
    /// Balance of `address` in lamports.
    async fn get_balance(&self, address: &Pubkey) -> anyhow::Result<u64>;
}

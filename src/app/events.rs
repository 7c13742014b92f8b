use crate::wallet::{SignatureId, WalletError};
use futures::future::BoxFuture;
use solana_sdk::pubkey::Pubkey;

/// Asynchronous collaborator call. Resolves to the event to feed back into
/// [`super::WalletApp::handle`], or `None` if it was cancelled.
pub type Job = BoxFuture<'static, Option<WalletEvent>>;

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Intent {
    Connect,
    Disconnect,
    RefreshBalance,
    SetRecipient(String),
    SetAmount(String),
    Review,
    CancelReview,
    ConfirmTransfer,
}

/// Result of a collaborator call.
#[derive(Debug)]
pub enum WalletEvent {
    ConnectFinished {
        epoch: u64,
        result: Result<Pubkey, WalletError>,
    },
    DisconnectFinished {
        epoch: u64,
        result: Result<(), WalletError>,
    },
    TransferFinished {
        epoch: u64,
        result: Result<SignatureId, WalletError>,
    },
    BalanceFetched {
        address: Pubkey,
        result: anyhow::Result<u64>,
    },
}

//! Keypair-backed wallet provider.
//!
//! Stands in for the passkey portal on local and devnet setups: `connect`
//! loads the configured Solana CLI keypair (or mints an ephemeral one), and
//! transfers are signed locally and submitted straight to the RPC node. The
//! portal and paymaster endpoints are kept for diagnostics only, so the fee
//! preference degrades to the wallet paying its own fees in SOL.

use crate::wallet::{
    keypair::WalletKeypair,
    provider::{FeeToken, SignatureId, TransactionOptions, WalletError, WalletErrorCode, WalletProvider},
    rpc::RpcManager,
    transaction::TransactionBuilder,
};
use async_trait::async_trait;
use solana_client::client_error::ClientError;
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    pubkey::Pubkey,
    transaction::TransactionError,
};
use std::{path::PathBuf, sync::Arc};
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

/// Keypair of the newest applied session, tagged with its epoch
#[derive(Default)]
struct Session {
    epoch: u64,
    keypair: Option<WalletKeypair>,
}

pub struct KeypairWallet {
    rpc: Arc<RpcManager>,
    keypair_path: Option<PathBuf>,
    portal_url: String,
    paymaster_url: String,
    session: RwLock<Session>,
}

impl KeypairWallet {
    pub fn new(
        rpc: Arc<RpcManager>,
        keypair_path: Option<PathBuf>,
        portal_url: impl Into<String>,
        paymaster_url: impl Into<String>,
    ) -> Self {
        Self {
            rpc,
            keypair_path,
            portal_url: portal_url.into(),
            paymaster_url: paymaster_url.into(),
            session: RwLock::new(Session::default()),
        }
    }

    fn load_keypair(&self) -> Result<WalletKeypair, WalletError> {
        match &self.keypair_path {
            Some(path) => WalletKeypair::from_file(path).map_err(|e| WalletError::new(e.to_string())),
            None => {
                warn!("no keypair file configured, using an ephemeral keypair for this session");
                Ok(WalletKeypair::new())
            }
        }
    }
}

#[async_trait]
impl WalletProvider for KeypairWallet {
    async fn connect(&self, epoch: u64) -> Result<Pubkey, WalletError> {
        debug!(portal = %self.portal_url, epoch, "authenticating wallet session");

        let keypair = self.load_keypair()?;
        let address = keypair.pubkey();

        let mut session = self.session.write().await;
        if epoch <= session.epoch {
            debug!(epoch, current = session.epoch, "refusing connect for a superseded session");
            return Err(WalletError::new("Session superseded"));
        }
        session.epoch = epoch;
        session.keypair = Some(keypair);

        info!(%address, epoch, "wallet session opened");
        Ok(address)
    }

    async fn disconnect(&self, epoch: u64) -> Result<(), WalletError> {
        let mut session = self.session.write().await;
        if epoch <= session.epoch {
            debug!(epoch, current = session.epoch, "ignoring disconnect for a superseded session");
            return Ok(());
        }
        session.epoch = epoch;

        if let Some(keypair) = session.keypair.take() {
            info!(address = %keypair.pubkey(), epoch, "wallet session closed");
        }
        Ok(())
    }

    async fn sign_and_send(
        &self,
        instructions: Vec<Instruction>,
        options: TransactionOptions,
    ) -> Result<SignatureId, WalletError> {
        let session = self.session.read().await;
        let keypair = session
            .keypair
            .as_ref()
            .ok_or_else(|| WalletError::with_code(WalletErrorCode::NotConnected, "Wallet is not connected"))?;

        if options.fee_token != FeeToken::Sol {
            debug!(
                paymaster = %self.paymaster_url,
                requested = options.fee_token.symbol(),
                paid = FeeToken::Sol.symbol(),
                "fee relay unavailable for a local keypair"
            );
        }

        let mut transaction = TransactionBuilder::new()
            .fee_payer(keypair.pubkey())
            .add_instructions(instructions)
            .build(&self.rpc)
            .await
            .map_err(|e| WalletError::new(e.to_string()))?;

        let recent_blockhash = transaction.message.recent_blockhash;
        transaction
            .try_sign(&[keypair.inner()], recent_blockhash)
            .map_err(|e| WalletError::new(format!("Failed to sign transaction: {}", e)))?;

        let signature = self
            .rpc
            .send_transaction(&transaction)
            .await
            .map_err(submission_error)?;

        info!(%signature, "transaction confirmed");
        Ok(signature.into())
    }
}

fn submission_error(err: ClientError) -> WalletError {
    WalletError {
        code: err.get_transaction_error().as_ref().and_then(transaction_error_code),
        message: err.to_string(),
    }
}

fn transaction_error_code(err: &TransactionError) -> Option<WalletErrorCode> {
    match err {
        // system program: ResultWithNegativeLamports
        TransactionError::InstructionError(_, InstructionError::Custom(1))
        | TransactionError::InsufficientFundsForFee
        | TransactionError::InsufficientFundsForRent { .. } => Some(WalletErrorCode::InsufficientFunds),
        _ => None,
    }
}

use anyhow::{anyhow, Result};
use solana_sdk::{
    pubkey::Pubkey,
    signature::{read_keypair_file, Keypair},
    signer::Signer,
};
use std::path::Path;

#[derive(Debug)]
pub struct WalletKeypair {
    keypair: Keypair,
}

impl WalletKeypair {
    /// Create a new random keypair
    pub fn new() -> Self {
        Self {
            keypair: Keypair::new(),
        }
    }

    /// Load a keypair from a Solana CLI keypair file (JSON byte array)
    pub fn from_file(path: &Path) -> Result<Self> {
        let keypair = read_keypair_file(path)
            .map_err(|e| anyhow!("Failed to read keypair from {}: {}", path.display(), e))?;

        Ok(Self { keypair })
    }

    /// Get the public key
    pub fn pubkey(&self) -> Pubkey {
        self.keypair.pubkey()
    }

    /// Get the underlying keypair (be careful with this)
    pub(crate) fn inner(&self) -> &Keypair {
        &self.keypair
    }
}

impl Default for WalletKeypair {
    fn default() -> Self {
        Self::new()
    }
}

use crate::wallet::provider::BalanceReader;
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::{
    commitment_config::CommitmentConfig, hash::Hash, pubkey::Pubkey, signature::Signature,
    transaction::Transaction,
};
use std::sync::Arc;

/// Solana cluster the console talks to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolanaNetwork {
    Mainnet,
    Devnet,
    Testnet,
    Localnet,
    Custom(String),
}

impl SolanaNetwork {
    /// Recognise the public cluster endpoints, anything else is `Custom`.
    pub fn from_rpc_url(url: &str) -> Self {
        let trimmed = url.trim_end_matches('/');
        [
            SolanaNetwork::Mainnet,
            SolanaNetwork::Devnet,
            SolanaNetwork::Testnet,
            SolanaNetwork::Localnet,
        ]
        .into_iter()
        .find(|network| network.rpc_url() == trimmed)
        .unwrap_or_else(|| {
            // RPC providers usually embed the cluster name in the host
            if trimmed.contains("devnet") {
                SolanaNetwork::Devnet
            } else if trimmed.contains("testnet") {
                SolanaNetwork::Testnet
            } else {
                SolanaNetwork::Custom(url.to_string())
            }
        })
    }

    /// RPC endpoint URL
    pub fn rpc_url(&self) -> String {
        match self {
            SolanaNetwork::Mainnet => "https://api.mainnet-beta.solana.com".to_string(),
            SolanaNetwork::Devnet => "https://api.devnet.solana.com".to_string(),
            SolanaNetwork::Testnet => "https://api.testnet.solana.com".to_string(),
            SolanaNetwork::Localnet => "http://localhost:8899".to_string(),
            SolanaNetwork::Custom(url) => url.clone(),
        }
    }

    /// Display name
    pub fn name(&self) -> &str {
        match self {
            SolanaNetwork::Mainnet => "Mainnet Beta",
            SolanaNetwork::Devnet => "Devnet",
            SolanaNetwork::Testnet => "Testnet",
            SolanaNetwork::Localnet => "Localnet",
            SolanaNetwork::Custom(_) => "Custom",
        }
    }
}

/// Shared handle on the cluster's JSON-RPC endpoint
pub struct RpcManager {
    client: Arc<RpcClient>,
    network: SolanaNetwork,
}

impl RpcManager {
    /// Connect to `rpc_url` with `confirmed` commitment
    pub fn new(rpc_url: impl Into<String>) -> Self {
        let rpc_url = rpc_url.into();
        let client =
            RpcClient::new_with_commitment(rpc_url.clone(), CommitmentConfig::confirmed());

        Self {
            client: Arc::new(client),
            network: SolanaNetwork::from_rpc_url(&rpc_url),
        }
    }

    pub fn network(&self) -> &SolanaNetwork {
        &self.network
    }

    /// Account balance in lamports
    pub async fn get_balance(&self, pubkey: &Pubkey) -> Result<u64> {
        self.client
            .get_balance(pubkey)
            .await
            .map_err(|e| anyhow!("Failed to get balance: {}", e))
    }

    /// Latest blockhash
    pub async fn get_latest_blockhash(&self) -> Result<Hash> {
        self.client
            .get_latest_blockhash()
            .await
            .map_err(|e| anyhow!("Failed to get latest blockhash: {}", e))
    }

    /// Send a signed transaction and wait for confirmation.
    ///
    /// The raw client error is returned so the caller can inspect the
    /// transaction error inside it.
    pub async fn send_transaction(&self, transaction: &Transaction) -> Result<Signature, ClientError> {
        self.client.send_and_confirm_transaction(transaction).await
    }
}

#[async_trait]
impl BalanceReader for RpcManager {
    async fn get_balance(&self, address: &Pubkey) -> Result<u64> {
        RpcManager::get_balance(self, address).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn test_network_urls() {
        assert_eq!(SolanaNetwork::Mainnet.rpc_url(), "https://api.mainnet-beta.solana.com");
        assert_eq!(SolanaNetwork::Devnet.rpc_url(), "https://api.devnet.solana.com");
        assert_eq!(SolanaNetwork::Testnet.rpc_url(), "https://api.testnet.solana.com");
        assert_eq!(SolanaNetwork::Localnet.rpc_url(), "http://localhost:8899");
        assert_eq!(SolanaNetwork::Custom("http://localhost:9999".to_string()).rpc_url(), "http://localhost:9999");
    }

    #[test]
    fn test_network_from_rpc_url() {
        assert_eq!(SolanaNetwork::from_rpc_url("https://api.devnet.solana.com/"), SolanaNetwork::Devnet);
        assert_eq!(SolanaNetwork::from_rpc_url("http://localhost:8899"), SolanaNetwork::Localnet);
        assert_eq!(
            SolanaNetwork::from_rpc_url("https://devnet.helius-rpc.com/?api-key=x"),
            SolanaNetwork::Devnet
        );
        assert_eq!(
            SolanaNetwork::from_rpc_url("http://10.0.0.5:8899"),
            SolanaNetwork::Custom("http://10.0.0.5:8899".to_string())
        );
    }

    #[test]
    fn test_rpc_manager_creation() {
        let manager = RpcManager::new("https://api.devnet.solana.com");
        assert_eq!(manager.network(), &SolanaNetwork::Devnet);
    }

    #[tokio::test]
    async fn test_get_balance_over_json_rpc() {
        let mut server = mockito::Server::new_async().await;
        // Older clients probe the node version before mapping commitment levels
        let _version = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({ "method": "getVersion" })))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "result": { "solana-core": "2.0.0", "feature-set": 1 },
                    "id": 1
                })
                .to_string(),
            )
            .create_async()
            .await;
        let balance = server
            .mock("POST", "/")
            .match_body(Matcher::PartialJson(json!({ "method": "getBalance" })))
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "result": { "context": { "slot": 1 }, "value": 2_500_000_000u64 },
                    "id": 1
                })
                .to_string(),
            )
            .create_async()
            .await;

        let manager = RpcManager::new(server.url());
        let lamports = manager.get_balance(&Pubkey::new_unique()).await.unwrap();

        assert_eq!(lamports, 2_500_000_000);
        balance.assert_async().await;
    }

    #[tokio::test]
    async fn test_get_balance_surfaces_rpc_errors() {
        let mut server = mockito::Server::new_async().await;
        let _error = server
            .mock("POST", "/")
            .with_header("content-type", "application/json")
            .with_body(
                json!({
                    "jsonrpc": "2.0",
                    "error": { "code": -32602, "message": "Invalid param" },
                    "id": 1
                })
                .to_string(),
            )
            .create_async()
            .await;

        let manager = RpcManager::new(server.url());
        let err = manager.get_balance(&Pubkey::new_unique()).await.unwrap_err();

        assert!(err.to_string().starts_with("Failed to get balance"));
    }
}

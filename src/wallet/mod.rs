pub mod keypair;
pub mod provider;
pub mod rpc;
pub mod signer;
pub mod transaction;

pub use provider::{
    BalanceReader, FeeToken, SignatureId, TransactionOptions, WalletError, WalletErrorCode,
    WalletProvider,
};
pub use rpc::{RpcManager, SolanaNetwork};
pub use signer::KeypairWallet;
pub use transaction::{lamports_to_sol, sol_to_lamports_floor, transfer_instruction};

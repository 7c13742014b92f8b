use super::form::TransferForm;
use super::activity::EventLog;
use crate::wallet::{lamports_to_sol, SolanaNetwork};
use solana_sdk::pubkey::Pubkey;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionState {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Connection status of the smart wallet.
///
/// `address` and `balance` are only ever set while connected. `epoch` moves
/// on every connect attempt and every disconnect so results that belong to a
/// superseded session can be recognised.
#[derive(Debug, Default)]
pub struct WalletSession {
    state: ConnectionState,
    address: Option<Pubkey>,
    balance: Option<u64>,
    epoch: u64,
}

impl WalletSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connection_state(&self) -> ConnectionState {
        self.state
    }

    pub fn is_connected(&self) -> bool {
        self.state == ConnectionState::Connected
    }

    pub fn address(&self) -> Option<Pubkey> {
        self.address.filter(|_| self.is_connected())
    }

    /// Last fetched balance in lamports, `None` until the first read lands
    pub fn balance(&self) -> Option<u64> {
        self.balance.filter(|_| self.is_connected())
    }

    pub fn balance_in_sol(&self) -> Option<f64> {
        self.balance().map(lamports_to_sol)
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Start a connect attempt. Returns the attempt's epoch, or `None` if a
    /// session is already open or pending.
    pub fn begin_connect(&mut self) -> Option<u64> {
        if self.state != ConnectionState::Disconnected {
            return None;
        }

        self.epoch += 1;
        self.state = ConnectionState::Connecting;
        Some(self.epoch)
    }

    pub fn finish_connect(&mut self, epoch: u64, address: Pubkey) -> bool {
        if epoch != self.epoch || self.state != ConnectionState::Connecting {
            return false;
        }

        self.state = ConnectionState::Connected;
        self.address = Some(address);
        self.balance = None;
        true
    }

    pub fn fail_connect(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.state != ConnectionState::Connecting {
            return false;
        }

        self.state = ConnectionState::Disconnected;
        true
    }

    /// Drop the session unconditionally.
    pub fn disconnect(&mut self) {
        self.epoch += 1;
        self.state = ConnectionState::Disconnected;
        self.address = None;
        self.balance = None;
    }

    /// Apply a balance read issued for `address`. Ignored unless the
    /// session is still connected to that same address.
    pub fn apply_balance(&mut self, address: &Pubkey, lamports: u64) -> bool {
        if self.address() != Some(*address) {
            return false;
        }

        self.balance = Some(lamports);
        true
    }
}

pub struct AppState {
    pub network: SolanaNetwork,
    pub session: WalletSession,
    pub form: TransferForm,
    pub log: EventLog,
}

impl AppState {
    pub fn new(network: SolanaNetwork, log: EventLog) -> Self {
        Self {
            network,
            session: WalletSession::new(),
            form: TransferForm::new(),
            log,
        }
    }
}

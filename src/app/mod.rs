mod activity;
mod events;
mod failure;
mod form;
mod state;

pub use activity::{EventLog, LogKind};
pub use events::{Intent, Job, WalletEvent};
pub use failure::FailureCategory;
pub use form::{FormPhase, TransferForm, ValidatedTransfer};
pub use state::{AppState, ConnectionState};

use crate::wallet::{
    transfer_instruction, BalanceReader, FeeToken, SolanaNetwork, TransactionOptions, WalletProvider,
};
use futures::FutureExt;
use solana_sdk::pubkey::Pubkey;
use std::{sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Balance re-reads after a completed transfer, giving the cluster time to
/// settle.
pub const POST_TRANSFER_REFRESH: [Duration; 2] = [Duration::from_secs(1), Duration::from_secs(3)];

/// Session controller.
///
/// Owns the UI state and the collaborators. User intents mutate state
/// synchronously and hand back [`Job`]s for the collaborator calls; the
/// caller runs those and feeds the resulting [`WalletEvent`]s to
/// [`WalletApp::handle`]. All state changes therefore happen on whichever
/// single task drives the app.
pub struct WalletApp {
    state: AppState,
    wallet: Arc<dyn WalletProvider>,
    ledger: Arc<dyn BalanceReader>,
    fee_token: FeeToken,
    /// Cancelled on disconnect so pending balance reads stop early
    session_token: CancellationToken,
}

impl WalletApp {
    pub fn new(
        network: SolanaNetwork,
        wallet: Arc<dyn WalletProvider>,
        ledger: Arc<dyn BalanceReader>,
        log: EventLog,
    ) -> Self {
        Self {
            state: AppState::new(network, log),
            wallet,
            ledger,
            fee_token: FeeToken::Usdc,
            session_token: CancellationToken::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn dispatch(&mut self, intent: Intent) -> Vec<Job> {
        match intent {
            Intent::Connect => self.connect().into_iter().collect(),
            Intent::Disconnect => vec![self.disconnect()],
            Intent::RefreshBalance => self.refresh_balance(Duration::ZERO).into_iter().collect(),
            Intent::SetRecipient(value) => {
                self.state.form.set_recipient(value);
                Vec::new()
            }
            Intent::SetAmount(value) => {
                self.state.form.set_amount(value);
                Vec::new()
            }
            Intent::Review => {
                self.review();
                Vec::new()
            }
            Intent::CancelReview => {
                self.state.form.cancel();
                Vec::new()
            }
            Intent::ConfirmTransfer => self.confirm_transfer().into_iter().collect(),
        }
    }

    pub fn connect(&mut self) -> Option<Job> {
        let epoch = self.state.session.begin_connect()?;
        self.state
            .log
            .append("Initiating Passkey authentication...", LogKind::Info);

        let wallet = Arc::clone(&self.wallet);
        Some(
            async move {
                let result = wallet.connect(epoch).await;
                Some(WalletEvent::ConnectFinished { epoch, result })
            }
            .boxed(),
        )
    }

    /// Local state is dropped right away; the collaborator call is best
    /// effort and only reported once it resolves, unless a newer session has
    /// started by then.
    pub fn disconnect(&mut self) -> Job {
        self.session_token.cancel();
        self.session_token = CancellationToken::new();
        self.state.session.disconnect();
        self.state.form.cancel();

        let epoch = self.state.session.epoch();
        let wallet = Arc::clone(&self.wallet);
        async move {
            let result = wallet.disconnect(epoch).await;
            Some(WalletEvent::DisconnectFinished { epoch, result })
        }
        .boxed()
    }

    /// Record a copy of the session address and return it for the caller to
    /// put on the clipboard.
    pub fn copy_address(&mut self) -> Option<Pubkey> {
        let address = self.state.session.address()?;
        self.state
            .log
            .append("Address copied to clipboard", LogKind::Success);
        Some(address)
    }

    pub fn review(&mut self) -> bool {
        if !self.state.session.is_connected() {
            return false;
        }
        self.state.form.review()
    }

    pub fn confirm_transfer(&mut self) -> Option<Job> {
        let from = self.state.session.address()?;
        let transfer = self.state.form.confirm()?;
        let epoch = self.state.session.epoch();

        self.state.log.append(
            format!("Initiating transfer of {} SOL...", transfer.amount),
            LogKind::Info,
        );
        let instruction = transfer_instruction(&from, &transfer.recipient, transfer.lamports);
        self.state
            .log
            .append("Step 1: Asking you to sign with Passkey...", LogKind::Info);

        info!(
            %from,
            to = %transfer.recipient,
            lamports = transfer.lamports,
            "submitting transfer"
        );

        let wallet = Arc::clone(&self.wallet);
        let options = TransactionOptions::paying_fees_in(self.fee_token);
        Some(
            async move {
                let result = wallet.sign_and_send(vec![instruction], options).await;
                Some(WalletEvent::TransferFinished { epoch, result })
            }
            .boxed(),
        )
    }

    fn refresh_balance(&self, delay: Duration) -> Option<Job> {
        let address = self.state.session.address()?;
        let ledger = Arc::clone(&self.ledger);
        let token = self.session_token.clone();

        Some(
            async move {
                let fetch = async {
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    ledger.get_balance(&address).await
                };

                tokio::select! {
                    biased;
                    _ = token.cancelled() => None,
                    result = fetch => Some(WalletEvent::BalanceFetched { address, result }),
                }
            }
            .boxed(),
        )
    }

    /// Apply the outcome of a job. Returns any follow-up jobs.
    pub fn handle(&mut self, event: WalletEvent) -> Vec<Job> {
        match event {
            WalletEvent::ConnectFinished { epoch, result } => match result {
                Ok(address) => {
                    if !self.state.session.finish_connect(epoch, address) {
                        debug!(%address, "discarding connect result from a superseded session");
                        return Vec::new();
                    }
                    info!(%address, "wallet connected");
                    self.state
                        .log
                        .append("Biometric verification successful!", LogKind::Success);
                    self.refresh_balance(Duration::ZERO).into_iter().collect()
                }
                Err(err) => {
                    if self.state.session.fail_connect(epoch) {
                        self.state
                            .log
                            .append(format!("Connection failed: {}", err), LogKind::Error);
                    }
                    Vec::new()
                }
            },
            WalletEvent::DisconnectFinished { epoch, result } => {
                if epoch != self.state.session.epoch() {
                    debug!(ok = result.is_ok(), "discarding disconnect result from a superseded session");
                    return Vec::new();
                }
                match result {
                    Ok(()) => {
                        self.state.log.append("Wallet disconnected.", LogKind::Info);
                    }
                    Err(err) => {
                        self.state
                            .log
                            .append(format!("Disconnect failed: {}", err), LogKind::Error);
                    }
                }
                Vec::new()
            }
            WalletEvent::TransferFinished { epoch, result } => match result {
                Ok(signature) => {
                    if !self.state.form.complete() {
                        return Vec::new();
                    }
                    info!(%signature, "transfer complete");
                    self.state
                        .log
                        .append("Success! Transfer Complete!", LogKind::Success);
                    self.state
                        .log
                        .append(format!("Signature: {}", signature), LogKind::Info);

                    if epoch != self.state.session.epoch() {
                        debug!("session changed during transfer, skipping balance refresh");
                        return Vec::new();
                    }
                    POST_TRANSFER_REFRESH
                        .iter()
                        .filter_map(|delay| self.refresh_balance(*delay))
                        .collect()
                }
                Err(err) => {
                    if self.state.form.phase() != FormPhase::Submitting {
                        return Vec::new();
                    }
                    error!(error = %err, code = ?err.code, "transfer failed");
                    let category = FailureCategory::classify(&err);
                    self.state.log.append(category.log_message(), LogKind::Error);
                    self.state.form.fail(category.form_message());
                    Vec::new()
                }
            },
            WalletEvent::BalanceFetched { address, result } => {
                match result {
                    Ok(lamports) => {
                        if !self.state.session.apply_balance(&address, lamports) {
                            debug!(%address, "discarding balance for a stale session");
                        }
                    }
                    Err(err) => warn!(%address, error = %err, "balance fetch failed"),
                }
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::form::INVALID_INPUT_MESSAGE;
    use super::*;
    use crate::wallet::{SignatureId, WalletError};
    use async_trait::async_trait;
    use solana_sdk::instruction::Instruction;
    use std::sync::{
        atomic::{AtomicUsize, Ordering},
        Mutex,
    };

    struct FakeWallet {
        address: Pubkey,
        connect_error: Option<WalletError>,
        disconnect_error: Option<WalletError>,
        transfer_result: Result<SignatureId, WalletError>,
        sent: Mutex<Vec<(Vec<Instruction>, TransactionOptions)>>,
    }

    impl FakeWallet {
        fn new() -> Self {
            Self {
                address: Pubkey::new_unique(),
                connect_error: None,
                disconnect_error: None,
                transfer_result: Ok(SignatureId("abc123".to_string())),
                sent: Mutex::new(Vec::new()),
            }
        }

        fn sent(&self) -> usize {
            self.sent.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl WalletProvider for FakeWallet {
        async fn connect(&self, _epoch: u64) -> Result<Pubkey, WalletError> {
            match &self.connect_error {
                Some(err) => Err(err.clone()),
                None => Ok(self.address),
            }
        }

        async fn disconnect(&self, _epoch: u64) -> Result<(), WalletError> {
            match &self.disconnect_error {
                Some(err) => Err(err.clone()),
                None => Ok(()),
            }
        }

        async fn sign_and_send(
            &self,
            instructions: Vec<Instruction>,
            options: TransactionOptions,
        ) -> Result<SignatureId, WalletError> {
            self.sent.lock().unwrap().push((instructions, options));
            self.transfer_result.clone()
        }
    }

    struct FakeLedger {
        lamports: u64,
        reads: AtomicUsize,
    }

    #[async_trait]
    impl BalanceReader for FakeLedger {
        async fn get_balance(&self, _address: &Pubkey) -> anyhow::Result<u64> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            Ok(self.lamports)
        }
    }

    struct FailingLedger;

    #[async_trait]
    impl BalanceReader for FailingLedger {
        async fn get_balance(&self, _address: &Pubkey) -> anyhow::Result<u64> {
            Err(anyhow::anyhow!("rpc unavailable"))
        }
    }

    fn app_with(wallet: FakeWallet) -> (WalletApp, Arc<FakeWallet>, Arc<FakeLedger>) {
        let wallet = Arc::new(wallet);
        let ledger = Arc::new(FakeLedger {
            lamports: 2_000_000_000,
            reads: AtomicUsize::new(0),
        });
        let app = WalletApp::new(
            SolanaNetwork::Devnet,
            wallet.clone(),
            ledger.clone(),
            EventLog::new(),
        );
        (app, wallet, ledger)
    }

    async fn run(app: &mut WalletApp, job: Job) -> Vec<Job> {
        match job.await {
            Some(event) => app.handle(event),
            None => Vec::new(),
        }
    }

    async fn run_all(app: &mut WalletApp, jobs: Vec<Job>) {
        let mut pending = jobs;
        while let Some(job) = pending.pop() {
            let follow_up = run(app, job).await;
            pending.extend(follow_up);
        }
    }

    async fn connected_app(wallet: FakeWallet) -> (WalletApp, Arc<FakeWallet>, Arc<FakeLedger>) {
        let (mut app, wallet, ledger) = app_with(wallet);
        let jobs = app.dispatch(Intent::Connect);
        run_all(&mut app, jobs).await;
        assert!(app.state().session.is_connected());
        (app, wallet, ledger)
    }

    /// Let spawned jobs run up to their next timer.
    async fn settle() {
        for _ in 0..10 {
            tokio::task::yield_now().await;
        }
    }

    fn new_entries(app: &WalletApp, since: usize) -> Vec<(LogKind, String)> {
        app.state()
            .log
            .iter()
            .skip(since)
            .map(|e| (e.kind, e.message.clone()))
            .collect()
    }

    fn fill_form(app: &mut WalletApp, recipient: &str, amount: &str) {
        app.dispatch(Intent::SetRecipient(recipient.to_string()));
        app.dispatch(Intent::SetAmount(amount.to_string()));
    }

    #[tokio::test]
    async fn test_connect_logs_and_fetches_balance() {
        let (app, wallet, ledger) = connected_app(FakeWallet::new()).await;

        assert_eq!(app.state().session.address(), Some(wallet.address));
        assert_eq!(app.state().session.balance(), Some(2_000_000_000));
        assert_eq!(ledger.reads.load(Ordering::SeqCst), 1);
        assert_eq!(
            new_entries(&app, 0),
            vec![
                (LogKind::Info, "Initiating Passkey authentication...".to_string()),
                (LogKind::Success, "Biometric verification successful!".to_string()),
            ]
        );
    }

    #[tokio::test]
    async fn test_connect_failure_stays_disconnected() {
        let mut wallet = FakeWallet::new();
        wallet.connect_error = Some(WalletError::new("User denied passkey"));
        let (mut app, _, ledger) = app_with(wallet);

        let job = app.connect().unwrap();
        assert_eq!(app.state().session.connection_state(), ConnectionState::Connecting);
        assert!(app.connect().is_none());

        let follow_up = run(&mut app, job).await;

        assert!(follow_up.is_empty());
        assert_eq!(app.state().session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(ledger.reads.load(Ordering::SeqCst), 0);
        assert_eq!(
            new_entries(&app, 1),
            vec![(LogKind::Error, "Connection failed: User denied passkey".to_string())]
        );
    }

    #[tokio::test]
    async fn test_disconnect_clears_session_even_if_wallet_fails() {
        let mut wallet = FakeWallet::new();
        wallet.disconnect_error = Some(WalletError::new("portal unreachable"));
        let (mut app, _, _) = connected_app(wallet).await;
        let before = app.state().log.len();

        let job = app.disconnect();
        assert_eq!(app.state().session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(app.state().session.address(), None);
        assert_eq!(app.state().session.balance(), None);

        run(&mut app, job).await;

        assert_eq!(app.state().session.connection_state(), ConnectionState::Disconnected);
        assert_eq!(
            new_entries(&app, before),
            vec![(LogKind::Error, "Disconnect failed: portal unreachable".to_string())]
        );
    }

    #[tokio::test]
    async fn test_disconnect_logs_once_resolved() {
        let (mut app, _, _) = connected_app(FakeWallet::new()).await;
        let before = app.state().log.len();

        let jobs = app.dispatch(Intent::Disconnect);
        run_all(&mut app, jobs).await;

        assert_eq!(
            new_entries(&app, before),
            vec![(LogKind::Info, "Wallet disconnected.".to_string())]
        );
    }

    #[tokio::test]
    async fn test_invalid_recipient_never_reaches_wallet() {
        let (mut app, wallet, _) = connected_app(FakeWallet::new()).await;
        let before = app.state().log.len();

        fill_form(&mut app, "not-an-address", "1.5");
        app.dispatch(Intent::Review);

        assert_eq!(app.state().form.phase(), FormPhase::Editing);
        assert_eq!(app.state().form.validation_error(), Some(INVALID_INPUT_MESSAGE));
        assert!(app.dispatch(Intent::ConfirmTransfer).is_empty());
        assert_eq!(app.state().log.len(), before);
        assert_eq!(wallet.sent(), 0);
    }

    #[tokio::test]
    async fn test_non_positive_amounts_never_reach_wallet() {
        let (mut app, wallet, _) = connected_app(FakeWallet::new()).await;
        let recipient = Pubkey::new_unique().to_string();

        for amount in ["0", "-0.5", "abc"] {
            fill_form(&mut app, &recipient, amount);
            assert!(!app.review());
            assert_ne!(app.state().form.phase(), FormPhase::AwaitingConfirmation);
            assert!(app.confirm_transfer().is_none());
            assert_ne!(app.state().form.phase(), FormPhase::Submitting);
        }
        assert_eq!(wallet.sent(), 0);
    }

    #[tokio::test]
    async fn test_review_requires_connection() {
        let (mut app, _, _) = app_with(FakeWallet::new());
        fill_form(&mut app, &Pubkey::new_unique().to_string(), "1");

        assert!(!app.review());
        assert_eq!(app.state().form.phase(), FormPhase::Editing);
    }

    #[tokio::test(start_paused = true)]
    async fn test_successful_transfer() {
        let (mut app, wallet, ledger) = connected_app(FakeWallet::new()).await;
        let recipient = Pubkey::new_unique();
        let before = app.state().log.len();

        fill_form(&mut app, &recipient.to_string(), "0.5");
        app.dispatch(Intent::Review);
        assert_eq!(app.state().form.phase(), FormPhase::AwaitingConfirmation);

        let mut jobs = app.dispatch(Intent::ConfirmTransfer);
        assert_eq!(jobs.len(), 1);
        assert_eq!(app.state().form.phase(), FormPhase::Submitting);
        assert!(app.confirm_transfer().is_none());

        let refreshes = run(&mut app, jobs.remove(0)).await;

        assert_eq!(
            new_entries(&app, before),
            vec![
                (LogKind::Info, "Initiating transfer of 0.5 SOL...".to_string()),
                (LogKind::Info, "Step 1: Asking you to sign with Passkey...".to_string()),
                (LogKind::Success, "Success! Transfer Complete!".to_string()),
                (LogKind::Info, "Signature: abc123".to_string()),
            ]
        );
        assert_eq!(app.state().form.phase(), FormPhase::Completed);
        assert_eq!(app.state().form.recipient(), "");
        assert_eq!(app.state().form.amount(), "");

        let sent = wallet.sent.lock().unwrap().clone();
        let (instructions, options) = &sent[0];
        assert_eq!(instructions.len(), 1);
        assert_eq!(instructions[0].accounts[0].pubkey, wallet.address);
        assert_eq!(instructions[0].accounts[1].pubkey, recipient);
        assert_eq!(options.fee_token, FeeToken::Usdc);

        assert_eq!(refreshes.len(), POST_TRANSFER_REFRESH.len());
        let handles: Vec<_> = refreshes.into_iter().map(tokio::spawn).collect();
        settle().await;
        let reads = || ledger.reads.load(Ordering::SeqCst);

        // One read so far, from connect
        tokio::time::advance(Duration::from_millis(999)).await;
        settle().await;
        assert_eq!(reads(), 1);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(reads(), 2);

        tokio::time::advance(Duration::from_millis(1_999)).await;
        settle().await;
        assert_eq!(reads(), 2);

        tokio::time::advance(Duration::from_millis(1)).await;
        settle().await;
        assert_eq!(reads(), 3);

        for handle in handles {
            if let Some(event) = handle.await.unwrap() {
                app.handle(event);
            }
        }
        assert_eq!(app.state().session.balance(), Some(2_000_000_000));
    }

    #[tokio::test]
    async fn test_late_disconnect_result_does_not_touch_new_session() {
        let (mut app, wallet, _) = connected_app(FakeWallet::new()).await;
        let stale_disconnect = app.disconnect();

        let jobs = app.dispatch(Intent::Connect);
        run_all(&mut app, jobs).await;
        let before = app.state().log.len();

        let follow_up = run(&mut app, stale_disconnect).await;

        assert!(follow_up.is_empty());
        assert!(app.state().session.is_connected());
        assert_eq!(app.state().session.address(), Some(wallet.address));
        assert_eq!(app.state().log.len(), before);
        assert_eq!(
            app.state().log.newest_first().next().map(|e| e.message.as_str()),
            Some("Biometric verification successful!")
        );
    }

    #[tokio::test]
    async fn test_insufficient_funds_failure() {
        let mut wallet = FakeWallet::new();
        wallet.transfer_result = Err(WalletError::new(
            "failed to send transaction: InstructionError(0, Custom:1)",
        ));
        let (mut app, _, _) = connected_app(wallet).await;
        let recipient = Pubkey::new_unique().to_string();
        let before = app.state().log.len();

        fill_form(&mut app, &recipient, "3");
        app.dispatch(Intent::Review);
        let jobs = app.dispatch(Intent::ConfirmTransfer);
        run_all(&mut app, jobs).await;

        let entries = new_entries(&app, before);
        let errors: Vec<_> = entries.iter().filter(|(kind, _)| *kind == LogKind::Error).collect();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].1, "Failed: Insufficient funds for transfer.");
        assert_eq!(entries.last().map(|(kind, _)| *kind), Some(LogKind::Error));

        assert_eq!(app.state().form.phase(), FormPhase::Failed);
        assert_eq!(app.state().form.validation_error(), Some("Insufficient funds."));
        assert_eq!(app.state().form.recipient(), recipient);
        assert_eq!(app.state().form.amount(), "3");
        assert!(app.state().form.can_review());
    }

    #[tokio::test]
    async fn test_generic_failure_truncates_detail() {
        let mut wallet = FakeWallet::new();
        wallet.transfer_result = Err(WalletError::new("x".repeat(300)));
        let (mut app, _, _) = connected_app(wallet).await;

        fill_form(&mut app, &Pubkey::new_unique().to_string(), "1");
        app.dispatch(Intent::Review);
        let jobs = app.dispatch(Intent::ConfirmTransfer);
        run_all(&mut app, jobs).await;

        let last = app.state().log.iter().last().unwrap();
        assert_eq!(last.message, format!("Failed: {}", "x".repeat(100)));
        assert_eq!(
            app.state().form.validation_error(),
            Some("Transaction failed. See activity log.")
        );
    }

    #[tokio::test]
    async fn test_cancel_review_has_no_side_effects() {
        let (mut app, wallet, _) = connected_app(FakeWallet::new()).await;
        let before = app.state().log.len();

        fill_form(&mut app, &Pubkey::new_unique().to_string(), "1");
        app.dispatch(Intent::Review);
        app.dispatch(Intent::CancelReview);

        assert_eq!(app.state().form.phase(), FormPhase::Editing);
        assert_eq!(app.state().form.amount(), "1");
        assert_eq!(app.state().log.len(), before);
        assert_eq!(wallet.sent(), 0);
    }

    #[tokio::test]
    async fn test_balance_refresh_cancelled_by_disconnect() {
        let (mut app, _, ledger) = connected_app(FakeWallet::new()).await;
        let reads = ledger.reads.load(Ordering::SeqCst);

        let mut refresh = app.dispatch(Intent::RefreshBalance);
        assert_eq!(refresh.len(), 1);
        app.disconnect();

        assert!(refresh.remove(0).await.is_none());
        assert_eq!(ledger.reads.load(Ordering::SeqCst), reads);
    }

    #[tokio::test]
    async fn test_late_balance_for_old_session_is_discarded() {
        let (mut app, wallet, _) = connected_app(FakeWallet::new()).await;
        app.disconnect();

        app.handle(WalletEvent::BalanceFetched {
            address: wallet.address,
            result: Ok(99),
        });

        assert_eq!(app.state().session.balance(), None);
    }

    #[tokio::test]
    async fn test_balance_errors_stay_out_of_activity_log() {
        let wallet = Arc::new(FakeWallet::new());
        let mut app = WalletApp::new(
            SolanaNetwork::Devnet,
            wallet.clone(),
            Arc::new(FailingLedger),
            EventLog::new(),
        );
        let jobs = app.dispatch(Intent::Connect);
        run_all(&mut app, jobs).await;

        assert!(app.state().session.is_connected());
        assert_eq!(app.state().session.balance(), None);
        assert!(app.state().log.iter().all(|e| e.kind != LogKind::Error));
    }

    #[tokio::test]
    async fn test_transfer_result_after_disconnect_skips_refresh() {
        let (mut app, _, _) = connected_app(FakeWallet::new()).await;
        fill_form(&mut app, &Pubkey::new_unique().to_string(), "1");
        app.dispatch(Intent::Review);
        let mut jobs = app.dispatch(Intent::ConfirmTransfer);
        app.disconnect();

        let follow_up = run(&mut app, jobs.remove(0)).await;

        assert!(follow_up.is_empty());
        assert_eq!(app.state().form.phase(), FormPhase::Completed);
    }

    #[tokio::test]
    async fn test_copy_address() {
        let (mut app, wallet, _) = app_with(FakeWallet::new());
        assert_eq!(app.copy_address(), None);
        assert!(app.state().log.is_empty());

        let jobs = app.dispatch(Intent::Connect);
        run_all(&mut app, jobs).await;

        assert_eq!(app.copy_address(), Some(wallet.address));
        let last = app.state().log.iter().last().unwrap();
        assert_eq!((last.kind, last.message.as_str()), (LogKind::Success, "Address copied to clipboard"));
    }
}

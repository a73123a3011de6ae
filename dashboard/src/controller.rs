//! The async side of the dashboard.
//!
//! [`Dashboard`] owns the record store, the wallet, the session's signature
//! parameters and the current [`ViewState`]. Each user action awaits the
//! store or the wallet and records the outcome as [`ViewEvent`]s. Failures
//! never escape as panics: they become a banner or an alert, and the view
//! returns to an interactive state.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use anticheat_store::{ContractAccessor, RecordStore, StoreError};
use anticheat_types::{ChainId, Clock, ErrorKind, RecordId, WalletAddress};
use anticheat_wallet::{ChainProvider, DecryptFlow, SignatureParams, WalletError, WalletProvider};

use crate::banner::messages;
use crate::{
    available_action, reduce, Banner, DashboardConfig, DashboardError, RecordAction, ViewEvent,
    ViewState,
};

pub struct Dashboard<C, W> {
    store: RecordStore<C>,
    wallet: W,
    config: DashboardConfig,
    clock: Arc<dyn Clock>,
    params: SignatureParams,
    flow: DecryptFlow,
    state: ViewState,
}

impl<C: ContractAccessor, W: WalletProvider> Dashboard<C, W> {
    /// Build the session and perform the initial listing.
    ///
    /// The contract address and chain id are read once here. Failing to
    /// read either is logged and leaves an empty address or chain id `0` in
    /// the signature message.
    pub async fn start<P: ChainProvider>(
        store: RecordStore<C>,
        wallet: W,
        chain: &P,
        config: DashboardConfig,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let store = store
            .with_clock(clock.clone())
            .with_index_retry_limit(config.index_retry_limit);

        let contract_address = store.contract().address().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not read contract address");
            String::new()
        });
        let chain_id = chain.chain_id().await.unwrap_or_else(|e| {
            warn!(error = %e, "could not read chain id");
            ChainId::default()
        });
        let params = SignatureParams::generate(
            contract_address,
            chain_id,
            clock.now(),
            config.signature_duration_days,
        );
        debug!(%chain_id, contract = %params.contract_address, "signature session prepared");

        let mut dashboard = Self {
            store,
            wallet,
            config,
            clock,
            params,
            flow: DecryptFlow::new(),
            state: ViewState::default(),
        };
        dashboard.refresh().await;
        dashboard
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    pub fn store(&self) -> &RecordStore<C> {
        &self.store
    }

    pub fn signature_params(&self) -> &SignatureParams {
        &self.params
    }

    /// The connected viewer, if any.
    pub fn viewer(&self) -> Option<WalletAddress> {
        self.wallet.address()
    }

    /// Apply a synchronous UI event (typing, filter changes, modals).
    pub fn dispatch(&mut self, event: ViewEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, event);
    }

    /// Let banners expire against the current clock.
    pub fn tick(&mut self) {
        let now_millis = self.clock.now_millis();
        self.dispatch(ViewEvent::Tick { now_millis });
    }

    fn success_banner(&self, message: &str) -> Banner {
        let at = self.clock.now_millis() + self.config.success_banner_ms;
        Banner::success(message, at)
    }

    fn show_error(&mut self, message: String) {
        let at = self.clock.now_millis() + self.config.error_banner_ms;
        self.dispatch(ViewEvent::BannerShown(Banner::error(message, at)));
    }

    fn alert(&mut self, message: &str) {
        self.dispatch(ViewEvent::Alert(message.to_string()));
    }

    /// Connected viewer or an alert.
    fn require_viewer(&mut self) -> Result<WalletAddress, DashboardError> {
        match self.wallet.address().filter(|_| self.wallet.is_connected()) {
            Some(addr) => Ok(addr),
            None => {
                self.alert(messages::CONNECT_WALLET);
                Err(DashboardError::NotConnected)
            }
        }
    }

    /// Reload the record list from the store.
    ///
    /// An unavailable store or a failed read leaves the current list in
    /// place.
    pub async fn refresh(&mut self) {
        self.dispatch(ViewEvent::RefreshStarted);
        match self.store.list_records().await {
            Ok(records) => self.dispatch(ViewEvent::RecordsLoaded(records)),
            Err(StoreError::Unavailable) => warn!("contract store unavailable, keeping current records"),
            Err(e) => error!(error = %e, "failed to load records"),
        }
        self.dispatch(ViewEvent::RefreshFinished);
    }

    /// Submit the creation form.
    ///
    /// The form is validated first, then the wallet is checked; both happen
    /// before any store access.
    pub async fn submit(&mut self) -> Result<RecordId, DashboardError> {
        if let Err(e) = self.state.form.validate() {
            self.alert(messages::FILL_REQUIRED);
            return Err(e.into());
        }
        let player = self.require_viewer()?;
        let input = self.state.form.to_new_record(player)?;

        self.dispatch(ViewEvent::SubmitStarted);
        self.dispatch(ViewEvent::BannerShown(Banner::pending(messages::SUBMIT_PENDING)));

        let result = self.store.create_record(input).await;
        let outcome = match result {
            Ok(id) => {
                info!(%id, "detection submitted");
                let banner = self.success_banner(messages::SUBMIT_SUCCESS).closing_create_form();
                self.dispatch(ViewEvent::BannerShown(banner));
                self.refresh().await;
                Ok(id)
            }
            Err(e) => {
                error!(error = %e, kind = e.kind().as_str(), "submission failed");
                let message = if e.kind() == ErrorKind::UserRejected {
                    messages::SUBMIT_REJECTED.to_string()
                } else {
                    format!("{}: {e}", messages::SUBMIT_FAILED)
                };
                self.show_error(message);
                Err(e.into())
            }
        };
        self.dispatch(ViewEvent::SubmitFinished);
        outcome
    }

    /// Mark a record suspicious (owner only, `normal` records only).
    pub async fn flag(&mut self, id: &RecordId) -> Result<(), DashboardError> {
        self.advance(id, RecordAction::Flag).await
    }

    /// Confirm cheating on a record (owner only, `suspicious` records only).
    pub async fn confirm(&mut self, id: &RecordId) -> Result<(), DashboardError> {
        self.advance(id, RecordAction::Confirm).await
    }

    async fn advance(&mut self, id: &RecordId, action: RecordAction) -> Result<(), DashboardError> {
        let viewer = self.require_viewer()?;
        let record = self
            .state
            .find(id)
            .ok_or_else(|| DashboardError::UnknownRecord(id.clone()))?;
        if available_action(record, Some(&viewer)) != Some(action) {
            return Err(DashboardError::ActionUnavailable {
                id: id.clone(),
                action,
            });
        }

        self.dispatch(ViewEvent::BannerShown(Banner::pending(messages::PROCESSING)));
        let result = match action {
            RecordAction::Flag => self.store.flag_record(id).await,
            RecordAction::Confirm => self.store.confirm_record(id).await,
        };
        let (success, failure) = match action {
            RecordAction::Flag => (messages::FLAG_SUCCESS, messages::FLAG_FAILED),
            RecordAction::Confirm => (messages::CONFIRM_SUCCESS, messages::CONFIRM_FAILED),
        };

        match result {
            Ok(()) => {
                let banner = self.success_banner(success);
                self.dispatch(ViewEvent::BannerShown(banner));
                self.refresh().await;
                Ok(())
            }
            Err(e) => {
                error!(%id, %action, error = %e, kind = e.kind().as_str(), "status update failed");
                self.show_error(format!("{failure}: {e}"));
                Err(e.into())
            }
        }
    }

    /// Open the detail view of a loaded record.
    pub fn select(&mut self, id: &RecordId) -> Result<(), DashboardError> {
        let record = self
            .state
            .find(id)
            .cloned()
            .ok_or_else(|| DashboardError::UnknownRecord(id.clone()))?;
        self.flow.reset();
        self.dispatch(ViewEvent::RecordSelected(record));
        Ok(())
    }

    pub fn close_detail(&mut self) {
        self.flow.reset();
        self.dispatch(ViewEvent::DetailClosed);
    }

    /// The detail view's decrypt button: reveal the score, or hide it again.
    ///
    /// Returns the revealed value, or `None` when the value was hidden or a
    /// decrypt is already running. A missing wallet raises an alert; any
    /// other failure shows an error banner and leaves nothing revealed.
    pub async fn toggle_decrypt(&mut self) -> Result<Option<f64>, DashboardError> {
        let token = self
            .state
            .selected
            .as_ref()
            .map(|r| r.encrypted_score.clone())
            .ok_or(DashboardError::NothingSelected)?;

        let delay = self.config.decrypt_delay();
        let result = self.flow.run(&self.wallet, &self.params, &token, delay).await;
        self.dispatch(ViewEvent::DecryptChanged(self.flow.state()));

        match result {
            Ok(value) => Ok(value),
            Err(WalletError::NotConnected) => {
                self.alert(messages::CONNECT_WALLET);
                Err(DashboardError::Wallet(WalletError::NotConnected))
            }
            Err(e) => {
                self.show_error(format!("{}: {e}", messages::DECRYPT_FAILED));
                Err(e.into())
            }
        }
    }
}

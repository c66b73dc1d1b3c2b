//! Ledger service - Core business logic for accounts and transfers.
//!
//! This service handles:
//! - Account creation and lookup
//! - Atomic, deadlock-free transfers between two accounts
//! - Post-commit notification dispatch
//!
//! # Atomicity Guarantees
//!
//! A transfer mutates both balances while holding both account mutexes,
//! or mutates neither. Locks are always acquired in lexicographic id
//! order — never argument order — so concurrent transfers that share
//! accounts in opposite directions cannot deadlock. Transfers over
//! disjoint account pairs never contend at all.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::account::Account;
use crate::models::transfer::TransferReceipt;
use crate::services::notification_service::NotificationSink;
use crate::store::AccountStore;

/// Coordinates account operations against the shared store.
pub struct LedgerService {
    store: Arc<AccountStore>,
    notifier: Arc<dyn NotificationSink>,
}

impl LedgerService {
    pub fn new(store: Arc<AccountStore>, notifier: Arc<dyn NotificationSink>) -> Self {
        Self { store, notifier }
    }

    /// Create an account with the given id and opening balance.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest`: Empty id or negative opening balance
    /// - `DuplicateAccount`: Id already exists in the store
    pub fn create_account(
        &self,
        id: impl Into<String>,
        opening_balance: Decimal,
    ) -> Result<Arc<Account>, LedgerError> {
        let account = self.store.create(Account::new(id, opening_balance)?)?;
        tracing::info!(account_id = account.id(), "account created");
        Ok(account)
    }

    /// Look up an account by id.
    ///
    /// # Errors
    ///
    /// - `AccountNotFound`: Id is absent from the store
    pub fn get_account(&self, id: &str) -> Result<Arc<Account>, LedgerError> {
        self.store
            .get(id)
            .ok_or_else(|| LedgerError::AccountNotFound { id: id.to_string() })
    }

    /// Snapshot of all accounts.
    pub fn list_accounts(&self) -> Vec<Arc<Account>> {
        self.store.list()
    }

    /// Number of accounts in the ledger.
    pub fn account_count(&self) -> usize {
        self.store.len()
    }

    /// Move `amount` from one account to another as a single atomic step.
    ///
    /// # Process
    ///
    /// 1. Validate the amount and reject self-transfers (no lock taken yet)
    /// 2. Resolve both accounts from the store
    /// 3. Acquire both balance locks in lexicographic id order
    /// 4. Check the source balance and mutate both balances under the locks
    /// 5. Release the locks, then notify both account holders
    ///
    /// The sufficient-funds check happens once, under both locks,
    /// immediately before mutation. There is no optimistic pre-check: a
    /// stale early read could not be trusted anyway, and the locks are
    /// only held for a handful of decimal operations.
    ///
    /// # Post-conditions
    ///
    /// On success the source decreased and the destination increased by
    /// exactly `amount`; the sum of the two balances is unchanged. On any
    /// error neither balance moved and no notification fired.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount`: Amount is zero or negative
    /// - `InvalidRequest`: Source and destination are the same account
    /// - `AccountNotFound`: Either id is absent from the store
    /// - `InsufficientFunds`: Source balance is smaller than `amount`
    pub fn transfer(
        &self,
        from_id: &str,
        to_id: &str,
        amount: Decimal,
    ) -> Result<TransferReceipt, LedgerError> {
        // Validate before taking any lock
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }

        // A self-transfer would mean locking one mutex twice; reject it
        if from_id == to_id {
            return Err(LedgerError::InvalidRequest(
                "Cannot transfer to the same account".to_string(),
            ));
        }

        let from = self.get_account(from_id)?;
        let to = self.get_account(to_id)?;

        // Locked phase. Acquisition order is the smaller id first — the
        // same total order for every caller, whichever direction the
        // money flows — which rules out circular waits.
        let (from_balance, to_balance) = {
            let (mut src, mut dst) = if from.id() < to.id() {
                let src = from.lock();
                let dst = to.lock();
                (src, dst)
            } else {
                let dst = to.lock();
                let src = from.lock();
                (src, dst)
            };

            if *src < amount {
                return Err(LedgerError::InsufficientFunds {
                    account: from.id().to_string(),
                });
            }

            *src -= amount;
            *dst += amount;
            (*src, *dst)
        };

        tracing::debug!(
            from = from.id(),
            to = to.id(),
            %amount,
            "transfer committed"
        );

        // Post-commit, best-effort. Runs outside the locks; a slow or
        // failing sink cannot stall other transfers or undo this one.
        self.notifier
            .notify(&from, &format!("Transferred {amount} to {}", to.id()));
        self.notifier
            .notify(&to, &format!("Received {amount} from {}", from.id()));

        Ok(TransferReceipt {
            from_account_id: from.id().to_string(),
            to_account_id: to.id().to_string(),
            amount,
            from_balance,
            to_balance,
            completed_at: Utc::now(),
        })
    }
}

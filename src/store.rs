//! In-process account store.
//!
//! Canonical id → Account mapping, shared by all handlers. Uses DashMap
//! so lookups from unrelated transfers never contend with each other;
//! only structural inserts touch the map's shard locks, never balance
//! mutation (balances are guarded by each account's own mutex).

use std::sync::Arc;

use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

use crate::error::LedgerError;
use crate::models::account::Account;

/// Thread-safe account store.
///
/// The store exclusively owns the canonical `Account` records; callers
/// receive `Arc` handles and borrow balances through the per-account lock.
/// Accounts are never deleted.
#[derive(Debug, Default)]
pub struct AccountStore {
    /// Map from account id to the canonical account record
    accounts: DashMap<String, Arc<Account>>,
}

impl AccountStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            accounts: DashMap::new(),
        }
    }

    /// Look up an account by id.
    pub fn get(&self, id: &str) -> Option<Arc<Account>> {
        self.accounts.get(id).map(|entry| Arc::clone(entry.value()))
    }

    /// Insert a new account, failing if the id is already taken.
    ///
    /// The entry API makes the check-and-insert atomic: two concurrent
    /// creates with the same id cannot both succeed.
    ///
    /// # Errors
    ///
    /// - `DuplicateAccount` if an account with this id already exists
    pub fn create(&self, account: Account) -> Result<Arc<Account>, LedgerError> {
        match self.accounts.entry(account.id().to_string()) {
            Entry::Occupied(_) => Err(LedgerError::DuplicateAccount {
                id: account.id().to_string(),
            }),
            Entry::Vacant(slot) => {
                let account = Arc::new(account);
                slot.insert(Arc::clone(&account));
                Ok(account)
            }
        }
    }

    /// Snapshot of all accounts, in no particular order.
    pub fn list(&self) -> Vec<Arc<Account>> {
        self.accounts
            .iter()
            .map(|entry| Arc::clone(entry.value()))
            .collect()
    }

    /// Number of accounts currently in the store.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// True if the store holds no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

//! Account entity and API request/response types.
//!
//! This module defines:
//! - `Account`: The ledger entity holding an id and a lock-guarded balance
//! - `CreateAccountRequest`: Request body for creating accounts
//! - `AccountResponse`: Response body returned to clients

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::LedgerError;

/// A ledger account: an immutable id plus a mutable balance.
///
/// # Balance Representation
///
/// The balance is a `rust_decimal::Decimal` — exact decimal arithmetic,
/// never floating point, so repeated transfers cannot accumulate rounding
/// drift.
///
/// # Invariants (enforced by the private field)
///
/// - balance >= 0 at all times, observable from any thread immediately
///   after any withdraw/deposit completes (no torn reads)
/// - All mutations go through `withdraw`/`deposit` or a guard obtained
///   from [`Account::lock`]; there is no other path to the balance
///
/// # Locking
///
/// Each instance owns a single mutex. `withdraw` and `deposit` acquire it
/// for the duration of the read-check-mutate sequence and release it on
/// every exit path, so a failed withdraw never mutates state and never
/// leaves the lock held. Callers that need to mutate two accounts as one
/// atomic unit take both guards via [`Account::lock`]; see the transfer
/// coordinator for the id-ordered acquisition discipline.
#[derive(Debug)]
pub struct Account {
    /// Unique identifier, non-empty, never changes after creation
    id: String,

    /// Timestamp when the account was created
    created_at: DateTime<Utc>,

    /// Current balance; only ever touched while the mutex is held
    balance: Mutex<Decimal>,
}

impl Account {
    /// Create an account with an opening balance.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` if the id is empty or whitespace-only
    /// - `InvalidRequest` if the opening balance is negative
    pub fn new(id: impl Into<String>, opening_balance: Decimal) -> Result<Self, LedgerError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(LedgerError::InvalidRequest(
                "Account id must not be empty".to_string(),
            ));
        }
        if opening_balance < Decimal::ZERO {
            return Err(LedgerError::InvalidRequest(
                "Opening balance must not be negative".to_string(),
            ));
        }
        Ok(Self {
            id,
            created_at: Utc::now(),
            balance: Mutex::new(opening_balance),
        })
    }

    /// Account identifier (read-only).
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Creation timestamp (read-only).
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Snapshot of the current balance, taken under the lock.
    pub fn balance(&self) -> Decimal {
        *self.balance.lock()
    }

    /// Atomically subtract `amount` from the balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` <= 0 (checked before locking)
    /// - `InsufficientFunds` if `amount` exceeds the current balance;
    ///   the balance is left untouched
    pub fn withdraw(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        let mut balance = self.balance.lock();
        if *balance < amount {
            return Err(LedgerError::InsufficientFunds {
                account: self.id.clone(),
            });
        }
        *balance -= amount;
        Ok(())
    }

    /// Atomically add `amount` to the balance.
    ///
    /// # Errors
    ///
    /// - `InvalidAmount` if `amount` <= 0
    pub fn deposit(&self, amount: Decimal) -> Result<(), LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount);
        }
        let mut balance = self.balance.lock();
        *balance += amount;
        Ok(())
    }

    /// Take the balance lock directly.
    ///
    /// For multi-account operations that must hold several locks at once.
    /// Callers locking more than one account must acquire guards in
    /// lexicographic id order; see `LedgerService::transfer`.
    pub(crate) fn lock(&self) -> MutexGuard<'_, Decimal> {
        self.balance.lock()
    }
}

/// Request body for creating a new account.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "101",
///   "initial_balance": "1000"
/// }
/// ```
///
/// # Validation
///
/// - `account_id`: Required, any non-empty string, unique across the store
/// - `initial_balance`: Optional, defaults to 0, must not be negative
#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    /// Identifier for the new account
    pub account_id: String,

    /// Opening balance (defaults to 0 if not provided)
    #[serde(default)]
    pub initial_balance: Decimal,
}

/// Response body for account endpoints.
///
/// # JSON Example
///
/// ```json
/// {
///   "account_id": "101",
///   "balance": "1000",
///   "created_at": "2026-08-26T10:00:00Z"
/// }
/// ```
#[derive(Debug, Serialize)]
pub struct AccountResponse {
    /// Account identifier
    pub account_id: String,

    /// Balance snapshot at response time
    pub balance: Decimal,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

/// Convert an Account into an API AccountResponse.
///
/// Takes a reference because the canonical record stays owned by the store.
impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id().to_string(),
            balance: account.balance(),
            created_at: account.created_at(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn new_rejects_empty_id() {
        let err = Account::new("  ", Decimal::ZERO).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidRequest(_)));
    }

    #[test]
    fn new_rejects_negative_opening_balance() {
        let err = Account::new("101", dec("-1")).unwrap_err();
        assert!(matches!(err, LedgerError::InvalidRequest(_)));
    }

    #[test]
    fn withdraw_and_deposit_update_balance() {
        let account = Account::new("101", dec("1000")).unwrap();
        account.withdraw(dec("300")).unwrap();
        assert_eq!(account.balance(), dec("700"));
        account.deposit(dec("50")).unwrap();
        assert_eq!(account.balance(), dec("750"));
    }

    #[test]
    fn withdraw_rejects_non_positive_amount() {
        let account = Account::new("101", dec("1000")).unwrap();
        assert!(matches!(
            account.withdraw(Decimal::ZERO),
            Err(LedgerError::InvalidAmount)
        ));
        assert!(matches!(
            account.withdraw(dec("-5")),
            Err(LedgerError::InvalidAmount)
        ));
        assert_eq!(account.balance(), dec("1000"));
    }

    #[test]
    fn withdraw_rejects_overdraft_and_leaves_balance_untouched() {
        let account = Account::new("101", dec("100")).unwrap();
        let err = account.withdraw(dec("100.01")).unwrap_err();
        assert!(matches!(err, LedgerError::InsufficientFunds { ref account } if account == "101"));
        assert_eq!(account.balance(), dec("100"));
    }

    #[test]
    fn deposit_rejects_non_positive_amount() {
        let account = Account::new("101", dec("10")).unwrap();
        assert!(matches!(
            account.deposit(Decimal::ZERO),
            Err(LedgerError::InvalidAmount)
        ));
        assert_eq!(account.balance(), dec("10"));
    }

    #[test]
    fn concurrent_deposits_lose_no_updates() {
        let account = Arc::new(Account::new("101", Decimal::ZERO).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let account = Arc::clone(&account);
                thread::spawn(move || {
                    for _ in 0..100 {
                        account.deposit(Decimal::ONE).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(account.balance(), Decimal::from(800));
    }

    #[test]
    fn concurrent_withdrawals_never_go_negative() {
        let account = Arc::new(Account::new("101", Decimal::from(100)).unwrap());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let account = Arc::clone(&account);
                thread::spawn(move || {
                    let mut succeeded = 0u32;
                    for _ in 0..100 {
                        if account.withdraw(Decimal::ONE).is_ok() {
                            succeeded += 1;
                        }
                    }
                    succeeded
                })
            })
            .collect();
        let total: u32 = handles.into_iter().map(|h| h.join().unwrap()).sum();
        // Exactly 100 withdrawals can succeed, the rest must fail cleanly.
        assert_eq!(total, 100);
        assert_eq!(account.balance(), Decimal::ZERO);
    }
}

use super::account::{Account, Kind};
use super::AccountKey;

use std::collections::{hash_map::Entry, HashMap};

/// Build the key an account is registered under: the trimmed username,
/// followed by a suffix depending on the kind of account.
///
/// A username can therefore hold one checking and one savings account.
pub fn account_key(username: &str, kind: Kind) -> AccountKey {
    format!("{}{}", username.trim(), kind.key_suffix())
}

/// The bank: every account, by key.
///
/// The ledger owns its accounts. Callers only ever borrow them, and accounts
/// are never removed.
#[derive(Debug, Default)]
pub struct Ledger {
    accounts: HashMap<AccountKey, Account>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new, empty account under `key`.
    ///
    /// Returns false, and leaves the existing account untouched, if the key
    /// is already taken.
    pub fn create_account(&mut self, kind: Kind, key: &str) -> bool {
        match self.accounts.entry(key.to_string()) {
            Entry::Occupied(_) => {
                tracing::info!(key, %kind, "account already exists");
                false
            }
            Entry::Vacant(entry) => {
                entry.insert(Account::new(kind));
                tracing::debug!(key, %kind, "account created");
                true
            }
        }
    }

    pub fn get_account(&self, key: &str) -> Option<&Account> {
        let account = self.accounts.get(key);
        if account.is_none() {
            tracing::info!(key, "account not found");
        }

        account
    }

    pub fn get_account_mut(&mut self, key: &str) -> Option<&mut Account> {
        let account = self.accounts.get_mut(key);
        if account.is_none() {
            tracing::info!(key, "account not found");
        }

        account
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The signed-in user and their ledger, bound to a persistence store.
//!
//! Every ledger mutation made through [`Session`] is followed by a full
//! rewrite of the user's snapshot, so the store always mirrors memory.

use crate::error::{LedgerError, Result};
use crate::ledger::Ledger;
use crate::models::{Transaction, TransactionInput, User, GMAIL_SUFFIX};
use crate::store::{transactions_key, KeyValueStore, CURRENT_USER_KEY};
use chrono::Utc;

#[derive(Debug)]
struct Active {
    user: User,
    ledger: Ledger,
}

#[derive(Debug)]
pub struct Session<S: KeyValueStore> {
    store: S,
    active: Option<Active>,
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() || !email.contains(GMAIL_SUFFIX) {
        return Err(LedgerError::InvalidEmail(email.to_string()));
    }
    Ok(())
}

impl<S: KeyValueStore> Session<S> {
    /// Opens a session over `store`, resuming a persisted sign-in if present.
    ///
    /// An unreadable sign-in record or snapshot leaves the session signed
    /// out. Nothing is rewritten, so the stored data stays as found.
    pub fn open(store: S) -> Result<Self> {
        let mut session = Self {
            store,
            active: None,
        };
        match session.resume() {
            Ok(active) => session.active = active,
            Err(LedgerError::Serialization(err)) => {
                tracing::warn!(error = %err, "could not resume session; starting signed out");
            }
            Err(err) => return Err(err),
        }
        Ok(session)
    }

    pub fn sign_in(&mut self, email: &str) -> Result<&User> {
        validate_email(email)?;
        let user = User {
            email: email.to_string(),
            login_date: Utc::now(),
        };
        let ledger = self.load_ledger(email)?;
        self.store
            .set(CURRENT_USER_KEY, &serde_json::to_string(&user)?)?;
        tracing::info!(email = %user.email, records = ledger.len(), "signed in");
        let active = self.active.insert(Active { user, ledger });
        Ok(&active.user)
    }

    /// Ends the session. The user's stored transactions are kept.
    pub fn sign_out(&mut self) -> Result<Option<User>> {
        self.store.remove(CURRENT_USER_KEY)?;
        let previous = self.active.take().map(|a| a.user);
        if let Some(user) = &previous {
            tracing::info!(email = %user.email, "signed out");
        }
        Ok(previous)
    }

    pub fn current_user(&self) -> Option<&User> {
        self.active.as_ref().map(|a| &a.user)
    }

    pub fn ledger(&self) -> Result<&Ledger> {
        self.active
            .as_ref()
            .map(|a| &a.ledger)
            .ok_or(LedgerError::NotSignedIn)
    }

    pub fn transactions(&self) -> Result<&[Transaction]> {
        Ok(self.ledger()?.all())
    }

    pub fn add(&mut self, input: TransactionInput) -> Result<Vec<Transaction>> {
        let active = self.active.as_mut().ok_or(LedgerError::NotSignedIn)?;
        let added = active.ledger.add(input)?.to_vec();
        tracing::info!(email = %active.user.email, records = added.len(), "added transactions");
        self.persist()?;
        Ok(added)
    }

    pub fn remove(&mut self, id: i64) -> Result<Option<Transaction>> {
        let active = self.active.as_mut().ok_or(LedgerError::NotSignedIn)?;
        let removed = active.ledger.remove(id);
        match &removed {
            Some(_) => {
                tracing::info!(email = %active.user.email, id, "removed transaction");
                self.persist()?;
            }
            None => tracing::debug!(id, "no transaction to remove"),
        }
        Ok(removed)
    }

    /// Drops every record and erases the stored snapshot.
    ///
    /// Callers confirm with the user before getting here.
    pub fn clear(&mut self) -> Result<usize> {
        let active = self.active.as_mut().ok_or(LedgerError::NotSignedIn)?;
        let count = active.ledger.len();
        active.ledger.clear();
        let key = transactions_key(&active.user.email);
        tracing::info!(email = %active.user.email, records = count, "cleared ledger");
        self.store.remove(&key)?;
        Ok(count)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn resume(&self) -> Result<Option<Active>> {
        let Some(raw) = self.store.get(CURRENT_USER_KEY)? else {
            return Ok(None);
        };
        let user: User = serde_json::from_str(&raw)?;
        let ledger = self.load_ledger(&user.email)?;
        tracing::debug!(email = %user.email, records = ledger.len(), "resumed session");
        Ok(Some(Active { user, ledger }))
    }

    fn load_ledger(&self, email: &str) -> Result<Ledger> {
        let key = transactions_key(email);
        let ledger = match self.store.get(&key)? {
            Some(raw) => Ledger::from_transactions(serde_json::from_str(&raw)?),
            None => Ledger::new(),
        };
        tracing::debug!(key = %key, records = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    fn persist(&mut self) -> Result<()> {
        let active = self.active.as_ref().ok_or(LedgerError::NotSignedIn)?;
        let key = transactions_key(&active.user.email);
        let raw = serde_json::to_string(active.ledger.all())?;
        self.store.set(&key, &raw)?;
        tracing::debug!(key = %key, records = active.ledger.len(), "saved ledger");
        Ok(())
    }
}

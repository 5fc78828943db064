//! Positional account list assembly.
//!
//! Callers name their accounts; [`build_accounts`] places them into the
//! kind's fixed slot order with the slot's flags and injects the well-known
//! program accounts.

use std::collections::BTreeMap;

use solana_sdk::{instruction::AccountMeta, pubkey::Pubkey};
use tracing::trace;

use crate::error::SdkError;
use crate::schema::{InstructionKind, SlotSource};

/// Caller-supplied accounts keyed by slot name.
///
/// Only addresses are stored: writable and signer flags always come from the
/// slot schema.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamedAccounts(BTreeMap<String, Pubkey>);

impl NamedAccounts {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an account, replacing any previous address for the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, address: Pubkey) -> Self {
        self.insert(name, address);
        self
    }

    /// Inserts an account, returning the previous address.
    pub fn insert(&mut self, name: impl Into<String>, address: Pubkey) -> Option<Pubkey> {
        self.0.insert(name.into(), address)
    }

    /// Inserts an account given as base58 text.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::InvalidAddress` if `address` is not base58 or does
    /// not decode to 32 bytes.
    pub fn insert_base58(
        &mut self,
        name: impl Into<String>,
        address: &str,
    ) -> Result<Option<Pubkey>, SdkError> {
        let bytes = bs58::decode(address)
            .into_vec()
            .map_err(|e| SdkError::InvalidAddress(format!("{address}: {e}")))?;
        let bytes: [u8; 32] = bytes.as_slice().try_into().map_err(|_| {
            SdkError::InvalidAddress(format!("{address}: expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(self.insert(name, Pubkey::new_from_array(bytes)))
    }

    /// Returns the address for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Pubkey> {
        self.0.get(name)
    }

    /// Returns the number of accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no accounts are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over slot names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Builds the positional account list for `kind`.
///
/// # Errors
///
/// Returns `SdkError::SchemaMismatch` if `named` contains a name that is not
/// a caller slot of `kind`, and `SdkError::MissingAccount` for the first
/// caller slot that is not supplied.
pub fn build_accounts(
    kind: InstructionKind,
    named: &NamedAccounts,
) -> Result<Vec<AccountMeta>, SdkError> {
    let slots = kind.account_slots();

    if let Some(extra) = named.names().find(|name| {
        !slots
            .iter()
            .any(|s| s.is_caller_supplied() && s.name == *name)
    }) {
        return Err(SdkError::SchemaMismatch {
            kind: kind.name(),
            detail: format!("unexpected account `{extra}`"),
        });
    }

    let mut accounts = Vec::with_capacity(slots.len());
    for (index, slot) in slots.iter().enumerate() {
        let address = match slot.source {
            SlotSource::Fixed(address) => address,
            SlotSource::Caller => {
                *named.get(slot.name).ok_or(SdkError::MissingAccount {
                    kind: kind.name(),
                    slot: slot.name,
                })?
            }
        };

        trace!(
            kind = kind.name(),
            index,
            slot = slot.name,
            %address,
            writable = slot.is_writable,
            signer = slot.is_signer,
            "account slot"
        );

        let meta = if slot.is_writable {
            AccountMeta::new(address, slot.is_signer)
        } else {
            AccountMeta::new_readonly(address, slot.is_signer)
        };
        accounts.push(meta);
    }

    Ok(accounts)
}

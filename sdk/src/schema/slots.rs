//! Account slot layouts.
//!
//! The program indexes accounts by position, so the order of these tables
//! and the flags on each slot are the contract. Flags come from the slot,
//! never from the caller.

use solana_sdk::pubkey::Pubkey;

use crate::addresses::{RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};

/// Where a slot's address comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotSource {
    /// Supplied by the caller under the slot's name.
    Caller,
    /// Injected from the well-known address registry.
    Fixed(Pubkey),
}

/// A positional account slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountSlot {
    /// Slot name.
    pub name: &'static str,
    /// Whether the program writes to the account.
    pub is_writable: bool,
    /// Whether the account must sign the transaction.
    pub is_signer: bool,
    /// Address source.
    pub source: SlotSource,
}

impl AccountSlot {
    const fn caller(name: &'static str, is_writable: bool, is_signer: bool) -> Self {
        Self {
            name,
            is_writable,
            is_signer,
            source: SlotSource::Caller,
        }
    }

    const fn fixed(name: &'static str, address: Pubkey) -> Self {
        Self {
            name,
            is_writable: false,
            is_signer: false,
            source: SlotSource::Fixed(address),
        }
    }

    /// Returns true if the caller must supply this slot.
    #[must_use]
    pub const fn is_caller_supplied(&self) -> bool {
        matches!(self.source, SlotSource::Caller)
    }
}

/// Sell accounts, in program order.
pub const SELL_ACCOUNTS: &[AccountSlot] = &[
    AccountSlot::caller("wallet", false, false),
    AccountSlot::caller("token_account", true, false),
    AccountSlot::caller("metadata", false, false),
    AccountSlot::caller("authority", false, false),
    AccountSlot::caller("auction_house", false, false),
    AccountSlot::caller("auction_house_fee_account", true, false),
    AccountSlot::caller("seller_trade_state", true, false),
    AccountSlot::caller("free_seller_trade_state", true, false),
    AccountSlot::fixed("token_program", TOKEN_PROGRAM_ID),
    AccountSlot::fixed("system_program", SYSTEM_PROGRAM_ID),
    AccountSlot::caller("program_as_signer", false, false),
    AccountSlot::fixed("rent", RENT_SYSVAR_ID),
];

/// PublicBuy accounts, in program order.
pub const PUBLIC_BUY_ACCOUNTS: &[AccountSlot] = &[
    AccountSlot::caller("wallet", false, true),
    AccountSlot::caller("payment_account", true, false),
    AccountSlot::caller("transfer_authority", false, false),
    AccountSlot::caller("treasury_mint", false, false),
    AccountSlot::caller("token_account", false, false),
    AccountSlot::caller("metadata", false, false),
    AccountSlot::caller("escrow_payment_account", true, false),
    AccountSlot::caller("authority", false, false),
    AccountSlot::caller("auction_house", false, false),
    AccountSlot::caller("auction_house_fee_account", true, false),
    AccountSlot::caller("buyer_trade_state", true, false),
    AccountSlot::fixed("token_program", TOKEN_PROGRAM_ID),
    AccountSlot::fixed("system_program", SYSTEM_PROGRAM_ID),
    AccountSlot::fixed("rent", RENT_SYSVAR_ID),
];

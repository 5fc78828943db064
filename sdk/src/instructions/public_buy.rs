//! PublicBuy instruction builder.
//!
//! Builds the instruction that places a public bid. The wallet signs; the
//! escrow payment account is funded from `payment_account`.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::accounts::{build_accounts, NamedAccounts};
use crate::codec::InstructionArgs;
use crate::error::SdkError;
use crate::schema::InstructionKind;

use super::{assemble, require};

/// Arguments for the PublicBuy instruction, in wire order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct PublicBuyArgs {
    /// Bump seed of the buyer trade state.
    pub trade_state_bump: u8,
    /// Bump seed of the escrow payment account.
    pub escrow_payment_bump: u8,
    /// Bid price in treasury mint base units.
    pub buyer_price: u64,
    /// Number of tokens bid for.
    pub token_size: u64,
}

impl InstructionArgs for PublicBuyArgs {
    const KIND: InstructionKind = InstructionKind::PublicBuy;
}

/// Accounts for the PublicBuy instruction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicBuyAccounts {
    /// Buyer wallet. Signs the transaction.
    pub wallet: Pubkey,
    /// Account paying into escrow.
    pub payment_account: Pubkey,
    /// Transfer authority over `payment_account`.
    pub transfer_authority: Pubkey,
    /// Auction house treasury mint.
    pub treasury_mint: Pubkey,
    /// Token account holding the bid-on token.
    pub token_account: Pubkey,
    /// Metadata of the bid-on mint.
    pub metadata: Pubkey,
    /// Buyer escrow payment account.
    pub escrow_payment_account: Pubkey,
    /// Auction house authority.
    pub authority: Pubkey,
    /// Auction house.
    pub auction_house: Pubkey,
    /// Auction house fee account.
    pub auction_house_fee_account: Pubkey,
    /// Buyer trade state.
    pub buyer_trade_state: Pubkey,
}

impl From<&PublicBuyAccounts> for NamedAccounts {
    fn from(accounts: &PublicBuyAccounts) -> Self {
        NamedAccounts::new()
            .with("wallet", accounts.wallet)
            .with("payment_account", accounts.payment_account)
            .with("transfer_authority", accounts.transfer_authority)
            .with("treasury_mint", accounts.treasury_mint)
            .with("token_account", accounts.token_account)
            .with("metadata", accounts.metadata)
            .with("escrow_payment_account", accounts.escrow_payment_account)
            .with("authority", accounts.authority)
            .with("auction_house", accounts.auction_house)
            .with("auction_house_fee_account", accounts.auction_house_fee_account)
            .with("buyer_trade_state", accounts.buyer_trade_state)
    }
}

/// Creates a PublicBuy instruction.
///
/// # Errors
///
/// Returns `SdkError::Serialization` if the arguments fail to encode.
pub fn create_public_buy_instruction(
    accounts: &PublicBuyAccounts,
    args: &PublicBuyArgs,
) -> Result<Instruction, SdkError> {
    let accounts = build_accounts(InstructionKind::PublicBuy, &NamedAccounts::from(accounts))?;
    let data = args.encode()?;
    Ok(assemble(InstructionKind::PublicBuy, accounts, data))
}

/// Builder for the PublicBuy instruction.
#[derive(Debug, Clone, Default)]
pub struct PublicBuyBuilder {
    accounts: NamedAccounts,
    trade_state_bump: Option<u8>,
    escrow_payment_bump: Option<u8>,
    buyer_price: Option<u64>,
    token_size: Option<u64>,
}

impl PublicBuyBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the buyer wallet.
    #[must_use]
    pub fn wallet(mut self, wallet: Pubkey) -> Self {
        self.accounts.insert("wallet", wallet);
        self
    }

    /// Sets the payment account.
    #[must_use]
    pub fn payment_account(mut self, account: Pubkey) -> Self {
        self.accounts.insert("payment_account", account);
        self
    }

    /// Sets the transfer authority.
    #[must_use]
    pub fn transfer_authority(mut self, authority: Pubkey) -> Self {
        self.accounts.insert("transfer_authority", authority);
        self
    }

    /// Sets the treasury mint.
    #[must_use]
    pub fn treasury_mint(mut self, mint: Pubkey) -> Self {
        self.accounts.insert("treasury_mint", mint);
        self
    }

    /// Sets the token account.
    #[must_use]
    pub fn token_account(mut self, account: Pubkey) -> Self {
        self.accounts.insert("token_account", account);
        self
    }

    /// Sets the metadata account.
    #[must_use]
    pub fn metadata(mut self, metadata: Pubkey) -> Self {
        self.accounts.insert("metadata", metadata);
        self
    }

    /// Sets the escrow payment account.
    #[must_use]
    pub fn escrow_payment_account(mut self, account: Pubkey) -> Self {
        self.accounts.insert("escrow_payment_account", account);
        self
    }

    /// Sets the auction house authority.
    #[must_use]
    pub fn authority(mut self, authority: Pubkey) -> Self {
        self.accounts.insert("authority", authority);
        self
    }

    /// Sets the auction house.
    #[must_use]
    pub fn auction_house(mut self, auction_house: Pubkey) -> Self {
        self.accounts.insert("auction_house", auction_house);
        self
    }

    /// Sets the auction house fee account.
    #[must_use]
    pub fn auction_house_fee_account(mut self, account: Pubkey) -> Self {
        self.accounts.insert("auction_house_fee_account", account);
        self
    }

    /// Sets the buyer trade state.
    #[must_use]
    pub fn buyer_trade_state(mut self, trade_state: Pubkey) -> Self {
        self.accounts.insert("buyer_trade_state", trade_state);
        self
    }

    /// Sets the buyer trade state bump.
    #[must_use]
    pub fn trade_state_bump(mut self, bump: u8) -> Self {
        self.trade_state_bump = Some(bump);
        self
    }

    /// Sets the escrow payment bump.
    #[must_use]
    pub fn escrow_payment_bump(mut self, bump: u8) -> Self {
        self.escrow_payment_bump = Some(bump);
        self
    }

    /// Sets the price.
    #[must_use]
    pub fn buyer_price(mut self, price: u64) -> Self {
        self.buyer_price = Some(price);
        self
    }

    /// Sets the token size.
    #[must_use]
    pub fn token_size(mut self, size: u64) -> Self {
        self.token_size = Some(size);
        self
    }

    /// Builds the instruction.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::MissingAccount` if an account is not set and
    /// `SdkError::SchemaMismatch` if an argument is not set.
    pub fn build(self) -> Result<Instruction, SdkError> {
        const KIND: InstructionKind = InstructionKind::PublicBuy;

        let accounts = build_accounts(KIND, &self.accounts)?;
        let args = PublicBuyArgs {
            trade_state_bump: require(self.trade_state_bump, KIND, "trade_state_bump")?,
            escrow_payment_bump: require(self.escrow_payment_bump, KIND, "escrow_payment_bump")?,
            buyer_price: require(self.buyer_price, KIND, "buyer_price")?,
            token_size: require(self.token_size, KIND, "token_size")?,
        };

        Ok(assemble(KIND, accounts, args.encode()?))
    }
}

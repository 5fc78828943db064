//! Auction House SDK - instruction builders for the Auction House
//! marketplace program.
//!
//! The program reads instruction data by byte offset and accounts by
//! position, so this crate treats both as fixed schemas per instruction kind.
//!
//! # Modules
//!
//! - [`schema`] — Discriminators, argument layouts and account slot layouts
//! - [`codec`] — Instruction data encoding and decoding
//! - [`accounts`] — Positional account list assembly
//! - [`instructions`] — Instruction assembly and typed per-kind builders
//! - [`addresses`] — Well-known program and sysvar addresses
//!
//! # Example
//!
//! ```rust
//! use auction_house_sdk::{create_public_buy_instruction, PublicBuyAccounts, PublicBuyArgs};
//! use solana_sdk::pubkey::Pubkey;
//!
//! let accounts = PublicBuyAccounts {
//!     wallet: Pubkey::new_unique(),
//!     payment_account: Pubkey::new_unique(),
//!     transfer_authority: Pubkey::new_unique(),
//!     treasury_mint: Pubkey::new_unique(),
//!     token_account: Pubkey::new_unique(),
//!     metadata: Pubkey::new_unique(),
//!     escrow_payment_account: Pubkey::new_unique(),
//!     authority: Pubkey::new_unique(),
//!     auction_house: Pubkey::new_unique(),
//!     auction_house_fee_account: Pubkey::new_unique(),
//!     buyer_trade_state: Pubkey::new_unique(),
//! };
//! let args = PublicBuyArgs {
//!     trade_state_bump: 255,
//!     escrow_payment_bump: 254,
//!     buyer_price: 1_000_000,
//!     token_size: 1,
//! };
//!
//! let ix = create_public_buy_instruction(&accounts, &args)?;
//! assert_eq!(ix.accounts.len(), 14);
//! assert_eq!(ix.data.len(), 26);
//! # Ok::<(), auction_house_sdk::SdkError>(())
//! ```

pub mod accounts;
pub mod addresses;
pub mod codec;
pub mod error;
pub mod instructions;
pub mod schema;

pub use accounts::{build_accounts, NamedAccounts};
pub use addresses::{AUCTION_HOUSE_PROGRAM_ID, RENT_SYSVAR_ID, SYSTEM_PROGRAM_ID, TOKEN_PROGRAM_ID};
pub use codec::{ArgValues, InstructionArgs};
pub use error::SdkError;
pub use instructions::{
    build_instruction, create_public_buy_instruction, create_sell_instruction,
    decode_instruction, PublicBuyAccounts, PublicBuyArgs, PublicBuyBuilder, SellAccounts,
    SellArgs, SellBuilder,
};
pub use schema::{AccountSlot, FieldSchema, FieldWidth, InstructionKind, SlotSource};

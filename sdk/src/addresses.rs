//! Well-known addresses referenced by Auction House instructions.
//!
//! Slot schemas refer to these constants by name; a redeployment only needs
//! an edit here.

use solana_sdk::pubkey::Pubkey;

/// Auction House program ID. Every instruction built by this crate targets it.
pub const AUCTION_HOUSE_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("hausS13jsjafwWwGqZTUQRmWyvyxn9EQpqMwV1PBBmk");

/// SPL Token program ID.
pub const TOKEN_PROGRAM_ID: Pubkey =
    solana_sdk::pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

/// System program ID.
pub const SYSTEM_PROGRAM_ID: Pubkey = solana_sdk::pubkey!("11111111111111111111111111111111");

/// Rent sysvar.
pub const RENT_SYSVAR_ID: Pubkey =
    solana_sdk::pubkey!("SysvarRent111111111111111111111111111111111");

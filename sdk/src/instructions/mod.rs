//! Instruction builders for Auction House transactions.
//!
//! Every instruction targets [`AUCTION_HOUSE_PROGRAM_ID`]; the program id is
//! not a parameter. Typed builders live in the per-kind modules; the
//! name-keyed path is [`build_instruction`].
//!
//! # Example
//!
//! ```rust,ignore
//! use auction_house_sdk::instructions::SellBuilder;
//! use solana_sdk::pubkey::Pubkey;
//!
//! let ix = SellBuilder::new()
//!     .wallet(wallet)
//!     .token_account(token_account)
//!     .metadata(metadata)
//!     .authority(authority)
//!     .auction_house(auction_house)
//!     .auction_house_fee_account(fee_account)
//!     .seller_trade_state(seller_trade_state)
//!     .free_seller_trade_state(free_seller_trade_state)
//!     .program_as_signer(program_as_signer)
//!     .trade_state_bump(254)
//!     .free_trade_state_bump(253)
//!     .program_as_signer_bump(255)
//!     .buyer_price(1_000_000)
//!     .token_size(1)
//!     .build()?;
//! ```

pub mod public_buy;
pub mod sell;

pub use public_buy::{
    create_public_buy_instruction, PublicBuyAccounts, PublicBuyArgs, PublicBuyBuilder,
};
pub use sell::{create_sell_instruction, SellAccounts, SellArgs, SellBuilder};

use solana_sdk::instruction::{AccountMeta, Instruction};
use tracing::debug;

use crate::accounts::{build_accounts, NamedAccounts};
use crate::addresses::AUCTION_HOUSE_PROGRAM_ID;
use crate::codec::{self, ArgValues};
use crate::error::SdkError;
use crate::schema::InstructionKind;

/// Combines an account list and instruction data into an Auction House
/// instruction.
#[must_use]
pub fn build(accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    Instruction {
        program_id: AUCTION_HOUSE_PROGRAM_ID,
        accounts,
        data,
    }
}

/// Builds an instruction of `kind` from named accounts and argument values.
///
/// Accounts are resolved before arguments are encoded; nothing is returned
/// unless both succeed.
///
/// # Errors
///
/// Returns `SdkError::MissingAccount` or `SdkError::SchemaMismatch` for
/// accounts that do not fit the slot schema, and `SdkError::SchemaMismatch` or
/// `SdkError::EncodingRange` for arguments that do not fit the field schema.
pub fn build_instruction(
    kind: InstructionKind,
    named: &NamedAccounts,
    args: &ArgValues,
) -> Result<Instruction, SdkError> {
    let accounts = build_accounts(kind, named)?;
    let data = codec::serialize(kind, args)?;
    Ok(assemble(kind, accounts, data))
}

/// Identifies and decodes an Auction House instruction.
///
/// # Errors
///
/// Returns `SdkError::Deserialization` if the instruction targets another
/// program, carries an unknown discriminator, or has malformed data.
pub fn decode_instruction(ix: &Instruction) -> Result<(InstructionKind, ArgValues), SdkError> {
    if ix.program_id != AUCTION_HOUSE_PROGRAM_ID {
        return Err(SdkError::Deserialization(format!(
            "instruction targets {}, not the auction house program",
            ix.program_id
        )));
    }

    let kind = InstructionKind::from_discriminator(&ix.data)
        .ok_or_else(|| SdkError::Deserialization("unknown instruction discriminator".to_string()))?;
    let args = codec::deserialize(kind, &ix.data)?;
    Ok((kind, args))
}

fn assemble(kind: InstructionKind, accounts: Vec<AccountMeta>, data: Vec<u8>) -> Instruction {
    debug!(
        kind = kind.name(),
        accounts = accounts.len(),
        data_len = data.len(),
        "built instruction"
    );
    build(accounts, data)
}

/// Unwraps a builder field or reports it as missing from `kind`'s args.
fn require<T>(value: Option<T>, kind: InstructionKind, field: &str) -> Result<T, SdkError> {
    value.ok_or_else(|| SdkError::SchemaMismatch {
        kind: kind.name(),
        detail: format!("missing field `{field}`"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_sdk::pubkey::Pubkey;

    fn named_for(kind: InstructionKind) -> NamedAccounts {
        kind.account_slots()
            .iter()
            .filter(|s| s.is_caller_supplied())
            .fold(NamedAccounts::new(), |acc, s| {
                acc.with(s.name, Pubkey::new_unique())
            })
    }

    fn public_buy_args() -> ArgValues {
        ArgValues::new()
            .with("trade_state_bump", 0u8)
            .with("escrow_payment_bump", 0u8)
            .with("buyer_price", 0u64)
            .with("token_size", 0u64)
    }

    #[test]
    fn test_build_uses_fixed_program_id() {
        let ix = build(Vec::new(), Vec::new());
        assert_eq!(ix.program_id, AUCTION_HOUSE_PROGRAM_ID);
        assert!(ix.accounts.is_empty());
        assert!(ix.data.is_empty());
    }

    #[test]
    fn test_build_instruction_public_buy() {
        let named = named_for(InstructionKind::PublicBuy);
        let ix = build_instruction(InstructionKind::PublicBuy, &named, &public_buy_args())
            .expect("should build instruction");

        assert_eq!(ix.program_id, AUCTION_HOUSE_PROGRAM_ID);
        assert_eq!(ix.accounts.len(), 14);
        assert_eq!(ix.data.len(), 26);
        assert!(ix.accounts[0].is_signer);
    }

    #[test]
    fn test_build_instruction_is_structural() {
        let named = named_for(InstructionKind::PublicBuy);
        let a = build_instruction(InstructionKind::PublicBuy, &named, &public_buy_args())
            .expect("should build instruction");
        let b = build_instruction(InstructionKind::PublicBuy, &named, &public_buy_args())
            .expect("should build instruction");
        assert_eq!(a, b);
    }

    #[test]
    fn test_build_instruction_missing_account() {
        let result = build_instruction(
            InstructionKind::PublicBuy,
            &NamedAccounts::new(),
            &public_buy_args(),
        );
        assert!(matches!(result, Err(SdkError::MissingAccount { .. })));
    }

    #[test]
    fn test_build_instruction_bad_args() {
        let named = named_for(InstructionKind::PublicBuy);
        let args = public_buy_args().with("escrow_payment_bump", 300u16);
        let result = build_instruction(InstructionKind::PublicBuy, &named, &args);
        assert!(matches!(result, Err(SdkError::EncodingRange { .. })));
    }

    #[test]
    fn test_decode_instruction() {
        let named = named_for(InstructionKind::PublicBuy);
        let args = public_buy_args().with("buyer_price", 5u64);
        let ix = build_instruction(InstructionKind::PublicBuy, &named, &args)
            .expect("should build instruction");

        let (kind, decoded) = decode_instruction(&ix).expect("should decode");
        assert_eq!(kind, InstructionKind::PublicBuy);
        assert_eq!(decoded, args);
    }

    #[test]
    fn test_decode_instruction_foreign_program() {
        let mut ix = build(Vec::new(), vec![0u8; 26]);
        ix.program_id = Pubkey::new_unique();
        assert!(matches!(
            decode_instruction(&ix),
            Err(SdkError::Deserialization(_))
        ));
    }

    #[test]
    fn test_decode_instruction_unknown_discriminator() {
        let ix = build(Vec::new(), vec![0u8; 26]);
        assert!(matches!(
            decode_instruction(&ix),
            Err(SdkError::Deserialization(_))
        ));
    }
}

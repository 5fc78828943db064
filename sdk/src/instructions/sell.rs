//! Sell instruction builder.
//!
//! Builds the instruction that lists a token for sale at `buyer_price`.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

use crate::accounts::{build_accounts, NamedAccounts};
use crate::codec::InstructionArgs;
use crate::error::SdkError;
use crate::schema::InstructionKind;

use super::{assemble, require};

/// Arguments for the Sell instruction, in wire order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, BorshSerialize, BorshDeserialize, Serialize, Deserialize,
)]
#[serde(deny_unknown_fields)]
pub struct SellArgs {
    /// Bump seed of the seller trade state.
    pub trade_state_bump: u8,
    /// Bump seed of the free seller trade state.
    pub free_trade_state_bump: u8,
    /// Bump seed of the program-as-signer address.
    pub program_as_signer_bump: u8,
    /// Asking price in treasury mint base units.
    pub buyer_price: u64,
    /// Number of tokens offered.
    pub token_size: u64,
}

impl InstructionArgs for SellArgs {
    const KIND: InstructionKind = InstructionKind::Sell;
}

/// Accounts for the Sell instruction.
///
/// The token, system and rent accounts are injected by the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SellAccounts {
    /// Seller wallet. Not a signer for this instruction.
    pub wallet: Pubkey,
    /// Seller's token account holding the listed token.
    pub token_account: Pubkey,
    /// Metadata of the listed mint.
    pub metadata: Pubkey,
    /// Auction house authority.
    pub authority: Pubkey,
    /// Auction house.
    pub auction_house: Pubkey,
    /// Auction house fee account.
    pub auction_house_fee_account: Pubkey,
    /// Seller trade state.
    pub seller_trade_state: Pubkey,
    /// Free seller trade state.
    pub free_seller_trade_state: Pubkey,
    /// Program-as-signer address.
    pub program_as_signer: Pubkey,
}

impl From<&SellAccounts> for NamedAccounts {
    fn from(accounts: &SellAccounts) -> Self {
        NamedAccounts::new()
            .with("wallet", accounts.wallet)
            .with("token_account", accounts.token_account)
            .with("metadata", accounts.metadata)
            .with("authority", accounts.authority)
            .with("auction_house", accounts.auction_house)
            .with("auction_house_fee_account", accounts.auction_house_fee_account)
            .with("seller_trade_state", accounts.seller_trade_state)
            .with("free_seller_trade_state", accounts.free_seller_trade_state)
            .with("program_as_signer", accounts.program_as_signer)
    }
}

/// Creates a Sell instruction.
///
/// # Errors
///
/// Returns `SdkError::Serialization` if the arguments fail to encode.
pub fn create_sell_instruction(
    accounts: &SellAccounts,
    args: &SellArgs,
) -> Result<Instruction, SdkError> {
    let accounts = build_accounts(InstructionKind::Sell, &NamedAccounts::from(accounts))?;
    let data = args.encode()?;
    Ok(assemble(InstructionKind::Sell, accounts, data))
}

/// Builder for the Sell instruction.
#[derive(Debug, Clone, Default)]
pub struct SellBuilder {
    accounts: NamedAccounts,
    trade_state_bump: Option<u8>,
    free_trade_state_bump: Option<u8>,
    program_as_signer_bump: Option<u8>,
    buyer_price: Option<u64>,
    token_size: Option<u64>,
}

impl SellBuilder {
    /// Creates a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seller wallet.
    #[must_use]
    pub fn wallet(mut self, wallet: Pubkey) -> Self {
        self.accounts.insert("wallet", wallet);
        self
    }

    /// Sets the seller's token account.
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

    /// Sets the seller trade state.
    #[must_use]
    pub fn seller_trade_state(mut self, trade_state: Pubkey) -> Self {
        self.accounts.insert("seller_trade_state", trade_state);
        self
    }

    /// Sets the free seller trade state.
    #[must_use]
    pub fn free_seller_trade_state(mut self, trade_state: Pubkey) -> Self {
        self.accounts.insert("free_seller_trade_state", trade_state);
        self
    }

    /// Sets the program-as-signer address.
    #[must_use]
    pub fn program_as_signer(mut self, address: Pubkey) -> Self {
        self.accounts.insert("program_as_signer", address);
        self
    }

    /// Sets the seller trade state bump.
    #[must_use]
    pub fn trade_state_bump(mut self, bump: u8) -> Self {
        self.trade_state_bump = Some(bump);
        self
    }

    /// Sets the free seller trade state bump.
    #[must_use]
    pub fn free_trade_state_bump(mut self, bump: u8) -> Self {
        self.free_trade_state_bump = Some(bump);
        self
    }

    /// Sets the program-as-signer bump.
    #[must_use]
    pub fn program_as_signer_bump(mut self, bump: u8) -> Self {
        self.program_as_signer_bump = Some(bump);
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
        const KIND: InstructionKind = InstructionKind::Sell;

        let accounts = build_accounts(KIND, &self.accounts)?;
        let args = SellArgs {
            trade_state_bump: require(self.trade_state_bump, KIND, "trade_state_bump")?,
            free_trade_state_bump: require(
                self.free_trade_state_bump,
                KIND,
                "free_trade_state_bump",
            )?,
            program_as_signer_bump: require(
                self.program_as_signer_bump,
                KIND,
                "program_as_signer_bump",
            )?,
            buyer_price: require(self.buyer_price, KIND, "buyer_price")?,
            token_size: require(self.token_size, KIND, "token_size")?,
        };

        Ok(assemble(KIND, accounts, args.encode()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::addresses::{AUCTION_HOUSE_PROGRAM_ID, RENT_SYSVAR_ID, TOKEN_PROGRAM_ID};
    use crate::codec::{self, ArgValues};
    use crate::schema::SELL_DISCRIMINATOR;

    fn test_accounts() -> SellAccounts {
        SellAccounts {
            wallet: Pubkey::new_unique(),
            token_account: Pubkey::new_unique(),
            metadata: Pubkey::new_unique(),
            authority: Pubkey::new_unique(),
            auction_house: Pubkey::new_unique(),
            auction_house_fee_account: Pubkey::new_unique(),
            seller_trade_state: Pubkey::new_unique(),
            free_seller_trade_state: Pubkey::new_unique(),
            program_as_signer: Pubkey::new_unique(),
        }
    }

    fn test_args() -> SellArgs {
        SellArgs {
            trade_state_bump: 1,
            free_trade_state_bump: 2,
            program_as_signer_bump: 3,
            buyer_price: 1_000_000,
            token_size: 1,
        }
    }

    fn full_builder(accounts: &SellAccounts) -> SellBuilder {
        SellBuilder::new()
            .wallet(accounts.wallet)
            .token_account(accounts.token_account)
            .metadata(accounts.metadata)
            .authority(accounts.authority)
            .auction_house(accounts.auction_house)
            .auction_house_fee_account(accounts.auction_house_fee_account)
            .seller_trade_state(accounts.seller_trade_state)
            .free_seller_trade_state(accounts.free_seller_trade_state)
            .program_as_signer(accounts.program_as_signer)
            .trade_state_bump(1)
            .free_trade_state_bump(2)
            .program_as_signer_bump(3)
            .buyer_price(1_000_000)
            .token_size(1)
    }

    #[test]
    fn test_create_sell_instruction_data() {
        let ix = create_sell_instruction(&test_accounts(), &test_args())
            .expect("should build instruction");

        let mut expected = vec![51, 230, 133, 164, 1, 127, 131, 173, 1, 2, 3];
        expected.extend(1_000_000u64.to_le_bytes());
        expected.extend(1u64.to_le_bytes());

        assert_eq!(ix.program_id, AUCTION_HOUSE_PROGRAM_ID);
        assert_eq!(ix.data, expected);
        assert_eq!(ix.data.len(), 34);
    }

    #[test]
    fn test_create_sell_instruction_accounts() {
        let accounts = test_accounts();
        let ix = create_sell_instruction(&accounts, &test_args()).expect("should build instruction");

        assert_eq!(ix.accounts.len(), 12);
        assert_eq!(ix.accounts[0].pubkey, accounts.wallet);
        assert!(!ix.accounts[0].is_signer); // wallet
        assert!(!ix.accounts[0].is_writable);
        assert!(ix.accounts[1].is_writable); // token_account
        assert!(ix.accounts[5].is_writable); // auction_house_fee_account
        assert!(ix.accounts[6].is_writable); // seller_trade_state
        assert!(ix.accounts[7].is_writable); // free_seller_trade_state
        assert_eq!(ix.accounts[8].pubkey, TOKEN_PROGRAM_ID);
        assert_eq!(ix.accounts[10].pubkey, accounts.program_as_signer);
        assert_eq!(ix.accounts[11].pubkey, RENT_SYSVAR_ID);
        assert!(ix.accounts.iter().all(|a| !a.is_signer));
    }

    #[test]
    fn test_typed_matches_dynamic() {
        let typed = test_args().encode().expect("should encode");
        let dynamic = codec::serialize(
            InstructionKind::Sell,
            &ArgValues::new()
                .with("trade_state_bump", 1u8)
                .with("free_trade_state_bump", 2u8)
                .with("program_as_signer_bump", 3u8)
                .with("buyer_price", 1_000_000u64)
                .with("token_size", 1u64),
        )
        .expect("should serialize");
        assert_eq!(typed, dynamic);
    }

    #[test]
    fn test_sell_args_decode() {
        let args = SellArgs {
            buyer_price: u64::MAX,
            ..test_args()
        };
        let data = args.encode().expect("should encode");
        assert_eq!(&data[..8], &SELL_DISCRIMINATOR);
        assert_eq!(SellArgs::decode(&data).expect("should decode"), args);
    }

    #[test]
    fn test_sell_args_json_rejects_unknown_field() {
        let result: Result<SellArgs, _> = serde_json::from_str(
            r#"{"trade_state_bump":1,"free_trade_state_bump":2,"program_as_signer_bump":3,"buyer_price":4,"token_size":5,"escrow_payment_bump":6}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_sell_builder_build() {
        let accounts = test_accounts();
        let from_builder = full_builder(&accounts).build().expect("should build instruction");
        let from_records =
            create_sell_instruction(&accounts, &test_args()).expect("should build instruction");
        assert_eq!(from_builder, from_records);
    }

    #[test]
    fn test_sell_builder_missing_fee_account() {
        let accounts = test_accounts();
        let mut builder = full_builder(&accounts);
        builder.accounts = NamedAccounts::new()
            .with("wallet", accounts.wallet)
            .with("token_account", accounts.token_account)
            .with("metadata", accounts.metadata)
            .with("authority", accounts.authority)
            .with("auction_house", accounts.auction_house)
            .with("seller_trade_state", accounts.seller_trade_state)
            .with("free_seller_trade_state", accounts.free_seller_trade_state)
            .with("program_as_signer", accounts.program_as_signer);

        let err = builder.build().expect_err("should fail");
        assert_eq!(
            err,
            SdkError::MissingAccount {
                kind: "Sell",
                slot: "auction_house_fee_account",
            }
        );
    }

    #[test]
    fn test_sell_builder_missing_price() {
        let accounts = test_accounts();
        let mut builder = full_builder(&accounts);
        builder.buyer_price = None;

        let result = builder.build();
        assert!(matches!(
            result,
            Err(SdkError::SchemaMismatch { kind: "Sell", ref detail }) if detail.contains("buyer_price")
        ));
    }
}

//! Instruction kinds and their discriminators.

use std::fmt;

use super::fields::{FieldSchema, PUBLIC_BUY_ARGS, SELL_ARGS};
use super::slots::{AccountSlot, PUBLIC_BUY_ACCOUNTS, SELL_ACCOUNTS};

/// Length of an instruction discriminator in bytes.
pub const DISCRIMINATOR_LEN: usize = 8;

/// Sell instruction discriminator.
pub const SELL_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] = [51, 230, 133, 164, 1, 127, 131, 173];

/// PublicBuy instruction discriminator.
pub const PUBLIC_BUY_DISCRIMINATOR: [u8; DISCRIMINATOR_LEN] =
    [169, 84, 218, 35, 42, 206, 16, 171];

/// Auction House instruction kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InstructionKind {
    /// List a token for sale.
    Sell,
    /// Place a public bid.
    PublicBuy,
}

impl InstructionKind {
    /// All supported kinds.
    pub const ALL: [Self; 2] = [Self::Sell, Self::PublicBuy];

    /// Returns the kind's name as used in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Sell => "Sell",
            Self::PublicBuy => "PublicBuy",
        }
    }

    /// Returns the 8-byte discriminator.
    #[must_use]
    pub const fn discriminator(&self) -> [u8; DISCRIMINATOR_LEN] {
        match self {
            Self::Sell => SELL_DISCRIMINATOR,
            Self::PublicBuy => PUBLIC_BUY_DISCRIMINATOR,
        }
    }

    /// Returns the argument layout in wire order.
    #[must_use]
    pub const fn arg_fields(&self) -> &'static [FieldSchema] {
        match self {
            Self::Sell => SELL_ARGS,
            Self::PublicBuy => PUBLIC_BUY_ARGS,
        }
    }

    /// Returns the account layout in program order.
    #[must_use]
    pub const fn account_slots(&self) -> &'static [AccountSlot] {
        match self {
            Self::Sell => SELL_ACCOUNTS,
            Self::PublicBuy => PUBLIC_BUY_ACCOUNTS,
        }
    }

    /// Returns the exact length of the instruction data.
    #[must_use]
    pub fn data_len(&self) -> usize {
        DISCRIMINATOR_LEN
            + self
                .arg_fields()
                .iter()
                .map(|f| f.width.size())
                .sum::<usize>()
    }

    /// Identifies the kind from the leading bytes of instruction data.
    #[must_use]
    pub fn from_discriminator(data: &[u8]) -> Option<Self> {
        let prefix = data.get(..DISCRIMINATOR_LEN)?;
        Self::ALL
            .into_iter()
            .find(|kind| kind.discriminator().as_slice() == prefix)
    }
}

impl fmt::Display for InstructionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_len() {
        assert_eq!(InstructionKind::Sell.data_len(), 34);
        assert_eq!(InstructionKind::PublicBuy.data_len(), 26);
    }

    #[test]
    fn test_discriminators_distinct() {
        assert_ne!(SELL_DISCRIMINATOR, PUBLIC_BUY_DISCRIMINATOR);
    }

    #[test]
    fn test_from_discriminator() {
        assert_eq!(
            InstructionKind::from_discriminator(&SELL_DISCRIMINATOR),
            Some(InstructionKind::Sell)
        );

        let mut data = PUBLIC_BUY_DISCRIMINATOR.to_vec();
        data.extend([0u8; 18]);
        assert_eq!(
            InstructionKind::from_discriminator(&data),
            Some(InstructionKind::PublicBuy)
        );
    }

    #[test]
    fn test_from_discriminator_unknown() {
        assert_eq!(InstructionKind::from_discriminator(&[0u8; 8]), None);
        assert_eq!(InstructionKind::from_discriminator(&SELL_DISCRIMINATOR[..7]), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(InstructionKind::Sell.to_string(), "Sell");
        assert_eq!(InstructionKind::PublicBuy.to_string(), "PublicBuy");
    }
}

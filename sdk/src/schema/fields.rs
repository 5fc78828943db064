//! Argument field layouts.

/// Fixed on-wire width of an argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldWidth {
    /// 1-byte unsigned (bump seeds).
    U8,
    /// 8-byte unsigned little-endian (prices, sizes).
    U64,
}

impl FieldWidth {
    /// Returns the encoded size in bytes.
    #[must_use]
    pub const fn size(&self) -> usize {
        match self {
            Self::U8 => 1,
            Self::U64 => 8,
        }
    }

    /// Returns the largest value the field can hold.
    #[must_use]
    pub const fn max_value(&self) -> u128 {
        match self {
            Self::U8 => u8::MAX as u128,
            Self::U64 => u64::MAX as u128,
        }
    }
}

/// A named argument field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSchema {
    /// Field name.
    pub name: &'static str,
    /// Encoded width.
    pub width: FieldWidth,
}

impl FieldSchema {
    const fn u8(name: &'static str) -> Self {
        Self {
            name,
            width: FieldWidth::U8,
        }
    }

    const fn u64(name: &'static str) -> Self {
        Self {
            name,
            width: FieldWidth::U64,
        }
    }
}

/// Sell arguments, in wire order.
pub const SELL_ARGS: &[FieldSchema] = &[
    FieldSchema::u8("trade_state_bump"),
    FieldSchema::u8("free_trade_state_bump"),
    FieldSchema::u8("program_as_signer_bump"),
    FieldSchema::u64("buyer_price"),
    FieldSchema::u64("token_size"),
];

/// PublicBuy arguments, in wire order.
pub const PUBLIC_BUY_ARGS: &[FieldSchema] = &[
    FieldSchema::u8("trade_state_bump"),
    FieldSchema::u8("escrow_payment_bump"),
    FieldSchema::u64("buyer_price"),
    FieldSchema::u64("token_size"),
];

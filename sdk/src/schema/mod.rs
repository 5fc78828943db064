//! Wire schemas for Auction House instructions.
//!
//! Each [`InstructionKind`] pairs a discriminator, an ordered argument layout
//! ([`FieldSchema`]) and an ordered account layout ([`AccountSlot`]). The
//! codec and the account builder are driven entirely by these tables.
//!
//! Schemas are part of the deployed program's ABI. Adding a kind means
//! adding tables; existing tables never change.

pub mod fields;
pub mod kind;
pub mod slots;

pub use fields::{FieldSchema, FieldWidth, PUBLIC_BUY_ARGS, SELL_ARGS};
pub use kind::{
    InstructionKind, DISCRIMINATOR_LEN, PUBLIC_BUY_DISCRIMINATOR, SELL_DISCRIMINATOR,
};
pub use slots::{AccountSlot, SlotSource, PUBLIC_BUY_ACCOUNTS, SELL_ACCOUNTS};

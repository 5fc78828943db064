//! Instruction data codec.
//!
//! Layout: the kind's 8-byte discriminator followed by every argument in
//! schema order at its fixed width, little-endian. No padding, no length
//! prefix.
//!
//! Two entry points produce the same bytes:
//!
//! - [`InstructionArgs`], implemented by the typed per-kind records, where
//!   the compiler enforces field names and widths;
//! - [`serialize`] over [`ArgValues`], where names and ranges are checked
//!   against the kind's [`FieldSchema`] table at run time.

use std::collections::BTreeMap;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

use crate::error::SdkError;
use crate::schema::{FieldSchema, FieldWidth, InstructionKind, DISCRIMINATOR_LEN};

/// Named argument values, checked against a schema when serialized.
///
/// Values are held as `u128` so that inputs wider than their field can be
/// represented and rejected instead of truncated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArgValues(BTreeMap<String, u128>);

impl ArgValues {
    /// Creates an empty set of values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a value, replacing any previous value for the same name.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<u128>) -> Self {
        self.insert(name, value);
        self
    }

    /// Inserts a value, returning the previous one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<u128>) -> Option<u128> {
        self.0.insert(name.into(), value.into())
    }

    /// Returns the value for `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<u128> {
        self.0.get(name).copied()
    }

    /// Returns the number of values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no values are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over field names.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Parses values from a JSON object of field name to unsigned integer.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Deserialization` if the input is not such an object.
    pub fn from_json(json: &str) -> Result<Self, SdkError> {
        serde_json::from_str(json).map_err(|e| SdkError::Deserialization(e.to_string()))
    }
}

/// Serializes `args` as instruction data for `kind`.
///
/// # Errors
///
/// Returns `SdkError::SchemaMismatch` if a schema field is missing or an
/// unknown field is present, and `SdkError::EncodingRange` if a value does not
/// fit its field.
pub fn serialize(kind: InstructionKind, args: &ArgValues) -> Result<Vec<u8>, SdkError> {
    let fields = kind.arg_fields();

    if let Some(extra) = args
        .names()
        .find(|name| fields.iter().all(|f| f.name != *name))
    {
        return Err(SdkError::SchemaMismatch {
            kind: kind.name(),
            detail: format!("unexpected field `{extra}`"),
        });
    }

    let mut data = Vec::with_capacity(kind.data_len());
    data.extend_from_slice(&kind.discriminator());

    for field in fields {
        let value = args.get(field.name).ok_or_else(|| SdkError::SchemaMismatch {
            kind: kind.name(),
            detail: format!("missing field `{}`", field.name),
        })?;
        encode_field(&mut data, field, value)?;
    }

    Ok(data)
}

/// Decodes instruction data for `kind` back into named values.
///
/// # Errors
///
/// Returns `SdkError::Deserialization` if the length or discriminator do not
/// match `kind`.
pub fn deserialize(kind: InstructionKind, data: &[u8]) -> Result<ArgValues, SdkError> {
    let mut rest = check_header(kind, data)?;
    let mut values = ArgValues::new();

    for field in kind.arg_fields() {
        let value = match field.width {
            FieldWidth::U8 => u128::from(read::<u8>(&mut rest)?),
            FieldWidth::U64 => u128::from(read::<u64>(&mut rest)?),
        };
        values.insert(field.name, value);
    }

    Ok(values)
}

/// Typed instruction arguments.
///
/// Implementors declare their fields in wire order; borsh writes them in
/// declaration order at their native widths.
pub trait InstructionArgs: BorshSerialize + BorshDeserialize {
    /// The kind these arguments belong to.
    const KIND: InstructionKind;

    /// Encodes the discriminator followed by the arguments.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Serialization` if borsh fails to write.
    fn encode(&self) -> Result<Vec<u8>, SdkError> {
        let mut data = Vec::with_capacity(Self::KIND.data_len());
        data.extend_from_slice(&Self::KIND.discriminator());
        borsh::to_writer(&mut data, self).map_err(|e| SdkError::Serialization(e.to_string()))?;
        Ok(data)
    }

    /// Decodes arguments from instruction data.
    ///
    /// # Errors
    ///
    /// Returns `SdkError::Deserialization` if the length or discriminator do
    /// not match, or borsh fails to read.
    fn decode(data: &[u8]) -> Result<Self, SdkError> {
        let rest = check_header(Self::KIND, data)?;
        borsh::from_slice(rest).map_err(|e| SdkError::Deserialization(e.to_string()))
    }
}

fn encode_field(out: &mut Vec<u8>, field: &FieldSchema, value: u128) -> Result<(), SdkError> {
    let out_of_range = || SdkError::EncodingRange {
        field: field.name,
        value,
        width: field.width.size(),
    };

    let written = match field.width {
        FieldWidth::U8 => {
            let v = u8::try_from(value).map_err(|_| out_of_range())?;
            borsh::to_writer(&mut *out, &v)
        }
        FieldWidth::U64 => {
            let v = u64::try_from(value).map_err(|_| out_of_range())?;
            borsh::to_writer(&mut *out, &v)
        }
    };
    written.map_err(|e| SdkError::Serialization(e.to_string()))
}

/// Validates length and discriminator, returning the argument bytes.
fn check_header(kind: InstructionKind, data: &[u8]) -> Result<&[u8], SdkError> {
    if data.len() != kind.data_len() {
        return Err(SdkError::Deserialization(format!(
            "expected {} bytes for {}, got {}",
            kind.data_len(),
            kind,
            data.len()
        )));
    }

    let (discriminator, rest) = data.split_at(DISCRIMINATOR_LEN);
    if discriminator != kind.discriminator().as_slice() {
        return Err(SdkError::Deserialization(format!(
            "discriminator {discriminator:?} does not match {kind}"
        )));
    }

    Ok(rest)
}

fn read<T: BorshDeserialize>(buf: &mut &[u8]) -> Result<T, SdkError> {
    T::deserialize(buf).map_err(|e| SdkError::Deserialization(e.to_string()))
}

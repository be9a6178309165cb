//! System Program transfer instruction encoding.
//!
//! The System Program `Transfer` payload is a fixed 12-byte little-endian
//! layout that the runtime matches byte for byte:
//!
//! ```text
//! bytes [0..4)   u32 LE  instruction discriminator, always 2 (Transfer)
//! bytes [4..12)  u64 LE  lamports
//! ```
//!
//! Accounts, in protocol-fixed order:
//!   0. source       (signer, writable)
//!   1. destination  (not signer, writable)

use crate::address;
use crate::error::EncodeError;
use crate::instruction::{AccountMeta, Instruction};

/// The Solana System Program id: 32 zero bytes.
/// Base58: `11111111111111111111111111111111`
pub const SYSTEM_PROGRAM_ID: [u8; 32] = [0u8; 32];

/// System Program `Transfer` instruction discriminator (little-endian u32).
const TRANSFER_DISCRIMINATOR: u32 = 2;

/// Length of the `Transfer` instruction data: 4-byte discriminator +
/// 8-byte lamports. Any other length is malformed.
pub const TRANSFER_DATA_LEN: usize = 12;

/// Build a System Program `Transfer` instruction from raw 32-byte keys.
///
/// Moves `lamports` from `from` to `to`. A zero-lamport transfer is valid
/// on chain and is not rejected here. Pure and deterministic: identical
/// inputs yield byte-identical output.
pub fn transfer(from: &[u8; 32], to: &[u8; 32], lamports: u64) -> Instruction {
    let mut data = [0u8; TRANSFER_DATA_LEN];
    data[..4].copy_from_slice(&TRANSFER_DISCRIMINATOR.to_le_bytes());
    data[4..].copy_from_slice(&lamports.to_le_bytes());

    Instruction {
        program_id: SYSTEM_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *from,
                is_signer: true,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *to,
                is_signer: false,
                is_writable: true,
            },
        ],
        data: data.to_vec(),
    }
}

/// Build a System Program `Transfer` instruction from Base58 address strings.
///
/// This is the string-boundary entry point for callers holding addresses in
/// their external form (CLI arguments, form fields). Fails with
/// `InvalidAddress` if either address does not decode to 32 bytes. The
/// lamport amount is already range-checked by its type: any `u64` is a
/// representable on-chain amount.
pub fn encode_transfer(
    source: &str,
    destination: &str,
    lamports: u64,
) -> Result<Instruction, EncodeError> {
    let from = address::decode_address(source)?;
    let to = address::decode_address(destination)?;
    Ok(transfer(&from, &to, lamports))
}

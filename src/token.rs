//! SPL token instruction encoding and associated token account derivation.
//!
//! Covers the Token Program `Transfer` and `TransferChecked` instructions
//! plus the Associated Token Account (ATA) program's `Create`, without
//! pulling in the `spl-token` crates. ATA addresses are Program Derived
//! Addresses (PDAs) computed with `sha2` and an off-curve check via
//! `curve25519-dalek`.

use sha2::{Digest, Sha256};

use crate::error::EncodeError;
use crate::instruction::{AccountMeta, Instruction};
use crate::system::SYSTEM_PROGRAM_ID;

// ---------------------------------------------------------------------------
// Well-known program ids
// ---------------------------------------------------------------------------

/// SPL Token Program id: `TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA`
///
/// Base58 cannot be decoded in a const context, so the raw bytes are
/// spelled out; tests verify the round trip.
pub const TOKEN_PROGRAM_ID: [u8; 32] = [
    0x06, 0xdd, 0xf6, 0xe1, 0xd7, 0x65, 0xa1, 0x93, 0xd9, 0xcb, 0xe1, 0x46, 0xce, 0xeb, 0x79,
    0xac, 0x1c, 0xb4, 0x85, 0xed, 0x5f, 0x5b, 0x37, 0x91, 0x3a, 0x8c, 0xf5, 0x85, 0x7e, 0xff,
    0x00, 0xa9,
];

/// Associated Token Account Program id:
/// `ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL`
pub const ASSOCIATED_TOKEN_PROGRAM_ID: [u8; 32] = [
    0x8c, 0x97, 0x25, 0x8f, 0x4e, 0x24, 0x89, 0xf1, 0xbb, 0x3d, 0x10, 0x29, 0x14, 0x8e, 0x0d,
    0x83, 0x0b, 0x5a, 0x13, 0x99, 0xda, 0xff, 0x10, 0x84, 0x04, 0x8e, 0x7b, 0xd8, 0xdb, 0xe9,
    0xf8, 0x59,
];

/// Token Program `Transfer` instruction index.
const TRANSFER_INDEX: u8 = 3;

/// Token Program `TransferChecked` instruction index.
const TRANSFER_CHECKED_INDEX: u8 = 12;

/// Domain separator appended to every PDA derivation.
const PDA_MARKER: &[u8] = b"ProgramDerivedAddress";

// ---------------------------------------------------------------------------
// Token transfer instructions
// ---------------------------------------------------------------------------

/// Build a Token Program `Transfer` instruction.
///
/// Moves `amount` base units (e.g. for a 6-decimal token, `1_000_000` is one
/// whole token) from `source` to `destination`, both token accounts of the
/// same mint. `owner` is the wallet that owns `source` and must sign.
///
/// Data layout: `u8 3` (Transfer) + `u64 LE amount` = 9 bytes.
pub fn transfer(
    source: &[u8; 32],
    destination: &[u8; 32],
    owner: &[u8; 32],
    amount: u64,
) -> Instruction {
    let mut data = Vec::with_capacity(9);
    data.push(TRANSFER_INDEX);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *source,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *destination,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *owner,
                is_signer: true,
                is_writable: false,
            },
        ],
        data,
    }
}

/// Build a Token Program `TransferChecked` instruction.
///
/// Like [`transfer`], but the mint account and its decimal count travel with
/// the instruction and the program rejects the transfer if `decimals` does
/// not match the mint. Preferred by wallet frontends because it guards
/// against mint mix-ups.
///
/// Data layout: `u8 12` (TransferChecked) + `u64 LE amount` + `u8 decimals`
/// = 10 bytes.
pub fn transfer_checked(
    source: &[u8; 32],
    mint: &[u8; 32],
    destination: &[u8; 32],
    owner: &[u8; 32],
    amount: u64,
    decimals: u8,
) -> Instruction {
    let mut data = Vec::with_capacity(10);
    data.push(TRANSFER_CHECKED_INDEX);
    data.extend_from_slice(&amount.to_le_bytes());
    data.push(decimals);

    Instruction {
        program_id: TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *source,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *mint,
                is_signer: false,
                is_writable: false,
            },
            AccountMeta {
                pubkey: *destination,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *owner,
                is_signer: true,
                is_writable: false,
            },
        ],
        data,
    }
}

/// Build an ATA program `Create` instruction.
///
/// Creates the associated token account for `owner` + `mint`, funded by
/// `funder` (the fee payer, usually the sender). The instruction data is
/// empty; the ATA program treats an empty payload as `Create`. The account
/// address is derived internally with [`derive_associated_token_address`].
pub fn create_associated_token_account(
    funder: &[u8; 32],
    owner: &[u8; 32],
    mint: &[u8; 32],
) -> Result<Instruction, EncodeError> {
    let ata = derive_associated_token_address(owner, mint)?;

    Ok(Instruction {
        program_id: ASSOCIATED_TOKEN_PROGRAM_ID,
        accounts: vec![
            AccountMeta {
                pubkey: *funder,
                is_signer: true,
                is_writable: true,
            },
            AccountMeta {
                pubkey: ata,
                is_signer: false,
                is_writable: true,
            },
            AccountMeta {
                pubkey: *owner,
                is_signer: false,
                is_writable: false,
            },
            AccountMeta {
                pubkey: *mint,
                is_signer: false,
                is_writable: false,
            },
            AccountMeta {
                pubkey: SYSTEM_PROGRAM_ID,
                is_signer: false,
                is_writable: false,
            },
            AccountMeta {
                pubkey: TOKEN_PROGRAM_ID,
                is_signer: false,
                is_writable: false,
            },
        ],
        data: Vec::new(),
    })
}

// ---------------------------------------------------------------------------
// Associated token account (PDA) derivation
// ---------------------------------------------------------------------------

/// Derive the associated token account address for a wallet + mint pair.
///
/// The ATA is a PDA of the ATA program with seeds
/// `[wallet, TOKEN_PROGRAM_ID, mint]`. Derivation searches bump seeds from
/// 255 down to 0 for the first digest that is NOT an Ed25519 curve point.
pub fn derive_associated_token_address(
    wallet: &[u8; 32],
    mint: &[u8; 32],
) -> Result<[u8; 32], EncodeError> {
    find_program_address(
        &[wallet.as_ref(), &TOKEN_PROGRAM_ID, mint.as_ref()],
        &ASSOCIATED_TOKEN_PROGRAM_ID,
    )
    .map(|(address, _bump)| address)
}

/// Find a valid PDA for the given seeds and program.
///
/// Computes `SHA-256(seeds... || bump || program_id || "ProgramDerivedAddress")`
/// for each bump from 255 down to 0 and returns the first off-curve result
/// together with its bump.
fn find_program_address(
    seeds: &[&[u8]],
    program_id: &[u8; 32],
) -> Result<([u8; 32], u8), EncodeError> {
    for bump in (0u8..=255).rev() {
        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update([bump]);
        hasher.update(program_id);
        hasher.update(PDA_MARKER);

        let hash: [u8; 32] = hasher.finalize().into();

        // A valid PDA must NOT be on the Ed25519 curve.
        if !is_on_curve(&hash) {
            return Ok((hash, bump));
        }
    }

    Err(EncodeError::InvalidAddress(
        "no off-curve bump seed found for PDA".into(),
    ))
}

/// Whether 32 bytes decompress to a valid Ed25519 curve point.
fn is_on_curve(bytes: &[u8; 32]) -> bool {
    curve25519_dalek::edwards::CompressedEdwardsY(*bytes)
        .decompress()
        .is_some()
}

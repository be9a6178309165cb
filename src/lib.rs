//! Solana instruction encoding for native SOL and SPL token transfers.
//!
//! This crate builds Solana instructions entirely by hand — no `solana-sdk`
//! dependency (which drags in tokio and 200+ transitive dependencies).
//! Every operation returns an [`Instruction`]: a target program id, an
//! ordered list of account references, and an opaque binary payload. The
//! caller hands that value to whatever assembles, signs, and submits the
//! enclosing transaction; nothing here performs I/O.
//!
//! Addresses cross the API boundary as Base58 strings (decoded with `bs58`),
//! amounts as `u64` base units or decimal display strings (see [`amount`]).

pub mod address;
pub mod amount;
pub mod error;
pub mod instruction;
pub mod system;
pub mod token;

// Re-export key public types for ergonomic imports.
pub use address::{decode_address, encode_address};
pub use amount::{lamports_to_sol, parse_amount, parse_sol, LAMPORTS_PER_SOL, SOL_DECIMALS};
pub use error::EncodeError;
pub use instruction::{AccountMeta, Instruction};
pub use system::{encode_transfer, SYSTEM_PROGRAM_ID};
pub use token::{
    create_associated_token_account, derive_associated_token_address,
    ASSOCIATED_TOKEN_PROGRAM_ID, TOKEN_PROGRAM_ID,
};

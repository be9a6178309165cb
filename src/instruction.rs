//! Core instruction data model.
//!
//! An instruction names the program to invoke, the accounts it touches (in
//! an order fixed by each program's convention), and an opaque binary
//! payload. Values are immutable once built; a fresh one is constructed per
//! request and consumed exactly once by the transaction assembler.

/// A single account reference in an instruction.
///
/// The position of a meta within [`Instruction::accounts`] is significant:
/// programs address their accounts by index, not by pubkey.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountMeta {
    pub pubkey: [u8; 32],
    pub is_signer: bool,
    pub is_writable: bool,
}

/// An instruction ready to be compiled into a transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The program that will process this instruction.
    pub program_id: [u8; 32],
    /// Account references, in the order the program expects them.
    pub accounts: Vec<AccountMeta>,
    /// Opaque instruction data; layout is defined by the target program.
    pub data: Vec<u8>,
}

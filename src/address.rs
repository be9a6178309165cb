//! Solana address encoding and decoding.
//!
//! Solana addresses are Base58-encoded 32-byte values — Ed25519 public keys
//! for wallets, arbitrary 32-byte identifiers for programs and PDAs. There
//! is no hashing or checksum step; the raw bytes ARE the address bytes. The
//! canonical alphabet is the standard Bitcoin Base58 alphabet used by the
//! `bs58` crate.

use crate::error::EncodeError;

/// Decode a Base58 address string to its 32-byte representation.
///
/// Returns `InvalidAddress` if the string is not valid Base58 or does not
/// decode to exactly 32 bytes.
pub fn decode_address(address: &str) -> Result<[u8; 32], EncodeError> {
    let bytes = bs58::decode(address)
        .into_vec()
        .map_err(|e| EncodeError::InvalidAddress(format!("base58 decode failed: {e}")))?;

    let arr: [u8; 32] = bytes.try_into().map_err(|v: Vec<u8>| {
        EncodeError::InvalidAddress(format!("expected 32 bytes, got {}", v.len()))
    })?;

    Ok(arr)
}

/// Encode 32 bytes as a Base58 address string.
pub fn encode_address(bytes: &[u8; 32]) -> String {
    bs58::encode(bytes).into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The System Program id is 32 zero bytes, which encodes to
    /// "11111111111111111111111111111111" in Base58.
    #[test]
    fn system_program_address() {
        let zeros = [0u8; 32];
        assert_eq!(encode_address(&zeros), "11111111111111111111111111111111");
    }

    #[test]
    fn roundtrip_encode_decode() {
        // Known Solana address (the Token Program)
        let address = "TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA";
        let bytes = decode_address(address).unwrap();
        assert_eq!(encode_address(&bytes), address);
    }

    #[test]
    fn decode_garbage_returns_error() {
        let result = decode_address("not-a-valid-address!!!");
        assert!(matches!(result, Err(EncodeError::InvalidAddress(_))));
    }

    #[test]
    fn decode_too_short_returns_error() {
        // "1" decodes to a single zero byte, which is not 32 bytes.
        let result = decode_address("1");
        assert!(matches!(result, Err(EncodeError::InvalidAddress(_))));
    }

    #[test]
    fn decode_too_long_returns_error() {
        // 33 bytes of data encodes to a longer Base58 string.
        let long = bs58::encode([0xAAu8; 33]).into_string();
        let result = decode_address(&long);
        assert!(matches!(result, Err(EncodeError::InvalidAddress(_))));
    }

    #[test]
    fn decode_empty_returns_error() {
        assert!(decode_address("").is_err());
    }

    #[test]
    fn encode_is_deterministic() {
        let bytes = [0xFFu8; 32];
        assert_eq!(encode_address(&bytes), encode_address(&bytes));
    }
}

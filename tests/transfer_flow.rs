//! Integration tests exercising the public API the way a frontend would:
//! form-field strings in, protocol-exact instruction bytes out.

use sol_instructions::*;

const SENDER: &str = "MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr";
const RECIPIENT: &str = "7kQkZoeECHGmK4m2BqyJLR6gRpHwYa1wFSpowETFuyLQ";
const USDC_MINT: &str = "EPjFWdd5AufqSSqeM2qN1xzybapC8G4wEGGkZwyTDt1v";

// ─── Native SOL: decimal string -> lamports -> instruction ─────────────────

#[test]
fn sol_transfer_from_form_input() {
    // 1. Parse the user-supplied display amount.
    let lamports = parse_sol("0.01").unwrap();
    assert_eq!(lamports, 10_000_000);

    // 2. Encode the transfer.
    let ix = encode_transfer(SENDER, RECIPIENT, lamports).unwrap();

    // 3. Verify the exact wire payload.
    assert_eq!(ix.program_id, SYSTEM_PROGRAM_ID);
    assert_eq!(ix.data, hex::decode("020000008096980000000000").unwrap());

    // 4. Account list: sender signs, both writable.
    assert_eq!(ix.accounts[0].pubkey, decode_address(SENDER).unwrap());
    assert!(ix.accounts[0].is_signer && ix.accounts[0].is_writable);
    assert_eq!(ix.accounts[1].pubkey, decode_address(RECIPIENT).unwrap());
    assert!(!ix.accounts[1].is_signer && ix.accounts[1].is_writable);
}

#[test]
fn sol_transfer_rejects_bad_input_before_encoding() {
    assert!(parse_sol("-0.01").is_err());
    assert!(parse_sol("0.0000000001").is_err());
    assert!(encode_transfer("not base58!", RECIPIENT, 1).is_err());
    assert!(encode_transfer(SENDER, "abc", 1).is_err());
}

#[test]
fn sol_transfer_is_reproducible() {
    let a = encode_transfer(SENDER, RECIPIENT, 42).unwrap();
    let b = encode_transfer(SENDER, RECIPIENT, 42).unwrap();
    assert_eq!(a, b);
}

// ─── SPL token: derive ATAs -> create -> transfer ──────────────────────────

#[test]
fn token_transfer_via_associated_accounts() {
    let sender = decode_address(SENDER).unwrap();
    let recipient = decode_address(RECIPIENT).unwrap();
    let mint = decode_address(USDC_MINT).unwrap();

    // 1. Derive both sides' associated token accounts.
    let source_ata = derive_associated_token_address(&sender, &mint).unwrap();
    let dest_ata = derive_associated_token_address(&recipient, &mint).unwrap();
    assert_ne!(source_ata, dest_ata);

    // 2. Create the recipient's ATA if it does not exist yet; the sender
    //    funds it.
    let create_ix = create_associated_token_account(&sender, &recipient, &mint).unwrap();
    assert_eq!(create_ix.program_id, ASSOCIATED_TOKEN_PROGRAM_ID);
    assert_eq!(create_ix.accounts[1].pubkey, dest_ata);

    // 3. Transfer 1.5 USDC (6 decimals) with the mint check.
    let amount = parse_amount("1.5", 6).unwrap();
    assert_eq!(amount, 1_500_000);

    let ix = token::transfer_checked(&source_ata, &mint, &dest_ata, &sender, amount, 6);
    assert_eq!(ix.program_id, TOKEN_PROGRAM_ID);
    assert_eq!(ix.data[0], 12);
    assert_eq!(u64::from_le_bytes(ix.data[1..9].try_into().unwrap()), amount);
    assert_eq!(ix.data[9], 6);

    // Owner wallet signs; the token accounts themselves do not.
    assert_eq!(ix.accounts[3].pubkey, sender);
    assert!(ix.accounts[3].is_signer);
}

// ─── Balance display round trip ─────────────────────────────────────────────

#[test]
fn balance_display_matches_parsed_amount() {
    let lamports = parse_sol("2.5").unwrap();
    assert_eq!(lamports_to_sol(lamports), "2.5");
}

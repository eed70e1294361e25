use ed25519_dalek::{PublicKey, Signature, Verifier};

/// Checks `signature` over the exact byte concatenation `timestamp || body`.
///
/// The message is the raw request bytes as received on the wire, never a
/// re-serialized form. Forged or malformed input is an expected case and
/// yields `false`, not an error.
pub fn verify(public_key: &PublicKey, signature: &Signature, timestamp: &[u8], body: &[u8]) -> bool {
    let message: Vec<u8> = timestamp
        .iter()
        .copied()
        .chain(body.iter().copied())
        .collect();

    public_key.verify(&message, signature).is_ok()
}

//! Opaque bearer token generation.
//!
//! Tokens carry no claims; the server looks them up in the `auth_tokens`
//! table on every authenticated request.

use rand::RngCore;

/// Number of random bytes in a token. Hex encoding doubles the length.
pub const TOKEN_BYTES: usize = 20;

/// Generates a new random token as 40 lowercase hex characters.
pub fn generate_token() -> String {
    let mut bytes = [0u8; TOKEN_BYTES];
    rand::thread_rng().fill_bytes(&mut bytes);
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_length_and_charset() {
        let token = generate_token();
        assert_eq!(token.len(), TOKEN_BYTES * 2);
        assert!(token.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
    }

    #[test]
    fn test_tokens_are_unique() {
        let first = generate_token();
        let second = generate_token();
        assert_ne!(first, second);
    }
}

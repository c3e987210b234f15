use chrono::Utc;
use rand::Rng;

const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const SUFFIX_LEN: usize = 7;

/// Generate a URL-safe submission id: `sub_<unix millis>_<7 base-36 chars>`.
pub fn generate() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| ALPHABET[rng.random_range(0..ALPHABET.len())] as char)
        .collect();

    format!("sub_{}_{suffix}", Utc::now().timestamp_millis())
}

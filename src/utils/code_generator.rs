//! Short code generation.

use rand::Rng;
use rand::distr::Alphanumeric;

/// Length of a generated short code in characters.
pub const CODE_LENGTH: usize = 6;

/// Generates a random short code.
///
/// Draws [`CODE_LENGTH`] characters independently and uniformly from the
/// 62-symbol alphanumeric alphabet (upper, lower, digits), giving a keyspace
/// of 62^6 ≈ 5.6e10 codes. Uniqueness is enforced by the storage layer;
/// callers retry on collision.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| rng.sample(Alphanumeric) as char)
        .collect()
}

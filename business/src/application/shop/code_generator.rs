use rand::Rng;

use crate::domain::shop::services::AuthenticationCodeGenerator;

const CODE_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
const CODE_LENGTH: usize = 8;

/// Generates uppercase alphanumeric shop codes from the thread-local RNG.
pub struct RandomAuthenticationCodeGenerator;

impl AuthenticationCodeGenerator for RandomAuthenticationCodeGenerator {
    fn generate(&self) -> String {
        let mut rng = rand::rng();
        (0..CODE_LENGTH)
            .map(|_| char::from(CODE_CHARSET[rng.random_range(0..CODE_CHARSET.len())]))
            .collect()
    }
}

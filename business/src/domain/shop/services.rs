/// Service port producing the opaque code handed to a shop at first registration.
///
/// Codes are assumed collision-resistant; the store does not check them.
pub trait AuthenticationCodeGenerator: Send + Sync {
    fn generate(&self) -> String;
}

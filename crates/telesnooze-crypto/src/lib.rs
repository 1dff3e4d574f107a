/// Telesnooze Crypto Library
///
/// Password digests for the credential store. New accounts are hashed with
/// the configured [`PasswordScheme`]; verification recognises either format
/// so the scheme can be changed without invalidating stored accounts.

pub mod password;

pub use password::PasswordScheme;

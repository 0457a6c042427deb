use secrecy::SecretString;

use crate::provider::Provider;

/// Read a provider's API key from the environment
///
/// Looked up at call time rather than cached, so a key exported after
/// startup is picked up by the next warmup. Returns `None` when the
/// variable is unset, blank after trimming, or still the template
/// placeholder; an unconfigured provider is a valid state, not an error.
pub fn api_key(provider: Provider) -> Option<SecretString> {
    let spec = provider.spec();
    let value = std::env::var(spec.key_var).ok()?;

    if value.trim().is_empty() || value == spec.key_placeholder {
        return None;
    }

    Some(SecretString::from(value))
}

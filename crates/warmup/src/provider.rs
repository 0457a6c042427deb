use http::Method;
use secrecy::{ExposeSecret, SecretString};
use serde_json::{Value, json};

/// The TTS vendors wired into the comparison tool
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Provider {
    Inworld,
    Cartesia,
    ElevenLabs,
    Hume,
}

/// Static description of how to reach one provider
///
/// Adding a vendor is a data addition: a new `Provider` variant plus its
/// `ProviderSpec` entry, auth headers, and warmup body.
pub struct ProviderSpec {
    /// Default API origin
    pub base_url: &'static str,
    /// Path of the warmup request relative to the base URL
    pub warmup_path: &'static str,
    /// HTTP method of the warmup request
    pub warmup_method: Method,
    /// Environment variable holding the API key
    pub key_var: &'static str,
    /// Template placeholder treated the same as an unset key
    pub key_placeholder: &'static str,
}

static INWORLD: ProviderSpec = ProviderSpec {
    base_url: "https://api.inworld.ai",
    warmup_path: "/tts/v1/voice:stream",
    warmup_method: Method::POST,
    key_var: "INWORLD_API_KEY",
    key_placeholder: "your_inworld_api_key_here",
};

static CARTESIA: ProviderSpec = ProviderSpec {
    base_url: "https://api.cartesia.ai",
    warmup_path: "/tts/sse",
    warmup_method: Method::POST,
    key_var: "CARTESIA_API_KEY",
    key_placeholder: "your_cartesia_api_key_here",
};

static ELEVENLABS: ProviderSpec = ProviderSpec {
    base_url: "https://api.elevenlabs.io",
    // A plain listing endpoint; enough to force the TLS handshake
    warmup_path: "/v1/voices",
    warmup_method: Method::GET,
    key_var: "ELEVENLABS_API_KEY",
    key_placeholder: "your_elevenlabs_api_key_here",
};

static HUME: ProviderSpec = ProviderSpec {
    base_url: "https://api.hume.ai",
    warmup_path: "/v0/tts/stream/json",
    warmup_method: Method::POST,
    key_var: "HUME_API_KEY",
    key_placeholder: "your_hume_api_key_here",
};

impl Provider {
    /// All known providers, in display order
    pub const ALL: [Self; 4] = [Self::Inworld, Self::Cartesia, Self::ElevenLabs, Self::Hume];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Inworld => "inworld",
            Self::Cartesia => "cartesia",
            Self::ElevenLabs => "elevenlabs",
            Self::Hume => "hume",
        }
    }

    /// Parse a provider name, case-insensitively
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.as_str().eq_ignore_ascii_case(name))
    }

    pub fn spec(self) -> &'static ProviderSpec {
        match self {
            Self::Inworld => &INWORLD,
            Self::Cartesia => &CARTESIA,
            Self::ElevenLabs => &ELEVENLABS,
            Self::Hume => &HUME,
        }
    }

    /// Authentication headers for this vendor's API
    pub fn auth_headers(self, api_key: &SecretString) -> Vec<(&'static str, String)> {
        match self {
            Self::Inworld => vec![("Authorization", format!("Basic {}", api_key.expose_secret()))],
            Self::Cartesia => vec![
                ("X-API-Key", api_key.expose_secret().to_string()),
                ("Cartesia-Version", "2024-06-10".to_string()),
            ],
            Self::ElevenLabs => vec![("xi-api-key", api_key.expose_secret().to_string())],
            Self::Hume => vec![("X-Hume-Api-Key", api_key.expose_secret().to_string())],
        }
    }

    /// Empty-text request body in this vendor's schema
    ///
    /// The payload is a deliberate no-op: it forces the TCP+TLS handshake
    /// and a round trip without synthesizing audio. `None` for vendors
    /// warmed up with a plain GET.
    pub fn warmup_body(self) -> Option<Value> {
        match self {
            Self::Inworld => Some(json!({
                "text": "",
                "voiceId": "Alex",
                "modelId": "inworld-tts-1.5-mini",
                "audioConfig": { "audioEncoding": "MP3", "sampleRateHertz": 44100 },
            })),
            Self::Cartesia => Some(json!({
                "model_id": "sonic-2",
                "transcript": "",
                "voice": { "mode": "id", "id": "a0e99841-438c-4a64-b679-ae501e7d6091" },
                "output_format": { "container": "raw", "encoding": "pcm_f32le", "sample_rate": 44100 },
            })),
            Self::ElevenLabs => None,
            Self::Hume => Some(json!({
                "utterances": [{ "text": "", "voice": { "name": "Male English Actor", "provider": "HUME_AI" } }],
            })),
        }
    }
}

impl std::fmt::Display for Provider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

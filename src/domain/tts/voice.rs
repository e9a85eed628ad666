/// A static mapping entry from a stable voice key to the provider voice
/// identifier and its display metadata. Read-only for the process lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoiceProfile {
    pub key: &'static str,
    pub id: &'static str,
    pub name: &'static str,
    pub gender: &'static str,
    pub description: &'static str,
    pub language: &'static str,
}

pub const DEFAULT_VOICE: &str = "longxiaochun";

/// Available voices. Keys are unique and stable across releases.
pub const VOICES: &[VoiceProfile] = &[
    VoiceProfile {
        key: "longxiaochun",
        id: "longxiaochun_v2",
        name: "Xiaochun",
        gender: "female",
        description: "Standard Mandarin female, gentle and clear",
        language: "zh",
    },
    VoiceProfile {
        key: "longxiaobai",
        id: "longxiaobai_v2",
        name: "Xiaobai",
        gender: "female",
        description: "Young energetic female voice",
        language: "zh",
    },
    VoiceProfile {
        key: "longlaotie",
        id: "longlaotie_v2",
        name: "Laotie",
        gender: "male",
        description: "Mature male voice",
        language: "zh",
    },
    VoiceProfile {
        key: "longshu",
        id: "longshu_v2",
        name: "Shu",
        gender: "male",
        description: "Professional male narrator",
        language: "zh",
    },
    VoiceProfile {
        key: "longshuo",
        id: "longshuo_v2",
        name: "Shuo",
        gender: "male",
        description: "Warm male voice",
        language: "zh",
    },
    VoiceProfile {
        key: "longjielidou",
        id: "longjielidou_v2",
        name: "Jielidou",
        gender: "female",
        description: "Sweet female voice",
        language: "zh",
    },
    VoiceProfile {
        key: "longxiaoxia",
        id: "longxiaoxia_v2",
        name: "Xiaoxia",
        gender: "female",
        description: "Gentle female teacher voice",
        language: "zh",
    },
];

/// Look up a voice by its stable key.
pub fn find(key: &str) -> Option<&'static VoiceProfile> {
    VOICES.iter().find(|v| v.key == key)
}

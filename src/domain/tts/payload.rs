use super::pinyin;

/// Pronunciation overrides are only reliable at vocabulary-drill granularity;
/// providers ignore or mangle them on longer text.
const MAX_ANNOTATED_CHARS: usize = 2;

/// How the target provider accepts pronunciation hints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnnotationStyle {
    /// The provider reads contextual hints embedded in the input text itself,
    /// e.g. "谢(xiè)".
    Inline,
    /// The provider accepts an SSML document with a phoneme annotation.
    Markup,
}

/// The provider-facing payload, constructed fresh per request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesisPayload {
    pub text: String,
    /// Whether the pronunciation path was actually taken.
    pub used_phoneme: bool,
}

/// Assemble the provider payload for an utterance, applying the pronunciation
/// hint when one is present and the utterance is short enough (<= 2 chars).
///
/// `text` must already be trimmed and non-empty; `voice_id` is the resolved
/// provider voice identifier (only embedded in the markup form).
pub fn build_payload(
    style: AnnotationStyle,
    text: &str,
    voice_id: &str,
    hint: Option<&str>,
) -> SynthesisPayload {
    let hint = hint.map(str::trim).filter(|h| !h.is_empty());
    let annotate = hint.is_some() && text.chars().count() <= MAX_ANNOTATED_CHARS;

    match style {
        AnnotationStyle::Inline => match hint {
            Some(hint) if annotate => SynthesisPayload {
                text: format!("{}({})", text, hint),
                used_phoneme: true,
            },
            _ => SynthesisPayload {
                text: text.to_string(),
                used_phoneme: false,
            },
        },
        AnnotationStyle::Markup => match hint {
            Some(hint) if annotate => SynthesisPayload {
                text: format!(
                    r#"<speak><voice name="{}"><phoneme alphabet="x-amazon-pinyin" ph="{}">{}</phoneme></voice></speak>"#,
                    escape_xml(voice_id),
                    escape_xml(&pinyin::normalize(hint)),
                    escape_xml(text),
                ),
                used_phoneme: true,
            },
            _ => SynthesisPayload {
                text: format!(
                    r#"<speak><voice name="{}">{}</voice></speak>"#,
                    escape_xml(voice_id),
                    escape_xml(text),
                ),
                used_phoneme: false,
            },
        },
    }
}

/// Escape the characters with meaning in XML text and attribute values.
fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

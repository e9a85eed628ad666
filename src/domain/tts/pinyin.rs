/// Pinyin tone digits: 1 flat, 2 rising, 3 dip, 4 falling, 5 neutral.
const NEUTRAL_TONE: u8 = 5;

/// Map a precomposed tone-marked vowel to its base letter and tone digit.
/// `ü` maps to the letter `v` (the conventional ASCII spelling).
fn toned_vowel(c: char) -> Option<(char, u8)> {
    let mapped = match c {
        'ā' | 'Ā' => ('a', 1),
        'á' | 'Á' => ('a', 2),
        'ǎ' | 'Ǎ' => ('a', 3),
        'à' | 'À' => ('a', 4),
        'ē' | 'Ē' => ('e', 1),
        'é' | 'É' => ('e', 2),
        'ě' | 'Ě' => ('e', 3),
        'è' | 'È' => ('e', 4),
        'ī' | 'Ī' => ('i', 1),
        'í' | 'Í' => ('i', 2),
        'ǐ' | 'Ǐ' => ('i', 3),
        'ì' | 'Ì' => ('i', 4),
        'ō' | 'Ō' => ('o', 1),
        'ó' | 'Ó' => ('o', 2),
        'ǒ' | 'Ǒ' => ('o', 3),
        'ò' | 'Ò' => ('o', 4),
        'ū' | 'Ū' => ('u', 1),
        'ú' | 'Ú' => ('u', 2),
        'ǔ' | 'Ǔ' => ('u', 3),
        'ù' | 'Ù' => ('u', 4),
        'ǖ' | 'Ǖ' => ('v', 1),
        'ǘ' | 'Ǘ' => ('v', 2),
        'ǚ' | 'Ǚ' => ('v', 3),
        'ǜ' | 'Ǜ' => ('v', 4),
        'ü' | 'Ü' => ('v', NEUTRAL_TONE),
        _ => return None,
    };
    Some(mapped)
}

/// Accumulates one syllable at a time: base letters plus a pending tone.
/// Closing a syllable without tone information emits the neutral tone (5)
/// rather than rejecting the input.
#[derive(Default)]
struct SyllableBuilder {
    letters: String,
    tone: Option<u8>,
}

impl SyllableBuilder {
    fn push_letter(&mut self, c: char) {
        self.letters.extend(c.to_lowercase());
    }

    fn set_tone(&mut self, tone: u8) {
        self.tone = Some(tone);
    }

    /// Close the current syllable, appending `letters + tone_digit` to `out`.
    /// No-op when the buffer is empty (consecutive separators).
    fn flush(&mut self, out: &mut Vec<String>) {
        if !self.letters.is_empty() {
            let tone = self.tone.unwrap_or(NEUTRAL_TONE);
            out.push(format!("{}{}", self.letters, tone));
        }
        self.letters.clear();
        self.tone = None;
    }
}

/// Normalize a pinyin pronunciation hint into space-separated
/// `syllable + tone digit` tokens, e.g. "nǐ hǎo" -> "ni3 hao3".
///
/// Accepts diacritic tone marks ("xiè"), trailing tone digits ("xie4") or a
/// mix of both; already-normalized input passes through unchanged. This never
/// fails: unrecognized characters are dropped and untoned syllables default
/// to the neutral tone.
pub fn normalize(hint: &str) -> String {
    let mut syllables = Vec::new();
    let mut current = SyllableBuilder::default();

    for c in hint.chars() {
        if let Some((base, tone)) = toned_vowel(c) {
            current.push_letter(base);
            current.set_tone(tone);
        } else if c.is_whitespace() {
            current.flush(&mut syllables);
        } else if let Some(digit) = c.to_digit(10) {
            if (1..=5).contains(&digit) {
                current.set_tone(digit as u8);
            }
        } else if c.is_alphabetic() {
            current.push_letter(c);
        }
        // Anything else (punctuation, out-of-range digits) is ignored.
    }
    current.flush(&mut syllables);

    syllables.join(" ")
}

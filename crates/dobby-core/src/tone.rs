//! The closed set of tones a chat can pick for its drafts.

use std::fmt;

/// Tone preference for a chat. Selects which stylistic clause is appended
/// to the system prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Serious,
    Explanatory,
    Meme,
}

impl Tone {
    /// All valid tones, in help-text order.
    pub const ALL: [Tone; 3] = [Tone::Serious, Tone::Explanatory, Tone::Meme];

    /// Parse a tone name, case-insensitively. Returns `None` for anything
    /// outside the closed set.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "serious" => Some(Tone::Serious),
            "explanatory" => Some(Tone::Explanatory),
            "meme" => Some(Tone::Meme),
            _ => None,
        }
    }

    /// Lowercase name, as shown to users and accepted by `parse`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Serious => "serious",
            Tone::Explanatory => "explanatory",
            Tone::Meme => "meme",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tones() {
        assert_eq!(Tone::parse("serious"), Some(Tone::Serious));
        assert_eq!(Tone::parse("explanatory"), Some(Tone::Explanatory));
        assert_eq!(Tone::parse("meme"), Some(Tone::Meme));
    }

    #[test]
    fn test_parse_is_case_insensitive_and_trims() {
        assert_eq!(Tone::parse("MEME"), Some(Tone::Meme));
        assert_eq!(Tone::parse("  Serious "), Some(Tone::Serious));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!(Tone::parse("sarcastic"), None);
        assert_eq!(Tone::parse(""), None);
    }

    #[test]
    fn test_display_round_trips() {
        for tone in Tone::ALL {
            assert_eq!(Tone::parse(tone.as_str()), Some(tone));
        }
    }
}

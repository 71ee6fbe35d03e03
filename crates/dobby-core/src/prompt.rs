//! Prompt assembly for the tweet-drafting request.
//!
//! Pure construction: a fixed persona preamble, a tone clause selected
//! from the closed set, and a literal user instruction asking for three
//! newline-separated options.

use crate::tone::Tone;

/// Fixed persona and output-format preamble.
pub const SYSTEM_BASE: &str = "\
You are Dobby, a witty CT-native mascot co-writing with @sscorpy_.
Output exactly THREE tweet options, each on its own line, no numbering or bullets.
Rules:
1) Max 240 characters per option (keep it tight).
2) No emojis unless the user explicitly asks.
3) Make it sharp, readable, non-generic; avoid filler and clichés.
4) Leverage the chosen tone, but keep Dobby's confident, technical-curious vibe.";

/// System and user instruction pair sent to the completion provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptPair {
    pub system: String,
    pub user: String,
}

/// Tone clause appended to the system prompt.
pub fn tone_instruction(tone: Tone) -> &'static str {
    match tone {
        Tone::Serious => "Tone: serious, concise, direct. No hype, just signal.",
        Tone::Meme => {
            "Tone: meme-forward, punchy phrasing, but still clear. No emojis unless asked."
        }
        Tone::Explanatory => "Tone: explanatory, crisp, slightly bold; CT-friendly.",
    }
}

/// Build the system and user instructions for a topic under a tone.
pub fn build(topic: &str, tone: Tone) -> PromptPair {
    let system = format!("{SYSTEM_BASE}\n{}", tone_instruction(tone));
    let user = format!(
        "Write 3 tweet options about: \"{topic}\". \
         Return ONLY the three options separated by newlines. No headers, no extra text."
    );
    PromptPair { system, user }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_embeds_topic() {
        let pair = build("altcoin rotation", Tone::Explanatory);
        assert!(pair.user.contains("\"altcoin rotation\""));
        assert!(pair.user.contains("3 tweet options"));
    }

    #[test]
    fn test_build_selects_tone_clause() {
        let pair = build("x", Tone::Meme);
        assert!(pair.system.starts_with(SYSTEM_BASE));
        assert!(pair.system.contains("meme-forward"));
        assert!(!pair.system.contains("No hype"));
    }

    #[test]
    fn test_serious_and_explanatory_clauses() {
        assert!(tone_instruction(Tone::Serious).contains("serious, concise"));
        assert!(tone_instruction(Tone::Explanatory).contains("explanatory, crisp"));
    }
}

//! Post-processing of raw completion text into tweet options.
//!
//! The model is asked for three newline-separated options but the format
//! is not guaranteed: prose-style answers are recovered by a sentence
//! split, and a fixed placeholder covers unusable output. The caller
//! always gets between one and three options, each within the length
//! bound.

/// Maximum characters per option.
pub const MAX_OPTION_LEN: usize = 240;

/// Single option returned when no usable text could be extracted.
pub const NO_OUTPUT_PLACEHOLDER: &str = "No output. Try a clearer topic.";

/// Clamp an option to [`MAX_OPTION_LEN`] characters, truncating with a
/// trailing "..." when over. Counts characters, not bytes, so multibyte
/// text is never cut mid-scalar.
pub fn clamp(s: &str) -> String {
    if s.chars().count() <= MAX_OPTION_LEN {
        s.to_string()
    } else {
        let mut out: String = s.chars().take(MAX_OPTION_LEN - 3).collect();
        out.push_str("...");
        out
    }
}

/// Split raw completion text into at most three clamped options.
///
/// Strategy: newline split first; if that yields fewer than three, a
/// sentence split (period followed by whitespace, period kept) replaces
/// it whenever the sentence split finds at least two options — even when
/// the line split already had two. Never returns an empty vec.
pub fn parse_options(raw: &str) -> Vec<String> {
    let lines = split_lines(raw);

    if lines.len() < 3 {
        let sentences = split_sentences(raw);
        if sentences.len() >= 2 {
            return sentences;
        }
    }

    if lines.is_empty() {
        vec![NO_OUTPUT_PLACEHOLDER.to_string()]
    } else {
        lines
    }
}

fn split_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(3)
        .map(clamp)
        .collect()
}

/// Split on whitespace runs preceded by a period, keeping the period with
/// the sentence before it.
fn split_sentences(raw: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut chars = raw.chars().peekable();

    while let Some(c) = chars.next() {
        current.push(c);
        if c == '.' && chars.peek().is_some_and(|n| n.is_whitespace()) {
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }
    let tail = current.trim();
    if !tail.is_empty() {
        sentences.push(tail.to_string());
    }

    sentences.truncate(3);
    sentences.into_iter().map(|s| clamp(&s)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_leaves_short_text_alone() {
        assert_eq!(clamp("short"), "short");
        let exact: String = "x".repeat(240);
        assert_eq!(clamp(&exact), exact);
    }

    #[test]
    fn test_clamp_truncates_with_ellipsis() {
        let long: String = "a".repeat(250);
        let clamped = clamp(&long);
        assert_eq!(clamped.chars().count(), 240);
        assert!(clamped.ends_with("..."));
        assert_eq!(&clamped[..237], &long[..237]);
    }

    #[test]
    fn test_clamp_counts_characters_not_bytes() {
        let long: String = "é".repeat(300);
        let clamped = clamp(&long);
        assert_eq!(clamped.chars().count(), 240);
        assert!(clamped.ends_with("..."));
    }

    #[test]
    fn test_three_clean_lines_pass_through() {
        let opts = parse_options("A.\nB.\nC.");
        assert_eq!(opts, vec!["A.", "B.", "C."]);
    }

    #[test]
    fn test_lines_are_trimmed_and_empties_dropped() {
        let opts = parse_options("  one \n\n two\n\nthree \n");
        assert_eq!(opts, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_extra_lines_are_silently_dropped() {
        let opts = parse_options("1\n2\n3\n4\n5");
        assert_eq!(opts, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_prose_falls_back_to_sentence_split() {
        let opts = parse_options("First option here. Second one follows. Third wraps it up.");
        assert_eq!(
            opts,
            vec![
                "First option here.",
                "Second one follows.",
                "Third wraps it up."
            ]
        );
    }

    #[test]
    fn test_sentence_split_keeps_period_with_sentence() {
        let opts = parse_options("Alpha beta. Gamma delta.");
        assert_eq!(opts, vec!["Alpha beta.", "Gamma delta."]);
    }

    #[test]
    fn test_sentence_split_wins_over_two_lines() {
        // Two usable lines, but the sentence split also finds two:
        // the sentence split takes precedence.
        let raw = "One thing. Another thing.\nTrailing line without period";
        let opts = parse_options(raw);
        assert_eq!(
            opts,
            vec![
                "One thing.",
                "Another thing.",
                "Trailing line without period"
            ]
        );
    }

    #[test]
    fn test_single_line_without_sentences_survives() {
        let opts = parse_options("just one line no periods");
        assert_eq!(opts, vec!["just one line no periods"]);
    }

    #[test]
    fn test_empty_input_yields_placeholder() {
        assert_eq!(parse_options(""), vec![NO_OUTPUT_PLACEHOLDER]);
        assert_eq!(parse_options("   \n \n  "), vec![NO_OUTPUT_PLACEHOLDER]);
    }

    #[test]
    fn test_long_options_are_clamped() {
        let line = "b".repeat(300);
        let raw = format!("{line}\n{line}\n{line}");
        let opts = parse_options(&raw);
        assert_eq!(opts.len(), 3);
        for opt in opts {
            assert_eq!(opt.chars().count(), 240);
            assert!(opt.ends_with("..."));
        }
    }

    #[test]
    fn test_never_returns_empty_or_oversized() {
        for raw in ["", "a", "a.\nb.", "a. b. c. d. e.", "x\ny\nz\nw"] {
            let opts = parse_options(raw);
            assert!((1..=3).contains(&opts.len()), "raw: {raw:?}");
            for opt in opts {
                assert!(opt.chars().count() <= MAX_OPTION_LEN);
            }
        }
    }
}

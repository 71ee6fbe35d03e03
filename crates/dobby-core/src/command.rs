//! Slash-command parsing for incoming Telegram text.

/// A parsed bot command. Anything that is not a known `/` command becomes
/// `Unrecognized`, which the dispatcher silently drops.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Help,
    /// `/style [tone]` — show tone help, or set the tone for this chat.
    Style(Option<String>),
    /// `/dobby [topic]` — draft three tweet options, or show usage.
    Draft(Option<String>),
    Ping,
    Unrecognized,
}

impl Command {
    /// Parse a command from message text. The command word is matched
    /// case-insensitively and an `@botname` suffix is stripped
    /// (Telegram appends it in group chats, e.g. "/dobby@dobby_bot").
    pub fn parse(text: &str) -> Self {
        let trimmed = text.trim();
        let mut parts = trimmed.splitn(2, char::is_whitespace);
        let first = parts.next().unwrap_or("");
        let arg = parts
            .next()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(String::from);

        let word = first.split('@').next().unwrap_or(first).to_ascii_lowercase();
        match word.as_str() {
            "/start" => Self::Start,
            "/help" => Self::Help,
            "/style" => Self::Style(arg),
            "/dobby" => Self::Draft(arg),
            "/ping" => Self::Ping,
            _ => Self::Unrecognized,
        }
    }
}

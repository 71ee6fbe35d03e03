//! Gateway — the event loop connecting the Telegram channel to the
//! completion provider.
//!
//! Every incoming message is handled in its own task so a slow completion
//! call never holds up other chats; the tone store is the only shared
//! state and each get/set on it is atomic.


use dobby_core::{
    command::Command,
    error::DobbyError,
    message::{IncomingMessage, OutgoingMessage},
    options, prompt,
    store::ToneStore,
    tone::Tone,
    traits::{Channel, Provider},
};
use std::sync::Arc;
use tracing::{error, info, warn};

pub(crate) const GREETING: &str = "Hey, I'm Dobby.\n\n\
Use:\n\
/dobby <topic>  → get 3 tweet options\n\
/style <tone>   → set tone (serious | explanatory | meme)\n\n\
Examples:\n\
/dobby ritual + sentient synergy\n\
/dobby altcoin rotation on solana\n\
/style meme";

pub(crate) const HELP_TEXT: &str = "Help:\n\n\
/dobby <topic>\n\
  • Generates 3 CT-ready tweets (≤240 chars each).\n\
/style <serious|explanatory|meme>\n\
  • Sets the default tone for this chat.";

pub(crate) const STYLE_HELP: &str = "Choose a tone for Dobby:\n\
- serious\n\
- explanatory\n\
- meme\n\n\
Usage:\n\
/style serious\n\
/style explanatory\n\
/style meme";

pub(crate) const DRAFT_USAGE: &str = "Usage:\n\
/dobby <topic>\n\n\
Example:\n\
/dobby Why ROMA + Dobby qualifies for Sentient AGI";

pub(crate) const PONG: &str = "pong";

/// Fixed user-facing message for any upstream generation failure.
pub(crate) const APOLOGY: &str = "Dobby tripped on a robe. Try again soon.";

/// The gateway that routes messages between the channel and the provider.
pub struct Gateway {
    provider: Arc<dyn Provider>,
    channel: Arc<dyn Channel>,
    store: ToneStore,
}

impl Gateway {
    pub fn new(provider: Arc<dyn Provider>, channel: Arc<dyn Channel>, store: ToneStore) -> Self {
        Self {
            provider,
            channel,
            store,
        }
    }

    /// Run the main event loop until the channel closes.
    pub async fn run(self) -> anyhow::Result<()> {
        let mut rx = self
            .channel
            .start()
            .await
            .map_err(|e| anyhow::anyhow!("failed to start channel {}: {e}", self.channel.name()))?;

        info!(
            "Dobby gateway running | provider: {} | channel: {}",
            self.provider.name(),
            self.channel.name(),
        );

        while let Some(msg) = rx.recv().await {
            let provider = self.provider.clone();
            let channel = self.channel.clone();
            let store = self.store.clone();

            tokio::spawn(async move {
                let chat_id = msg.chat_id;
                if let Some(reply) =
                    handle_message(&msg, provider.as_ref(), channel.as_ref(), &store).await
                {
                    let outgoing = OutgoingMessage {
                        chat_id,
                        text: reply,
                    };
                    if let Err(e) = channel.send(outgoing).await {
                        error!("failed to send reply to chat {chat_id}: {e}");
                    }
                }
            });
        }

        self.channel.stop().await?;
        Ok(())
    }
}

/// Dispatch one incoming message. Returns the reply text, or `None` when
/// the message should be silently ignored. All provider failures are
/// absorbed here; nothing propagates to the caller.
pub(crate) async fn handle_message(
    msg: &IncomingMessage,
    provider: &dyn Provider,
    channel: &dyn Channel,
    store: &ToneStore,
) -> Option<String> {
    match Command::parse(&msg.text) {
        Command::Start => Some(GREETING.to_string()),
        Command::Help => Some(HELP_TEXT.to_string()),
        Command::Ping => Some(PONG.to_string()),
        Command::Style(None) => Some(STYLE_HELP.to_string()),
        Command::Style(Some(raw)) => match Tone::parse(&raw) {
            Some(tone) => {
                store.set(msg.chat_id, tone);
                Some(format!("Tone set to {tone} for this chat."))
            }
            None => Some(format!(
                "Unknown tone \"{raw}\". Valid: serious, explanatory, meme"
            )),
        },
        Command::Draft(None) => Some(DRAFT_USAGE.to_string()),
        Command::Draft(Some(topic)) => {
            let tone = store.get(msg.chat_id);

            if let Err(e) = channel.send_typing(msg.chat_id).await {
                warn!("typing indicator failed for chat {}: {e}", msg.chat_id);
            }

            match generate(provider, &topic, tone).await {
                Ok(opts) => Some(format!("Dobby drafts ({tone}):\n\n{}", opts.join("\n\n"))),
                Err(e) => {
                    error!("draft generation failed for chat {}: {e}", msg.chat_id);
                    Some(APOLOGY.to_string())
                }
            }
        }
        Command::Unrecognized => None,
    }
}

/// Build the prompt, call the provider, and normalize the raw completion
/// into one to three clamped options.
pub async fn generate(
    provider: &dyn Provider,
    topic: &str,
    tone: Tone,
) -> Result<Vec<String>, DobbyError> {
    let pair = prompt::build(topic, tone);
    let raw = provider.complete(&pair.system, &pair.user).await?;
    Ok(options::parse_options(&raw))
}

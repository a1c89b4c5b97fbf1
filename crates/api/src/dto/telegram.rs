use safubot_application::ports::ReplyTarget;
use serde::Deserialize;

/// The subset of a Telegram `Update` the bot reads.
#[derive(Deserialize, Debug)]
pub struct Update {
    pub update_id: i64,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Deserialize, Debug)]
pub struct Message {
    pub message_id: i64,
    pub chat: Chat,
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Chat {
    pub id: i64,
}

impl Update {
    /// Where to reply, and the message text, for plain text messages.
    pub fn text_message(&self) -> Option<(ReplyTarget, &str)> {
        let message = self.message.as_ref()?;
        let text = message.text.as_deref()?;
        let target = ReplyTarget {
            chat_id: message.chat.id,
            message_id: message.message_id,
        };
        Some((target, text))
    }
}

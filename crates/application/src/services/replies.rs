//! Reply texts sent back to the chat.

use safubot_domain::{BotCommand, EntityKind, LookupResult};

pub const WELCOME_MESSAGE: &str = "Welcome to SafuBot!

Available commands:
/address <address> - Check if a cryptocurrency address is associated with scams.
/domain <domain> - Check if a domain is associated with scams.
/ask <question> - Ask a question about security or past exploits.
/help - Display this help message.";

pub const STORE_UNAVAILABLE_MESSAGE: &str =
    "Sorry, the scam database is unavailable right now. Please try again later.";

pub const ASK_FAILED_MESSAGE: &str =
    "Sorry, I couldn't get an answer right now. Please try again later.";

/// Usage prompt for a command sent without its required argument.
pub fn usage(command: BotCommand) -> Option<&'static str> {
    match command {
        BotCommand::Address => {
            Some("Please provide an address to check. Usage: /address <address>")
        }
        BotCommand::Domain => Some("Please provide a domain to check. Usage: /domain <domain>"),
        BotCommand::Ask => Some("Please provide a question. Usage: /ask <your question>"),
        BotCommand::Start | BotCommand::Help => None,
    }
}

fn plural(kind: EntityKind) -> &'static str {
    match kind {
        EntityKind::Address => "addresses",
        EntityKind::Domain => "domains",
    }
}

pub fn render_lookup(result: &LookupResult) -> String {
    let kind = result.kind;
    if !result.is_flagged {
        return format!(
            "✅ The {} {} is not found in our scam database.",
            kind, result.subject
        );
    }

    let counterpart = plural(kind.counterpart());
    let mut reply = format!(
        "⚠️ WARNING: The {} {} is associated with scams.\n",
        kind, result.subject
    );
    if result.has_associations() {
        reply.push_str(&format!(
            "Associated scam {}: {}",
            counterpart,
            result.associated.join(", ")
        ));
    } else {
        reply.push_str(&format!(
            "No specific {} are associated with this {} in our database.",
            counterpart, kind
        ));
    }
    reply
}

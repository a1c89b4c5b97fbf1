use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotCommand {
    Start,
    Help,
    Address,
    Domain,
    Ask,
}

impl BotCommand {
    pub fn to_str(&self) -> &'static str {
        match self {
            BotCommand::Start => "start",
            BotCommand::Help => "help",
            BotCommand::Address => "address",
            BotCommand::Domain => "domain",
            BotCommand::Ask => "ask",
        }
    }
}

impl FromStr for BotCommand {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(BotCommand::Start),
            "help" => Ok(BotCommand::Help),
            "address" => Ok(BotCommand::Address),
            "domain" => Ok(BotCommand::Domain),
            "ask" => Ok(BotCommand::Ask),
            _ => Err(()),
        }
    }
}

/// Text following the command token. A command sent with nothing (or only
/// whitespace) after it is `Absent`, never an empty `Present`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandArgument {
    Present(String),
    Absent,
}

impl CommandArgument {
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(arg) if !arg.is_empty() => CommandArgument::Present(arg.to_string()),
            _ => CommandArgument::Absent,
        }
    }

    pub fn as_deref(&self) -> Option<&str> {
        match self {
            CommandArgument::Present(arg) => Some(arg),
            CommandArgument::Absent => None,
        }
    }
}

/// A `/command[@bot] [argument]` message split into its parts.
///
/// `name` is lower-cased with the leading slash and any `@botname` suffix
/// removed. It is kept as text so unknown commands can still be recognised
/// as commands (and ignored) by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    pub name: String,
    pub argument: CommandArgument,
}

impl ParsedCommand {
    /// Returns `None` when the text is not a command at all.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim_start();
        let body = text.strip_prefix('/')?;

        let (token, rest) = match body.find(char::is_whitespace) {
            Some(idx) => (&body[..idx], Some(&body[idx..])),
            None => (body, None),
        };

        let name = token.split('@').next().unwrap_or_default();
        if name.is_empty() {
            return None;
        }

        Some(Self {
            name: name.to_lowercase(),
            argument: CommandArgument::from_raw(rest),
        })
    }

    pub fn command(&self) -> Option<BotCommand> {
        self.name.parse().ok()
    }
}

#![warn(clippy::uninlined_format_args)]

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, tag_no_case},
    character::complete::{satisfy, space0, space1, u64},
    combinator::{all_consuming, map_opt, not, rest},
    sequence::{preceded, terminated},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendRef<'a> {
    Id(u64),
    Name(&'a str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayerChoice {
    User,
    Friend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    List,
    ToggleAddFriend,
    Name(&'a str),
    Avatar(&'a str),
    Select(FriendRef<'a>),
    Close,
    Bill(&'a str),
    Expense(&'a str),
    Payer(PayerChoice),
    Submit,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("empty input")]
    Empty,
    #[error("unknown command '{word}'")]
    UnknownCommand { word: String },
    #[error("usage: {usage}")]
    Usage { usage: &'static str },
}

const USAGES: &[(&str, &str)] = &[
    ("list", "list"),
    ("add", "add"),
    ("name", "name <text>"),
    ("avatar", "avatar <url>"),
    ("image", "image <url>"),
    ("select", "select <id|name>"),
    ("close", "close"),
    ("deselect", "deselect"),
    ("bill", "bill <amount>"),
    ("expense", "expense <amount>"),
    ("payer", "payer user|friend"),
    ("submit", "submit"),
    ("help", "help"),
    ("quit", "quit"),
    ("exit", "exit"),
];

/// A whole word, matched case-insensitively.
fn keyword<'a>(
    word: &'static str,
) -> impl Parser<&'a str, Output = &'a str, Error = nom::error::Error<&'a str>> {
    terminated(tag_no_case(word), not(satisfy(|c: char| !c.is_whitespace())))
}

// Everything after the keyword, trimmed; must be non-empty
fn argument(input: &str) -> IResult<&str, &str> {
    map_opt(preceded(space1, rest), |arg: &str| {
        let arg = arg.trim();
        (!arg.is_empty()).then_some(arg)
    })
    .parse(input)
}

fn friend_ref(arg: &str) -> FriendRef<'_> {
    match all_consuming(u64::<&str, nom::error::Error<&str>>).parse(arg) {
        Ok((_, id)) => FriendRef::Id(id),
        Err(_) => FriendRef::Name(arg),
    }
}

fn payer_choice(input: &str) -> IResult<&str, PayerChoice> {
    alt((
        alt((keyword("user"), keyword("you"), keyword("me"))).map(|_| PayerChoice::User),
        keyword("friend").map(|_| PayerChoice::Friend),
    ))
    .parse(input)
}

fn command(input: &str) -> IResult<&str, Command<'_>> {
    alt((
        keyword("list").map(|_| Command::List),
        keyword("add").map(|_| Command::ToggleAddFriend),
        (keyword("name"), argument).map(|(_, name)| Command::Name(name)),
        (alt((keyword("avatar"), keyword("image"))), argument)
            .map(|(_, avatar)| Command::Avatar(avatar)),
        (keyword("select"), argument).map(|(_, arg)| Command::Select(friend_ref(arg))),
        alt((keyword("close"), keyword("deselect"))).map(|_| Command::Close),
        (keyword("bill"), argument).map(|(_, amount)| Command::Bill(amount)),
        (keyword("expense"), argument).map(|(_, amount)| Command::Expense(amount)),
        (keyword("payer"), space1, payer_choice).map(|(_, _, payer)| Command::Payer(payer)),
        keyword("submit").map(|_| Command::Submit),
        alt((keyword("help"), tag("?"))).map(|_| Command::Help),
        alt((keyword("quit"), keyword("exit"))).map(|_| Command::Quit),
    ))
    .parse(input)
}

/// Parses one line of terminal input.
pub fn parse_command(line: &str) -> Result<Command<'_>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(ParseError::Empty);
    }

    match all_consuming(terminated(command, space0)).parse(line) {
        Ok((_, command)) => Ok(command),
        Err(_) => Err(diagnose(line)),
    }
}

fn diagnose(line: &str) -> ParseError {
    let word = line.split_whitespace().next().unwrap_or(line);
    USAGES
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(word))
        .map(|&(_, usage)| ParseError::Usage { usage })
        .unwrap_or_else(|| ParseError::UnknownCommand {
            word: word.to_string(),
        })
}

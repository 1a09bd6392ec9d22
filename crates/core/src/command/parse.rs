//! Parsing of `/metashop` command lines.

use core::str::SplitWhitespace;

use uuid::Uuid;

use super::CommandError;
use crate::text::levenshtein_distance;
use crate::types::Price;

/// Aliases accepted in front of the subcommand.
const ROOT_ALIASES: &[&str] = &["metashop", "ms"];

/// Subcommands with their argument synopsis and a short description.
pub const USAGE: &[(&str, &str, &str)] = &[
    (
        "show",
        "<shop> [target]",
        "Open a shop for yourself or another player",
    ),
    ("list", "", "List every shop"),
    ("select", "<shop>", "Select a shop to edit"),
    (
        "add",
        "<index> <price>",
        "Put the item in your hand into a slot",
    ),
    ("remove", "<index>", "Clear a slot"),
    ("help", "", "Show this help"),
];

/// Largest edit distance at which an unknown subcommand gets a suggestion.
const SUGGESTION_DISTANCE: usize = 2;

/// A parsed shop command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopCommand {
    /// Open `shop` for `target`, or for the sender when no target is given.
    Show {
        shop: String,
        target: Option<Uuid>,
    },
    List,
    Select { shop: String },
    /// Put the sender's held item in slot `index` at `price`.
    Add { index: usize, price: Price },
    Remove { index: usize },
    Help,
}

impl ShopCommand {
    /// Parse a command line such as `metashop add 4 12.5`.
    ///
    /// A leading `/`, `metashop` or `ms` is optional and the subcommand is
    /// matched without regard to case.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] for an empty line, an unknown subcommand, or
    /// missing, malformed or surplus arguments.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let mut args = line.trim().trim_start_matches('/').split_whitespace();
        let mut subcommand = args.next().ok_or(CommandError::Empty)?;
        if ROOT_ALIASES
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(subcommand))
        {
            subcommand = args.next().ok_or(CommandError::Empty)?;
        }

        let command = match subcommand.to_ascii_lowercase().as_str() {
            "show" | "open" => Self::Show {
                shop: required(&mut args, "shop")?.to_owned(),
                target: args.next().map(parse_target).transpose()?,
            },
            "list" => Self::List,
            "select" => Self::Select {
                shop: required(&mut args, "shop")?.to_owned(),
            },
            "add" => Self::Add {
                index: parse_index(required(&mut args, "index")?)?,
                price: parse_price(required(&mut args, "price")?)?,
            },
            "remove" => Self::Remove {
                index: parse_index(required(&mut args, "index")?)?,
            },
            "help" | "?" => Self::Help,
            _ => {
                return Err(CommandError::UnknownSubcommand {
                    input: subcommand.to_owned(),
                    suggestion: suggest_subcommand(subcommand),
                });
            }
        };

        match args.next() {
            Some(extra) => Err(CommandError::UnexpectedArgument(extra.to_owned())),
            None => Ok(command),
        }
    }

    /// The subcommand name, as listed in [`USAGE`].
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Show { .. } => "show",
            Self::List => "list",
            Self::Select { .. } => "select",
            Self::Add { .. } => "add",
            Self::Remove { .. } => "remove",
            Self::Help => "help",
        }
    }

    /// Whether only a player may run this command.
    #[must_use]
    pub const fn players_only(&self) -> bool {
        matches!(
            self,
            Self::Select { .. } | Self::Add { .. } | Self::Remove { .. }
        )
    }
}

fn required<'a>(
    args: &mut SplitWhitespace<'a>,
    name: &'static str,
) -> Result<&'a str, CommandError> {
    args.next().ok_or(CommandError::MissingArgument(name))
}

fn parse_index(raw: &str) -> Result<usize, CommandError> {
    raw.parse::<usize>()
        .map_err(|_| CommandError::invalid("index", format!("`{raw}` is not a slot number")))
}

fn parse_price(raw: &str) -> Result<Price, CommandError> {
    raw.parse::<Price>()
        .map_err(|err| CommandError::invalid("price", err.to_string()))
}

fn parse_target(raw: &str) -> Result<Uuid, CommandError> {
    Uuid::parse_str(raw)
        .map_err(|_| CommandError::invalid("target", format!("`{raw}` is not a player id")))
}

fn suggest_subcommand(input: &str) -> Option<&'static str> {
    let input = input.to_ascii_lowercase();
    USAGE
        .iter()
        .map(|(name, _, _)| (levenshtein_distance(&input, name), *name))
        .filter(|(distance, _)| *distance <= SUGGESTION_DISTANCE)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, name)| name)
}

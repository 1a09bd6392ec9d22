//! Interactive console and script runner.
//!
//! Each input line is either a console directive or a `/metashop` command run
//! as the console's player.
//!
//! # Directives
//!
//! - `hold <MATERIAL> [amount]` - put an item in the player's hand
//! - `hold air` - empty the player's hand
//! - `console <command>` - run a command as the server console
//! - `quit` / `exit` - leave the console
//!
//! Blank lines and lines starting with `#` are ignored.

use std::path::Path;

use metashop_core::command::{CommandContext, CommandError, Player, Recipient, Response, Sender};
use metashop_core::text::ChatColor;
use metashop_core::{ItemStack, Messages, SessionRegistry, ShopRegistry};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::render::{ColorMode, shop_listing};

/// What handling a line produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    Output(Vec<String>),
    Quit,
}

/// The state a console keeps between lines.
#[derive(Debug)]
pub struct Console {
    shops: ShopRegistry,
    sessions: SessionRegistry,
    messages: Messages,
    player: Player,
    mode: ColorMode,
}

impl Console {
    #[must_use]
    pub fn new(shops: ShopRegistry, messages: Messages, player: Player, mode: ColorMode) -> Self {
        Self {
            shops,
            sessions: SessionRegistry::new(),
            messages,
            player,
            mode,
        }
    }

    #[must_use]
    pub const fn shops(&self) -> &ShopRegistry {
        &self.shops
    }

    #[must_use]
    pub const fn player(&self) -> &Player {
        &self.player
    }

    /// Handle one input line.
    pub fn handle_line(&mut self, line: &str) -> LineOutcome {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return LineOutcome::Output(Vec::new());
        }

        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));
        match word.to_ascii_lowercase().as_str() {
            "quit" | "exit" => LineOutcome::Quit,
            "hold" => LineOutcome::Output(self.hold(rest)),
            "console" => LineOutcome::Output(self.run(&Sender::Console, rest)),
            _ => {
                let sender = Sender::Player(self.player.clone());
                LineOutcome::Output(self.run(&sender, line))
            }
        }
    }

    fn hold(&mut self, args: &str) -> Vec<String> {
        let mut args = args.split_whitespace();
        let Some(material) = args.next() else {
            return vec![self.error_line("usage: hold <MATERIAL> [amount]")];
        };
        let amount = match args.next().map(str::parse::<u32>).transpose() {
            Ok(amount) => amount.unwrap_or(1),
            Err(_) => return vec![self.error_line("amount must be a whole number")],
        };

        let item = ItemStack::new(material.to_ascii_uppercase()).with_amount(amount);
        if item.is_air() {
            self.player.held_item = None;
            return vec![self.info_line("Your hand is now empty.")];
        }
        let line = self.info_line(&format!("You are holding {amount} x {}.", item.label()));
        self.player.held_item = Some(item);
        vec![line]
    }

    fn run(&mut self, sender: &Sender, line: &str) -> Vec<String> {
        let result = CommandContext::new(&mut self.shops, &mut self.sessions, &self.messages)
            .dispatch(sender, line);
        match result {
            Ok(response) => self.present(&response),
            Err(err) => {
                debug!(error = %err, "Command rejected");
                let mut lines = vec![self.error_line(&err.to_string())];
                if let CommandError::UnknownSubcommand {
                    suggestion: Some(suggestion),
                    ..
                } = err
                {
                    lines.push(self.info_line(&format!("Did you mean `{suggestion}`?")));
                }
                lines
            }
        }
    }

    fn present(&self, response: &Response) -> Vec<String> {
        let mut lines = Vec::new();
        for reply in &response.replies {
            let text = self.mode.apply(&reply.text);
            match reply.recipient {
                Recipient::Sender => lines.push(text),
                Recipient::Player(id) => lines.push(format!("[to {id}] {text}")),
            }
        }
        if let Some(open) = &response.open
            && let Some(shop) = self.shops.get(&open.shop_id)
        {
            if open.target != self.player.id {
                lines.push(format!("[menu for {}]", open.target));
            }
            lines.extend(shop_listing(shop, self.mode));
        }
        lines
    }

    fn info_line(&self, text: &str) -> String {
        self.mode.apply(&format!("{}{text}", ChatColor::Gray))
    }

    fn error_line(&self, text: &str) -> String {
        self.mode.apply(&format!("{}{text}", ChatColor::Red))
    }
}

/// Read lines from stdin until end of input or `quit`.
///
/// # Errors
///
/// Returns an error if stdin cannot be read or stdout cannot be written.
pub async fn interactive(mut console: Console) -> Result<(), Box<dyn std::error::Error>> {
    info!(player = %console.player().id, shops = console.shops().len(), "Console ready");
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    let greeting = ["Type `help` for commands, `quit` to leave.".to_owned()];
    write_lines(&mut stdout, &greeting).await?;
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;
        let Some(line) = lines.next_line().await? else {
            break;
        };
        match console.handle_line(&line) {
            LineOutcome::Output(output) => write_lines(&mut stdout, &output).await?,
            LineOutcome::Quit => break,
        }
    }
    info!("Console closed");
    Ok(())
}

/// Run every line of the script at `path`.
///
/// # Errors
///
/// Returns an error if the script cannot be read or stdout cannot be written.
pub async fn script(mut console: Console, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    info!(path = %path.display(), "Running script");
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|err| format!("Failed to read {}: {err}", path.display()))?;
    let mut stdout = tokio::io::stdout();

    for (number, line) in content.lines().enumerate() {
        match console.handle_line(line) {
            LineOutcome::Output(output) => write_lines(&mut stdout, &output).await?,
            LineOutcome::Quit => {
                warn!(line = number + 1, "Script quit before its end");
                break;
            }
        }
    }
    Ok(())
}

/// Write `lines` to stdout, one per line.
pub async fn write_lines(
    stdout: &mut tokio::io::Stdout,
    lines: &[String],
) -> Result<(), std::io::Error> {
    for line in lines {
        stdout.write_all(line.as_bytes()).await?;
        stdout.write_all(b"\n").await?;
    }
    stdout.flush().await
}

#[cfg(test)]
mod tests {
    use metashop_core::Shop;
    use uuid::Uuid;

    use super::*;

    fn console() -> Console {
        let shops = [Shop::new("weapons", "<red>Weapons").with_size(9)]
            .into_iter()
            .collect();
        Console::new(
            shops,
            Messages::default(),
            Player::new(Uuid::new_v4(), "Steve"),
            ColorMode::Plain,
        )
    }

    fn output(console: &mut Console, line: &str) -> Vec<String> {
        match console.handle_line(line) {
            LineOutcome::Output(lines) => lines,
            LineOutcome::Quit => panic!("unexpected quit on {line:?}"),
        }
    }

    #[test]
    fn test_comments_and_quit() {
        let mut console = console();
        assert_eq!(output(&mut console, "# setup"), Vec::<String>::new());
        assert_eq!(console.handle_line("QUIT"), LineOutcome::Quit);
    }

    #[test]
    fn test_edit_flow() {
        let mut console = console();
        output(&mut console, "select Weapons");
        output(&mut console, "hold iron_sword");
        let added = output(&mut console, "add 2 25");
        assert_eq!(added, ["Added item to slot 2 for 25."]);

        let shop = console.shops().get("weapons").expect("weapons exists");
        let slot = shop.item(2).expect("slot 2 filled");
        assert_eq!(slot.item.material, "IRON_SWORD");

        output(&mut console, "remove 2");
        assert!(
            console
                .shops()
                .get("weapons")
                .is_some_and(|shop| shop.item(2).is_none())
        );
    }

    #[test]
    fn test_hold_air_empties_hand() {
        let mut console = console();
        output(&mut console, "hold stone 3");
        assert_eq!(
            console.player().held_item.as_ref().map(|item| item.amount),
            Some(3)
        );
        output(&mut console, "hold air");
        assert!(console.player().held_item.is_none());
    }

    #[test]
    fn test_show_renders_listing() {
        let mut console = console();
        let lines = output(&mut console, "show weapons");
        assert_eq!(
            lines.first().map(String::as_str),
            Some("Opened weapons for yourself.")
        );
        assert_eq!(
            lines.get(1).map(String::as_str),
            Some("Weapons (weapons, 0 of 9 slots used)")
        );
    }

    #[test]
    fn test_errors_are_reported_not_fatal() {
        let mut console = console();
        let lines = output(&mut console, "lsit");
        assert_eq!(lines, ["unknown subcommand `lsit`", "Did you mean `list`?"]);
        let lines = output(&mut console, "console select weapons");
        assert_eq!(lines, ["only players can use `select`"]);
    }
}

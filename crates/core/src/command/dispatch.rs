//! Running parsed commands against the shop and session registries.

use tracing::debug;
use uuid::Uuid;

use super::{CommandError, ShopCommand, USAGE};
use crate::messages::{Messages, render};
use crate::registry::{SessionRegistry, ShopRegistry};
use crate::text::colorize;
use crate::types::{ItemStack, Price, ShopItem};

/// Largest edit distance at which an unknown shop name gets a suggestion.
const SHOP_SUGGESTION_DISTANCE: usize = 3;

/// A player issuing commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub id: Uuid,
    pub name: String,
    /// The stack in the player's main hand, if any.
    pub held_item: Option<ItemStack>,
}

impl Player {
    #[must_use]
    pub fn new(id: Uuid, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            held_item: None,
        }
    }

    #[must_use]
    pub fn holding(mut self, item: ItemStack) -> Self {
        self.held_item = Some(item);
        self
    }
}

/// Who issued a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    Console,
    Player(Player),
}

impl Sender {
    #[must_use]
    pub const fn player_id(&self) -> Option<Uuid> {
        match self {
            Self::Console => None,
            Self::Player(player) => Some(player.id),
        }
    }
}

/// Who a reply is addressed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recipient {
    Sender,
    Player(Uuid),
}

/// A colorized line for one recipient.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub recipient: Recipient,
    pub text: String,
}

/// A request for the host to show a shop menu to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenShop {
    pub shop_id: String,
    pub target: Uuid,
}

/// What a command produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Response {
    pub replies: Vec<Reply>,
    pub open: Option<OpenShop>,
}

impl Response {
    fn tell(&mut self, recipient: Recipient, text: String) {
        self.replies.push(Reply { recipient, text });
    }

    fn to_sender(text: String) -> Self {
        let mut response = Self::default();
        response.tell(Recipient::Sender, text);
        response
    }

    /// Replies addressed to the sender, in order.
    pub fn sender_lines(&self) -> impl Iterator<Item = &str> {
        self.replies
            .iter()
            .filter(|reply| reply.recipient == Recipient::Sender)
            .map(|reply| reply.text.as_str())
    }
}

/// Everything a command may read or change.
#[derive(Debug)]
pub struct CommandContext<'a> {
    pub shops: &'a mut ShopRegistry,
    pub sessions: &'a mut SessionRegistry,
    pub messages: &'a Messages,
}

impl<'a> CommandContext<'a> {
    #[must_use]
    pub const fn new(
        shops: &'a mut ShopRegistry,
        sessions: &'a mut SessionRegistry,
        messages: &'a Messages,
    ) -> Self {
        Self {
            shops,
            sessions,
            messages,
        }
    }

    /// Parse `line` and run it for `sender`.
    ///
    /// # Errors
    ///
    /// Returns a [`CommandError`] when the line does not parse or the command
    /// cannot run for this sender.
    pub fn dispatch(&mut self, sender: &Sender, line: &str) -> Result<Response, CommandError> {
        let command = ShopCommand::parse(line)?;
        self.execute(sender, command)
    }

    /// Run `command` for `sender`.
    ///
    /// # Errors
    ///
    /// Returns [`CommandError::PlayersOnly`] when the console runs an editing
    /// command, [`CommandError::MissingArgument`] when the console opens a shop
    /// without a target, and [`CommandError::SlotOutOfRange`] for a slot index
    /// past the selected shop's size.
    pub fn execute(
        &mut self,
        sender: &Sender,
        command: ShopCommand,
    ) -> Result<Response, CommandError> {
        debug!(command = command.name(), player = ?sender.player_id(), "Running shop command");

        let player = match sender {
            Sender::Player(player) => Some(player),
            Sender::Console if command.players_only() => {
                return Err(CommandError::PlayersOnly(command.name()));
            }
            Sender::Console => None,
        };

        match (command, player) {
            (ShopCommand::Show { shop, target }, _) => self.show(sender, &shop, target),
            (ShopCommand::List, _) => Ok(self.list()),
            (ShopCommand::Help, _) => Ok(Self::help()),
            (ShopCommand::Select { shop }, Some(player)) => Ok(self.select(player, &shop)),
            (ShopCommand::Add { index, price }, Some(player)) => self.add(player, index, price),
            (ShopCommand::Remove { index }, Some(player)) => self.remove(player, index),
            (command, None) => Err(CommandError::PlayersOnly(command.name())),
        }
    }

    fn show(
        &self,
        sender: &Sender,
        name: &str,
        target: Option<Uuid>,
    ) -> Result<Response, CommandError> {
        let target = target
            .or_else(|| sender.player_id())
            .ok_or(CommandError::MissingArgument("target"))?;
        let target_label = if sender.player_id() == Some(target) {
            "yourself".to_owned()
        } else {
            target.to_string()
        };

        let Some(shop) = self.shops.get(name) else {
            let mut response = Response::to_sender(render(
                &self.messages.unable_to_open_sender,
                &[("%shop%", name)],
            ));
            self.tell_suggestion(&mut response, name);
            if sender.player_id() != Some(target) {
                response.tell(
                    Recipient::Player(target),
                    render(
                        &self.messages.unable_to_open_receiver,
                        &[("%shop%", name)],
                    ),
                );
            }
            return Ok(response);
        };

        debug!(shop = shop.id(), %target, "Opening shop");
        let mut response = Response::to_sender(render(
            &self.messages.successful_open,
            &[
                ("%shop%", shop.id()),
                ("%target%", target_label.as_str()),
            ],
        ));
        response.open = Some(OpenShop {
            shop_id: shop.id().to_owned(),
            target,
        });
        Ok(response)
    }

    fn list(&self) -> Response {
        let mut response = Response::to_sender(render(&self.messages.list_header, &[]));
        for shop in self.shops.all() {
            let name = colorize(shop.name());
            response.tell(
                Recipient::Sender,
                render(
                    &self.messages.list_entry,
                    &[("%shop%", shop.id()), ("%name%", name.as_str())],
                ),
            );
        }
        response
    }

    fn help() -> Response {
        let mut response = Response::default();
        for (name, args, description) in USAGE {
            let synopsis = if args.is_empty() {
                format!("/metashop {name}")
            } else {
                format!("/metashop {name} {args}")
            };
            response.tell(
                Recipient::Sender,
                render(
                    "<gold>%synopsis% <gray>- %description%",
                    &[
                        ("%synopsis%", synopsis.as_str()),
                        ("%description%", *description),
                    ],
                ),
            );
        }
        response
    }

    fn select(&mut self, player: &Player, name: &str) -> Response {
        let Some(shop) = self.shops.get(name) else {
            let mut response = Response::to_sender(render(
                &self.messages.unable_to_select_shop,
                &[("%shop%", name)],
            ));
            self.tell_suggestion(&mut response, name);
            return response;
        };

        let shop_id = shop.id().to_owned();
        self.sessions.select(player.id, shop_id.as_str());
        debug!(player = %player.id, shop = %shop_id, "Selected shop for editing");
        Response::to_sender(render(
            &self.messages.successful_shop_selection,
            &[("%shop%", shop_id.as_str())],
        ))
    }

    fn add(
        &mut self,
        player: &Player,
        index: usize,
        price: Price,
    ) -> Result<Response, CommandError> {
        let Some(shop_id) = self.sessions.selected_shop(&player.id).map(str::to_owned) else {
            return Ok(Response::to_sender(render(&self.messages.no_session, &[])));
        };
        let Some(item) = player.held_item.as_ref().filter(|item| !item.is_air()) else {
            return Ok(Response::to_sender(render(&self.messages.unsupported_item, &[])));
        };
        let Some(shop) = self.shops.get_mut(&shop_id) else {
            return Ok(Response::to_sender(render(
                &self.messages.shop_does_not_exist,
                &[("%shop%", shop_id.as_str())],
            )));
        };
        if !shop.contains_slot(index) {
            return Err(CommandError::SlotOutOfRange {
                shop: shop_id,
                index,
                size: shop.size(),
            });
        }

        shop.set_item(index, Some(ShopItem::new(item.clone(), price)));
        debug!(shop = %shop_id, index, %price, material = %item.material, "Added shop item");
        let (index, price) = (index.to_string(), price.to_string());
        Ok(Response::to_sender(render(
            &self.messages.successful_add_item,
            &[
                ("%shop%", shop_id.as_str()),
                ("%index%", index.as_str()),
                ("%price%", price.as_str()),
            ],
        )))
    }

    fn remove(&mut self, player: &Player, index: usize) -> Result<Response, CommandError> {
        let Some(shop_id) = self.sessions.selected_shop(&player.id).map(str::to_owned) else {
            return Ok(Response::to_sender(render(&self.messages.no_session, &[])));
        };
        let Some(shop) = self.shops.get_mut(&shop_id) else {
            return Ok(Response::to_sender(render(
                &self.messages.shop_does_not_exist,
                &[("%shop%", shop_id.as_str())],
            )));
        };
        if !shop.contains_slot(index) {
            return Err(CommandError::SlotOutOfRange {
                shop: shop_id,
                index,
                size: shop.size(),
            });
        }

        shop.set_item(index, None);
        debug!(shop = %shop_id, index, "Cleared shop slot");
        let index = index.to_string();
        Ok(Response::to_sender(render(
            &self.messages.successful_remove_item,
            &[("%shop%", shop_id.as_str()), ("%index%", index.as_str())],
        )))
    }

    fn tell_suggestion(&self, response: &mut Response, name: &str) {
        if let Some(nearest) = self.shops.suggest(name, SHOP_SUGGESTION_DISTANCE) {
            response.tell(
                Recipient::Sender,
                render(
                    &self.messages.did_you_mean,
                    &[("%suggestion%", nearest.id())],
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Shop;

    struct Fixture {
        shops: ShopRegistry,
        sessions: SessionRegistry,
        messages: Messages,
    }

    impl Fixture {
        fn new() -> Self {
            let shops = [Shop::new("weapons", "<red>Weapons").with_size(9)]
                .into_iter()
                .collect();
            Self {
                shops,
                sessions: SessionRegistry::new(),
                messages: Messages::default(),
            }
        }

        fn run(&mut self, sender: &Sender, line: &str) -> Result<Response, CommandError> {
            CommandContext::new(&mut self.shops, &mut self.sessions, &self.messages)
                .dispatch(sender, line)
        }
    }

    fn steve() -> Player {
        Player::new(Uuid::new_v4(), "Steve").holding(ItemStack::new("IRON_SWORD"))
    }

    #[test]
    fn test_console_cannot_edit() {
        let mut fixture = Fixture::new();
        assert_eq!(
            fixture.run(&Sender::Console, "select weapons"),
            Err(CommandError::PlayersOnly("select"))
        );
    }

    #[test]
    fn test_console_show_needs_target() {
        let mut fixture = Fixture::new();
        assert_eq!(
            fixture.run(&Sender::Console, "show weapons"),
            Err(CommandError::MissingArgument("target"))
        );
    }

    #[test]
    fn test_show_opens_for_target() {
        let mut fixture = Fixture::new();
        let target = Uuid::new_v4();
        let response = fixture
            .run(&Sender::Console, &format!("show WEAPONS {target}"))
            .expect("show runs");

        assert_eq!(
            response.open,
            Some(OpenShop {
                shop_id: "weapons".to_owned(),
                target,
            })
        );
    }

    #[test]
    fn test_show_missing_tells_both_sides() {
        let mut fixture = Fixture::new();
        let player = steve();
        let target = Uuid::new_v4();
        let response = fixture
            .run(&Sender::Player(player), &format!("show wepons {target}"))
            .expect("show runs");

        assert!(response.open.is_none());
        assert_eq!(response.sender_lines().count(), 2);
        assert!(
            response
                .replies
                .iter()
                .any(|reply| reply.recipient == Recipient::Player(target))
        );
    }

    #[test]
    fn test_add_without_session() {
        let mut fixture = Fixture::new();
        let response = fixture
            .run(&Sender::Player(steve()), "add 1 10")
            .expect("add runs");

        let expected = render(&fixture.messages.no_session, &[]);
        assert_eq!(
            response.sender_lines().collect::<Vec<_>>(),
            [expected.as_str()]
        );
    }

    #[test]
    fn test_add_with_empty_hand() {
        let mut fixture = Fixture::new();
        let player = Player::new(Uuid::new_v4(), "Alex").holding(ItemStack::new("AIR"));
        let sender = Sender::Player(player);
        fixture.run(&sender, "select weapons").expect("select runs");

        let response = fixture.run(&sender, "add 1 10").expect("add runs");
        let expected = render(&fixture.messages.unsupported_item, &[]);
        assert_eq!(
            response.sender_lines().collect::<Vec<_>>(),
            [expected.as_str()]
        );
    }

    #[test]
    fn test_add_rejects_slot_past_size() {
        let mut fixture = Fixture::new();
        let sender = Sender::Player(steve());
        fixture.run(&sender, "select weapons").expect("select runs");

        assert_eq!(
            fixture.run(&sender, "add 9 10"),
            Err(CommandError::SlotOutOfRange {
                shop: "weapons".to_owned(),
                index: 9,
                size: 9,
            })
        );
    }

    #[test]
    fn test_remove_after_shop_deleted() {
        let mut fixture = Fixture::new();
        let sender = Sender::Player(steve());
        fixture.run(&sender, "select weapons").expect("select runs");
        fixture.shops.remove("weapons");

        let response = fixture.run(&sender, "remove 0").expect("remove runs");
        let expected = render(
            &fixture.messages.shop_does_not_exist,
            &[("%shop%", "weapons")],
        );
        assert_eq!(
            response.sender_lines().collect::<Vec<_>>(),
            [expected.as_str()]
        );
    }

    #[test]
    fn test_help_lists_every_subcommand() {
        let mut fixture = Fixture::new();
        let response = fixture.run(&Sender::Console, "help").expect("help runs");
        assert_eq!(response.replies.len(), USAGE.len());
    }
}

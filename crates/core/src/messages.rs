//! Language strings shown to command senders.
//!
//! Templates may contain color tags and the placeholders `%shop%`, `%name%`, `%index%`,
//! `%price%`, `%target%` and `%suggestion%`. Every field has a built-in default,
//! so a language file only needs the keys it changes.

use serde::{Deserialize, Serialize};

use crate::text::{colorize, substitute};

/// Message templates keyed the way the language file names them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Messages {
    pub unable_to_open_sender: String,
    pub unable_to_open_receiver: String,
    pub successful_open: String,
    pub unable_to_select_shop: String,
    pub successful_shop_selection: String,
    pub no_session: String,
    pub unsupported_item: String,
    pub shop_does_not_exist: String,
    pub successful_add_item: String,
    pub successful_remove_item: String,
    pub list_header: String,
    pub list_entry: String,
    pub did_you_mean: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            unable_to_open_sender: "<red>Could not open shop <white>%shop%<red>.".to_owned(),
            unable_to_open_receiver: "<red>A shop could not be opened for you.".to_owned(),
            successful_open: "<green>Opened <white>%shop%<green> for %target%.".to_owned(),
            unable_to_select_shop: "<red>There is no shop named <white>%shop%<red>.".to_owned(),
            successful_shop_selection: "<green>You are now editing <white>%shop%<green>."
                .to_owned(),
            no_session: "<red>Select a shop first with <white>/metashop select <shop><red>."
                .to_owned(),
            unsupported_item: "<red>You must hold an item to add it.".to_owned(),
            shop_does_not_exist: "<red>The shop you selected no longer exists.".to_owned(),
            successful_add_item:
                "<green>Added item to slot <white>%index%<green> for <white>%price%<green>."
                    .to_owned(),
            successful_remove_item: "<green>Cleared slot <white>%index%<green>.".to_owned(),
            list_header: "<white>Use the first name given below.".to_owned(),
            list_entry: "%shop% : %name%".to_owned(),
            did_you_mean: "<gray>Did you mean <white>%suggestion%<gray>?".to_owned(),
        }
    }
}

/// Translate the color tags of `template`, then fill in its placeholders.
///
/// Values are inserted as given, so a shop name typed by a player is echoed
/// without its tags turning into color codes. Colorize trusted values such as
/// configured display names before passing them.
#[must_use]
pub fn render(template: &str, pairs: &[(&str, &str)]) -> String {
    substitute(&colorize(template), pairs)
}

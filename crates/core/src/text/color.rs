//! Chat color codes and the human-readable tags that stand in for them.
//!
//! Messages are written with tags such as `<RED>`, `<dark aqua>`, `<DARKAQUA>`
//! or the ampersand form `&3`. [`colorize`] turns those into the section-sign
//! codes the game client renders, and [`decolorize`] turns codes back into the
//! canonical `<NAME>` tag.

use core::fmt;
use std::sync::LazyLock;

/// The marker that starts a formatting code in rendered chat text.
pub const SECTION_SIGN: char = '\u{00A7}';

/// A chat formatting code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChatColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
    Magic,
    Bold,
    Strikethrough,
    Underline,
    Italic,
    Reset,
}

impl ChatColor {
    /// Every code, in client order.
    pub const ALL: [Self; 22] = [
        Self::Black,
        Self::DarkBlue,
        Self::DarkGreen,
        Self::DarkAqua,
        Self::DarkRed,
        Self::DarkPurple,
        Self::Gold,
        Self::Gray,
        Self::DarkGray,
        Self::Blue,
        Self::Green,
        Self::Aqua,
        Self::Red,
        Self::LightPurple,
        Self::Yellow,
        Self::White,
        Self::Magic,
        Self::Bold,
        Self::Strikethrough,
        Self::Underline,
        Self::Italic,
        Self::Reset,
    ];

    /// The character following the section sign.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Black => '0',
            Self::DarkBlue => '1',
            Self::DarkGreen => '2',
            Self::DarkAqua => '3',
            Self::DarkRed => '4',
            Self::DarkPurple => '5',
            Self::Gold => '6',
            Self::Gray => '7',
            Self::DarkGray => '8',
            Self::Blue => '9',
            Self::Green => 'a',
            Self::Aqua => 'b',
            Self::Red => 'c',
            Self::LightPurple => 'd',
            Self::Yellow => 'e',
            Self::White => 'f',
            Self::Magic => 'k',
            Self::Bold => 'l',
            Self::Strikethrough => 'm',
            Self::Underline => 'n',
            Self::Italic => 'o',
            Self::Reset => 'r',
        }
    }

    /// The upper snake case name, e.g. `DARK_RED`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Black => "BLACK",
            Self::DarkBlue => "DARK_BLUE",
            Self::DarkGreen => "DARK_GREEN",
            Self::DarkAqua => "DARK_AQUA",
            Self::DarkRed => "DARK_RED",
            Self::DarkPurple => "DARK_PURPLE",
            Self::Gold => "GOLD",
            Self::Gray => "GRAY",
            Self::DarkGray => "DARK_GRAY",
            Self::Blue => "BLUE",
            Self::Green => "GREEN",
            Self::Aqua => "AQUA",
            Self::Red => "RED",
            Self::LightPurple => "LIGHT_PURPLE",
            Self::Yellow => "YELLOW",
            Self::White => "WHITE",
            Self::Magic => "MAGIC",
            Self::Bold => "BOLD",
            Self::Strikethrough => "STRIKETHROUGH",
            Self::Underline => "UNDERLINE",
            Self::Italic => "ITALIC",
            Self::Reset => "RESET",
        }
    }

    /// Look up a code character. Upper case codes are accepted.
    #[must_use]
    pub fn from_code(code: char) -> Option<Self> {
        let code = code.to_ascii_lowercase();
        Self::ALL.into_iter().find(|color| color.code() == code)
    }

    /// The canonical tag, e.g. `<DARK_RED>`.
    #[must_use]
    pub fn tag(self) -> String {
        format!("<{}>", self.name())
    }

    /// Every tag spelling that maps to this code.
    fn tags(self) -> Vec<String> {
        let name = self.name();
        let mut tags = vec![
            format!("<{name}>"),
            format!("<{}>", name.replace('_', " ")),
            format!("<{}>", name.replace('_', "")),
            format!("&{}", self.code()),
        ];
        tags.dedup();
        tags
    }
}

impl fmt::Display for ChatColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{SECTION_SIGN}{}", self.code())
    }
}

/// All tag spellings, longest first so that overlapping tags resolve to the
/// longest match independent of declaration order.
static TAGS: LazyLock<Vec<(String, ChatColor)>> = LazyLock::new(|| {
    let mut tags: Vec<(String, ChatColor)> = ChatColor::ALL
        .into_iter()
        .flat_map(|color| color.tags().into_iter().map(move |tag| (tag, color)))
        .collect();
    tags.sort_by(|(a, _), (b, _)| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
    tags
});

/// Resolve a single tag (any accepted spelling, any case) to its code.
///
/// ```
/// use metashop_core::text::{ChatColor, convert_tag};
///
/// assert_eq!(convert_tag("<dark red>"), Some(ChatColor::DarkRed));
/// assert_eq!(convert_tag("&c"), Some(ChatColor::Red));
/// assert_eq!(convert_tag("<PINK>"), None);
/// ```
#[must_use]
pub fn convert_tag(tag: &str) -> Option<ChatColor> {
    TAGS.iter()
        .find(|(candidate, _)| candidate.eq_ignore_ascii_case(tag))
        .map(|(_, color)| *color)
}

/// Longest tag at the start of `text`, with its byte length.
fn match_tag(text: &str) -> Option<(usize, ChatColor)> {
    if !text.starts_with(['<', '&']) {
        return None;
    }
    TAGS.iter()
        .find(|(tag, _)| {
            text.get(..tag.len())
                .is_some_and(|head| head.eq_ignore_ascii_case(tag))
        })
        .map(|(tag, color)| (tag.len(), *color))
}

/// Replace every known tag in `text` with its color code.
///
/// Unknown tags are left as they are.
///
/// ```
/// use metashop_core::text::colorize;
///
/// assert_eq!(colorize("<red>Sold!"), "\u{a7}cSold!");
/// assert_eq!(colorize("<PINK>"), "<PINK>");
/// ```
#[must_use]
pub fn colorize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(ch) = rest.chars().next() {
        let consumed = match match_tag(rest) {
            Some((len, color)) => {
                out.push(SECTION_SIGN);
                out.push(color.code());
                len
            }
            None => {
                out.push(ch);
                ch.len_utf8()
            }
        };
        rest = rest.get(consumed..).unwrap_or_default();
    }
    out
}

/// Replace every color code in `text` with its canonical `<NAME>` tag.
#[must_use]
pub fn decolorize(text: &str) -> String {
    map_codes(text, |color, out| out.push_str(&color.tag()))
}

/// Remove every color code from `text`.
#[must_use]
pub fn strip_colors(text: &str) -> String {
    map_codes(text, |_, _| {})
}

/// Apply [`colorize`] to every line.
#[must_use]
pub fn colorize_all<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| colorize(line.as_ref())).collect()
}

/// Apply [`decolorize`] to every line.
#[must_use]
pub fn decolorize_all<S: AsRef<str>>(lines: &[S]) -> Vec<String> {
    lines.iter().map(|line| decolorize(line.as_ref())).collect()
}

fn map_codes(text: &str, mut on_code: impl FnMut(ChatColor, &mut String)) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == SECTION_SIGN
            && let Some(color) = chars.peek().copied().and_then(ChatColor::from_code)
        {
            chars.next();
            on_code(color, &mut out);
            continue;
        }
        out.push(ch);
    }
    out
}

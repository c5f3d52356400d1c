//! Key names accepted in the config, mapped to their keycodes.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use shifty_types::keycode::{HidKeyCode, ModifiedKey};
use shifty_types::modifier::SHIFT;

pub static KEYCODE_ALIAS: Lazy<HashMap<&str, HidKeyCode>> = Lazy::new(|| {
    let mut m = HashMap::new();

    macro_rules! add_alias {
        ($keycode:ident) => {
            m.insert(paste::paste! { stringify!([<$keycode:lower>]) }, HidKeyCode::$keycode);
        };
        ($keycode:ident = $( $alias:expr),*) => {
            add_alias!($keycode);
            $(
                m.insert($alias, HidKeyCode::$keycode);
            )*
        };
    }

    add_alias!(A);
    add_alias!(B);
    add_alias!(C);
    add_alias!(D);
    add_alias!(E);
    add_alias!(F);
    add_alias!(G);
    add_alias!(H);
    add_alias!(I);
    add_alias!(J);
    add_alias!(K);
    add_alias!(L);
    add_alias!(M);
    add_alias!(N);
    add_alias!(O);
    add_alias!(P);
    add_alias!(Q);
    add_alias!(R);
    add_alias!(S);
    add_alias!(T);
    add_alias!(U);
    add_alias!(V);
    add_alias!(W);
    add_alias!(X);
    add_alias!(Y);
    add_alias!(Z);
    add_alias!(Kc1);
    add_alias!(Kc2);
    add_alias!(Kc3);
    add_alias!(Kc4);
    add_alias!(Kc5);
    add_alias!(Kc6);
    add_alias!(Kc7);
    add_alias!(Kc8);
    add_alias!(Kc9);
    add_alias!(Kc0);
    add_alias!(Enter = "ent");
    add_alias!(Escape = "esc");
    add_alias!(Backspace = "bspc");
    add_alias!(Tab);
    add_alias!(Space = "spc");
    add_alias!(Minus = "mins");
    add_alias!(Equal = "eql");
    add_alias!(LeftBracket = "left_bracket", "lbrc");
    add_alias!(RightBracket = "right_bracket", "rbrc");
    add_alias!(Backslash = "bsls");
    add_alias!(NonusHash = "nonus_hash", "nuhs");
    add_alias!(Semicolon = "scln");
    add_alias!(Quote = "quot");
    add_alias!(Grave = "grv");
    add_alias!(Comma = "comm");
    add_alias!(Dot = "period");
    add_alias!(Slash = "slsh");
    add_alias!(NonusBackslash = "nonus_backslash", "nubs");
    add_alias!(CapsLock = "caps_lock", "caps");
    add_alias!(F1);
    add_alias!(F2);
    add_alias!(F3);
    add_alias!(F4);
    add_alias!(F5);
    add_alias!(F6);
    add_alias!(F7);
    add_alias!(F8);
    add_alias!(F9);
    add_alias!(F10);
    add_alias!(F11);
    add_alias!(F12);
    add_alias!(F13);
    add_alias!(F14);
    add_alias!(F15);
    add_alias!(F16);
    add_alias!(F17);
    add_alias!(F18);
    add_alias!(F19);
    add_alias!(F20);
    add_alias!(F21);
    add_alias!(F22);
    add_alias!(F23);
    add_alias!(F24);
    add_alias!(PrintScreen = "print_screen", "pscr");
    add_alias!(ScrollLock = "scroll_lock", "scrl");
    add_alias!(Pause = "paus");
    add_alias!(Insert = "ins");
    add_alias!(Home);
    add_alias!(PageUp = "page_up", "pgup");
    add_alias!(Delete = "del");
    add_alias!(End);
    add_alias!(PageDown = "page_down", "pgdn");
    add_alias!(Right = "rght");
    add_alias!(Left);
    add_alias!(Down);
    add_alias!(Up);
    add_alias!(Application = "app");
    add_alias!(LCtrl = "lctl");
    add_alias!(LShift = "lsft");
    add_alias!(LAlt = "lalt");
    add_alias!(LGui = "lgui");
    add_alias!(RCtrl = "rctl");
    add_alias!(RShift = "rsft");
    add_alias!(RAlt = "ralt");
    add_alias!(RGui = "rgui");

    m
});

/// Parse a key written in the config.
///
/// Accepted forms:
/// - a single en-US character, shift is inferred: `","`, `"?"`
/// - a key name or alias, case-insensitive: `"comma"`, `"SCLN"`, `"kc1"`
/// - `S(<key>)` to attach shift: `"S(slash)"`, `"S(/)"`
pub fn parse_key(s: &str) -> Option<ModifiedKey> {
    let s = s.trim();
    if let Some(inner) = s.strip_prefix("S(").and_then(|rest| rest.strip_suffix(')')) {
        let key = parse_key(inner)?;
        return Some(ModifiedKey::with_modifiers(key.key, key.modifiers | SHIFT));
    }

    if let [ascii] = s.as_bytes() {
        let key = ModifiedKey::from_ascii(*ascii);
        if key.key != HidKeyCode::No {
            return Some(key);
        }
    }

    KEYCODE_ALIAS
        .get(s.to_ascii_lowercase().as_str())
        .map(|keycode| ModifiedKey::new(*keycode))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_character() {
        assert_eq!(parse_key(","), Some(ModifiedKey::new(HidKeyCode::Comma)));
        assert_eq!(parse_key("?"), Some(ModifiedKey::shifted(HidKeyCode::Slash)));
        assert_eq!(parse_key("\\"), Some(ModifiedKey::new(HidKeyCode::Backslash)));
        assert_eq!(parse_key("A"), Some(ModifiedKey::shifted(HidKeyCode::A)));
    }

    #[test]
    fn test_names_and_aliases() {
        assert_eq!(parse_key("comma"), Some(ModifiedKey::new(HidKeyCode::Comma)));
        assert_eq!(parse_key("SCLN"), Some(ModifiedKey::new(HidKeyCode::Semicolon)));
        assert_eq!(parse_key(" pgup "), Some(ModifiedKey::new(HidKeyCode::PageUp)));
        assert_eq!(parse_key("f12"), Some(ModifiedKey::new(HidKeyCode::F12)));
        assert_eq!(parse_key("lsft"), Some(ModifiedKey::new(HidKeyCode::LShift)));
        assert_eq!(parse_key("nope"), None);
        assert_eq!(parse_key(""), None);
    }

    #[test]
    fn test_shift_wrapper() {
        assert_eq!(parse_key("S(slash)"), Some(ModifiedKey::shifted(HidKeyCode::Slash)));
        assert_eq!(parse_key("S(/)"), Some(ModifiedKey::shifted(HidKeyCode::Slash)));
        // Already shifted stays shifted
        assert_eq!(parse_key("S(?)"), Some(ModifiedKey::shifted(HidKeyCode::Slash)));
        assert_eq!(parse_key("S(nope)"), None);
    }
}

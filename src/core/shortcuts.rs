/// Modifier state of a key press, as reported by `KeyboardEvent`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl Modifiers {
    #[inline]
    fn command(&self) -> bool {
        self.ctrl || self.meta
    }
}

/// Keyboard shortcuts suppressed by page protection: F12, Ctrl/Cmd+Shift+I
/// (dev tools), Ctrl/Cmd+U (view source) and Ctrl/Cmd+S (save page).
pub fn is_blocked_shortcut(key: &str, mods: Modifiers) -> bool {
    if key == "F12" {
        return true;
    }
    if !mods.command() {
        return false;
    }
    match key {
        "i" | "I" => mods.shift,
        "u" | "U" | "s" | "S" => true,
        _ => false,
    }
}

//! Styling helpers for terminal output.
//!
//! The [`QuestStyle`] trait applies ANSI styling via the `colored` crate. It is implemented
//! for `&str` and `String` so literals and formatted text can be styled directly.

use colored::{ColoredString, Colorize};

/// Convenience trait for applying color and style to text output.
pub trait QuestStyle {
    fn title_style(&self) -> ColoredString;
    fn foe_style(&self) -> ColoredString;
    fn item_style(&self) -> ColoredString;
    fn npc_style(&self) -> ColoredString;
    fn task_style(&self) -> ColoredString;
    fn triggered_style(&self) -> ColoredString;
    fn message_style(&self) -> ColoredString;
    fn subheading_style(&self) -> ColoredString;
    fn section_style(&self) -> ColoredString;
    fn error_style(&self) -> ColoredString;
    fn denied_style(&self) -> ColoredString;
}

impl QuestStyle for &str {
    fn title_style(&self) -> ColoredString {
        self.bright_yellow().underline()
    }
    fn foe_style(&self) -> ColoredString {
        self.truecolor(223, 77, 10)
    }
    fn item_style(&self) -> ColoredString {
        self.truecolor(220, 180, 40)
    }
    fn npc_style(&self) -> ColoredString {
        self.truecolor(13, 130, 60).underline()
    }
    fn task_style(&self) -> ColoredString {
        self.truecolor(220, 40, 220)
    }
    fn triggered_style(&self) -> ColoredString {
        self.truecolor(230, 230, 30)
    }
    fn message_style(&self) -> ColoredString {
        self.italic().truecolor(75, 180, 255)
    }
    fn subheading_style(&self) -> ColoredString {
        self.underline()
    }
    fn section_style(&self) -> ColoredString {
        let bracketed = format!("[{self}]");
        bracketed.truecolor(75, 80, 75)
    }
    fn error_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30)
    }
    fn denied_style(&self) -> ColoredString {
        self.truecolor(230, 30, 30).italic()
    }
}

impl QuestStyle for String {
    fn title_style(&self) -> ColoredString {
        self.as_str().title_style()
    }
    fn foe_style(&self) -> ColoredString {
        self.as_str().foe_style()
    }
    fn item_style(&self) -> ColoredString {
        self.as_str().item_style()
    }
    fn npc_style(&self) -> ColoredString {
        self.as_str().npc_style()
    }
    fn task_style(&self) -> ColoredString {
        self.as_str().task_style()
    }
    fn triggered_style(&self) -> ColoredString {
        self.as_str().triggered_style()
    }
    fn message_style(&self) -> ColoredString {
        self.as_str().message_style()
    }
    fn subheading_style(&self) -> ColoredString {
        self.as_str().subheading_style()
    }
    fn section_style(&self) -> ColoredString {
        self.as_str().section_style()
    }
    fn error_style(&self) -> ColoredString {
        self.as_str().error_style()
    }
    fn denied_style(&self) -> ColoredString {
        self.as_str().denied_style()
    }
}

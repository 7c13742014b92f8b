use crate::app::LogKind;
use ratatui::style::{Color, Modifier, Style};

#[derive(Clone, Debug)]
pub struct Theme {
    // Text colors
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // Border colors
    pub border: Color,
    pub border_focused: Color,

    // Status colors
    pub success: Color,
    pub error: Color,
    pub info: Color,

    pub accent: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            text_primary: Color::Rgb(0xf4, 0xf4, 0xf5),
            text_secondary: Color::Rgb(0xa1, 0xa1, 0xaa),
            text_muted: Color::Rgb(0x52, 0x52, 0x5b),

            border: Color::Rgb(0x3f, 0x3f, 0x46),
            border_focused: Color::Rgb(0x63, 0x66, 0xf1),

            success: Color::Rgb(0x34, 0xd3, 0x99),
            error: Color::Rgb(0xfb, 0x71, 0x85),
            info: Color::Rgb(0x93, 0xc5, 0xfd),

            accent: Color::Rgb(0x81, 0x8c, 0xf8),
        }
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn label(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.text_muted)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn key(&self) -> Style {
        Style::default().fg(self.accent)
    }

    /// Colour of an activity console line
    pub fn log_style(&self, kind: LogKind) -> Style {
        match kind {
            LogKind::Success => Style::default().fg(self.success),
            LogKind::Error => Style::default().fg(self.error),
            LogKind::Info => Style::default().fg(self.info),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::theme::{icons, icons_ascii};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool) -> Self {
        Self::from_caps(json, detect_capabilities())
    }

    pub(crate) fn from_caps(json: bool, caps: TerminalCapabilities) -> Self {
        Self {
            json,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: caps.supports_unicode,
        }
    }

    pub fn success_icon(&self) -> &'static str {
        if self.unicode {
            icons::SUCCESS
        } else {
            icons_ascii::SUCCESS
        }
    }

    pub fn warning_icon(&self) -> &'static str {
        if self.unicode {
            icons::WARNING
        } else {
            icons_ascii::WARNING
        }
    }

    pub fn bullet(&self) -> &'static str {
        if self.unicode {
            icons::BULLET
        } else {
            icons_ascii::BULLET
        }
    }
}

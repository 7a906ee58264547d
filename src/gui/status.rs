// src/gui/status.rs
use eframe::egui::{Color32, Visuals};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Info,
    Success,
    Error,
}

/// One-line message under the active tab.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn idle() -> Self { Self { kind: StatusKind::Idle, text: s!("Idle") } }
    pub fn info(text: impl Into<String>) -> Self { Self { kind: StatusKind::Info, text: text.into() } }
    pub fn success(text: impl Into<String>) -> Self { Self { kind: StatusKind::Success, text: text.into() } }
    pub fn error(text: impl Into<String>) -> Self { Self { kind: StatusKind::Error, text: text.into() } }

    pub fn is_error(&self) -> bool { self.kind == StatusKind::Error }

    pub fn color(&self, visuals: &Visuals) -> Color32 {
        match self.kind {
            StatusKind::Idle    => visuals.weak_text_color(),
            StatusKind::Info    => visuals.text_color(),
            StatusKind::Success => Color32::from_rgb(0x3C, 0xB3, 0x71),
            StatusKind::Error   => visuals.error_fg_color,
        }
    }
}

impl Default for Status {
    fn default() -> Self { Self::idle() }
}

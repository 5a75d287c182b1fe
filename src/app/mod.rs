mod state;

use crossterm::event::KeyCode;

pub use state::{App, ConvertForm, LoremForm, MockForm, ShadesForm, UnitsField, UnitsForm};

/// Possible input events the app reacts to.
pub enum AppEvent {
    Tick,
    KeyPress(KeyCode),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToolView {
    Convert,
    Palette,
    Shades,
    Units,
    Lorem,
    Mock,
    Help,
}

/// Which part of the screen keyboard input is directed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FocusMode {
    TabBar,
    Content,
}

/// Tab bar entries, in display order.
pub const TABS: &[(&str, ToolView)] = &[
    ("Convert", ToolView::Convert),
    ("Palette", ToolView::Palette),
    ("Shades", ToolView::Shades),
    ("Units", ToolView::Units),
    ("Lorem", ToolView::Lorem),
    ("Mock", ToolView::Mock),
];

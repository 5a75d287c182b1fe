use crossterm::event::KeyCode;

use crate::lorem::LoremOptions;
use crate::types::{FieldConfig, FieldKind, MockFormat, MockLocale, PaletteEntry};
use crate::{clipboard, color, lorem, mock, units};

use super::{AppEvent, FocusMode, TABS, ToolView};

// How many 250ms ticks a status message stays visible.
const STATUS_TICKS: u8 = 12;

/// The top-level application state.
pub struct App {
    pub running: bool,
    pub view: ToolView,
    view_history: Vec<ToolView>,
    pub focus_mode: FocusMode,
    pub selected_tab_index: usize,
    pub status: Option<String>,
    status_ticks: u8,
    pub editing: bool,
    pub convert: ConvertForm,
    pub palette: Vec<PaletteEntry>,
    pub palette_selected: usize,
    pub shades: ShadesForm,
    pub units: UnitsForm,
    pub lorem: LoremForm,
    pub mock: MockForm,
}

/// Hex color converter form.
#[derive(Clone, Debug)]
pub struct ConvertForm {
    pub hex_input: String,
    pub rgb: String,
    pub rgba: String,
}

impl Default for ConvertForm {
    fn default() -> Self {
        Self {
            hex_input: "#000000".to_string(),
            rgb: "rgb(0, 0, 0)".to_string(),
            rgba: "rgba(0, 0, 0, 1)".to_string(),
        }
    }
}

/// Shade ramp form. The ramp itself is derived from the input on draw.
#[derive(Clone, Debug)]
pub struct ShadesForm {
    pub hex_input: String,
    pub selected: usize,
}

impl Default for ShadesForm {
    fn default() -> Self {
        Self {
            hex_input: "#2196f3".to_string(),
            selected: 5,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnitsField {
    Base,
    Px,
    Rem,
}

/// Pixel/rem converter form.
#[derive(Clone, Debug)]
pub struct UnitsForm {
    pub base_input: String,
    pub px_input: String,
    pub rem_input: String,
    pub field: UnitsField,
}

impl Default for UnitsForm {
    fn default() -> Self {
        Self {
            base_input: "16".to_string(),
            px_input: String::new(),
            rem_input: String::new(),
            field: UnitsField::Px,
        }
    }
}

/// Lorem ipsum generator form.
#[derive(Clone, Debug)]
pub struct LoremForm {
    pub paragraphs_input: String,
    pub start_with_lorem: bool,
    pub html: bool,
    pub output: String,
}

impl Default for LoremForm {
    fn default() -> Self {
        Self {
            paragraphs_input: "5".to_string(),
            start_with_lorem: true,
            html: false,
            output: String::new(),
        }
    }
}

/// Mock data generator form.
#[derive(Clone, Debug)]
pub struct MockForm {
    pub count_input: String,
    pub fields: Vec<FieldConfig>,
    pub selected_field: usize,
    pub format: MockFormat,
    pub locale: MockLocale,
    pub output: String,
}

impl Default for MockForm {
    fn default() -> Self {
        Self {
            count_input: "10".to_string(),
            fields: vec![FieldConfig {
                name: "name".to_string(),
                kind: FieldKind::FullName,
            }],
            selected_field: 0,
            format: MockFormat::Json,
            locale: MockLocale::English,
            output: String::new(),
        }
    }
}

impl App {
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let palette = color::initial_palette(&mut rng);
        let lorem_form = LoremForm {
            output: lorem::generate(&mut rng, &LoremOptions::default()),
            ..LoremForm::default()
        };

        Self {
            running: true,
            view: ToolView::Convert,
            view_history: Vec::new(),
            focus_mode: FocusMode::Content,
            selected_tab_index: 0,
            status: None,
            status_ticks: 0,
            editing: false,
            convert: ConvertForm::default(),
            palette,
            palette_selected: 0,
            shades: ShadesForm::default(),
            units: UnitsForm::default(),
            lorem: lorem_form,
            mock: MockForm::default(),
        }
    }

    /// Central update function - process an event and mutate state.
    pub fn update(&mut self, event: AppEvent) {
        match event {
            AppEvent::Tick => {
                if self.status_ticks > 0 {
                    self.status_ticks -= 1;
                    if self.status_ticks == 0 {
                        self.status = None;
                    }
                }
            }
            AppEvent::KeyPress(key) => self.handle_key(key),
        }
    }

    fn handle_key(&mut self, key: KeyCode) {
        if self.editing {
            self.handle_edit_key(key);
            return;
        }

        match key {
            KeyCode::Char('q') => self.running = false,
            KeyCode::Char('c') => self.navigate_to(ToolView::Convert),
            KeyCode::Char('p') => self.navigate_to(ToolView::Palette),
            KeyCode::Char('s') => self.navigate_to(ToolView::Shades),
            KeyCode::Char('u') => self.navigate_to(ToolView::Units),
            KeyCode::Char('l') => self.navigate_to(ToolView::Lorem),
            KeyCode::Char('m') => self.navigate_to(ToolView::Mock),
            KeyCode::Char('?') => {
                if self.view == ToolView::Help {
                    self.go_back();
                } else {
                    self.navigate_to(ToolView::Help);
                }
            }
            KeyCode::Tab => {
                if self.focus_mode == FocusMode::TabBar {
                    self.focus_mode = FocusMode::Content;
                } else {
                    self.focus_mode = FocusMode::TabBar;
                }
            }
            KeyCode::Left => {
                if self.focus_mode == FocusMode::TabBar {
                    self.navigate_tab_left();
                } else {
                    self.move_selection_left();
                }
            }
            KeyCode::Right => {
                if self.focus_mode == FocusMode::TabBar {
                    self.navigate_tab_right();
                } else {
                    self.move_selection_right();
                }
            }
            KeyCode::Up => {
                if self.focus_mode == FocusMode::Content {
                    self.move_selection_up();
                }
            }
            KeyCode::Down => {
                if self.focus_mode == FocusMode::Content {
                    self.move_selection_down();
                }
            }
            KeyCode::Enter => {
                if self.focus_mode == FocusMode::TabBar {
                    self.activate_selected_tab();
                } else {
                    self.copy_current();
                }
            }
            KeyCode::Char('e') => self.begin_edit(),
            KeyCode::Char(' ') => {
                if self.view == ToolView::Palette {
                    self.regenerate_palette();
                }
            }
            KeyCode::Char('x') => {
                if self.view == ToolView::Palette {
                    self.toggle_lock();
                }
            }
            KeyCode::Char('g') => match self.view {
                ToolView::Lorem => self.generate_lorem(),
                ToolView::Mock => self.generate_mock(),
                _ => {}
            },
            KeyCode::Char('o') => match self.view {
                ToolView::Lorem => self.lorem.start_with_lorem = !self.lorem.start_with_lorem,
                ToolView::Mock => self.toggle_locale(),
                _ => {}
            },
            KeyCode::Char('f') => match self.view {
                ToolView::Lorem => self.lorem.html = !self.lorem.html,
                ToolView::Mock => self.toggle_format(),
                _ => {}
            },
            KeyCode::Char('k') => {
                if self.view == ToolView::Mock {
                    self.cycle_field_kind();
                }
            }
            KeyCode::Char('a') => {
                if self.view == ToolView::Mock {
                    self.add_mock_field();
                }
            }
            KeyCode::Char('d') => {
                if self.view == ToolView::Mock {
                    self.remove_mock_field();
                }
            }
            KeyCode::Esc => self.go_back(),
            _ => {}
        }
    }

    // ── Navigation ──────────────────────────────────────────────

    fn navigate_to(&mut self, view: ToolView) {
        if self.view != view {
            self.view_history.push(self.view);
            self.view = view;
        }
        if let Some(index) = TABS.iter().position(|(_, tab)| *tab == view) {
            self.selected_tab_index = index;
        }
    }

    fn go_back(&mut self) {
        if let Some(previous) = self.view_history.pop() {
            self.view = previous;
            if let Some(index) = TABS.iter().position(|(_, tab)| *tab == previous) {
                self.selected_tab_index = index;
            }
        }
    }

    fn navigate_tab_left(&mut self) {
        if self.selected_tab_index == 0 {
            self.selected_tab_index = TABS.len() - 1;
        } else {
            self.selected_tab_index -= 1;
        }
    }

    fn navigate_tab_right(&mut self) {
        self.selected_tab_index = (self.selected_tab_index + 1) % TABS.len();
    }

    fn activate_selected_tab(&mut self) {
        let (_, view) = TABS[self.selected_tab_index];
        self.navigate_to(view);
        self.focus_mode = FocusMode::Content;
    }

    // ── Selection within a view ─────────────────────────────────

    fn move_selection_left(&mut self) {
        match self.view {
            ToolView::Palette => {
                if self.palette_selected > 0 {
                    self.palette_selected -= 1;
                }
            }
            ToolView::Shades => {
                if self.shades.selected > 0 {
                    self.shades.selected -= 1;
                }
            }
            _ => {}
        }
    }

    fn move_selection_right(&mut self) {
        match self.view {
            ToolView::Palette => {
                if self.palette_selected + 1 < self.palette.len() {
                    self.palette_selected += 1;
                }
            }
            ToolView::Shades => {
                if self.shades.selected + 1 < color::SHADE_COUNT {
                    self.shades.selected += 1;
                }
            }
            _ => {}
        }
    }

    fn move_selection_up(&mut self) {
        match self.view {
            ToolView::Units => {
                self.units.field = match self.units.field {
                    UnitsField::Base => UnitsField::Rem,
                    UnitsField::Px => UnitsField::Base,
                    UnitsField::Rem => UnitsField::Px,
                };
            }
            ToolView::Mock => {
                if self.mock.selected_field > 0 {
                    self.mock.selected_field -= 1;
                }
            }
            _ => {}
        }
    }

    fn move_selection_down(&mut self) {
        match self.view {
            ToolView::Units => {
                self.units.field = match self.units.field {
                    UnitsField::Base => UnitsField::Px,
                    UnitsField::Px => UnitsField::Rem,
                    UnitsField::Rem => UnitsField::Base,
                };
            }
            ToolView::Mock => {
                if self.mock.selected_field + 1 < self.mock.fields.len() {
                    self.mock.selected_field += 1;
                }
            }
            _ => {}
        }
    }

    // ── Editing ─────────────────────────────────────────────────

    fn begin_edit(&mut self) {
        match self.view {
            ToolView::Convert
            | ToolView::Shades
            | ToolView::Units
            | ToolView::Lorem
            | ToolView::Mock => self.editing = true,
            _ => {}
        }
    }

    fn handle_edit_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc | KeyCode::Enter => self.editing = false,
            KeyCode::Backspace => {
                if let Some(buffer) = self.active_buffer() {
                    buffer.pop();
                    self.after_edit();
                }
            }
            KeyCode::Char(c) => {
                if self.char_allowed(c) {
                    if let Some(buffer) = self.active_buffer() {
                        buffer.push(c);
                        self.after_edit();
                    }
                }
            }
            _ => {}
        }
    }

    fn active_buffer(&mut self) -> Option<&mut String> {
        match self.view {
            ToolView::Convert => Some(&mut self.convert.hex_input),
            ToolView::Shades => Some(&mut self.shades.hex_input),
            ToolView::Units => Some(match self.units.field {
                UnitsField::Base => &mut self.units.base_input,
                UnitsField::Px => &mut self.units.px_input,
                UnitsField::Rem => &mut self.units.rem_input,
            }),
            ToolView::Lorem => Some(&mut self.lorem.paragraphs_input),
            ToolView::Mock => Some(&mut self.mock.count_input),
            _ => None,
        }
    }

    fn char_allowed(&self, c: char) -> bool {
        match self.view {
            ToolView::Convert | ToolView::Shades => c.is_ascii_hexdigit() || c == '#',
            ToolView::Units => c.is_ascii_digit() || c == '.',
            ToolView::Lorem | ToolView::Mock => c.is_ascii_digit(),
            _ => false,
        }
    }

    /// Recompute fields derived from the buffer that just changed.
    /// Invalid input leaves the previously displayed values alone.
    fn after_edit(&mut self) {
        match self.view {
            ToolView::Convert => {
                if let Some(rgb) = color::hex_to_rgb(&self.convert.hex_input) {
                    self.convert.rgb = format!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
                    self.convert.rgba = format!("rgba({}, {}, {}, 1)", rgb.r, rgb.g, rgb.b);
                }
            }
            ToolView::Units => self.recompute_units(),
            _ => {}
        }
    }

    fn recompute_units(&mut self) {
        let Some(base) = units::parse_base(&self.units.base_input) else {
            return;
        };
        match self.units.field {
            UnitsField::Px => {
                if self.units.px_input.is_empty() {
                    self.units.rem_input.clear();
                } else if let Ok(px) = self.units.px_input.parse::<f64>() {
                    self.units.rem_input = units::format_rem(units::px_to_rem(px, base));
                }
            }
            UnitsField::Rem => {
                if self.units.rem_input.is_empty() {
                    self.units.px_input.clear();
                } else if let Ok(rem) = self.units.rem_input.parse::<f64>() {
                    self.units.px_input = units::format_px(units::rem_to_px(rem, base));
                }
            }
            // Changing the base only affects subsequent edits.
            UnitsField::Base => {}
        }
    }

    // ── Palette ─────────────────────────────────────────────────

    fn regenerate_palette(&mut self) {
        let mut rng = rand::rng();
        self.palette = color::generate_palette(&mut rng, &self.palette);
    }

    fn toggle_lock(&mut self) {
        if let Some(entry) = self.palette.get_mut(self.palette_selected) {
            entry.locked = !entry.locked;
        }
    }

    // ── Generators ──────────────────────────────────────────────

    fn generate_lorem(&mut self) {
        let opts = LoremOptions {
            paragraphs: self.lorem.paragraphs_input.parse().unwrap_or(1),
            start_with_lorem: self.lorem.start_with_lorem,
            html: self.lorem.html,
        };
        let mut rng = rand::rng();
        self.lorem.output = lorem::generate(&mut rng, &opts);
    }

    fn generate_mock(&mut self) {
        let count = self.mock.count_input.parse().unwrap_or(1);
        let mut rng = rand::rng();
        let records = mock::generate(&mut rng, &self.mock.fields, count, self.mock.locale);
        self.mock.output = mock::render(&records, self.mock.format);
    }

    fn toggle_locale(&mut self) {
        self.mock.locale = match self.mock.locale {
            MockLocale::English => MockLocale::Thai,
            MockLocale::Thai => MockLocale::English,
        };
    }

    fn toggle_format(&mut self) {
        self.mock.format = match self.mock.format {
            MockFormat::Json => MockFormat::Csv,
            MockFormat::Csv => MockFormat::Json,
        };
    }

    fn cycle_field_kind(&mut self) {
        if let Some(field) = self.mock.fields.get_mut(self.mock.selected_field) {
            let index = FieldKind::ALL
                .iter()
                .position(|kind| *kind == field.kind)
                .unwrap_or(0);
            field.kind = FieldKind::ALL[(index + 1) % FieldKind::ALL.len()];
        }
    }

    fn add_mock_field(&mut self) {
        // Duplicate names would overwrite each other in the JSON record,
        // so skip past any the list already holds.
        let mut index = self.mock.fields.len() + 1;
        let mut name = format!("field{index}");
        while self.mock.fields.iter().any(|field| field.name == name) {
            index += 1;
            name = format!("field{index}");
        }
        self.mock.fields.push(FieldConfig {
            name,
            kind: FieldKind::Word,
        });
        self.mock.selected_field = self.mock.fields.len() - 1;
    }

    fn remove_mock_field(&mut self) {
        if self.mock.fields.len() > 1 {
            self.mock.fields.remove(self.mock.selected_field);
            if self.mock.selected_field >= self.mock.fields.len() {
                self.mock.selected_field = self.mock.fields.len() - 1;
            }
        }
    }

    // ── Clipboard ───────────────────────────────────────────────

    fn copy_current(&mut self) {
        let text = match self.view {
            ToolView::Convert => color::hex_to_rgb(&self.convert.hex_input)
                .map(|_| self.convert.rgb.clone()),
            ToolView::Palette => self
                .palette
                .get(self.palette_selected)
                .map(|entry| color::rgb_to_hex(entry.color)),
            ToolView::Shades => {
                let shades = color::generate_shades(&self.shades.hex_input);
                shades.get(self.shades.selected).cloned()
            }
            ToolView::Lorem => {
                (!self.lorem.output.is_empty()).then(|| self.lorem.output.clone())
            }
            ToolView::Mock => (!self.mock.output.is_empty()).then(|| self.mock.output.clone()),
            _ => None,
        };
        if let Some(text) = text {
            self.copy_to_clipboard(&text);
        }
    }

    fn copy_to_clipboard(&mut self, text: &str) {
        match clipboard::copy(text) {
            Ok(()) => {
                let label = if text.len() <= 24 {
                    format!("Copied {text} to clipboard!")
                } else {
                    "Copied to clipboard!".to_string()
                };
                self.set_status(label);
            }
            Err(err) => self.set_status(format!("Clipboard error: {err}")),
        }
    }

    fn set_status(&mut self, message: String) {
        self.status = Some(message);
        self.status_ticks = STATUS_TICKS;
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn added_mock_fields_never_reuse_a_name() {
        let mut app = App::new();
        app.view = ToolView::Mock;
        app.mock.fields = vec![
            FieldConfig {
                name: "field1".to_string(),
                kind: FieldKind::Word,
            },
            FieldConfig {
                name: "field2".to_string(),
                kind: FieldKind::Word,
            },
        ];

        // Deleting the first field and adding twice used to mint a
        // second "field2".
        app.mock.selected_field = 0;
        app.remove_mock_field();
        app.add_mock_field();
        app.add_mock_field();

        let mut names: Vec<&str> = app
            .mock
            .fields
            .iter()
            .map(|field| field.name.as_str())
            .collect();
        assert_eq!(names.len(), 3);
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 3, "field names must be unique");
    }
}

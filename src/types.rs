/// An RGB color, one byte per channel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

///A single swatch in the palette generator: a color plus its lock flag
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PaletteEntry {
    pub color: Rgb,
    pub locked: bool,
}

impl PaletteEntry {
    pub fn unlocked(color: Rgb) -> Self {
        Self {
            color,
            locked: false,
        }
    }
}

/// The value kinds the mock data generator can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    FirstName,
    LastName,
    FullName,
    Email,
    Phone,
    Date,
    Number,
    Word,
    Sentence,
    Paragraph,
}

impl FieldKind {
    pub const ALL: &[FieldKind] = &[
        FieldKind::FirstName,
        FieldKind::LastName,
        FieldKind::FullName,
        FieldKind::Email,
        FieldKind::Phone,
        FieldKind::Date,
        FieldKind::Number,
        FieldKind::Word,
        FieldKind::Sentence,
        FieldKind::Paragraph,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FieldKind::FirstName => "First Name",
            FieldKind::LastName => "Last Name",
            FieldKind::FullName => "Full Name",
            FieldKind::Email => "Email",
            FieldKind::Phone => "Phone Number",
            FieldKind::Date => "Date",
            FieldKind::Number => "Number",
            FieldKind::Word => "Word",
            FieldKind::Sentence => "Sentence",
            FieldKind::Paragraph => "Paragraph",
        }
    }

    /// Parse the kebab-case name used on the CLI (e.g. `full-name`).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "first-name" => Some(FieldKind::FirstName),
            "last-name" => Some(FieldKind::LastName),
            "full-name" => Some(FieldKind::FullName),
            "email" => Some(FieldKind::Email),
            "phone" => Some(FieldKind::Phone),
            "date" => Some(FieldKind::Date),
            "number" => Some(FieldKind::Number),
            "word" => Some(FieldKind::Word),
            "sentence" => Some(FieldKind::Sentence),
            "paragraph" => Some(FieldKind::Paragraph),
            _ => None,
        }
    }
}

/// One configured column of mock output: a name and the kind of value
/// generated for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FieldConfig {
    pub name: String,
    pub kind: FieldKind,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MockFormat {
    #[default]
    Json,
    Csv,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MockLocale {
    #[default]
    English,
    Thai,
}

impl MockLocale {
    pub fn label(self) -> &'static str {
        match self {
            MockLocale::English => "English",
            MockLocale::Thai => "Thai",
        }
    }
}

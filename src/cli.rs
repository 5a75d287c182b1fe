//! CLI argument parsing and one-shot command handling.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::lorem::LoremOptions;
use crate::types::{FieldConfig, FieldKind, MockFormat, MockLocale};
use crate::{color, lorem, mock, units};

#[derive(Parser)]
#[command(
    name = "tinkr",
    version,
    about = "Tinkr - A terminal-based developer toolkit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Convert a hex color to rgb()/rgba()
    Convert { hex: String },
    /// Print random palette colors
    Palette {
        #[arg(short = 'n', long, default_value_t = 5)]
        count: usize,
    },
    /// Print the 10-step shade ramp for a base color
    Shades { hex: String },
    /// Convert pixels to rem
    Rem {
        px: f64,
        #[arg(short = 'b', long, default_value_t = units::DEFAULT_BASE_PX)]
        base: f64,
    },
    /// Convert rem to pixels
    Px {
        rem: f64,
        #[arg(short = 'b', long, default_value_t = units::DEFAULT_BASE_PX)]
        base: f64,
    },
    /// Generate lorem ipsum paragraphs
    Lorem {
        #[arg(short = 'p', long, default_value_t = 5)]
        paragraphs: u32,
        #[arg(long)]
        html: bool,
        /// Skip the classic "Lorem ipsum dolor sit amet" opener
        #[arg(long)]
        no_lorem_start: bool,
    },
    /// Generate mock records as JSON or CSV
    Mock {
        #[arg(short = 'c', long, default_value_t = 10)]
        count: u32,
        /// Field spec, repeatable: name:kind (e.g. -f name:full-name -f mail:email)
        #[arg(short = 'f', long = "field")]
        fields: Vec<String>,
        /// Output format: json or csv
        #[arg(long, default_value = "json")]
        format: String,
        /// Locale: en or th
        #[arg(long, default_value = "en")]
        locale: String,
    },
}

/// Execute a one-shot CLI command.
pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Convert { hex } => handle_convert(&hex),
        Command::Palette { count } => handle_palette(count),
        Command::Shades { hex } => handle_shades(&hex),
        Command::Rem { px, base } => handle_rem(px, base),
        Command::Px { rem, base } => handle_px(rem, base),
        Command::Lorem {
            paragraphs,
            html,
            no_lorem_start,
        } => handle_lorem(paragraphs, html, no_lorem_start),
        Command::Mock {
            count,
            fields,
            format,
            locale,
        } => handle_mock(count, &fields, &format, &locale),
    }
    Ok(())
}

fn handle_convert(hex: &str) {
    match color::hex_to_rgb(hex) {
        Some(rgb) => {
            println!("{}", color::rgb_to_hex(rgb));
            println!("rgb({}, {}, {})", rgb.r, rgb.g, rgb.b);
            println!("rgba({}, {}, {}, 1)", rgb.r, rgb.g, rgb.b);
        }
        None => println!("'{hex}' is not a valid hex color. Expected a form like #2196f3."),
    }
}

fn handle_palette(count: usize) {
    let mut rng = rand::rng();
    for _ in 0..count {
        let rgb = color::generate_color(&mut rng, None);
        println!("{}", color::rgb_to_hex(rgb));
    }
}

fn handle_shades(hex: &str) {
    let shades = color::generate_shades(hex);
    if shades.is_empty() {
        println!("'{hex}' is not a valid hex color. Expected a form like #2196f3.");
        return;
    }
    for (index, shade) in shades.iter().enumerate() {
        if index == 5 {
            println!("{shade}  (base)");
        } else {
            println!("{shade}");
        }
    }
}

fn handle_rem(px: f64, base: f64) {
    if base <= 0.0 {
        println!("Base font size must be positive.");
        return;
    }
    println!("{}rem", units::format_rem(units::px_to_rem(px, base)));
}

fn handle_px(rem: f64, base: f64) {
    if base <= 0.0 {
        println!("Base font size must be positive.");
        return;
    }
    println!("{}px", units::format_px(units::rem_to_px(rem, base)));
}

fn handle_lorem(paragraphs: u32, html: bool, no_lorem_start: bool) {
    let opts = LoremOptions {
        paragraphs,
        start_with_lorem: !no_lorem_start,
        html,
    };
    let mut rng = rand::rng();
    println!("{}", lorem::generate(&mut rng, &opts));
}

fn handle_mock(count: u32, field_specs: &[String], format: &str, locale: &str) {
    let format = match format {
        "json" => MockFormat::Json,
        "csv" => MockFormat::Csv,
        other => {
            println!("Unknown format '{other}'. Use json or csv.");
            return;
        }
    };
    let locale = match locale {
        "en" => MockLocale::English,
        "th" => MockLocale::Thai,
        other => {
            println!("Unknown locale '{other}'. Use en or th.");
            return;
        }
    };

    let mut fields = Vec::new();
    for spec in field_specs {
        match parse_field_spec(spec) {
            Some(field) => fields.push(field),
            None => {
                println!(
                    "Invalid field spec '{spec}'. Use name:kind, e.g. name:full-name or mail:email."
                );
                return;
            }
        }
    }
    if fields.is_empty() {
        fields.push(FieldConfig {
            name: "name".to_string(),
            kind: FieldKind::FullName,
        });
    }

    let mut rng = rand::rng();
    let records = mock::generate(&mut rng, &fields, count, locale);
    println!("{}", mock::render(&records, format));
}

fn parse_field_spec(spec: &str) -> Option<FieldConfig> {
    let (name, kind) = spec.split_once(':')?;
    if name.is_empty() {
        return None;
    }
    Some(FieldConfig {
        name: name.to_string(),
        kind: FieldKind::parse(kind)?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn field_specs_parse_name_and_kind() {
        let field = parse_field_spec("mail:email").unwrap();
        assert_eq!(field.name, "mail");
        assert_eq!(field.kind, FieldKind::Email);

        assert!(parse_field_spec("mail").is_none());
        assert!(parse_field_spec(":email").is_none());
        assert!(parse_field_spec("mail:nonsense").is_none());
    }
}

//! Mock structured-data generation: random records rendered as JSON or
//! CSV.

use chrono::DateTime;
use rand::RngExt;
use serde_json::{Map, Value, json};

use crate::lorem;
use crate::types::{FieldConfig, FieldKind, MockFormat, MockLocale};

pub const MAX_RECORDS: u32 = 1000;

const FIRST_NAMES_EN: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Daniel", "Karen",
];

const LAST_NAMES_EN: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Wilson", "Anderson", "Taylor", "Thomas", "Moore", "Jackson", "Martin", "Lee",
    "Thompson", "White",
];

const FIRST_NAMES_TH: &[&str] = &[
    "สมชาย",
    "สมหญิง",
    "อนันต์",
    "กมล",
    "ประเสริฐ",
    "วิชัย",
    "สุนีย์",
    "อรุณ",
    "มานพ",
    "รัตนา",
    "สมศักดิ์",
    "พรทิพย์",
    "ชัยวัฒน์",
    "นภา",
    "ธีระ",
    "วันดี",
];

const LAST_NAMES_TH: &[&str] = &[
    "ใจดี",
    "ศรีสุข",
    "ทองดี",
    "รักไทย",
    "บุญมา",
    "แสงทอง",
    "วงศ์สวัสดิ์",
    "จันทร์เพ็ญ",
    "สุขสันต์",
    "พูลทรัพย์",
    "เจริญสุข",
    "มั่งมี",
];

const WORDS_TH: &[&str] = &[
    "บ้าน",
    "น้ำ",
    "ฟ้า",
    "ดิน",
    "ไฟ",
    "ลม",
    "ต้นไม้",
    "ภูเขา",
    "ทะเล",
    "ดวงดาว",
    "หนังสือ",
    "ดนตรี",
    "อาหาร",
    "เวลา",
    "ความสุข",
    "เพื่อน",
];

const EMAIL_DOMAINS: &[&str] = &["example.com", "example.org", "mail.test", "inbox.test"];

// Range the random date field is drawn from, as unix seconds.
// 2015-01-01 .. 2030-01-01.
const DATE_MIN: i64 = 1_420_070_400;
const DATE_MAX: i64 = 1_893_456_000;

fn pick<'a>(rng: &mut impl RngExt, table: &[&'a str]) -> &'a str {
    table[rng.random_range(0..table.len())]
}

fn first_name(rng: &mut impl RngExt, locale: MockLocale) -> &'static str {
    match locale {
        MockLocale::English => pick(rng, FIRST_NAMES_EN),
        MockLocale::Thai => pick(rng, FIRST_NAMES_TH),
    }
}

fn last_name(rng: &mut impl RngExt, locale: MockLocale) -> &'static str {
    match locale {
        MockLocale::English => pick(rng, LAST_NAMES_EN),
        MockLocale::Thai => pick(rng, LAST_NAMES_TH),
    }
}

fn email(rng: &mut impl RngExt) -> String {
    // Email local parts stay ASCII regardless of locale.
    let first = pick(rng, FIRST_NAMES_EN).to_ascii_lowercase();
    let last = pick(rng, LAST_NAMES_EN).to_ascii_lowercase();
    let number = rng.random_range(1..100);
    let domain = pick(rng, EMAIL_DOMAINS);
    format!("{first}.{last}{number}@{domain}")
}

fn phone(rng: &mut impl RngExt, locale: MockLocale) -> String {
    match locale {
        MockLocale::English => format!(
            "555-{:03}-{:04}",
            rng.random_range(0..1000),
            rng.random_range(0..10000)
        ),
        MockLocale::Thai => format!(
            "08{}-{:03}-{:04}",
            rng.random_range(0..10),
            rng.random_range(0..1000),
            rng.random_range(0..10000)
        ),
    }
}

fn date(rng: &mut impl RngExt) -> String {
    let secs = rng.random_range(DATE_MIN..DATE_MAX);
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_default()
}

fn word(rng: &mut impl RngExt, locale: MockLocale) -> &'static str {
    match locale {
        MockLocale::English => lorem::word(rng),
        MockLocale::Thai => pick(rng, WORDS_TH),
    }
}

fn thai_sentence(rng: &mut impl RngExt) -> String {
    let count = rng.random_range(4..=9);
    let words: Vec<&str> = (0..count).map(|_| pick(&mut *rng, WORDS_TH)).collect();
    words.join("")
}

/// Produce one value of the given kind.
pub fn generate_value(rng: &mut impl RngExt, kind: FieldKind, locale: MockLocale) -> Value {
    match kind {
        FieldKind::FirstName => json!(first_name(rng, locale)),
        FieldKind::LastName => json!(last_name(rng, locale)),
        FieldKind::FullName => {
            json!(format!(
                "{} {}",
                first_name(rng, locale),
                last_name(rng, locale)
            ))
        }
        FieldKind::Email => json!(email(rng)),
        FieldKind::Phone => json!(phone(rng, locale)),
        FieldKind::Date => json!(date(rng)),
        FieldKind::Number => json!(rng.random_range(1..=1000)),
        FieldKind::Word => json!(word(rng, locale)),
        FieldKind::Sentence => match locale {
            MockLocale::English => json!(lorem::sentence(rng)),
            MockLocale::Thai => json!(thai_sentence(rng)),
        },
        FieldKind::Paragraph => match locale {
            MockLocale::English => json!(lorem::paragraph(rng)),
            MockLocale::Thai => {
                let count = rng.random_range(3..=5);
                let mut sentences = Vec::with_capacity(count);
                for _ in 0..count {
                    sentences.push(thai_sentence(&mut *rng));
                }
                json!(sentences.join(" "))
            }
        },
    }
}

/// Generate `count` records (clamped to 1..=1000). Each record carries a
/// sequential `id` starting at 1, then one value per configured field.
/// Fields with empty names are skipped.
pub fn generate(
    rng: &mut impl RngExt,
    fields: &[FieldConfig],
    count: u32,
    locale: MockLocale,
) -> Vec<Value> {
    let count = count.clamp(1, MAX_RECORDS);
    let mut records = Vec::with_capacity(count as usize);
    for id in 1..=count {
        let mut record = Map::new();
        record.insert("id".to_string(), json!(id));
        for field in fields {
            if field.name.is_empty() {
                continue;
            }
            record.insert(field.name.clone(), generate_value(rng, field.kind, locale));
        }
        records.push(Value::Object(record));
    }
    records
}

/// Render records in the chosen output format: pretty JSON, or one
/// comma-joined line of values per record.
pub fn render(records: &[Value], format: MockFormat) -> String {
    match format {
        MockFormat::Json => serde_json::to_string_pretty(records).unwrap_or_default(),
        MockFormat::Csv => records
            .iter()
            .map(csv_line)
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

fn csv_line(record: &Value) -> String {
    let Value::Object(map) = record else {
        return String::new();
    };
    map.values()
        .map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn fields() -> Vec<FieldConfig> {
        vec![
            FieldConfig {
                name: "name".to_string(),
                kind: FieldKind::FullName,
            },
            FieldConfig {
                name: "contact".to_string(),
                kind: FieldKind::Email,
            },
            FieldConfig {
                name: "score".to_string(),
                kind: FieldKind::Number,
            },
        ]
    }

    #[test]
    fn records_carry_sequential_ids_and_all_fields() {
        let mut rng = StdRng::seed_from_u64(11);
        let records = generate(&mut rng, &fields(), 3, MockLocale::English);
        assert_eq!(records.len(), 3);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record["id"], json!(i as u32 + 1));
            assert!(record["name"].is_string());
            assert!(record["contact"].as_str().unwrap().contains('@'));
            let score = record["score"].as_i64().unwrap();
            assert!((1..=1000).contains(&score));
        }
    }

    #[test]
    fn count_is_clamped() {
        let mut rng = StdRng::seed_from_u64(12);
        assert_eq!(generate(&mut rng, &fields(), 0, MockLocale::English).len(), 1);
        assert_eq!(
            generate(&mut rng, &fields(), 5000, MockLocale::English).len(),
            MAX_RECORDS as usize
        );
    }

    #[test]
    fn empty_field_names_are_skipped() {
        let mut rng = StdRng::seed_from_u64(13);
        let fields = vec![FieldConfig {
            name: String::new(),
            kind: FieldKind::Word,
        }];
        let records = generate(&mut rng, &fields, 1, MockLocale::English);
        let Value::Object(map) = &records[0] else {
            panic!("expected an object");
        };
        assert_eq!(map.len(), 1);
        assert!(map.contains_key("id"));
    }

    #[test]
    fn thai_locale_draws_from_thai_tables() {
        let mut rng = StdRng::seed_from_u64(14);
        let name = generate_value(&mut rng, FieldKind::FirstName, MockLocale::Thai);
        assert!(FIRST_NAMES_TH.contains(&name.as_str().unwrap()));
    }

    #[test]
    fn dates_are_rfc3339() {
        let mut rng = StdRng::seed_from_u64(15);
        let value = generate_value(&mut rng, FieldKind::Date, MockLocale::English);
        let parsed = chrono::DateTime::parse_from_rfc3339(value.as_str().unwrap());
        assert!(parsed.is_ok());
    }

    #[test]
    fn csv_render_joins_values_per_line() {
        let mut rng = StdRng::seed_from_u64(16);
        let records = generate(&mut rng, &fields(), 2, MockLocale::English);
        let csv = render(&records, MockFormat::Csv);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            // id, name, contact, score
            assert_eq!(line.split(',').count(), 4);
        }
    }

    #[test]
    fn json_render_is_valid_json() {
        let mut rng = StdRng::seed_from_u64(17);
        let records = generate(&mut rng, &fields(), 2, MockLocale::English);
        let rendered = render(&records, MockFormat::Json);
        let parsed: Vec<Value> = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, records);
    }
}

//! Lorem ipsum generation for the text generator view.

use rand::RngExt;

pub const MAX_PARAGRAPHS: u32 = 100;

const WORDS: &[&str] = &[
    "lorem",
    "ipsum",
    "dolor",
    "sit",
    "amet",
    "consectetur",
    "adipiscing",
    "elit",
    "sed",
    "do",
    "eiusmod",
    "tempor",
    "incididunt",
    "ut",
    "labore",
    "et",
    "dolore",
    "magna",
    "aliqua",
    "enim",
    "ad",
    "minim",
    "veniam",
    "quis",
    "nostrud",
    "exercitation",
    "ullamco",
    "laboris",
    "nisi",
    "aliquip",
    "ex",
    "ea",
    "commodo",
    "consequat",
    "duis",
    "aute",
    "irure",
    "in",
    "reprehenderit",
    "voluptate",
    "velit",
    "esse",
    "cillum",
    "eu",
    "fugiat",
    "nulla",
    "pariatur",
    "excepteur",
    "sint",
    "occaecat",
    "cupidatat",
    "non",
    "proident",
    "sunt",
    "culpa",
    "qui",
    "officia",
    "deserunt",
    "mollit",
    "anim",
    "id",
    "est",
    "laborum",
];

#[derive(Clone, Debug)]
pub struct LoremOptions {
    pub paragraphs: u32,
    pub start_with_lorem: bool,
    pub html: bool,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            paragraphs: 5,
            start_with_lorem: true,
            html: false,
        }
    }
}

/// Pick a random word from the lorem corpus.
pub fn word(rng: &mut impl RngExt) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}

/// A sentence of 5 to 15 random words, capitalized, ending in a period.
pub fn sentence(rng: &mut impl RngExt) -> String {
    let count = rng.random_range(5..=15);
    let mut out = String::new();
    for i in 0..count {
        let w = word(rng);
        if i == 0 {
            let mut chars = w.chars();
            if let Some(first) = chars.next() {
                out.push(first.to_ascii_uppercase());
                out.push_str(chars.as_str());
            }
        } else {
            out.push(' ');
            out.push_str(w);
        }
    }
    out.push('.');
    out
}

/// A paragraph of 3 to 7 sentences.
pub fn paragraph(rng: &mut impl RngExt) -> String {
    let count = rng.random_range(3..=7);
    let mut sentences = Vec::with_capacity(count);
    for _ in 0..count {
        sentences.push(sentence(&mut *rng));
    }
    sentences.join(" ")
}

/// Generate the full text. Paragraph count is clamped to 1..=100.
pub fn generate(rng: &mut impl RngExt, opts: &LoremOptions) -> String {
    let count = opts.paragraphs.clamp(1, MAX_PARAGRAPHS);
    let mut paragraphs = Vec::with_capacity(count as usize);
    for i in 0..count {
        let mut text = paragraph(rng);
        if i == 0 && opts.start_with_lorem {
            text = format!("Lorem ipsum dolor sit amet, {text}");
        }
        paragraphs.push(text);
    }
    if opts.html {
        paragraphs
            .iter()
            .map(|p| format!("<p>{p}</p>"))
            .collect::<Vec<_>>()
            .join("\n")
    } else {
        paragraphs.join("\n\n")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn sentences_are_bounded_and_punctuated() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            let s = sentence(&mut rng);
            assert!(s.ends_with('.'));
            assert!(s.chars().next().unwrap().is_ascii_uppercase());
            let words = s.trim_end_matches('.').split(' ').count();
            assert!((5..=15).contains(&words), "{words} words in {s:?}");
        }
    }

    #[test]
    fn paragraph_count_is_clamped() {
        let mut rng = StdRng::seed_from_u64(2);
        let opts = LoremOptions {
            paragraphs: 0,
            start_with_lorem: false,
            html: false,
        };
        let text = generate(&mut rng, &opts);
        assert_eq!(text.split("\n\n").count(), 1);

        let opts = LoremOptions {
            paragraphs: 3,
            start_with_lorem: false,
            html: false,
        };
        let text = generate(&mut rng, &opts);
        assert_eq!(text.split("\n\n").count(), 3);
    }

    #[test]
    fn first_paragraph_can_start_with_the_classic_opener() {
        let mut rng = StdRng::seed_from_u64(3);
        let text = generate(&mut rng, &LoremOptions::default());
        assert!(text.starts_with("Lorem ipsum dolor sit amet, "));
    }

    #[test]
    fn html_output_wraps_each_paragraph() {
        let mut rng = StdRng::seed_from_u64(4);
        let opts = LoremOptions {
            paragraphs: 2,
            start_with_lorem: false,
            html: true,
        };
        let text = generate(&mut rng, &opts);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        for line in lines {
            assert!(line.starts_with("<p>"));
            assert!(line.ends_with("</p>"));
        }
    }
}

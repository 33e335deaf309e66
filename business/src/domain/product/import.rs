use std::sync::LazyLock;

use regex::Regex;

use super::value_objects::PriceInput;

/// One parsed line of free-text import. The price is still unsanitized.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportRecord {
    pub name: String,
    pub price: PriceInput,
}

// Leading text, whitespace, then a trailing run of digits / commas / dots.
static TRAILING_PRICE: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^(.*)\s+([0-9,.]+)$").ok());

/// Turns pasted lines into `(name, price?)` records.
///
/// - blank lines are skipped
/// - `"<name> <number>"` yields the trimmed name and the number as price text
/// - a line without a trailing number becomes a name with no price
/// - a matched line whose name part is empty is dropped
pub fn parse_lines(text: &str) -> Vec<ImportRecord> {
    text.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<ImportRecord> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    let captures = TRAILING_PRICE
        .as_ref()
        .and_then(|re| re.captures(trimmed));

    match captures {
        Some(captures) => {
            let name = captures.get(1).map_or("", |m| m.as_str()).trim();
            let price = captures.get(2).map_or("", |m| m.as_str());
            if name.is_empty() {
                return None;
            }
            Some(ImportRecord {
                name: name.to_string(),
                price: PriceInput::Text(price.to_string()),
            })
        }
        None => Some(ImportRecord {
            name: trimmed.to_string(),
            price: PriceInput::Absent,
        }),
    }
}

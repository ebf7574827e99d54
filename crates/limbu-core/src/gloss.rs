//! Offline English glosses for Devanagari spellings of the Limbu months.

use unicode_width::UnicodeWidthStr;

use crate::script::normalize;
use crate::translit::limbu_to_roman;

/// Devanagari month word → English gloss.
pub const GLOSSES: &[(&str, &str)] = &[
    ("कःकफेक्वा", "Jan/Feb"),
    ("साःफेक्वा", "Feb/Mar"),
    ("चेरेड्\u{200C}नाम", "Mar/Apr"),
    ("थेरेड्\u{200C}नाम", "Apr/May"),
    ("कामेःपा", "May/Jun"),
    ("थकमेःपा", "Jun/Jul"),
    ("सिसेःकपा", "Jul/Aug"),
    ("थेसेःकपा", "Aug/Sep"),
];

/// One row of the demonstration table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthRow {
    pub english: &'static str,
    pub limbu: &'static str,
    pub devanagari: &'static str,
}

pub const MONTHS: &[MonthRow] = &[
    MonthRow {
        english: "Jan/Feb",
        limbu: "\u{1913}\u{1930}\u{193C}\u{1910}\u{193C}\u{1944}",
        devanagari: "कःकफेक्वा",
    },
    MonthRow {
        english: "Feb/Mar",
        limbu: "\u{1915}\u{1930}\u{193C}\u{1910}\u{193C}\u{1944}",
        devanagari: "साःफेक्वा",
    },
    MonthRow {
        english: "Mar/Apr",
        limbu: "\u{1912}\u{193A}\u{190D}\u{1930}\u{1910}\u{193C}\u{1944}",
        devanagari: "चेरेड्\u{200C}नाम",
    },
    MonthRow {
        english: "Apr/May",
        limbu: "\u{1915}\u{193A}\u{190D}\u{1930}\u{1910}\u{193C}\u{1944}",
        devanagari: "थेरेड्\u{200C}नाम",
    },
    MonthRow {
        english: "May/Jun",
        limbu: "\u{1917}\u{1930}\u{1918}\u{1930}\u{1919}\u{1930}",
        devanagari: "कामेःपा",
    },
    MonthRow {
        english: "Jun/Jul",
        limbu: "\u{1917}\u{1930}\u{1918}\u{1930}\u{1919}\u{1930}",
        devanagari: "थकमेःपा",
    },
    MonthRow {
        english: "Jul/Aug",
        limbu: "\u{191B}\u{1931}\u{1930}\u{1919}\u{1930}",
        devanagari: "सिसेःकपा",
    },
    MonthRow {
        english: "Aug/Sep",
        limbu: "\u{1915}\u{1931}\u{1930}\u{1919}\u{1930}",
        devanagari: "थेसेःकपा",
    },
];

/// Look up the English gloss of a Devanagari month word.
///
/// Unknown words yield a "not found" message instead of an error.
pub fn gloss_lookup(word: &str) -> String {
    let key = normalize(word);
    GLOSSES
        .iter()
        .find(|(dev, _)| *dev == key)
        .map(|(_, english)| english.to_string())
        .unwrap_or_else(|| format!("No offline translation found for '{word}'"))
}

fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{s}{}", " ".repeat(fill))
}

/// Render English, Limbu, Limbu→Roman and Devanagari for every month.
pub fn months_table() -> String {
    const RULE: &str = "---------------------------------------------------------";
    let mut out = String::new();
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!(
        "{} | {} | {} | {}\n",
        pad("English", 10),
        pad("Limbu", 15),
        pad("Limbu->Roman", 15),
        pad("Devanagari", 15)
    ));
    out.push_str(RULE);
    out.push('\n');
    for row in MONTHS {
        let roman = limbu_to_roman(row.limbu, None);
        out.push_str(&format!(
            "{} | {} | {} | {}\n",
            pad(row.english, 10),
            pad(row.limbu, 15),
            pad(&roman, 15),
            pad(row.devanagari, 15)
        ));
    }
    out.push_str(RULE);
    out.push('\n');
    out
}

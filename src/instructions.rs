use regex::Regex;
use std::sync::OnceLock;

/// Cooking instructions split into numbered steps and trailing notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedInstructions {
    /// Step sentences with their "Step N." / "1)" / bullet prefixes removed
    pub steps: Vec<String>,
    /// Raw lines following the first "Notes" marker
    pub notes: Vec<String>,
}

impl ParsedInstructions {
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty() && self.notes.is_empty()
    }
}

struct Patterns {
    serves: Regex,
    notes: Regex,
    enumerator: Regex,
}

fn patterns() -> Option<&'static Patterns> {
    static PATTERNS: OnceLock<Option<Patterns>> = OnceLock::new();
    PATTERNS
        .get_or_init(|| {
            Some(Patterns {
                serves: Regex::new(r"(?i)^serves\s*\d+").ok()?,
                notes: Regex::new(r"(?i)^notes").ok()?,
                enumerator: Regex::new(r"(?i)^(step\s*\d+[.)]?\s*|\d+[.)]?\s*|[-*]\s*)").ok()?,
            })
        })
        .as_ref()
}

/// Split a recipe's free-text instruction block into steps and notes.
///
/// Blank lines and "Serves N" lines are dropped, numbered ones ("1. Serves 4")
/// included. Everything after the first
/// line starting with "Notes" is collected verbatim as notes.
pub fn parse(instructions: &str) -> ParsedInstructions {
    let mut parsed = ParsedInstructions::default();
    let Some(patterns) = patterns() else {
        return parsed;
    };

    let lines = instructions
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !patterns.serves.is_match(line));

    let mut in_notes = false;
    for line in lines {
        if in_notes {
            parsed.notes.push(line.to_string());
        } else if patterns.notes.is_match(line) {
            in_notes = true;
        } else {
            let step = patterns.enumerator.replace(line, "");
            let step = step.trim();
            if !step.is_empty() && !patterns.serves.is_match(step) {
                parsed.steps.push(step.to_string());
            }
        }
    }

    parsed
}

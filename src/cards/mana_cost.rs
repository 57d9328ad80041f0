use std::fmt;
use std::str::FromStr;

use regex::Regex;
use thiserror::Error;

const MANA_SYMBOL_PATTERN: &str = r"\{([^{}]+)\}";

#[derive(Debug, Error)]
pub enum ManaCostError {
    #[error("unexpected text '{text}' in mana cost '{raw}'")]
    UnexpectedText { raw: String, text: String },
    #[error(transparent)]
    Pattern(#[from] regex::Error),
}

/// A mana cost such as `{2}{W}{W}`, split into its symbols.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct ManaCost {
    pub symbols: Vec<String>,
}

impl ManaCost {
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Generic symbols add their number, X/Y/Z add nothing, everything else adds one.
    pub fn mana_value(&self) -> u32 {
        self.symbols
            .iter()
            .map(|symbol| Self::symbol_value(symbol))
            .sum()
    }

    fn symbol_value(symbol: &str) -> u32 {
        if let Ok(generic) = symbol.parse::<u32>() {
            return generic;
        }
        if matches!(symbol, "X" | "Y" | "Z") {
            return 0;
        }
        // Two-brid like {2/W}
        symbol
            .split('/')
            .next()
            .and_then(|first| first.parse::<u32>().ok())
            .unwrap_or(1)
    }
}

impl FromStr for ManaCost {
    type Err = ManaCostError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let pattern = Regex::new(MANA_SYMBOL_PATTERN)?;
        let mut symbols = Vec::new();
        let mut position = 0;

        for captures in pattern.captures_iter(raw) {
            let (Some(whole), Some(symbol)) = (captures.get(0), captures.get(1)) else {
                continue;
            };
            if whole.start() != position {
                return Err(ManaCostError::UnexpectedText {
                    raw: raw.to_string(),
                    text: raw[position..whole.start()].to_string(),
                });
            }
            symbols.push(symbol.as_str().to_string());
            position = whole.end();
        }

        if position != raw.len() {
            return Err(ManaCostError::UnexpectedText {
                raw: raw.to_string(),
                text: raw[position..].to_string(),
            });
        }

        Ok(ManaCost { symbols })
    }
}

impl fmt::Display for ManaCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for symbol in &self.symbols {
            write!(f, "{{{}}}", symbol)?;
        }
        Ok(())
    }
}

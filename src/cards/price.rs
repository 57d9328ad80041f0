use std::cmp::Ordering;
use std::fmt;
use std::num::ParseFloatError;
use std::str::FromStr;

/// A USD price as Scryfall exports it (decimal-as-string).
#[derive(Debug, Clone, Copy)]
pub struct Price {
    pub amount: f64,
}

impl Price {
    pub fn new(amount: f64) -> Self {
        Self { amount }
    }
}

impl FromStr for Price {
    type Err = ParseFloatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<f64>().map(Price::new)
    }
}

impl PartialEq for Price {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl PartialOrd for Price {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.amount.partial_cmp(&other.amount)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parsing_and_display() {
        let price: Price = "0.19".parse().unwrap();
        assert_eq!(price, Price::new(0.19));
        assert_eq!(price.to_string(), "$0.19");
        assert_eq!(Price::new(12.5).to_string(), "$12.50");
    }

    #[test]
    fn test_price_comparison() {
        assert!(Price::new(0.5) < Price::new(1.0));
        assert!("abc".parse::<Price>().is_err());
    }
}

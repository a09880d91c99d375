//! Currency display — whole units, thousands grouping, one configured currency.
//!
//! The default matches `ru-RU` / `RUB` with zero fraction digits:
//! `1000` renders as `1 000 ₽` with no-break spaces.

use serde::{Deserialize, Serialize};

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolPosition {
    Prefix,
    Suffix,
}

/// Currency formatting rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub grouping_separator: char,
    pub symbol_position: SymbolPosition,
    /// Text between the number and the symbol.
    pub symbol_gap: String,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::rub()
    }
}

impl CurrencyFormat {
    /// Russian rouble, `ru-RU` conventions.
    pub fn rub() -> Self {
        Self {
            symbol: "₽".to_string(),
            grouping_separator: '\u{a0}',
            symbol_position: SymbolPosition::Suffix,
            symbol_gap: "\u{a0}".to_string(),
        }
    }

    /// US dollar, `en-US` conventions.
    pub fn usd() -> Self {
        Self {
            symbol: "$".to_string(),
            grouping_separator: ',',
            symbol_position: SymbolPosition::Prefix,
            symbol_gap: String::new(),
        }
    }

    /// Look up a preset by currency code.
    pub fn preset(code: &str) -> Option<Self> {
        match code.to_ascii_lowercase().as_str() {
            "rub" => Some(Self::rub()),
            "usd" => Some(Self::usd()),
            _ => None,
        }
    }

    /// Group `value` in threes with the configured separator.
    pub fn group(&self, value: u64) -> String {
        let digits = value.to_string();
        let len = digits.len();
        let mut out = String::with_capacity(len + len / 3 * 4);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (len - i) % 3 == 0 {
                out.push(self.grouping_separator);
            }
            out.push(ch);
        }
        out
    }

    pub fn format(&self, value: u64) -> String {
        let grouped = self.group(value);
        match self.symbol_position {
            SymbolPosition::Prefix => format!("{}{}{}", self.symbol, self.symbol_gap, grouped),
            SymbolPosition::Suffix => format!("{}{}{}", grouped, self.symbol_gap, self.symbol),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rub_default() {
        let f = CurrencyFormat::default();
        assert_eq!(f.format(0), "0\u{a0}₽");
        assert_eq!(f.format(999), "999\u{a0}₽");
        assert_eq!(f.format(1000), "1\u{a0}000\u{a0}₽");
        assert_eq!(f.format(1_234_567), "1\u{a0}234\u{a0}567\u{a0}₽");
    }

    #[test]
    fn usd_prefix() {
        let f = CurrencyFormat::usd();
        assert_eq!(f.format(5), "$5");
        assert_eq!(f.format(100_000), "$100,000");
    }

    #[test]
    fn preset_lookup() {
        assert_eq!(CurrencyFormat::preset("USD"), Some(CurrencyFormat::usd()));
        assert_eq!(CurrencyFormat::preset("rub"), Some(CurrencyFormat::rub()));
        assert_eq!(CurrencyFormat::preset("eur"), None);
    }

    #[test]
    fn partial_table_fills_defaults() {
        let f: CurrencyFormat = toml::from_str(r#"symbol = "€""#).unwrap();
        assert_eq!(f.symbol, "€");
        assert_eq!(f.grouping_separator, '\u{a0}');
        assert_eq!(f.format(2500), "2\u{a0}500\u{a0}€");
    }
}

use crate::utils::alphabet::{Symbol, encode_query};

/// Parsed query representation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    /// Query text as given, without surrounding whitespace
    pub raw: String,
    /// Encoded symbols, `None` when the text holds a character outside the
    /// alphabet. Such a query can never match.
    pub symbols: Option<Vec<Symbol>>,
}

impl Query {
    /// Whether descent should be attempted at all
    pub fn is_searchable(&self) -> bool {
        matches!(&self.symbols, Some(symbols) if !symbols.is_empty())
    }

    /// The same query anchored at the end of a token
    pub fn anchored(&self) -> Query {
        if self.raw.ends_with(crate::utils::TERMINATOR_CHAR) {
            return self.clone();
        }
        let symbols = self.symbols.as_ref().map(|symbols| {
            let mut anchored = symbols.clone();
            anchored.push(Symbol::Terminator);
            anchored
        });
        Query {
            raw: format!("{}{}", self.raw, crate::utils::TERMINATOR_CHAR),
            symbols,
        }
    }
}

/// Parse a query string
pub fn parse_query(input: &str) -> Query {
    let raw = input.trim();
    Query {
        raw: raw.to_string(),
        symbols: encode_query(raw),
    }
}

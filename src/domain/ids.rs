//! Domain identifier types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Product identifier - newtype for type safety.
///
/// Sale records reference products through this id; it is the join key of
/// every aggregation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(i64);

impl ProductId {
    /// Create a new ProductId.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw numeric id.
    #[must_use]
    pub const fn value(self) -> i64 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ProductId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}

impl FromStr for ProductId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_id_display_is_numeric() {
        assert_eq!(ProductId::new(42).to_string(), "42");
    }

    #[test]
    fn product_id_parses_from_trimmed_str() {
        assert_eq!(" 7 ".parse::<ProductId>().unwrap(), ProductId::new(7));
        assert!("seven".parse::<ProductId>().is_err());
    }

    #[test]
    fn product_id_serializes_transparently() {
        let json = serde_json::to_string(&ProductId::new(3)).unwrap();
        assert_eq!(json, "3");
        let back: ProductId = serde_json::from_str("3").unwrap();
        assert_eq!(back.value(), 3);
    }

    #[test]
    fn product_ids_order_numerically() {
        let mut ids = vec![ProductId::new(10), ProductId::new(2), ProductId::new(7)];
        ids.sort();
        assert_eq!(ids, vec![ProductId::new(2), ProductId::new(7), ProductId::new(10)]);
    }
}

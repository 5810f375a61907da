use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-valued investment recommendation derived from a quote series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    HoldBuy,
    Sell,
}

impl fmt::Display for Recommendation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Recommendation::HoldBuy => write!(f, "Hold/Buy"),
            Recommendation::Sell => write!(f, "Sell"),
        }
    }
}

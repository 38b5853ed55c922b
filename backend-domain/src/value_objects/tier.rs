// Tier value object

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    S,
    A,
    B,
    C,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::S, Tier::A, Tier::B, Tier::C];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }

    /// Number of roster slots the tier takes; `None` means "everything left".
    pub fn capacity(&self) -> Option<usize> {
        match self {
            Tier::S => Some(6),
            Tier::A => Some(10),
            Tier::B => Some(12),
            Tier::C => None,
        }
    }

    /// Ranges for the synthesized win rate and pick rate: (base, spread).
    pub fn rate_bands(&self) -> ((f64, f64), (f64, f64)) {
        match self {
            Tier::S => ((75.0, 15.0), (8.0, 12.0)),
            Tier::A => ((65.0, 10.0), (5.0, 8.0)),
            Tier::B => ((50.0, 15.0), (2.0, 6.0)),
            Tier::C => ((35.0, 20.0), (0.5, 3.0)),
        }
    }
}

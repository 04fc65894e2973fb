use serde::{Deserialize, Serialize};

pub const DEFAULT_QUACK_SOUND: &str = "Quack!";
pub const DEFAULT_SWIM_ACTION: &str = "Swimming...";

/// The closed set of duck variants, in selector order. Each variant is an
/// immutable configuration of sounds and display text; there is no other
/// per-duck state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuckVariant {
    Mallard,
    Redhead,
    Rubber,
    Decoy,
}

impl DuckVariant {
    pub const ALL: [DuckVariant; 4] = [
        DuckVariant::Mallard,
        DuckVariant::Redhead,
        DuckVariant::Rubber,
        DuckVariant::Decoy,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Mallard => "Mallard Duck",
            Self::Redhead => "Redhead Duck",
            Self::Rubber => "Rubber Duck",
            Self::Decoy => "Decoy Duck",
        }
    }

    /// Sound produced by the quack behavior. Rubber and decoy ducks override
    /// the default.
    pub fn quack(self) -> &'static str {
        match self {
            Self::Rubber => "Squeak!",
            Self::Decoy => "...",
            _ => DEFAULT_QUACK_SOUND,
        }
    }

    pub fn swim(self) -> &'static str {
        match self {
            Self::Rubber => "Floating in the bathtub...",
            _ => DEFAULT_SWIM_ACTION,
        }
    }

    /// Textual self-description shown in the appearance panel.
    pub fn display(self) -> &'static str {
        match self {
            Self::Mallard => "🦆 I'm a Mallard Duck - green head, brown body!",
            Self::Redhead => "🦆 I'm a Redhead Duck - red head, gray body!",
            Self::Rubber => "🛁 I'm a Rubber Duck - squeaky and yellow!",
            Self::Decoy => "🪵 I'm a Decoy Duck - wooden and still!",
        }
    }

    /// Glyph drawn for the duck swimming in the pond.
    pub fn emoji(self) -> &'static str {
        match self {
            Self::Mallard | Self::Redhead => "🦆",
            Self::Rubber => "🐥",
            Self::Decoy => "🪵",
        }
    }
}

use std::fmt;
use std::str::FromStr;

use crate::parse::ParseError;

/// A position in a build that holds at most one component.
///
/// `Monitor` and `Expansion` are accepted in a selection but no rule, power
/// contribution or score looks at them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slot {
    Processor,
    Motherboard,
    GraphicsCard,
    Memory,
    Storage,
    PowerSupply,
    Case,
    CpuCooler,
    Monitor,
    Expansion,
}

impl Slot {
    /// Every slot, in evaluation order.
    pub const ALL: [Slot; 10] = [
        Slot::Processor,
        Slot::Motherboard,
        Slot::GraphicsCard,
        Slot::Memory,
        Slot::Storage,
        Slot::PowerSupply,
        Slot::Case,
        Slot::CpuCooler,
        Slot::Monitor,
        Slot::Expansion,
    ];

    /// Returns `true` for slots that take part in compatibility, power or scoring.
    #[must_use]
    pub fn is_core(self) -> bool {
        !matches!(self, Slot::Monitor | Slot::Expansion)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Slot::Processor => "processor",
            Slot::Motherboard => "motherboard",
            Slot::GraphicsCard => "graphics_card",
            Slot::Memory => "memory",
            Slot::Storage => "storage",
            Slot::PowerSupply => "power_supply",
            Slot::Case => "case",
            Slot::CpuCooler => "cpu_cooler",
            Slot::Monitor => "monitor",
            Slot::Expansion => "expansion",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Slot {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        Slot::ALL
            .into_iter()
            .find(|slot| slot.as_str().replace('_', "") == normalized)
            .ok_or_else(|| ParseError::new(format!("unknown slot '{}'", s.trim())))
    }
}

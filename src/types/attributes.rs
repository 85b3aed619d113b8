use std::fmt;
use std::str::FromStr;

use crate::parse::{self, ParseError};

/// A CPU socket identifier, normalized to upper-case with whitespace removed
/// so that `"lga 1700"` and `"LGA1700"` compare equal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub struct Socket(String);

impl Socket {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(
            id.as_ref()
                .chars()
                .filter(|c| !c.is_whitespace())
                .map(|c| c.to_ascii_uppercase())
                .collect(),
        )
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Socket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Socket {
    fn from(id: &str) -> Self {
        Socket::new(id)
    }
}

impl From<String> for Socket {
    fn from(id: String) -> Self {
        Socket::new(id)
    }
}

impl From<Socket> for String {
    fn from(socket: Socket) -> Self {
        socket.0
    }
}

/// Memory technology generation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MemoryType {
    Ddr3,
    Ddr4,
    Ddr5,
    /// Any other label, stored upper-cased (e.g. `LPDDR5X`).
    Other(String),
}

impl MemoryType {
    pub(crate) fn from_label(label: &str) -> Self {
        let label = label.trim().to_ascii_uppercase();
        match label.as_str() {
            "DDR3" => MemoryType::Ddr3,
            "DDR4" => MemoryType::Ddr4,
            "DDR5" => MemoryType::Ddr5,
            _ => MemoryType::Other(label),
        }
    }
}

impl fmt::Display for MemoryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MemoryType::Ddr3 => f.write_str("DDR3"),
            MemoryType::Ddr4 => f.write_str("DDR4"),
            MemoryType::Ddr5 => f.write_str("DDR5"),
            MemoryType::Other(label) => f.write_str(label),
        }
    }
}

impl FromStr for MemoryType {
    type Err = ParseError;

    /// Accepts bare labels (`"DDR5"`) and full specs (`"DDR5-6000"`); the
    /// speed part of a full label is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().is_empty() {
            return Err(ParseError::new("empty memory type"));
        }
        Ok(parse::memory_spec(s)
            .map(|spec| spec.memory_type)
            .unwrap_or_else(|_| MemoryType::from_label(s)))
    }
}

/// Motherboard form factor, ordered by physical containment:
/// `MiniItx < MicroAtx < Atx < EAtx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormFactor {
    MiniItx,
    MicroAtx,
    Atx,
    EAtx,
}

impl fmt::Display for FormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            FormFactor::MiniItx => "Mini-ITX",
            FormFactor::MicroAtx => "Micro-ATX",
            FormFactor::Atx => "ATX",
            FormFactor::EAtx => "E-ATX",
        })
    }
}

impl FromStr for FormFactor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use winnow::Parser;
        let normalized = parse::normalize(s);
        parse::grammar::board_form_factor
            .parse(normalized.as_str())
            .map_err(|_| ParseError::new(format!("unknown motherboard form factor '{}'", s.trim())))
    }
}

/// Case size class as marketed.
///
/// Full and super towers are treated as E-ATX capable; a mid tower is an ATX case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseFormFactor {
    MiniItx,
    MicroAtx,
    Atx,
    EAtx,
    FullTower,
    SuperTower,
}

impl CaseFormFactor {
    /// The largest motherboard form factor this case can hold.
    #[must_use]
    pub fn largest_board(self) -> FormFactor {
        match self {
            CaseFormFactor::MiniItx => FormFactor::MiniItx,
            CaseFormFactor::MicroAtx => FormFactor::MicroAtx,
            CaseFormFactor::Atx => FormFactor::Atx,
            CaseFormFactor::EAtx | CaseFormFactor::FullTower | CaseFormFactor::SuperTower => {
                FormFactor::EAtx
            }
        }
    }

    /// Whether the case is explicitly marketed for E-ATX boards.
    #[must_use]
    pub fn is_eatx_rated(self) -> bool {
        matches!(
            self,
            CaseFormFactor::EAtx | CaseFormFactor::FullTower | CaseFormFactor::SuperTower
        )
    }
}

impl fmt::Display for CaseFormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CaseFormFactor::MiniItx => "Mini-ITX",
            CaseFormFactor::MicroAtx => "Micro-ATX",
            CaseFormFactor::Atx => "ATX Mid Tower",
            CaseFormFactor::EAtx => "E-ATX",
            CaseFormFactor::FullTower => "Full Tower",
            CaseFormFactor::SuperTower => "Super Tower",
        })
    }
}

impl FromStr for CaseFormFactor {
    type Err = ParseError;

    /// Reads marketing labels such as `"ATX Mid Tower"` or `"MicroATX Mini Tower"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = parse::normalize(s);
        let factor = if n.contains("super") {
            CaseFormFactor::SuperTower
        } else if n.contains("full") {
            CaseFormFactor::FullTower
        } else if n.contains("eatx") || n.contains("extendedatx") {
            CaseFormFactor::EAtx
        } else if n.contains("itx") {
            CaseFormFactor::MiniItx
        } else if n.contains("microatx") || n.contains("matx") || n.contains("uatx") {
            CaseFormFactor::MicroAtx
        } else if n.contains("atx") || n.contains("mid") {
            CaseFormFactor::Atx
        } else {
            return Err(ParseError::new(format!(
                "unknown case form factor '{}'",
                s.trim()
            )));
        };
        Ok(factor)
    }
}

/// Power supply form factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PsuFormFactor {
    Atx,
    Sfx,
    SfxL,
    Tfx,
    FlexAtx,
}

impl PsuFormFactor {
    /// Small form factor units that fit Mini-ITX cases.
    #[must_use]
    pub fn is_small(self) -> bool {
        !matches!(self, PsuFormFactor::Atx)
    }
}

impl fmt::Display for PsuFormFactor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PsuFormFactor::Atx => "ATX",
            PsuFormFactor::Sfx => "SFX",
            PsuFormFactor::SfxL => "SFX-L",
            PsuFormFactor::Tfx => "TFX",
            PsuFormFactor::FlexAtx => "Flex ATX",
        })
    }
}

impl FromStr for PsuFormFactor {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use winnow::Parser;
        let normalized = parse::normalize(s);
        parse::grammar::psu_form_factor
            .parse(normalized.as_str())
            .map_err(|_| ParseError::new(format!("unknown power supply form factor '{}'", s.trim())))
    }
}

/// CPU cooler construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CoolerKind {
    AirCooler,
    AioLiquid,
}

impl fmt::Display for CoolerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            CoolerKind::AirCooler => "Air Cooler",
            CoolerKind::AioLiquid => "AIO Liquid",
        })
    }
}

impl FromStr for CoolerKind {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n = parse::normalize(s);
        if n.contains("liquid") || n.contains("aio") || n.contains("water") {
            Ok(CoolerKind::AioLiquid)
        } else if n.contains("air") || n.contains("tower") {
            Ok(CoolerKind::AirCooler)
        } else {
            Err(ParseError::new(format!("unknown cooler type '{}'", s.trim())))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn socket_normalization() {
        assert_eq!(Socket::new("lga 1700"), Socket::new("LGA1700"));
        assert_eq!(Socket::new(" am5 ").as_str(), "AM5");
        assert_ne!(Socket::new("AM4"), Socket::new("AM5"));
    }

    #[test]
    fn memory_type_from_labels() {
        assert_eq!("DDR5".parse::<MemoryType>().unwrap(), MemoryType::Ddr5);
        assert_eq!("ddr4-3200".parse::<MemoryType>().unwrap(), MemoryType::Ddr4);
        assert_eq!(
            "GDDR6".parse::<MemoryType>().unwrap(),
            MemoryType::Other("GDDR6".into())
        );
        assert!("  ".parse::<MemoryType>().is_err());
    }

    #[test]
    fn form_factor_containment_order() {
        assert!(FormFactor::MiniItx < FormFactor::MicroAtx);
        assert!(FormFactor::MicroAtx < FormFactor::Atx);
        assert!(FormFactor::Atx < FormFactor::EAtx);
    }

    #[test]
    fn form_factor_spellings() {
        assert_eq!("Mini-ITX".parse::<FormFactor>().unwrap(), FormFactor::MiniItx);
        assert_eq!("Micro ATX".parse::<FormFactor>().unwrap(), FormFactor::MicroAtx);
        assert_eq!("mATX".parse::<FormFactor>().unwrap(), FormFactor::MicroAtx);
        assert_eq!("E-ATX".parse::<FormFactor>().unwrap(), FormFactor::EAtx);
        assert_eq!("ATX".parse::<FormFactor>().unwrap(), FormFactor::Atx);
        assert!("BTX".parse::<FormFactor>().is_err());
    }

    #[test]
    fn case_labels() {
        assert_eq!(
            "ATX Mid Tower".parse::<CaseFormFactor>().unwrap(),
            CaseFormFactor::Atx
        );
        assert_eq!(
            "MicroATX Mini Tower".parse::<CaseFormFactor>().unwrap(),
            CaseFormFactor::MicroAtx
        );
        assert_eq!(
            "Mini ITX Desktop".parse::<CaseFormFactor>().unwrap(),
            CaseFormFactor::MiniItx
        );
        assert_eq!(
            "ATX Full Tower".parse::<CaseFormFactor>().unwrap(),
            CaseFormFactor::FullTower
        );
        assert!("Open Bench".parse::<CaseFormFactor>().is_err());
    }

    #[test]
    fn case_board_capacity() {
        assert_eq!(CaseFormFactor::Atx.largest_board(), FormFactor::Atx);
        assert_eq!(CaseFormFactor::SuperTower.largest_board(), FormFactor::EAtx);
        assert!(!CaseFormFactor::Atx.is_eatx_rated());
        assert!(CaseFormFactor::FullTower.is_eatx_rated());
    }

    #[test]
    fn psu_and_cooler_labels() {
        assert_eq!("SFX-L".parse::<PsuFormFactor>().unwrap(), PsuFormFactor::SfxL);
        assert_eq!("ATX".parse::<PsuFormFactor>().unwrap(), PsuFormFactor::Atx);
        assert!(!PsuFormFactor::Atx.is_small());
        assert!(PsuFormFactor::Sfx.is_small());
        assert_eq!("AIO Liquid".parse::<CoolerKind>().unwrap(), CoolerKind::AioLiquid);
        assert_eq!("AirCooler".parse::<CoolerKind>().unwrap(), CoolerKind::AirCooler);
    }
}

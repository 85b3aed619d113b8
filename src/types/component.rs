use super::attributes::{CaseFormFactor, CoolerKind, FormFactor, MemoryType, PsuFormFactor, Socket};
use super::slot::Slot;

/// Central processing unit attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Processor {
    pub socket: Option<Socket>,
    pub tdp_watts: Option<f64>,
    /// Generic consumption figure, used when no TDP is listed.
    pub power_watts: Option<f64>,
    /// Composite benchmark score (multi-thread mark).
    pub performance_score: Option<u32>,
    pub core_count: Option<u32>,
    pub base_clock_ghz: Option<f64>,
    pub boost_clock_ghz: Option<f64>,
}

impl Processor {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn socket(mut self, socket: impl Into<Socket>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    #[must_use]
    pub fn tdp(mut self, watts: f64) -> Self {
        self.tdp_watts = Some(watts);
        self
    }

    #[must_use]
    pub fn power(mut self, watts: f64) -> Self {
        self.power_watts = Some(watts);
        self
    }

    #[must_use]
    pub fn performance_score(mut self, score: u32) -> Self {
        self.performance_score = Some(score);
        self
    }

    #[must_use]
    pub fn cores(mut self, count: u32) -> Self {
        self.core_count = Some(count);
        self
    }

    #[must_use]
    pub fn base_clock(mut self, ghz: f64) -> Self {
        self.base_clock_ghz = Some(ghz);
        self
    }

    #[must_use]
    pub fn boost_clock(mut self, ghz: f64) -> Self {
        self.boost_clock_ghz = Some(ghz);
        self
    }
}

/// Motherboard attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Motherboard {
    pub socket: Option<Socket>,
    pub memory_type: Option<MemoryType>,
    pub max_memory_gb: Option<u32>,
    pub form_factor: Option<FormFactor>,
    pub power_watts: Option<f64>,
}

impl Motherboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn socket(mut self, socket: impl Into<Socket>) -> Self {
        self.socket = Some(socket.into());
        self
    }

    #[must_use]
    pub fn memory_type(mut self, memory_type: MemoryType) -> Self {
        self.memory_type = Some(memory_type);
        self
    }

    #[must_use]
    pub fn max_memory(mut self, gb: u32) -> Self {
        self.max_memory_gb = Some(gb);
        self
    }

    #[must_use]
    pub fn form_factor(mut self, form_factor: FormFactor) -> Self {
        self.form_factor = Some(form_factor);
        self
    }

    #[must_use]
    pub fn power(mut self, watts: f64) -> Self {
        self.power_watts = Some(watts);
        self
    }
}

/// Graphics card attributes. Price stands in for the performance class.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphicsCard {
    pub length_mm: Option<u32>,
    pub tdp_watts: Option<f64>,
    pub power_watts: Option<f64>,
    pub price: Option<f64>,
    pub boost_clock_mhz: Option<f64>,
}

impl GraphicsCard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn length(mut self, mm: u32) -> Self {
        self.length_mm = Some(mm);
        self
    }

    #[must_use]
    pub fn tdp(mut self, watts: f64) -> Self {
        self.tdp_watts = Some(watts);
        self
    }

    #[must_use]
    pub fn power(mut self, watts: f64) -> Self {
        self.power_watts = Some(watts);
        self
    }

    #[must_use]
    pub fn price(mut self, price: f64) -> Self {
        self.price = Some(price);
        self
    }

    #[must_use]
    pub fn boost_clock(mut self, mhz: f64) -> Self {
        self.boost_clock_mhz = Some(mhz);
        self
    }
}

/// Memory kit attributes. `capacity_gb` is the kit total, not per module.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Memory {
    pub memory_type: Option<MemoryType>,
    pub capacity_gb: Option<u32>,
    pub speed_mhz: Option<u32>,
    pub module_count: Option<u32>,
    pub watts_per_module: Option<f64>,
}

impl Memory {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn memory_type(mut self, memory_type: MemoryType) -> Self {
        self.memory_type = Some(memory_type);
        self
    }

    #[must_use]
    pub fn capacity(mut self, gb: u32) -> Self {
        self.capacity_gb = Some(gb);
        self
    }

    #[must_use]
    pub fn speed(mut self, mhz: u32) -> Self {
        self.speed_mhz = Some(mhz);
        self
    }

    #[must_use]
    pub fn modules(mut self, count: u32) -> Self {
        self.module_count = Some(count);
        self
    }

    #[must_use]
    pub fn watts_per_module(mut self, watts: f64) -> Self {
        self.watts_per_module = Some(watts);
        self
    }
}

/// Storage drive attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Storage {
    /// Interface or drive type as listed, e.g. `"PCIe 4.0 NVMe"` or `"SATA SSD"`.
    pub interface: Option<String>,
    pub power_watts: Option<f64>,
}

impl Storage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn interface(mut self, interface: impl Into<String>) -> Self {
        self.interface = Some(interface.into());
        self
    }

    #[must_use]
    pub fn power(mut self, watts: f64) -> Self {
        self.power_watts = Some(watts);
        self
    }

    /// Whether the interface text names an NVMe or PCIe link.
    #[must_use]
    pub fn is_nvme_class(&self) -> bool {
        self.interface.as_deref().is_some_and(|interface| {
            let lower = interface.to_ascii_lowercase();
            lower.contains("nvme") || lower.contains("pcie")
        })
    }
}

/// Power supply attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PowerSupply {
    pub wattage: Option<u32>,
    pub form_factor: Option<PsuFormFactor>,
}

impl PowerSupply {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn wattage(mut self, watts: u32) -> Self {
        self.wattage = Some(watts);
        self
    }

    #[must_use]
    pub fn form_factor(mut self, form_factor: PsuFormFactor) -> Self {
        self.form_factor = Some(form_factor);
        self
    }
}

/// Chassis attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Case {
    pub form_factor: Option<CaseFormFactor>,
    pub max_gpu_length_mm: Option<u32>,
    pub max_cooler_height_mm: Option<u32>,
    pub front_fan_slots: Option<u32>,
    pub top_fan_slots: Option<u32>,
    pub rear_fan_slots: Option<u32>,
    /// Draw of bundled fans and lighting.
    pub fan_watts: Option<f64>,
}

impl Case {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn form_factor(mut self, form_factor: CaseFormFactor) -> Self {
        self.form_factor = Some(form_factor);
        self
    }

    #[must_use]
    pub fn max_gpu_length(mut self, mm: u32) -> Self {
        self.max_gpu_length_mm = Some(mm);
        self
    }

    #[must_use]
    pub fn max_cooler_height(mut self, mm: u32) -> Self {
        self.max_cooler_height_mm = Some(mm);
        self
    }

    #[must_use]
    pub fn fan_slots(mut self, front: u32, top: u32, rear: u32) -> Self {
        self.front_fan_slots = Some(front);
        self.top_fan_slots = Some(top);
        self.rear_fan_slots = Some(rear);
        self
    }

    #[must_use]
    pub fn fan_power(mut self, watts: f64) -> Self {
        self.fan_watts = Some(watts);
        self
    }

    /// Front, top and rear fan positions combined, or `None` when the case
    /// lists none of them.
    #[must_use]
    pub fn mounting_slots(&self) -> Option<u32> {
        let positions = [self.front_fan_slots, self.top_fan_slots, self.rear_fan_slots];
        if positions.iter().all(Option::is_none) {
            return None;
        }
        Some(positions.iter().flatten().fold(0u32, |sum, &n| sum.saturating_add(n)))
    }
}

/// CPU cooler attributes.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CpuCooler {
    pub kind: Option<CoolerKind>,
    pub height_mm: Option<u32>,
    pub radiator_mm: Option<u32>,
    /// Sockets the mounting kit supports. Empty means unknown, not "none".
    pub supported_sockets: Vec<Socket>,
    pub power_watts: Option<f64>,
}

impl CpuCooler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn air(height_mm: u32) -> Self {
        Self {
            kind: Some(CoolerKind::AirCooler),
            height_mm: Some(height_mm),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn liquid(radiator_mm: u32) -> Self {
        Self {
            kind: Some(CoolerKind::AioLiquid),
            radiator_mm: Some(radiator_mm),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn supports(mut self, socket: impl Into<Socket>) -> Self {
        self.supported_sockets.push(socket.into());
        self
    }

    #[must_use]
    pub fn power(mut self, watts: f64) -> Self {
        self.power_watts = Some(watts);
        self
    }
}

/// Peripheral slots that ride along in a selection without being evaluated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AccessoryKind {
    Monitor,
    Expansion,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Accessory {
    pub kind: AccessoryKind,
    pub name: String,
}

impl Accessory {
    pub fn new(kind: AccessoryKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// A part occupying one [`Slot`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Component {
    Processor(Processor),
    Motherboard(Motherboard),
    GraphicsCard(GraphicsCard),
    Memory(Memory),
    Storage(Storage),
    PowerSupply(PowerSupply),
    Case(Case),
    CpuCooler(CpuCooler),
    Accessory(Accessory),
}

impl Component {
    /// The slot this component occupies.
    #[must_use]
    pub fn slot(&self) -> Slot {
        match self {
            Component::Processor(_) => Slot::Processor,
            Component::Motherboard(_) => Slot::Motherboard,
            Component::GraphicsCard(_) => Slot::GraphicsCard,
            Component::Memory(_) => Slot::Memory,
            Component::Storage(_) => Slot::Storage,
            Component::PowerSupply(_) => Slot::PowerSupply,
            Component::Case(_) => Slot::Case,
            Component::CpuCooler(_) => Slot::CpuCooler,
            Component::Accessory(a) => match a.kind {
                AccessoryKind::Monitor => Slot::Monitor,
                AccessoryKind::Expansion => Slot::Expansion,
            },
        }
    }
}

impl From<Processor> for Component {
    fn from(part: Processor) -> Self {
        Component::Processor(part)
    }
}

impl From<Motherboard> for Component {
    fn from(part: Motherboard) -> Self {
        Component::Motherboard(part)
    }
}

impl From<GraphicsCard> for Component {
    fn from(part: GraphicsCard) -> Self {
        Component::GraphicsCard(part)
    }
}

impl From<Memory> for Component {
    fn from(part: Memory) -> Self {
        Component::Memory(part)
    }
}

impl From<Storage> for Component {
    fn from(part: Storage) -> Self {
        Component::Storage(part)
    }
}

impl From<PowerSupply> for Component {
    fn from(part: PowerSupply) -> Self {
        Component::PowerSupply(part)
    }
}

impl From<Case> for Component {
    fn from(part: Case) -> Self {
        Component::Case(part)
    }
}

impl From<CpuCooler> for Component {
    fn from(part: CpuCooler) -> Self {
        Component::CpuCooler(part)
    }
}

impl From<Accessory> for Component {
    fn from(part: Accessory) -> Self {
        Component::Accessory(part)
    }
}

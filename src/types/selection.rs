use std::collections::BTreeMap;

use super::component::{
    Case, Component, CpuCooler, GraphicsCard, Memory, Motherboard, PowerSupply, Processor,
    Storage,
};
use super::slot::Slot;

/// The parts chosen for a build, at most one per [`Slot`].
///
/// Iteration is always in slot order regardless of insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BuildSelection {
    parts: BTreeMap<Slot, Component>,
}

impl BuildSelection {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place a component in its slot, replacing any previous occupant.
    #[must_use]
    pub fn with(mut self, component: impl Into<Component>) -> Self {
        self.insert(component);
        self
    }

    /// Place a component in its slot (mutable reference version).
    /// Returns the component it replaced, if any.
    pub fn insert(&mut self, component: impl Into<Component>) -> Option<Component> {
        let component = component.into();
        self.parts.insert(component.slot(), component)
    }

    /// Empty a slot, returning its previous occupant.
    pub fn remove(&mut self, slot: Slot) -> Option<Component> {
        self.parts.remove(&slot)
    }

    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&Component> {
        self.parts.get(&slot)
    }

    #[must_use]
    pub fn contains(&self, slot: Slot) -> bool {
        self.parts.contains_key(&slot)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Populated slots and their components, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &Component)> {
        self.parts.iter().map(|(slot, part)| (*slot, part))
    }

    #[must_use]
    pub fn processor(&self) -> Option<&Processor> {
        match self.get(Slot::Processor)? {
            Component::Processor(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn motherboard(&self) -> Option<&Motherboard> {
        match self.get(Slot::Motherboard)? {
            Component::Motherboard(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn graphics_card(&self) -> Option<&GraphicsCard> {
        match self.get(Slot::GraphicsCard)? {
            Component::GraphicsCard(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn memory(&self) -> Option<&Memory> {
        match self.get(Slot::Memory)? {
            Component::Memory(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn storage(&self) -> Option<&Storage> {
        match self.get(Slot::Storage)? {
            Component::Storage(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn power_supply(&self) -> Option<&PowerSupply> {
        match self.get(Slot::PowerSupply)? {
            Component::PowerSupply(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn case(&self) -> Option<&Case> {
        match self.get(Slot::Case)? {
            Component::Case(part) => Some(part),
            _ => None,
        }
    }

    #[must_use]
    pub fn cpu_cooler(&self) -> Option<&CpuCooler> {
        match self.get(Slot::CpuCooler)? {
            Component::CpuCooler(part) => Some(part),
            _ => None,
        }
    }
}

impl<C: Into<Component>> FromIterator<C> for BuildSelection {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut selection = Self::new();
        for component in iter {
            selection.insert(component);
        }
        selection
    }
}

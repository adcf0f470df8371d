//! The party roster the field menu operates on.

use crate::inventory::Inventory;

/// Integer resource meter (health, magic) tracked per member.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResourceMeter {
    pub current: u32,
    pub maximum: u32,
}

impl ResourceMeter {
    pub fn new(current: u32, maximum: u32) -> Self {
        Self {
            current: current.min(maximum),
            maximum,
        }
    }

    /// A meter starting at its maximum.
    pub fn full(maximum: u32) -> Self {
        Self::new(maximum, maximum)
    }

    /// Raise the meter, capped at its maximum.
    pub fn restore(&mut self, amount: u32) {
        self.current = self.current.saturating_add(amount).min(self.maximum);
    }

    /// How far the meter is below its maximum.
    pub fn deficit(&self) -> u32 {
        self.maximum.saturating_sub(self.current)
    }

    pub fn is_full(&self) -> bool {
        self.current >= self.maximum
    }
}

/// One member of the travelling party.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PartyMember {
    pub name: String,
    pub health: ResourceMeter,
    pub magic: ResourceMeter,
}

impl PartyMember {
    pub fn new(name: impl Into<String>, health: ResourceMeter, magic: ResourceMeter) -> Self {
        Self {
            name: name.into(),
            health,
            magic,
        }
    }
}

/// Ordered party roster plus the shared inventory.
///
/// The menu treats this as a single-writer resource: field effects mutate
/// members and item consumption mutates the inventory, both synchronously
/// inside the menu's update step.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Party {
    members: Vec<PartyMember>,
    pub inventory: Inventory,
}

impl Party {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<PartyMember>) -> Self {
        Self {
            members,
            inventory: Inventory::new(),
        }
    }

    pub fn members(&self) -> &[PartyMember] {
        &self.members
    }

    pub fn members_mut(&mut self) -> impl Iterator<Item = &mut PartyMember> {
        self.members.iter_mut()
    }

    pub fn push_member(&mut self, member: PartyMember) {
        self.members.push(member);
    }

    /// Member with the largest health deficit, if anyone is wounded.
    pub fn most_wounded_mut(&mut self) -> Option<&mut PartyMember> {
        self.members
            .iter_mut()
            .filter(|m| !m.health.is_full())
            .max_by_key(|m| m.health.deficit())
    }

    /// Member with the largest magic deficit, if anyone is drained.
    pub fn most_drained_mut(&mut self) -> Option<&mut PartyMember> {
        self.members
            .iter_mut()
            .filter(|m| !m.magic.is_full())
            .max_by_key(|m| m.magic.deficit())
    }
}

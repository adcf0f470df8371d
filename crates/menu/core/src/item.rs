//! Item definitions and field effects.
//!
//! # Design: Base + Effect Pattern
//!
//! An [`Item`] holds display data and flags; what the item *does* outside
//! combat lives in the [`FieldEffect`] enum, resolved when the definition is
//! built. Combat-only items simply carry no field effect and never appear in
//! the field item menu.

use crate::config::MenuConfig;
use crate::party::Party;

/// An item capability usable outside combat.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum FieldEffect {
    /// Restore health to the most wounded party member.
    Heal { amount: u32 },
    /// Restore magic to the most drained party member.
    Restore { amount: u32 },
    /// Restore health to every party member.
    HealAll { amount: u32 },
    /// Hand control back to the engine (warp wings, tents, ...). The menu
    /// takes no further action and never consumes the item itself.
    Defer,
}

impl FieldEffect {
    /// Apply the effect to the party.
    ///
    /// Returns `true` when the effect produced a follow-up the caller must
    /// handle. An item is consumed only when this returns `false`; the
    /// signal does not distinguish success from cancellation.
    pub fn apply(&self, party: &mut Party) -> bool {
        match self {
            Self::Heal { amount } => {
                if let Some(member) = party.most_wounded_mut() {
                    member.health.restore(*amount);
                }
                false
            }
            Self::Restore { amount } => {
                if let Some(member) = party.most_drained_mut() {
                    member.magic.restore(*amount);
                }
                false
            }
            Self::HealAll { amount } => {
                for member in party.members_mut() {
                    member.health.restore(*amount);
                }
                false
            }
            Self::Defer => true,
        }
    }
}

/// A carriable item definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub name: String,
    /// Single line shown in the description bar while the cursor rests on
    /// the item.
    pub description: String,
    /// One unit is removed from the inventory after a successful field use.
    pub consumable: bool,
    /// Per-stack quantity cap.
    pub max_stack: u16,
    pub field_effect: Option<FieldEffect>,
}

impl Item {
    /// Create a non-consumable item with no field effect.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            consumable: false,
            max_stack: MenuConfig::DEFAULT_MAX_STACK,
            field_effect: None,
        }
    }

    #[must_use]
    pub fn with_field_effect(mut self, effect: FieldEffect) -> Self {
        self.field_effect = Some(effect);
        self
    }

    #[must_use]
    pub fn consumable(mut self) -> Self {
        self.consumable = true;
        self
    }

    #[must_use]
    pub fn with_max_stack(mut self, max_stack: u16) -> Self {
        self.max_stack = max_stack.max(1);
        self
    }

    /// True when the item can be used from the field item menu.
    pub fn is_field_usable(&self) -> bool {
        self.field_effect.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::party::{PartyMember, ResourceMeter};

    fn party_of(members: Vec<PartyMember>) -> Party {
        Party::with_members(members)
    }

    #[test]
    fn heal_targets_the_most_wounded_member() {
        let mut party = party_of(vec![
            PartyMember::new("Aeris", ResourceMeter::new(30, 40), ResourceMeter::new(10, 10)),
            PartyMember::new("Brand", ResourceMeter::new(5, 40), ResourceMeter::new(10, 10)),
        ]);

        let handled = FieldEffect::Heal { amount: 20 }.apply(&mut party);

        assert!(!handled);
        assert_eq!(party.members()[0].health.current, 30);
        assert_eq!(party.members()[1].health.current, 25);
    }

    #[test]
    fn heal_caps_at_maximum() {
        let mut party = party_of(vec![PartyMember::new(
            "Aeris",
            ResourceMeter::new(35, 40),
            ResourceMeter::new(10, 10),
        )]);

        FieldEffect::Heal { amount: 20 }.apply(&mut party);
        assert_eq!(party.members()[0].health.current, 40);
    }

    #[test]
    fn heal_all_touches_every_member() {
        let mut party = party_of(vec![
            PartyMember::new("Aeris", ResourceMeter::new(1, 40), ResourceMeter::new(10, 10)),
            PartyMember::new("Brand", ResourceMeter::new(2, 40), ResourceMeter::new(10, 10)),
        ]);

        FieldEffect::HealAll { amount: 10 }.apply(&mut party);
        assert_eq!(party.members()[0].health.current, 11);
        assert_eq!(party.members()[1].health.current, 12);
    }

    #[test]
    fn defer_reports_handled() {
        let mut party = party_of(Vec::new());
        assert!(FieldEffect::Defer.apply(&mut party));
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(FieldEffect::HealAll { amount: 1 }.to_string(), "heal_all");
    }
}

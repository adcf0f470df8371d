//! The party inventory: an ordered, bounded collection of item stacks.

use arrayvec::ArrayVec;

use crate::config::MenuConfig;
use crate::error::InventoryError;
use crate::item::Item;

/// A stack of identical items as carried by the party.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemStack {
    pub item: Item,
    pub quantity: u16,
}

impl ItemStack {
    pub fn new(item: Item, quantity: u16) -> Self {
        Self { item, quantity }
    }
}

/// Ordered inventory snapshot shared by the whole party.
///
/// Iteration order is insertion order; the menu presents items exactly in
/// this order. Slots are bounded so a roster screen can always lay the
/// whole inventory out.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inventory {
    stacks: ArrayVec<ItemStack, { MenuConfig::MAX_INVENTORY_SLOTS }>,
}

impl Inventory {
    pub fn new() -> Self {
        Self {
            stacks: ArrayVec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.stacks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stacks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ItemStack> {
        self.stacks.iter()
    }

    pub fn get(&self, index: usize) -> Option<&ItemStack> {
        self.stacks.get(index)
    }

    /// Add `quantity` units of an item, stacking onto an existing slot up to
    /// the item's `max_stack` before opening a new one.
    pub fn add(&mut self, item: Item, quantity: u16) -> Result<(), InventoryError> {
        let mut remaining = quantity;

        if let Some(stack) = self.stacks.iter_mut().find(|s| s.item.name == item.name) {
            let space = item.max_stack.saturating_sub(stack.quantity);
            let moved = remaining.min(space);
            stack.quantity += moved;
            remaining -= moved;
        }

        while remaining > 0 {
            if self.stacks.is_full() {
                return Err(InventoryError::Full {
                    slots: self.stacks.len(),
                });
            }
            let moved = remaining.min(item.max_stack);
            self.stacks.push(ItemStack::new(item.clone(), moved));
            remaining -= moved;
        }

        Ok(())
    }

    /// Remove one unit of the named item.
    ///
    /// The first matching stack is decremented and dropped when it reaches
    /// zero, keeping the order of the remaining stacks. Returns `false` when
    /// no stack matches.
    pub fn take(&mut self, name: &str) -> bool {
        let Some(index) = self.stacks.iter().position(|s| s.item.name == name) else {
            return false;
        };

        self.stacks[index].quantity -= 1;
        if self.stacks[index].quantity == 0 {
            self.stacks.remove(index);
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::FieldEffect;

    fn potion() -> Item {
        Item::new("Potion", "Restores a little health.")
            .consumable()
            .with_field_effect(FieldEffect::Heal { amount: 20 })
    }

    fn sword() -> Item {
        Item::new("Sword", "A plain blade.").with_max_stack(1)
    }

    #[test]
    fn add_stacks_onto_existing_slot() {
        let mut inv = Inventory::new();
        inv.add(potion(), 2).unwrap();
        inv.add(potion(), 3).unwrap();

        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get(0).unwrap().quantity, 5);
    }

    #[test]
    fn add_overflows_into_a_new_slot_past_max_stack() {
        let mut inv = Inventory::new();
        let item = potion().with_max_stack(5);
        inv.add(item.clone(), 4).unwrap();
        inv.add(item, 3).unwrap();

        assert_eq!(inv.len(), 2);
        assert_eq!(inv.get(0).unwrap().quantity, 5);
        assert_eq!(inv.get(1).unwrap().quantity, 2);
    }

    #[test]
    fn add_fails_when_out_of_slots() {
        let mut inv = Inventory::new();
        for i in 0..MenuConfig::MAX_INVENTORY_SLOTS {
            inv.add(Item::new(format!("Trinket {i}"), "").with_max_stack(1), 1)
                .unwrap();
        }

        let err = inv.add(sword(), 1).unwrap_err();
        assert_eq!(
            err,
            InventoryError::Full {
                slots: MenuConfig::MAX_INVENTORY_SLOTS
            }
        );
    }

    #[test]
    fn take_decrements_then_drops_the_stack() {
        let mut inv = Inventory::new();
        inv.add(potion(), 2).unwrap();
        inv.add(sword(), 1).unwrap();

        assert!(inv.take("Potion"));
        assert_eq!(inv.get(0).unwrap().quantity, 1);

        assert!(inv.take("Potion"));
        assert_eq!(inv.len(), 1);
        assert_eq!(inv.get(0).unwrap().item.name, "Sword");
    }

    #[test]
    fn take_of_unknown_item_reports_false() {
        let mut inv = Inventory::new();
        inv.add(sword(), 1).unwrap();
        assert!(!inv.take("Elixir"));
        assert_eq!(inv.len(), 1);
    }

    #[test]
    fn iteration_preserves_insertion_order() {
        let mut inv = Inventory::new();
        inv.add(potion(), 1).unwrap();
        inv.add(sword(), 1).unwrap();

        let names: Vec<_> = inv.iter().map(|s| s.item.name.as_str()).collect();
        assert_eq!(names, ["Potion", "Sword"]);
    }
}

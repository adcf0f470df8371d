//! The field item menu screen.
//!
//! Composes the inventory list and the description bar against the shared
//! status bar, filters the party inventory down to field-usable items, and
//! applies item effects when a row is confirmed. The screen runs a
//! cooperative frame loop: one input poll, one update, one paced render per
//! iteration. Cancellation is the only way out of the loop.

use anyhow::Result;
use menu_core::{
    Item, ItemStack, MenuConfig, MenuEvent, MenuInput, MenuList, Party, Rect, TextFrame,
};
use ratatui::{Terminal, backend::Backend};

use crate::frame::FrameClock;
use crate::input::{InputSource, UiEvent};
use crate::presentation::{core_rect, theme::MenuTheme, to_ratatui, widgets};
use crate::screen::{ScreenContext, ScreenSignal, WorldView};
use crate::transition::{TransitionQueue, WidgetSlot};

/// Inventory screen: scrollable list of field-usable items plus a one-line
/// description bar.
pub struct ItemMenuScreen {
    config: MenuConfig,
    menu: MenuList,
    description: TextFrame,
    /// Row index -> inventory index, rebuilt on every refresh.
    visible: Vec<usize>,
    transitions: TransitionQueue,
}

impl ItemMenuScreen {
    pub fn new(config: MenuConfig) -> Self {
        let mut description = TextFrame::new();
        description.push_line("");

        Self {
            config,
            menu: MenuList::new(),
            description,
            visible: Vec::new(),
            transitions: TransitionQueue::new(),
        }
    }

    pub fn menu(&self) -> &MenuList {
        &self.menu
    }

    pub fn description(&self) -> &TextFrame {
        &self.description
    }

    pub fn transitions(&self) -> &TransitionQueue {
        &self.transitions
    }

    /// Dock the widgets against the screen and the status bar.
    ///
    /// Idempotent; must be re-run whenever the screen or the status bar
    /// changes size.
    pub fn layout(&mut self, screen: Rect, status_bar: &super::StatusBar) {
        let bar_edge = status_bar.left().saturating_sub(self.config.widget_gap);

        self.description.frame.dock_top().dock_left().set_right(bar_edge);

        self.menu.frame.dock_left().dock_below(&self.description.frame);
        let budget = screen
            .height
            .saturating_sub(self.menu.frame.bounds.y)
            .saturating_sub(self.config.bottom_margin)
            .saturating_sub(self.menu.frame.frame_width());
        self.menu.set_visible_budget(budget);
    }

    /// Rebuild the list from the party inventory.
    ///
    /// Only items exposing a field effect are listed, in inventory order.
    /// An empty filtered set shows a single "No Items" placeholder and
    /// deactivates the list; the description bar is re-synced either way
    /// and pending animations are completed.
    pub fn refresh(&mut self, ctx: &mut ScreenContext) {
        ctx.status_bar.refresh(ctx.party, ctx.screen);
        self.layout(ctx.screen, ctx.status_bar);

        let mut visible = Vec::new();
        let mut rows = Vec::new();
        for (index, stack) in ctx.party.inventory.iter().enumerate() {
            if stack.item.is_field_usable() {
                visible.push(index);
                rows.push(format_row(stack));
            }
        }
        self.visible = visible;

        if self.visible.is_empty() {
            self.menu.set_rows(vec!["No Items".to_string()]);
            self.menu.set_cursor(0);
            self.menu.active = false;
        } else {
            self.menu.set_rows(rows);
            self.menu.active = true;
        }

        self.menu.auto_size();
        self.menu
            .frame
            .constrain_right(ctx.status_bar.left().saturating_sub(self.config.widget_gap));

        self.sync_description(ctx.party);
        self.transitions.reset();
    }

    /// Copy an item's description into the description bar.
    pub fn update_description(&mut self, item: &Item) {
        self.description.set_line(0, item.description.clone());
    }

    /// Lay out, refresh, and queue the entrance animation: the description
    /// bar drops in from above the screen, the list rises from below.
    pub fn start_show(&mut self, ctx: &mut ScreenContext) {
        self.layout(ctx.screen, ctx.status_bar);
        self.refresh(ctx);

        let description_from = -(self.description.frame.bounds.height as i32 * 2);
        self.transitions
            .enqueue_entrance(WidgetSlot::Description, (0, description_from));

        let menu_from = ctx.screen.height as i32 - self.menu.frame.bounds.y as i32;
        self.transitions
            .enqueue_entrance(WidgetSlot::Menu, (0, menu_from));

        tracing::debug!("item menu entering");
    }

    /// Queue the exit animation; both widgets leave the draw set when they
    /// arrive off screen.
    pub fn start_hide(&mut self, screen: Rect) {
        let description_to = -(self.description.frame.bounds.height as i32 * 2);
        self.transitions
            .enqueue_exit(WidgetSlot::Description, (0, description_to));

        let menu_to = screen.height as i32 - self.menu.frame.bounds.y as i32;
        self.transitions.enqueue_exit(WidgetSlot::Menu, (0, menu_to));

        tracing::debug!("item menu leaving");
    }

    /// Process one polled input.
    ///
    /// A cancel propagates unchanged. A confirmed row resolves the mapped
    /// inventory stack, applies its field effect, consumes one unit when
    /// the effect reports no further handling and the item is consumable,
    /// and refreshes the list.
    pub fn update(&mut self, ctx: &mut ScreenContext, input: Option<MenuInput>) -> ScreenSignal {
        match self.menu.update(input) {
            MenuEvent::Cancel => ScreenSignal::Cancelled,
            MenuEvent::Selected(row) => {
                self.use_item(ctx, row);
                ScreenSignal::Running
            }
            MenuEvent::None => ScreenSignal::Running,
        }
    }

    /// Run the screen until the user cancels.
    ///
    /// Each iteration polls one input, updates, re-syncs the description
    /// when the cursor moved, and renders one frame through the frame
    /// clock. A resize re-runs layout and refresh instead of feeding the
    /// menu. Returns `Ok(true)` once cancelled.
    pub fn execute<B: Backend>(
        &mut self,
        ctx: &mut ScreenContext,
        input: &mut dyn InputSource,
        world: &dyn WorldView,
        terminal: &mut Terminal<B>,
        clock: &mut FrameClock,
    ) -> Result<bool> {
        loop {
            let old_cursor = self.menu.cursor();

            let menu_input = match input.poll()? {
                Some(UiEvent::Key(key)) => Some(key),
                Some(UiEvent::Resize) => {
                    let size = terminal.size()?;
                    ctx.screen = Rect::new(0, 0, size.width, size.height);
                    self.refresh(ctx);
                    None
                }
                None => None,
            };

            if self.update(ctx, menu_input) == ScreenSignal::Cancelled {
                break;
            }

            if self.menu.cursor() != old_cursor {
                self.sync_description(ctx.party);
            }

            self.render_frame(ctx, world, terminal, clock)?;
        }

        tracing::info!("item menu dismissed");
        Ok(true)
    }

    /// Render until the pending exit animation has finished.
    ///
    /// `execute` returns as soon as the user cancels; the caller queues the
    /// hide and lets the windows slide out here.
    pub fn drain_transitions<B: Backend>(
        &mut self,
        ctx: &mut ScreenContext,
        world: &dyn WorldView,
        terminal: &mut Terminal<B>,
        clock: &mut FrameClock,
    ) -> Result<()> {
        while !self.transitions.is_idle() {
            self.render_frame(ctx, world, terminal, clock)?;
        }
        Ok(())
    }

    /// Draw the widgets at their current animation offsets.
    pub fn render(&self, frame: &mut ratatui::Frame, theme: &MenuTheme) {
        let screen = core_rect(frame.area());

        if let Some((dx, dy)) = self.transitions.offset(WidgetSlot::Description) {
            if let Some(rect) = self.description.frame.bounds.offset_clipped(dx, dy, screen) {
                widgets::text_frame::render(frame, to_ratatui(rect), &self.description, theme);
            }
        }
        if let Some((dx, dy)) = self.transitions.offset(WidgetSlot::Menu) {
            if let Some(rect) = self.menu.frame.bounds.offset_clipped(dx, dy, screen) {
                widgets::menu_list::render(frame, to_ratatui(rect), &self.menu, theme);
            }
        }
    }

    fn render_frame<B: Backend>(
        &mut self,
        ctx: &mut ScreenContext,
        world: &dyn WorldView,
        terminal: &mut Terminal<B>,
        clock: &mut FrameClock,
    ) -> Result<()> {
        self.transitions.tick();

        let theme = MenuTheme;
        let this = &*self;
        let party = &*ctx.party;
        let status_bar = &*ctx.status_bar;
        clock.render(terminal, |frame| {
            world.render(frame, frame.area());
            widgets::status_bar::render(frame, status_bar, party, &theme);
            this.render(frame, &theme);
        })
    }

    fn use_item(&mut self, ctx: &mut ScreenContext, row: usize) {
        let Some(&index) = self.visible.get(row) else {
            return;
        };
        let Some(stack) = ctx.party.inventory.get(index) else {
            return;
        };
        let Some(effect) = stack.item.field_effect else {
            return;
        };
        let name = stack.item.name.clone();
        let consumable = stack.item.consumable;

        let handled = effect.apply(ctx.party);
        tracing::info!(item = %name, effect = %effect, handled, "field effect applied");

        if !handled && consumable {
            if ctx.party.inventory.take(&name) {
                tracing::debug!(item = %name, "consumed one unit");
            } else {
                tracing::warn!(item = %name, "used item vanished before consumption");
            }
        }

        self.refresh(ctx);
    }

    fn sync_description(&mut self, party: &Party) {
        let stack = self
            .visible
            .get(self.menu.cursor())
            .copied()
            .and_then(|index| party.inventory.get(index));

        match stack {
            Some(stack) => self.update_description(&stack.item),
            None => self.description.set_line(0, String::new()),
        }
    }
}

fn format_row(stack: &ItemStack) -> String {
    format!("{} (x{})", stack.item.name, stack.quantity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::StatusBar;
    use menu_core::{FieldEffect, PartyMember, ResourceMeter};

    const SCREEN: Rect = Rect {
        x: 0,
        y: 0,
        width: 80,
        height: 24,
    };

    fn potion() -> Item {
        Item::new("Potion", "Restores a little health.")
            .consumable()
            .with_field_effect(FieldEffect::Heal { amount: 20 })
    }

    fn ether() -> Item {
        Item::new("Ether", "Restores a little magic.")
            .consumable()
            .with_field_effect(FieldEffect::Restore { amount: 10 })
    }

    fn sword() -> Item {
        Item::new("Sword", "A plain blade.").with_max_stack(1)
    }

    fn wounded_party() -> Party {
        Party::with_members(vec![PartyMember::new(
            "Aeris",
            ResourceMeter::new(10, 40),
            ResourceMeter::new(2, 12),
        )])
    }

    fn screen_with(party: &mut Party, bar: &mut StatusBar) -> ItemMenuScreen {
        let mut screen = ItemMenuScreen::new(MenuConfig::new());
        let mut ctx = ScreenContext {
            party,
            status_bar: bar,
            screen: SCREEN,
        };
        screen.start_show(&mut ctx);
        screen
    }

    #[test]
    fn refresh_lists_only_field_usable_items_in_order() {
        let mut party = wounded_party();
        party.inventory.add(sword(), 1).unwrap();
        party.inventory.add(potion(), 3).unwrap();
        party.inventory.add(ether(), 1).unwrap();
        let mut bar = StatusBar::new(22);

        let screen = screen_with(&mut party, &mut bar);

        assert_eq!(screen.menu().rows(), ["Potion (x3)", "Ether (x1)"]);
        assert!(screen.menu().active);
    }

    #[test]
    fn empty_filtered_set_shows_inactive_placeholder() {
        let mut party = wounded_party();
        party.inventory.add(sword(), 1).unwrap();
        let mut bar = StatusBar::new(22);

        let screen = screen_with(&mut party, &mut bar);

        assert_eq!(screen.menu().rows(), ["No Items"]);
        assert!(!screen.menu().active);
        assert_eq!(screen.menu().cursor(), 0);
        assert_eq!(screen.description().lines()[0], "");
    }

    #[test]
    fn refresh_clamps_a_cursor_past_the_new_end() {
        let mut party = wounded_party();
        party.inventory.add(potion(), 1).unwrap();
        party.inventory.add(ether(), 1).unwrap();
        let mut bar = StatusBar::new(22);
        let mut screen = screen_with(&mut party, &mut bar);

        let mut ctx = ScreenContext {
            party: &mut party,
            status_bar: &mut bar,
            screen: SCREEN,
        };
        screen.update(&mut ctx, Some(MenuInput::Down));
        assert_eq!(screen.menu().cursor(), 1);

        // Use the ether under the cursor; the list shrinks to one row.
        screen.update(&mut ctx, Some(MenuInput::Confirm));
        assert_eq!(screen.menu().cursor(), 0);
        assert_eq!(screen.menu().rows(), ["Potion (x1)"]);
    }

    #[test]
    fn consuming_an_item_decrements_its_stack_and_heals() {
        let mut party = wounded_party();
        party.inventory.add(potion(), 2).unwrap();
        let mut bar = StatusBar::new(22);
        let mut screen = screen_with(&mut party, &mut bar);

        let mut ctx = ScreenContext {
            party: &mut party,
            status_bar: &mut bar,
            screen: SCREEN,
        };
        screen.update(&mut ctx, Some(MenuInput::Confirm));

        assert_eq!(party.members()[0].health.current, 30);
        assert_eq!(party.inventory.get(0).unwrap().quantity, 1);
    }

    #[test]
    fn deferring_effect_leaves_the_stack_untouched() {
        let mut party = wounded_party();
        let wing = Item::new("Warp Wing", "Returns the party to town.")
            .consumable()
            .with_field_effect(FieldEffect::Defer);
        party.inventory.add(wing, 1).unwrap();
        let mut bar = StatusBar::new(22);
        let mut screen = screen_with(&mut party, &mut bar);

        let mut ctx = ScreenContext {
            party: &mut party,
            status_bar: &mut bar,
            screen: SCREEN,
        };
        screen.update(&mut ctx, Some(MenuInput::Confirm));

        assert_eq!(party.inventory.get(0).unwrap().quantity, 1);
        assert_eq!(screen.menu().rows(), ["Warp Wing (x1)"]);
    }

    #[test]
    fn using_the_last_item_falls_back_to_the_placeholder() {
        let mut party = wounded_party();
        party.inventory.add(potion(), 1).unwrap();
        party.inventory.add(sword(), 1).unwrap();
        let mut bar = StatusBar::new(22);
        let mut screen = screen_with(&mut party, &mut bar);
        assert_eq!(screen.menu().rows(), ["Potion (x1)"]);

        let mut ctx = ScreenContext {
            party: &mut party,
            status_bar: &mut bar,
            screen: SCREEN,
        };
        screen.update(&mut ctx, Some(MenuInput::Confirm));

        assert_eq!(screen.menu().rows(), ["No Items"]);
        assert!(!screen.menu().active);
        assert_eq!(party.inventory.len(), 1);
        assert_eq!(party.inventory.get(0).unwrap().item.name, "Sword");
    }

    #[test]
    fn cancel_propagates_unchanged() {
        let mut party = wounded_party();
        let mut bar = StatusBar::new(22);
        let mut screen = screen_with(&mut party, &mut bar);

        let mut ctx = ScreenContext {
            party: &mut party,
            status_bar: &mut bar,
            screen: SCREEN,
        };
        assert_eq!(
            screen.update(&mut ctx, Some(MenuInput::Cancel)),
            ScreenSignal::Cancelled
        );
        assert_eq!(screen.update(&mut ctx, None), ScreenSignal::Running);
    }

    #[test]
    fn refresh_resyncs_the_description_bar() {
        let mut party = wounded_party();
        party.inventory.add(potion(), 1).unwrap();
        let mut bar = StatusBar::new(22);

        let screen = screen_with(&mut party, &mut bar);
        assert_eq!(screen.description().lines()[0], "Restores a little health.");
    }

    #[test]
    fn layout_keeps_widgets_clear_of_the_status_bar() {
        let mut party = wounded_party();
        party.inventory.add(potion(), 99).unwrap();
        let mut bar = StatusBar::new(22);
        let screen = screen_with(&mut party, &mut bar);

        let gap = MenuConfig::new().widget_gap;
        assert!(screen.description().frame.bounds.right() <= bar.left() - gap);
        assert!(screen.menu().frame.bounds.right() <= bar.left() - gap);
        assert_eq!(screen.description().frame.bounds.y, 0);
        assert_eq!(
            screen.menu().frame.bounds.y,
            screen.description().frame.bounds.bottom()
        );
    }

    #[test]
    fn start_show_queues_both_entrances() {
        let mut party = wounded_party();
        let mut bar = StatusBar::new(22);
        let screen = screen_with(&mut party, &mut bar);

        let desc = screen.transitions().offset(WidgetSlot::Description).unwrap();
        let menu = screen.transitions().offset(WidgetSlot::Menu).unwrap();
        assert!(desc.1 < 0, "description enters from above, got {desc:?}");
        assert!(menu.1 > 0, "menu enters from below, got {menu:?}");
        assert!(!screen.transitions().is_idle());
    }
}

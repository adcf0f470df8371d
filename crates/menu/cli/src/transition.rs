//! Slide animation and draw-set bookkeeping for the menu windows.
//!
//! The queue owns which widgets are on screen and where they are relative
//! to their laid-out rest position. Entrances start at an offset and slide
//! to rest; exits slide from rest to an offset and leave the draw set on
//! arrival. Advancing happens once per rendered frame.

/// Widgets the item menu animates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum WidgetSlot {
    Description,
    Menu,
}

#[derive(Clone, Copy, Debug)]
struct Slide {
    slot: WidgetSlot,
    offset: (i32, i32),
    target: (i32, i32),
    remove_on_arrival: bool,
}

impl Slide {
    fn arrived(&self) -> bool {
        self.offset == self.target
    }
}

/// Position-animation queue for the menu windows.
#[derive(Clone, Debug)]
pub struct TransitionQueue {
    slides: Vec<Slide>,
    /// Cells a widget moves per frame on each axis.
    speed: i32,
}

impl TransitionQueue {
    pub const DEFAULT_SPEED: i32 = 2;

    pub fn new() -> Self {
        Self::with_speed(Self::DEFAULT_SPEED)
    }

    pub fn with_speed(speed: i32) -> Self {
        Self {
            slides: Vec::new(),
            speed: speed.max(1),
        }
    }

    /// Queue a widget to slide in from `from` to its rest position, adding
    /// it to the draw set.
    pub fn enqueue_entrance(&mut self, slot: WidgetSlot, from: (i32, i32)) {
        tracing::trace!(widget = %slot, ?from, "entrance queued");
        self.upsert(Slide {
            slot,
            offset: from,
            target: (0, 0),
            remove_on_arrival: false,
        });
    }

    /// Queue a widget to slide out to `to`; it leaves the draw set once it
    /// arrives.
    pub fn enqueue_exit(&mut self, slot: WidgetSlot, to: (i32, i32)) {
        tracing::trace!(widget = %slot, ?to, "exit queued");
        let offset = self.offset(slot).unwrap_or((0, 0));
        self.upsert(Slide {
            slot,
            offset,
            target: to,
            remove_on_arrival: true,
        });
    }

    /// Current draw offset of a widget; `None` when it is not on screen.
    pub fn offset(&self, slot: WidgetSlot) -> Option<(i32, i32)> {
        self.slides.iter().find(|s| s.slot == slot).map(|s| s.offset)
    }

    /// Advance every slide one frame toward its target, dropping exits that
    /// have arrived.
    pub fn tick(&mut self) {
        let speed = self.speed;
        for slide in &mut self.slides {
            slide.offset.0 = step(slide.offset.0, slide.target.0, speed);
            slide.offset.1 = step(slide.offset.1, slide.target.1, speed);
        }
        self.slides.retain(|s| !(s.arrived() && s.remove_on_arrival));
    }

    /// Complete all pending moves instantly.
    pub fn reset(&mut self) {
        for slide in &mut self.slides {
            slide.offset = slide.target;
        }
        self.slides.retain(|s| !s.remove_on_arrival);
    }

    /// True when nothing is animating.
    pub fn is_idle(&self) -> bool {
        self.slides.iter().all(Slide::arrived)
    }

    fn upsert(&mut self, slide: Slide) {
        match self.slides.iter_mut().find(|s| s.slot == slide.slot) {
            Some(existing) => *existing = slide,
            None => self.slides.push(slide),
        }
    }
}

impl Default for TransitionQueue {
    fn default() -> Self {
        Self::new()
    }
}

fn step(current: i32, target: i32, speed: i32) -> i32 {
    if current < target {
        (current + speed).min(target)
    } else {
        (current - speed).max(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_slides_to_rest() {
        let mut queue = TransitionQueue::with_speed(3);
        queue.enqueue_entrance(WidgetSlot::Menu, (0, 7));

        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Menu), Some((0, 4)));
        queue.tick();
        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Menu), Some((0, 0)));
        assert!(queue.is_idle());

        // Arrived entrances stay in the draw set.
        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Menu), Some((0, 0)));
    }

    #[test]
    fn exit_leaves_the_draw_set_on_arrival() {
        let mut queue = TransitionQueue::with_speed(4);
        queue.enqueue_entrance(WidgetSlot::Description, (0, -8));
        queue.reset();
        queue.enqueue_exit(WidgetSlot::Description, (0, -8));

        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Description), Some((0, -4)));
        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Description), None);
        assert!(queue.is_idle());
    }

    #[test]
    fn negative_direction_steps_do_not_overshoot() {
        let mut queue = TransitionQueue::with_speed(5);
        queue.enqueue_entrance(WidgetSlot::Menu, (0, -3));
        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Menu), Some((0, 0)));
    }

    #[test]
    fn reset_snaps_pending_moves() {
        let mut queue = TransitionQueue::new();
        queue.enqueue_entrance(WidgetSlot::Menu, (0, 20));
        queue.enqueue_entrance(WidgetSlot::Description, (0, -6));
        queue.reset();

        assert_eq!(queue.offset(WidgetSlot::Menu), Some((0, 0)));
        assert_eq!(queue.offset(WidgetSlot::Description), Some((0, 0)));
        assert!(queue.is_idle());
    }

    #[test]
    fn reset_drops_exiting_widgets() {
        let mut queue = TransitionQueue::new();
        queue.enqueue_entrance(WidgetSlot::Menu, (0, 0));
        queue.enqueue_exit(WidgetSlot::Menu, (0, 20));
        queue.reset();
        assert_eq!(queue.offset(WidgetSlot::Menu), None);
    }

    #[test]
    fn exit_of_an_absent_widget_starts_from_rest() {
        let mut queue = TransitionQueue::with_speed(10);
        queue.enqueue_exit(WidgetSlot::Menu, (0, 20));
        assert_eq!(queue.offset(WidgetSlot::Menu), Some((0, 0)));
        queue.tick();
        queue.tick();
        assert_eq!(queue.offset(WidgetSlot::Menu), None);
    }
}

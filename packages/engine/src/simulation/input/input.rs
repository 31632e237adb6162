use crate::core::Vec2;

/// Input delivered by the UI layer between ticks.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer position in play-field coordinates (the aim target)
    PointerMoved(Vec2),
    /// Ask the launcher to fire one projectile at its current angle
    Fire,
}

/// Input folded down to what one tick consumes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct FrameInput {
    pub(crate) pointer: Vec2,
    pub(crate) fire_count: u32,
}

/// Pending events plus the last known pointer. Events are only accepted
/// while subscribed; unsubscribing drops anything still queued.
#[derive(Debug, Default)]
pub(crate) struct InputState {
    subscribed: bool,
    pointer: Vec2,
    pending: Vec<InputEvent>,
}

impl InputState {
    pub(crate) fn subscribe(&mut self) {
        self.subscribed = true;
    }

    pub(crate) fn unsubscribe(&mut self) {
        self.subscribed = false;
        self.pending.clear();
    }

    pub(crate) fn is_subscribed(&self) -> bool {
        self.subscribed
    }

    pub(crate) fn pointer(&self) -> Vec2 {
        self.pointer
    }

    /// Queue an event. Returns false when input is not subscribed.
    pub(crate) fn push(&mut self, event: InputEvent) -> bool {
        if !self.subscribed {
            return false;
        }
        self.pending.push(event);
        true
    }

    /// Fold queued events in arrival order: the last pointer wins and every
    /// fire counts.
    pub(crate) fn drain(&mut self) -> FrameInput {
        let mut fire_count = 0;
        for event in self.pending.drain(..) {
            match event {
                InputEvent::PointerMoved(p) => self.pointer = p,
                InputEvent::Fire => fire_count += 1,
            }
        }
        FrameInput { pointer: self.pointer, fire_count }
    }

    pub(crate) fn reset(&mut self) {
        self.pending.clear();
        self.pointer = Vec2::zero();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_ignored_until_subscribed() {
        let mut input = InputState::default();
        assert!(!input.push(InputEvent::Fire));
        input.subscribe();
        assert!(input.push(InputEvent::Fire));
        assert_eq!(input.drain().fire_count, 1);
    }

    #[test]
    fn drain_keeps_last_pointer_and_counts_fires() {
        let mut input = InputState::default();
        input.subscribe();
        input.push(InputEvent::PointerMoved(Vec2::new(1.0, 2.0)));
        input.push(InputEvent::Fire);
        input.push(InputEvent::PointerMoved(Vec2::new(3.0, 4.0)));
        input.push(InputEvent::Fire);

        let frame = input.drain();
        assert_eq!(frame.pointer, Vec2::new(3.0, 4.0));
        assert_eq!(frame.fire_count, 2);

        let next = input.drain();
        assert_eq!(next.pointer, Vec2::new(3.0, 4.0));
        assert_eq!(next.fire_count, 0);
    }

    #[test]
    fn unsubscribe_drops_pending() {
        let mut input = InputState::default();
        input.subscribe();
        input.push(InputEvent::Fire);
        input.unsubscribe();
        assert!(!input.is_subscribed());
        assert_eq!(input.drain().fire_count, 0);
    }
}

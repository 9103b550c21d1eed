//! Pointer input queue between the platform and the detector.
//!
//! Platform integrations enqueue pointer events as they arrive and the
//! widget drains them once per pump, keeping event handling on a single
//! well-defined point in the frame.

use crate::input::types::PointerEvent;

#[derive(Default)]
pub struct PointerDispatcher {
    queue: Vec<PointerEvent>,
}

impl PointerDispatcher {
    pub fn new() -> Self {
        Self { queue: Vec::new() }
    }

    pub fn push(&mut self, event: PointerEvent) {
        self.queue.push(event);
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(PointerEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::types::PointerEventKind;
    use micpress_ui_graphics::Point;

    #[test]
    fn drains_in_order() {
        let mut dispatcher = PointerDispatcher::new();
        dispatcher.push(PointerEvent::new(PointerEventKind::Down, Point::ZERO, 0));
        dispatcher.push(PointerEvent::new(PointerEventKind::Up, Point::ZERO, 10));

        let mut kinds = Vec::new();
        dispatcher.drain(|event| kinds.push(event.kind));
        assert_eq!(kinds, vec![PointerEventKind::Down, PointerEventKind::Up]);
        assert!(dispatcher.is_empty());
    }
}

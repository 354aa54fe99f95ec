use glam::Vec2;

/// Pointer events the game understands, in screen pixels.
/// Plain moves without a button held are not represented.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// Button went down.
    Press(Vec2),
    /// Pointer moved with the button held.
    Drag(Vec2),
    /// Button came up.
    Release(Vec2),
    /// Pointer left the play area.
    Exit(Vec2),
}

/// Events the host delivered since the last tick
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<PointerEvent>,
}

impl InputQueue {
    pub fn push(&mut self, event: PointerEvent) {
        self.pending.push(event);
    }

    /// Hand over everything pending, oldest first, leaving the queue empty
    pub fn drain(&mut self) -> Vec<PointerEvent> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_keeps_arrival_order() {
        let mut queue = InputQueue::default();
        let events = [
            PointerEvent::Press(Vec2::new(10.0, 20.0)),
            PointerEvent::Drag(Vec2::new(11.0, 21.0)),
            PointerEvent::Release(Vec2::new(30.0, 40.0)),
        ];
        for event in events {
            queue.push(event);
        }

        assert_eq!(queue.drain(), events.to_vec());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_drain_with_nothing_pending() {
        let mut queue = InputQueue::default();
        assert!(queue.drain().is_empty());
    }
}

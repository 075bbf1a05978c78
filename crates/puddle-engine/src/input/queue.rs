/// Which pointer button produced a press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
}

/// Keys the engine forwards. The host drops any other key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Space,
    Shift,
    E,
    S,
}

/// Input event types the engine understands.
/// Coordinates are world coordinates; the host does the screen projection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A touch/click began at world coordinates (x, y).
    PointerDown { x: f32, y: f32, button: PointerButton },
    /// A touch/click ended.
    PointerUp { x: f32, y: f32, button: PointerButton },
    /// A touch/cursor moved to world coordinates (x, y).
    PointerMove { x: f32, y: f32 },
    /// A key was pressed.
    KeyDown { key: Key },
    /// A key was released.
    KeyUp { key: Key },
    /// A custom event from the UI layer (buttons, etc.).
    /// `kind` identifies the event type; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

/// A queue of input events.
/// The host pushes events; the game reads them during ticks; the runner drains them per frame.
pub struct InputQueue {
    events: Vec<InputEvent>,
    /// Keys currently held, tracked across frames.
    held: Vec<Key>,
    /// Pointer buttons currently held, tracked across frames.
    buttons: Vec<PointerButton>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
            held: Vec::new(),
            buttons: Vec::new(),
        }
    }

    /// Push a new input event.
    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::KeyDown { key } if !self.held.contains(&key) => self.held.push(key),
            InputEvent::KeyUp { key } => self.held.retain(|k| *k != key),
            InputEvent::PointerDown { button, .. } if !self.buttons.contains(&button) => {
                self.buttons.push(button)
            }
            InputEvent::PointerUp { button, .. } => self.buttons.retain(|b| *b != button),
            _ => {}
        }
        self.events.push(event);
    }

    /// Drain all pending events. Returns a Vec and clears the queue.
    /// Held keys and buttons survive.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    /// Iterate over pending events without consuming them.
    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    /// Whether a key is currently held down.
    pub fn key_held(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Whether a pointer button is currently held down.
    pub fn button_held(&self, button: PointerButton) -> bool {
        self.buttons.contains(&button)
    }

    /// Check if there are pending events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Number of pending events.
    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

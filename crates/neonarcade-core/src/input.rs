/// A single discrete intent for one controllable entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Intent<A> {
    pub entity: crate::game_trait::EntityIndex,
    pub action: A,
}

impl<A> Intent<A> {
    pub fn new(entity: crate::game_trait::EntityIndex, action: A) -> Self {
        Self { entity, action }
    }
}

/// Per-tick buffer of intents, filled between ticks and drained exactly once
/// immediately before the next `tick` call.
#[derive(Debug, Clone)]
pub struct InputQueue<I> {
    pending: Vec<I>,
}

impl<I> Default for InputQueue<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> InputQueue<I> {
    pub fn new() -> Self {
        Self {
            pending: Vec::new(),
        }
    }

    pub fn push(&mut self, intent: I) {
        self.pending.push(intent);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take every pending intent in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<I> {
        std::mem::take(&mut self.pending)
    }

    /// Discard pending intents (new round).
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}

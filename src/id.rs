/// Per-session counter for generated record ids. Restarting the counter with
/// a reseed keeps replayed sessions id-for-id identical.
#[derive(Debug)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Number of ids handed out since the last reset.
    pub fn issued(&self) -> u64 {
        self.next - 1
    }

    pub fn reset(&mut self) {
        self.next = 1;
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

/// Sequential id and class namespace for one generation pass.
///
/// Every allocated id embeds a monotonically increasing counter, so
/// repeated fields within a pass never collide. Callers reset the
/// namespace (or construct a fresh one) between independent passes;
/// skipping the reset keeps the counter running across passes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    prefix: String,
    next: u64,
}

impl Default for Namespace {
    fn default() -> Self {
        Self::new()
    }
}

impl Namespace {
    pub const DEFAULT_PREFIX: &'static str = "je";

    pub fn new() -> Self {
        Self::with_prefix(Self::DEFAULT_PREFIX)
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }

    /// Allocate the next id for `name`: `<prefix>-<name>-<n>`.
    pub fn id(&mut self, name: &str) -> String {
        let n = self.next;
        self.next += 1;
        format!("{}-{}-{}", self.prefix, name, n)
    }

    /// Class name for `name`: `<prefix>-<name>`. Never allocates an id.
    pub fn cls(&self, name: &str) -> String {
        format!("{}-{}", self.prefix, name)
    }

    /// Space-joined class list built with [`Namespace::cls`].
    pub fn classes(&self, names: &[&str]) -> String {
        names
            .iter()
            .map(|name| self.cls(name))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Restart the counter so the next pass reuses ids from 0.
    pub fn reset(&mut self) {
        self.next = 0;
    }
}

use std::collections::{HashMap, HashSet};

/// Records which values a unique-constrained scope has already emitted.
///
/// A scope key is a field path ("superior.name") for run-wide uniqueness,
/// or a minted per-instance path ("technician.shift.skills#7") when
/// uniqueness is local to one array. One tracker lives exactly as long as
/// one generation run; the engine never shares it across runs, so a fresh
/// run always starts with empty scopes. Access is single-threaded.
#[derive(Debug, Default)]
pub struct UniquenessTracker {
    seen: HashMap<String, HashSet<String>>,
    instances: HashMap<String, u64>,
}

impl UniquenessTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `value` in `scope`. Returns false when the value was
    /// already claimed.
    pub fn claim(&mut self, scope: &str, value: &str) -> bool {
        self.seen
            .entry(scope.to_string())
            .or_default()
            .insert(value.to_string())
    }

    pub fn contains(&self, scope: &str, value: &str) -> bool {
        self.seen
            .get(scope)
            .is_some_and(|values| values.contains(value))
    }

    /// Number of values claimed in `scope` so far.
    pub fn claimed(&self, scope: &str) -> usize {
        self.seen.get(scope).map_or(0, HashSet::len)
    }

    /// Mints a fresh scope key for the next array instance at `path`.
    pub fn instance_scope(&mut self, path: &str) -> String {
        let counter = self.instances.entry(path.to_string()).or_insert(0);
        let scope = format!("{path}#{counter}");
        *counter += 1;
        scope
    }

    pub fn clear(&mut self) {
        self.seen.clear();
        self.instances.clear();
    }
}

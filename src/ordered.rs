/// Insertion-ordered collection that ignores repeated values.
///
/// Backed by a plain `Vec` with a linear membership check; the sets built here
/// hold a handful of package names, and first-insertion order must be stable
/// across runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderedSet<T> {
    items: Vec<T>,
}

impl<T> Default for OrderedSet<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: PartialEq> OrderedSet<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` unless an equal value is already present. Returns true
    /// when the value was added.
    pub fn insert(&mut self, value: T) -> bool {
        if self.items.contains(&value) {
            return false;
        }
        self.items.push(value);
        true
    }

    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

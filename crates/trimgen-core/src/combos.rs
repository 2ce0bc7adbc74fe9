//! Lazy enumeration of boolean tuples
//!
//! Yields every `Vec<bool>` of a fixed arity in lexicographic order with
//! `false < true` and the first element most significant, the same order as a
//! cartesian product of `[false, true]` repeated `arity` times. Generated files
//! are diffed to detect drift, so this order must not change.

/// Iterator over `{false, true}^arity`.
#[derive(Debug, Clone)]
pub struct BoolTuples {
    next: Option<Vec<bool>>,
}

impl BoolTuples {
    pub fn new(arity: usize) -> Self {
        Self {
            next: Some(vec![false; arity]),
        }
    }

    /// Total number of tuples for an arity.
    pub fn count_for(arity: usize) -> usize {
        1usize << arity
    }
}

impl Iterator for BoolTuples {
    type Item = Vec<bool>;

    fn next(&mut self) -> Option<Vec<bool>> {
        let current = self.next.take()?;

        // Odometer step: flip the rightmost false, clear everything after it.
        if let Some(pos) = current.iter().rposition(|flag| !flag) {
            let mut advanced = current.clone();
            advanced[pos] = true;
            advanced[pos + 1..].iter_mut().for_each(|flag| *flag = false);
            self.next = Some(advanced);
        }

        Some(current)
    }
}

// The list of integers shared by the menu operations.
// `ValueList` is owned by the menu loop and handed to each operation by
// reference: input replaces it, sort reorders it, search only reads it.

use std::fmt;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ValueList {
    values: Vec<i64>,
}

impl ValueList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard the current contents and take `values` in their given order.
    pub fn replace(&mut self, values: Vec<i64>) {
        self.values = values;
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }

    /// Sort ascending in place with a quadratic exchange sort: every
    /// element is compared against each one after it and swapped when
    /// out of order, so position `i` holds the minimum of `i..` after
    /// the outer pass reaches it.
    pub fn sort(&mut self) {
        let n = self.values.len();
        for i in 0..n {
            for j in (i + 1)..n {
                if self.values[i] > self.values[j] {
                    self.values.swap(i, j);
                }
            }
        }
    }

    /// Zero-based index of the first element equal to `target`.
    pub fn position(&self, target: i64) -> Option<usize> {
        self.values.iter().position(|&v| v == target)
    }
}

impl From<Vec<i64>> for ValueList {
    fn from(values: Vec<i64>) -> Self {
        ValueList { values }
    }
}

/// Comma separated, e.g. `3, 4, 5`.
impl fmt::Display for ValueList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::ValueList;

    fn is_sorted(values: &[i64]) -> bool {
        values.windows(2).all(|w| w[0] <= w[1])
    }

    #[test]
    fn sort_orders_ascending() {
        let mut list = ValueList::from(vec![5, 3, 4]);
        list.sort();
        assert_eq!(list.as_slice(), &[3, 4, 5]);
    }

    #[test]
    fn sort_keeps_duplicates_and_negatives() {
        let input = vec![7, -2, 7, 0, -2, 13, 1, i64::MIN, i64::MAX];
        let mut list = ValueList::from(input.clone());
        list.sort();

        assert_eq!(list.len(), input.len());
        assert!(is_sorted(list.as_slice()));

        let mut expected = input;
        expected.sort_unstable();
        assert_eq!(list.as_slice(), expected.as_slice());
    }

    #[test]
    fn sort_is_idempotent() {
        let mut once = ValueList::from(vec![9, 1, 8, 2, 7, 3, 3]);
        once.sort();
        let mut twice = once.clone();
        twice.sort();
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_empty_and_single() {
        let mut empty = ValueList::new();
        empty.sort();
        assert!(empty.is_empty());

        let mut single = ValueList::from(vec![42]);
        single.sort();
        assert_eq!(single.as_slice(), &[42]);
    }

    #[test]
    fn position_reports_first_match() {
        let list = ValueList::from(vec![4, 1, 4, 2, 4]);
        assert_eq!(list.position(4), Some(0));
        assert_eq!(list.position(2), Some(3));
        assert_eq!(list.position(9), None);
        assert_eq!(ValueList::new().position(0), None);
    }

    #[test]
    fn replace_discards_previous_contents() {
        let mut list = ValueList::from(vec![1, 2, 3]);
        list.replace(vec![10]);
        assert_eq!(list.as_slice(), &[10]);
    }

    #[test]
    fn display_is_comma_separated() {
        assert_eq!(ValueList::from(vec![3, 4, 5]).to_string(), "3, 4, 5");
        assert_eq!(ValueList::from(vec![-1]).to_string(), "-1");
        assert_eq!(ValueList::new().to_string(), "");
    }
}

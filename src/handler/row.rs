//! Result row - an ordered collection of text cells

/// A row produced by an administrative command
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ResultRow {
    values: Vec<String>,
}

impl ResultRow {
    /// Create a new row with the given values
    pub fn new(values: Vec<String>) -> Self {
        ResultRow { values }
    }

    /// Get the number of columns in this row
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if the row is empty
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Get a cell by index, returns None if out of bounds
    pub fn get(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    /// First cell
    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    /// Last cell
    pub fn last(&self) -> Option<&str> {
        self.values.last().map(String::as_str)
    }

    /// Take ownership of values
    pub fn into_values(self) -> Vec<String> {
        self.values
    }

    /// Create an iterator over the cells
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_accessors() {
        let row = ResultRow::new(vec!["kind".to_string(), "{}".to_string()]);
        assert_eq!(row.len(), 2);
        assert_eq!(row.first(), Some("kind"));
        assert_eq!(row.last(), Some("{}"));
        assert_eq!(row.get(2), None);
        assert_eq!(row.iter().collect::<Vec<_>>(), vec!["kind", "{}"]);
    }

    #[test]
    fn test_empty_row() {
        let row = ResultRow::default();
        assert!(row.is_empty());
        assert_eq!(row.first(), None);
        assert_eq!(row.last(), None);
    }
}

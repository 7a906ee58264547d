// src/dataset.rs
//
// Tabular record set: headers + string rows, as the table and copy paths want it.

use crate::records::Record;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataSet {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl DataSet {
    /// Columns are the union of record fields in first-seen order.
    /// Cells a record lacks are left empty.
    pub fn from_records<R: AsRef<Record>>(records: &[R]) -> Self {
        if records.is_empty() {
            return Self::default();
        }

        let mut headers: Vec<String> = Vec::new();
        for rec in records {
            for key in rec.as_ref().keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(s!(key));
                }
            }
        }

        let rows = records
            .iter()
            .map(|rec| {
                let rec = rec.as_ref();
                headers
                    .iter()
                    .map(|h| rec.get(h).map(String::from).unwrap_or_default())
                    .collect()
            })
            .collect();

        Self { headers: Some(headers), rows }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.as_ref()?.iter().position(|h| h == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_of_headers_with_blank_fill() {
        let recs = vec![
            Record::from_pairs([("A", "1"), ("B", "2")]),
            Record::from_pairs([("B", "3"), ("C", "4")]),
        ];
        let ds = DataSet::from_records(&recs);
        assert_eq!(ds.headers, Some(vec![s!("A"), s!("B"), s!("C")]));
        assert_eq!(ds.rows[0], vec!["1", "2", ""]);
        assert_eq!(ds.rows[1], vec!["", "3", "4"]);
        assert_eq!(ds.column("C"), Some(2));
    }

    #[test]
    fn no_records_no_headers() {
        let ds = DataSet::from_records::<Record>(&[]);
        assert!(ds.is_empty());
        assert_eq!(ds.headers, None);
    }
}

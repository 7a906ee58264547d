//! TableData: display-ready view of a `DataSet`.
//!
//! Keeps row order identical to the source so a clicked row index maps
//! straight back to the stored record. Only the column order changes:
//! pages may ask for a few key columns up front, the rest follow in
//! upstream order.

use crate::dataset::DataSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TableData {
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,
}

impl TableData {
    pub fn empty() -> Self {
        Self { headers: None, rows: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn ncols(&self) -> usize {
        self.headers
            .as_ref()
            .map(|h| h.len())
            .or_else(|| self.rows.first().map(|r| r.len()))
            .unwrap_or(0)
    }

    pub fn nrows(&self) -> usize {
        self.rows.len()
    }

    /// Construct a model with no reordering.
    pub fn from_dataset(ds: &DataSet) -> Self {
        Self { headers: ds.headers.clone(), rows: ds.rows.clone() }
    }

    /// Move `leading` columns (those present) to the front, in the given order.
    pub fn from_dataset_leading(ds: &DataSet, leading: &[&str]) -> Self {
        let Some(headers) = ds.headers.as_ref() else {
            return Self::from_dataset(ds);
        };

        let mut order: Vec<usize> = leading
            .iter()
            .filter_map(|name| headers.iter().position(|h| h == name))
            .collect();
        let rest: Vec<usize> = (0..headers.len()).filter(|ix| !order.contains(ix)).collect();
        order.extend(rest);

        let pick = |row: &Vec<String>| -> Vec<String> {
            order.iter().map(|&ix| row.get(ix).cloned().unwrap_or_default()).collect()
        };

        Self {
            headers: Some(pick(headers)),
            rows: ds.rows.iter().map(pick).collect(),
        }
    }
}

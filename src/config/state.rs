// src/config/state.rs
use chrono::NaiveDate;

use super::options::{CopyFormat, SchoolFilter, SchoolKind};
use crate::session::today;

/// Raw contents of the school search form, as typed.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolForm {
    pub name: String,
    pub kind: Option<SchoolKind>,
    pub region: String,
}

impl SchoolForm {
    pub fn to_filter(&self) -> SchoolFilter {
        SchoolFilter {
            name: Some(self.name.clone()),
            kind: self.kind,
            region: Some(self.region.clone()),
        }
    }
}

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Active tab index into router::PAGES
    pub current_page_index: usize,

    pub school_form: SchoolForm,

    /// Meal tab date picker
    pub meal_date: NaiveDate,

    pub copy_format: CopyFormat,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            current_page_index: 0,
            school_form: SchoolForm::default(),
            meal_date: today(),
            copy_format: CopyFormat::Tsv,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_form_yields_empty_filter() {
        let form = SchoolForm::default();
        assert!(form.to_filter().is_empty());
    }

    #[test]
    fn form_values_flow_into_filter() {
        let form = SchoolForm {
            name: s!("한가람고등학교"),
            kind: Some(SchoolKind::High),
            region: s!(),
        };
        let f = form.to_filter();
        assert_eq!(f.name(), Some("한가람고등학교"));
        assert_eq!(f.kind(), Some(SchoolKind::High));
        assert_eq!(f.region(), None);
    }
}

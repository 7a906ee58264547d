// src/config/options.rs

/// Tabs of the main window.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Schools,
    Meals,
}

/// Separator used by the Copy button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyFormat {
    Tsv,
    Csv,
}

impl CopyFormat {
    pub fn sep(self) -> char {
        match self {
            CopyFormat::Tsv => crate::tsv::TAB,
            CopyFormat::Csv => crate::tsv::COMMA,
        }
    }
}

/// School type filter. The upstream expects the Korean label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SchoolKind {
    Elementary,
    Middle,
    High,
    Special,
}

impl SchoolKind {
    pub const ALL: [SchoolKind; 4] = [
        SchoolKind::Elementary,
        SchoolKind::Middle,
        SchoolKind::High,
        SchoolKind::Special,
    ];

    /// Value sent as SCHUL_KND_SC_NM.
    pub fn upstream_value(self) -> &'static str {
        match self {
            SchoolKind::Elementary => "초등학교",
            SchoolKind::Middle     => "중학교",
            SchoolKind::High       => "고등학교",
            SchoolKind::Special    => "특수학교",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SchoolKind::Elementary => "Elementary",
            SchoolKind::Middle     => "Middle",
            SchoolKind::High       => "High",
            SchoolKind::Special    => "Special",
        }
    }
}

/// Optional filters for the school directory lookup.
///
/// Blank strings are treated the same as `None`, so an untouched text box
/// never ends up in the outbound request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SchoolFilter {
    pub name: Option<String>,
    pub kind: Option<SchoolKind>,
    pub region: Option<String>,
}

impl SchoolFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_kind(mut self, kind: SchoolKind) -> Self {
        self.kind = Some(kind);
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn name(&self) -> Option<&str> {
        non_blank(self.name.as_deref())
    }

    pub fn kind(&self) -> Option<SchoolKind> {
        self.kind
    }

    pub fn region(&self) -> Option<&str> {
        non_blank(self.region.as_deref())
    }

    pub fn is_empty(&self) -> bool {
        self.name().is_none() && self.kind.is_none() && self.region().is_none()
    }
}

fn non_blank(v: Option<&str>) -> Option<&str> {
    v.filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_fields_read_as_absent() {
        let f = SchoolFilter::new().with_name("  ").with_region("");
        assert_eq!(f.name(), None);
        assert_eq!(f.region(), None);
        assert!(f.is_empty());
    }

    #[test]
    fn present_fields_are_returned_unmodified() {
        let f = SchoolFilter::new()
            .with_name(" Hangaram ")
            .with_kind(SchoolKind::High)
            .with_region("서울특별시");
        assert_eq!(f.name(), Some(" Hangaram "));
        assert_eq!(f.kind().map(SchoolKind::upstream_value), Some("고등학교"));
        assert_eq!(f.region(), Some("서울특별시"));
        assert!(!f.is_empty());
    }
}

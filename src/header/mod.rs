//! Spectrum header record.
//!
//! A [`SpectrumHeader`] holds the 15 fields of a CLASS spectrum entry in
//! their fixed order (see [`HeaderFieldName::ALL`]) together with the
//! 8-field *visible header*, the projection shown by a long listing
//! (see [`HeaderFieldName::VISIBLE`]).
//!
//! The visible header is computed once by [`SpectrumHeader::new`] and
//! refreshed by [`SpectrumHeader::set_field`]; both views therefore always
//! agree. Cloning copies both views, and equality compares both.
//!
//! # Example
//!
//! ```rust
//! use gildas_codec::header::{FieldValue, HeaderField, HeaderFieldName, SpectrumHeader};
//!
//! let fields = HeaderFieldName::ALL.map(|name| {
//!     HeaderField::new(FieldValue::Integer(name.index() as i32))
//! });
//! let header = SpectrumHeader::new(fields);
//! assert_eq!(header.visible_header()[1].value, FieldValue::Integer(2));
//! ```
use std::fmt;

use itertools::Itertools;

pub mod header_field;
pub mod kinds;

pub use header_field::{FieldValue, HeaderField, HeaderFieldName};
pub use kinds::{CoordinateSystem, ObservationKind};

/// Number of fields of a spectrum header.
pub const HEADER_LEN: usize = 15;

/// Number of fields of the visible header.
pub const VISIBLE_LEN: usize = 8;

#[derive(Debug, Clone, PartialEq)]
pub struct SpectrumHeader {
    fields: [HeaderField; HEADER_LEN],
    visible: [HeaderField; VISIBLE_LEN],
}

fn project_visible(fields: &[HeaderField; HEADER_LEN]) -> [HeaderField; VISIBLE_LEN] {
    HeaderFieldName::VISIBLE.map(|name| fields[name.index()].clone())
}

impl SpectrumHeader {
    /// Build a header from its 15 fields, given in [`HeaderFieldName::ALL`] order.
    pub fn new(fields: [HeaderField; HEADER_LEN]) -> Self {
        let visible = project_visible(&fields);
        SpectrumHeader { fields, visible }
    }

    pub fn fields(&self) -> &[HeaderField; HEADER_LEN] {
        &self.fields
    }

    pub fn field(&self, name: HeaderFieldName) -> &HeaderField {
        &self.fields[name.index()]
    }

    pub fn visible_header(&self) -> &[HeaderField; VISIBLE_LEN] {
        &self.visible
    }

    /// Replace one field, keeping the visible header in sync.
    pub fn set_field(&mut self, name: HeaderFieldName, field: HeaderField) {
        self.fields[name.index()] = field;
        if name.is_visible() {
            self.visible = project_visible(&self.fields);
        }
    }

    /// Visible fields paired with their names.
    pub fn visible_entries(&self) -> impl Iterator<Item = (HeaderFieldName, &HeaderField)> {
        HeaderFieldName::VISIBLE.into_iter().zip(self.visible.iter())
    }

    /// One-line rendering of the visible header, e.g. `NUM=12 VERSION=1 SOURCE=ORION ...`.
    pub fn summary_line(&self) -> String {
        self.visible_entries()
            .map(|(name, field)| format!("{name}={}", field.value))
            .join(" ")
    }

    pub fn into_fields(self) -> [HeaderField; HEADER_LEN] {
        self.fields
    }
}

impl fmt::Display for SpectrumHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<(&str, String)> = HeaderFieldName::ALL
            .iter()
            .map(|name| (name.keyword(), self.field(*name).to_string()))
            .collect();

        let label_width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(10).max(5);
        let value_width = rows.iter().map(|(_, v)| v.len()).max().unwrap_or(10).max(5);

        let border = format!(
            "+{:-<label$}+{:-<value$}+",
            "",
            "",
            label = label_width + 2,
            value = value_width + 2
        );

        writeln!(f, "{border}")?;
        writeln!(
            f,
            "| {:<label_width$} | {:<value_width$} |",
            "Field", "Value",
        )?;
        writeln!(f, "{border}")?;

        for (label, value) in rows {
            writeln!(f, "| {label:<label_width$} | {value:<value_width$} |")?;
        }

        writeln!(f, "{border}")
    }
}

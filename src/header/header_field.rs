use std::fmt;

use hifitime::Epoch;
use serde::{Deserialize, Serialize};

use super::kinds::{CoordinateSystem, ObservationKind};

/// Names of the 15 fields of a spectrum header, in header order.
///
/// The display form is the short CLASS keyword (`NUM`, `BLOCK`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderFieldName {
    ObservationNumber,
    Block,
    Version,
    SourceName,
    LineName,
    Telescope,
    ObservationDate,
    ReductionDate,
    RaOffset,
    DecOffset,
    CoordinateType,
    Kind,
    Quality,
    ScanNumber,
    PositionAngle,
}

impl HeaderFieldName {
    /// Every field, in header order.
    pub const ALL: [HeaderFieldName; 15] = [
        HeaderFieldName::ObservationNumber,
        HeaderFieldName::Block,
        HeaderFieldName::Version,
        HeaderFieldName::SourceName,
        HeaderFieldName::LineName,
        HeaderFieldName::Telescope,
        HeaderFieldName::ObservationDate,
        HeaderFieldName::ReductionDate,
        HeaderFieldName::RaOffset,
        HeaderFieldName::DecOffset,
        HeaderFieldName::CoordinateType,
        HeaderFieldName::Kind,
        HeaderFieldName::Quality,
        HeaderFieldName::ScanNumber,
        HeaderFieldName::PositionAngle,
    ];

    /// Fields shown by the long listing of a spectrum (indices 0, 2, 3, 4, 5, 8, 9, 13).
    pub const VISIBLE: [HeaderFieldName; 8] = [
        HeaderFieldName::ObservationNumber,
        HeaderFieldName::Version,
        HeaderFieldName::SourceName,
        HeaderFieldName::LineName,
        HeaderFieldName::Telescope,
        HeaderFieldName::RaOffset,
        HeaderFieldName::DecOffset,
        HeaderFieldName::ScanNumber,
    ];

    /// Position of the field in the header.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn is_visible(self) -> bool {
        HeaderFieldName::VISIBLE.contains(&self)
    }

    pub fn keyword(self) -> &'static str {
        match self {
            HeaderFieldName::ObservationNumber => "NUM",
            HeaderFieldName::Block => "BLOCK",
            HeaderFieldName::Version => "VERSION",
            HeaderFieldName::SourceName => "SOURCE",
            HeaderFieldName::LineName => "LINE",
            HeaderFieldName::Telescope => "TELESCOPE",
            HeaderFieldName::ObservationDate => "DOBS",
            HeaderFieldName::ReductionDate => "DRED",
            HeaderFieldName::RaOffset => "OFF1",
            HeaderFieldName::DecOffset => "OFF2",
            HeaderFieldName::CoordinateType => "TYPEC",
            HeaderFieldName::Kind => "KIND",
            HeaderFieldName::Quality => "QUALITY",
            HeaderFieldName::ScanNumber => "SCAN",
            HeaderFieldName::PositionAngle => "POSA",
        }
    }
}

impl fmt::Display for HeaderFieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// Decoded value of a header field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Integer(i32),
    Real(f64),
    Text(String),
    Date(Epoch),
    Coordinates(CoordinateSystem),
    Kind(ObservationKind),
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Integer(v) => write!(f, "{v}"),
            FieldValue::Real(v) => write!(f, "{v}"),
            FieldValue::Text(v) => write!(f, "{v}"),
            FieldValue::Date(epoch) => {
                let (year, month, day, ..) = epoch.to_gregorian_utc();
                write!(f, "{year:04}-{month:02}-{day:02}")
            }
            FieldValue::Coordinates(v) => write!(f, "{v}"),
            FieldValue::Kind(v) => write!(f, "{v}"),
        }
    }
}

/// A header value with an optional human-readable description (unit, meaning).
#[derive(Debug, Clone, PartialEq)]
pub struct HeaderField {
    pub value: FieldValue,
    pub description: Option<String>,
}

impl HeaderField {
    pub fn new(value: FieldValue) -> Self {
        HeaderField {
            value,
            description: None,
        }
    }

    pub fn with_description(value: FieldValue, description: impl Into<String>) -> Self {
        HeaderField {
            value,
            description: Some(description.into()),
        }
    }
}

impl fmt::Display for HeaderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.description {
            Some(description) => write!(f, "{} ({description})", self.value),
            None => write!(f, "{}", self.value),
        }
    }
}

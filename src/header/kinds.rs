use std::fmt;

use serde::{Deserialize, Serialize};

use crate::codec_errors::CodecError;

/// Kind of observation stored in a spectrum entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum ObservationKind {
    Spectroscopic = 0,
    Continuum = 1,
    Skydip = 2,
    OnOff = 3,
}

impl ObservationKind {
    pub fn from_i32(value: i32) -> Result<Self, CodecError> {
        ObservationKind::try_from(value)
    }

    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ObservationKind {
    type Error = CodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        use ObservationKind::*;
        match value {
            0 => Ok(Spectroscopic),
            1 => Ok(Continuum),
            2 => Ok(Skydip),
            3 => Ok(OnOff),
            _ => Err(CodecError::InvalidEnumValue {
                name: "observation kind",
                value,
            }),
        }
    }
}

impl fmt::Display for ObservationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ObservationKind::Spectroscopic => "Spectroscopic",
            ObservationKind::Continuum => "Continuum",
            ObservationKind::Skydip => "Skydip",
            ObservationKind::OnOff => "On-Off",
        };
        write!(f, "{s}")
    }
}

/// Coordinate system of the source position and offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(i32)]
pub enum CoordinateSystem {
    Unknown = 1,
    Equatorial = 2,
    Galactic = 3,
    Horizontal = 4,
    Icrs = 5,
}

impl CoordinateSystem {
    pub fn from_i32(value: i32) -> Result<Self, CodecError> {
        CoordinateSystem::try_from(value)
    }

    pub fn to_i32(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for CoordinateSystem {
    type Error = CodecError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        use CoordinateSystem::*;
        match value {
            1 => Ok(Unknown),
            2 => Ok(Equatorial),
            3 => Ok(Galactic),
            4 => Ok(Horizontal),
            5 => Ok(Icrs),
            _ => Err(CodecError::InvalidEnumValue {
                name: "coordinate system",
                value,
            }),
        }
    }
}

impl fmt::Display for CoordinateSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CoordinateSystem::Unknown => "Unknown",
            CoordinateSystem::Equatorial => "Equatorial",
            CoordinateSystem::Galactic => "Galactic",
            CoordinateSystem::Horizontal => "Horizontal",
            CoordinateSystem::Icrs => "ICRS",
        };
        write!(f, "{s}")
    }
}

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Unsupported numeric format tag: {tag:?}")]
    UnsupportedFormat { tag: String },

    #[error("Unsupported file format revision for tag {tag:?} (only revision 1 files are readable)")]
    UnsupportedRevision { tag: String },

    #[error("Unable to read the format tag from the header: {0}")]
    TagParse(String),

    #[error("Field of {width} bytes at offset {offset} exceeds the buffer of {len} bytes")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    #[error("Exponent {exponent} is out of range after rebias")]
    ExponentOverflow { exponent: i32 },

    #[error("VAX reserved operand: sign bit set with a zero exponent")]
    ReservedOperand,

    #[error("Value {0} has no VAX floating-point representation")]
    NonRepresentable(f64),

    #[error("Day {mjd} (MJD) is outside the supported calendar range 0001-01-01..=9999-12-31")]
    DateOutOfRange { mjd: i64 },

    #[error("Invalid Julian Date: {0}")]
    InvalidJulianDay(f64),

    #[error("Invalid {name} value: {value}")]
    InvalidEnumValue { name: &'static str, value: i32 },
}

impl<I> From<nom::Err<nom::error::Error<I>>> for CodecError {
    fn from(err: nom::Err<nom::error::Error<I>>) -> Self {
        let reason = match err {
            nom::Err::Incomplete(_) => "incomplete input".to_string(),
            nom::Err::Error(e) | nom::Err::Failure(e) => format!("{:?}", e.code),
        };
        CodecError::TagParse(reason)
    }
}

//! Integer day encoding of GILDAS/CLASS dates.
//!
//! Dates are stored on disk as a signed 32-bit count of days. Day `0` is
//! MJD 60549 (2024-08-27), so most observations carry a negative value. The
//! two functions [`decode_day`] and [`encode_day`] are exact inverses at one
//! day resolution: the time of day is discarded on encoding.
//!
//! Both functions are free of any codec state and can be used without a
//! [`NumericCodec`](crate::codec::NumericCodec).
use hifitime::Epoch;

use crate::codec_errors::CodecError;
use crate::constants::{
    DAY_EPSILON, EPOCH_OFFSET_DAYS, JDTOMJD, MAX_CALENDAR_MJD, MIN_CALENDAR_MJD, UNIX_EPOCH_MJD,
};

/// Snap a Julian Date to the start of its civil day (`xxxx.5`).
fn civil_day_start(jd: f64) -> f64 {
    (jd - 0.5 + DAY_EPSILON).floor() + 0.5
}

/// Exact MJD of a proleptic Gregorian calendar date.
fn mjd_from_civil(year: i32, month: u8, day: u8) -> i64 {
    let (month, day) = (i64::from(month), i64::from(day));
    let year = i64::from(year) - i64::from(month <= 2);
    let era = year.div_euclid(400);
    let year_of_era = year - era * 400;
    let day_of_year = (153 * ((month + 9) % 12) + 2) / 5 + day - 1;
    let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / 100 + day_of_year;
    era * 146_097 + day_of_era - 719_468 + UNIX_EPOCH_MJD
}

fn check_calendar_range(mjd: i64) -> Result<(), CodecError> {
    if (MIN_CALENDAR_MJD..=MAX_CALENDAR_MJD).contains(&mjd) {
        Ok(())
    } else {
        Err(CodecError::DateOutOfRange { mjd })
    }
}

/// Transformation from a stored day count to a calendar date
///
/// Argument
/// --------
/// * `stored`: the day count read from the file
///
/// Return
/// ------
/// * the epoch at 00:00 UTC of the encoded day, or [`CodecError::DateOutOfRange`]
///   when the day falls outside 0001-01-01..=9999-12-31
pub fn decode_day(stored: i32) -> Result<Epoch, CodecError> {
    let mut days = f64::from(stored);
    // negative counts were written half a day early
    if stored < 0 {
        days += 0.5;
    }
    let jd = civil_day_start(days + f64::from(EPOCH_OFFSET_DAYS) + JDTOMJD);
    let mjd = (jd - JDTOMJD).round() as i64;
    check_calendar_range(mjd)?;
    Ok(Epoch::from_mjd_utc(mjd as f64))
}

/// Transformation from a Julian Date to a stored day count
///
/// Argument
/// --------
/// * `jd`: Julian Date (UTC), any time of day
///
/// Return
/// ------
/// * the day count of the civil day containing `jd`
pub fn encode_day(jd: f64) -> Result<i32, CodecError> {
    if !jd.is_finite() {
        return Err(CodecError::InvalidJulianDay(jd));
    }
    let jd = civil_day_start(jd);
    let mjd = (jd - JDTOMJD).round() as i64;
    check_calendar_range(mjd)?;

    let mut days = jd - JDTOMJD - f64::from(EPOCH_OFFSET_DAYS);
    if days < 0.0 {
        days -= 0.5;
    }
    Ok(days.trunc() as i32)
}

/// Calendar date of a stored day count, same as [`decode_day`].
pub fn epoch_from_day(stored: i32) -> Result<Epoch, CodecError> {
    decode_day(stored)
}

/// Transformation from an epoch to a stored day count
///
/// The day is taken from the UTC calendar date of `epoch`, so no floating
/// point Julian Date is involved and the last instant of a day still
/// belongs to that day.
///
/// Argument
/// --------
/// * `epoch`: any instant of the day to encode
///
/// Return
/// ------
/// * the day count of the civil day containing `epoch`
pub fn day_from_epoch(epoch: &Epoch) -> Result<i32, CodecError> {
    let (year, month, day, ..) = epoch.to_gregorian_utc();
    let mjd = mjd_from_civil(year, month, day);
    check_calendar_range(mjd)?;
    Ok((mjd - i64::from(EPOCH_OFFSET_DAYS)) as i32)
}

/// Transformation from modified julian date (MJD) to julian date (JD)
pub fn mjd_to_jd(mjd: f64) -> f64 {
    mjd + JDTOMJD
}

/// Transformation from julian date (JD) to modified julian date (MJD)
pub fn jd_to_mjd(jd: f64) -> f64 {
    jd - JDTOMJD
}

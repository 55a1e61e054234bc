/*!
 * WebVTT timecode codec.
 *
 * Converts between the display form `[hh:]mm:ss.mmm` and seconds stored as
 * `f64`. Decoding accepts the hour-less form; encoding always emits hours.
 */

/// Length of the millisecond field in a timecode
const MILLIS_WIDTH: usize = 3;

/// Decode a timecode such as `01:02:03.456` or `02:03.456` into seconds.
///
/// Returns `None` when the text does not have two or three colon-separated
/// fields followed by a 3-digit millisecond part.
pub fn decode_timecode(timecode: &str) -> Option<f64> {
    let normalized = timecode.replace('.', ":");
    let mut fields: Vec<&str> = normalized.split(':').collect();
    fields.reverse();

    // [ms, s, m] or [ms, s, m, h]
    if fields.len() < 3 || fields.len() > 4 {
        return None;
    }
    if fields[0].len() != MILLIS_WIDTH {
        return None;
    }

    let millis = parse_field(fields[0])?;
    let seconds = parse_field(fields[1])?;
    let minutes = parse_field(fields[2])?;
    let hours = match fields.get(3) {
        Some(field) => parse_field(field)?,
        None => 0,
    };

    let total_secs = hours
        .checked_mul(3600)?
        .checked_add(minutes.checked_mul(60)?)?
        .checked_add(seconds)?;
    let total_ms = total_secs.checked_mul(1000)?.checked_add(millis)?;
    Some(total_ms as f64 / 1000.0)
}

/// Encode seconds as `hh:mm:ss.mmm`, rounded to the nearest millisecond.
///
/// Negative and NaN inputs encode as `00:00:00.000`.
pub fn encode_timecode(seconds: f64) -> String {
    let total_ms = round_to_millis(seconds);

    let hours = total_ms / 3_600_000;
    let minutes = (total_ms / 60_000) % 60;
    let secs = (total_ms / 1_000) % 60;
    let millis = total_ms % 1_000;

    format!("{:02}:{:02}:{:02}.{:03}", hours, minutes, secs, millis)
}

/// Round a seconds value to whole milliseconds
pub fn round_to_millis(seconds: f64) -> u64 {
    if seconds.is_nan() || seconds <= 0.0 {
        return 0;
    }
    (seconds * 1000.0).round() as u64
}

fn parse_field(field: &str) -> Option<u64> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

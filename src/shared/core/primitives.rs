// Identifiers shared across modules. The ticketing database keys every table
// with a serial integer, so all of them are i32.

pub type UserId = i32;
pub type HotelId = i32;
pub type RoomId = i32;
pub type TicketId = i32;
pub type TicketTypeId = i32;
pub type EnrollmentId = i32;

/// Parse an identifier taken from a URL segment.
///
/// Surrounding whitespace is ignored. Decimal and exponent spellings of a
/// whole number (`1.0`, `1e0`) are accepted; fractions, non-finite values and
/// anything outside `i32` range yield `None`.
pub fn parse_id(raw: &str) -> Option<i32> {
    let raw = raw.trim();
    if let Ok(id) = raw.parse::<i32>() {
        return Some(id);
    }
    let number = raw.parse::<f64>().ok().filter(|n| n.is_finite())?;
    if number.fract() != 0.0 || number < f64::from(i32::MIN) || number > f64::from(i32::MAX) {
        return None;
    }
    Some(number as i32)
}

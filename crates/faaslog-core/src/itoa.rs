//! Cheap integer to fixed-width decimal ASCII.
//!
//! Used by the line formatter for date/time fields and line numbers, so it
//! appends straight into the formatter's scratch buffer instead of allocating.

// u64::MAX is 20 digits long.
const MAX_DIGITS: usize = 20;

/// Append `value` to `buf` as decimal ASCII, most significant digit first.
///
/// `width` is a minimum: values shorter than `width` are left-padded with `'0'`,
/// longer values are written in full. A width of 0 or 1 writes the minimal form.
pub fn itoa(buf: &mut Vec<u8>, mut value: u64, width: usize) {
    // Assemble in reverse order.
    let mut digits = [0u8; MAX_DIGITS];
    let mut pos = MAX_DIGITS;
    loop {
        pos -= 1;
        digits[pos] = b'0' + (value % 10) as u8;
        value /= 10;
        if value == 0 {
            break;
        }
    }

    let len = MAX_DIGITS - pos;
    if width > len {
        buf.resize(buf.len() + (width - len), b'0');
    }
    buf.extend_from_slice(&digits[pos..]);
}

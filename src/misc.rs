//! Small shared helpers

/// Format `x` with `sig` significant digits
///
/// Fixed-notation rendition of `%g`: trailing zeros and a dangling
/// decimal point are trimmed. Values outside `[0, 4]` are not a concern
/// here, so no scientific notation is produced.
///
/// # Example
///
/// ```
/// use quadrant::misc::format_sig;
///
/// assert_eq!(format_sig(3.141592653589793, 6), "3.14159");
/// assert_eq!(format_sig(4.0, 18), "4");
/// assert_eq!(format_sig(0.5, 10), "0.5");
/// ```
pub fn format_sig(x: f64, sig: usize) -> String {
    if x == 0.0 || !x.is_finite() {
        return format!("{}", x);
    }
    let magnitude = x.abs().log10().floor() as i32;
    let decimals = (sig as i32 - 1 - magnitude).max(0) as usize;
    let fixed = format!("{:.*}", decimals, x);
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        fixed
    }
}

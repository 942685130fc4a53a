//! Build-time precision selection
//!
//! The sampling arithmetic runs at one of three precisions, chosen by
//! enabling exactly one of the `float16`, `float`, or `double` cargo
//! features. The selected type is exported as [`Real`]; building with no
//! feature, or with more than one, is a compile error rather than a
//! silent default.

use std::fmt::Debug;
use std::mem;

use num_traits::Float;

#[cfg(feature = "float16")]
use half::f16;

#[cfg(not(any(feature = "float16", feature = "float", feature = "double")))]
compile_error!(
    "no precision selected: enable exactly one of the `float16`, `float`, \
     or `double` features"
);

#[cfg(any(
    all(feature = "float16", feature = "float"),
    all(feature = "float16", feature = "double"),
    all(feature = "float", feature = "double"),
))]
compile_error!(
    "multiple precisions selected: enable exactly one of the `float16`, \
     `float`, or `double` features"
);

/// The numeric type the kernel samples and divides in
#[cfg(feature = "float16")]
pub type Real = f16;

/// The numeric type the kernel samples and divides in
#[cfg(all(feature = "float", not(feature = "float16")))]
pub type Real = f32;

/// The numeric type the kernel samples and divides in
#[cfg(all(
    feature = "double",
    not(any(feature = "float16", feature = "float"))
))]
pub type Real = f64;

/// A floating-point representation the kernel can run at
///
/// # Example
///
/// ```
/// use quadrant::real::Precision;
///
/// assert_eq!(f64::LABEL, "double");
/// assert_eq!(f64::sig_digits(), 18);
/// assert_eq!(f32::LABEL, "float");
/// ```
pub trait Precision: Float + Debug + Send + Sync + 'static {
    /// Reporting label, identical to the cargo feature that selects this
    /// type
    const LABEL: &'static str;

    /// Round `x` into this precision
    fn from_f64(x: f64) -> Self;

    /// Widen to `f64`, for display only
    fn widen(self) -> f64;

    /// The hit ratio `num / den` in this precision's arithmetic
    fn ratio(num: u64, den: u64) -> Self;

    /// Significant digits to report, proportional to the byte width
    fn sig_digits() -> usize {
        2 * mem::size_of::<Self>() + 2
    }
}

impl Precision for f64 {
    const LABEL: &'static str = "double";

    #[inline]
    fn from_f64(x: f64) -> Self {
        x
    }

    #[inline]
    fn widen(self) -> f64 {
        self
    }

    #[inline]
    fn ratio(num: u64, den: u64) -> Self {
        num as f64 / den as f64
    }
}

impl Precision for f32 {
    const LABEL: &'static str = "float";

    #[inline]
    fn from_f64(x: f64) -> Self {
        x as f32
    }

    #[inline]
    fn widen(self) -> f64 {
        f64::from(self)
    }

    #[inline]
    fn ratio(num: u64, den: u64) -> Self {
        num as f32 / den as f32
    }
}

#[cfg(feature = "float16")]
impl Precision for f16 {
    const LABEL: &'static str = "float16";

    #[inline]
    fn from_f64(x: f64) -> Self {
        f16::from_f64(x)
    }

    #[inline]
    fn widen(self) -> f64 {
        self.to_f64()
    }

    // Counts at realistic trial scales exceed f16's finite range, so
    // casting the operands first would give inf/inf. Form the quotient
    // wide and round once.
    #[inline]
    fn ratio(num: u64, den: u64) -> Self {
        f16::from_f64(num as f64 / den as f64)
    }
}

/// Element traits shared by all representations.
mod element;
/// Fixed-point integer formats (8, 16, 32, 64 bits).
mod fixed;
/// Floating-point formats (single and double precision).
mod float;

pub use element::{Element, SumElement};
pub use fixed::{Fixed16, Fixed32, Fixed64, Fixed8};
pub use float::{Double, Single};

/// A resolved numeric format: the four representations a generated network
/// computes with, plus their saturation bounds.
///
/// Fixed-point formats use two's-complement integers of the configured width
/// with a wider accumulator; floating-point formats use one float type for
/// all four representations with activation bounds of ±1.0 (signed) and
/// [0.0, 1.0] (unsigned). Resolution is pure: the same bit width always
/// yields the same types and bounds.
pub trait Format: Copy + 'static {
    /// Signed activation representation (DATA_T).
    type Signed: Element;
    /// Unsigned activation representation (UDATA_T).
    type Unsigned: Element;
    /// Weight representation; shares the signed activation's layout (WDATA_T).
    type Weight: Element;
    /// Accumulator representation, wide enough for the largest expected
    /// reduction (SUM_T).
    type Sum: SumElement;

    /// The bit-width parameter this format realizes. Positive values are
    /// fixed-point widths; negative values select floating point.
    const BITS: i32;

    const SIGNED_MIN: Self::Signed;
    const SIGNED_MAX: Self::Signed;
    const UNSIGNED_MIN: Self::Unsigned;
    const UNSIGNED_MAX: Self::Unsigned;

    /// Clamp an accumulator value into the signed activation range.
    fn saturate_signed(sum: Self::Sum) -> Self::Signed;

    /// Clamp an accumulator value into the unsigned activation range.
    fn saturate_unsigned(sum: Self::Sum) -> Self::Unsigned;

    /// Widen an unsigned activation into the accumulator representation.
    fn widen_unsigned(value: Self::Unsigned) -> Self::Sum;

    /// Widen a weight into the accumulator representation.
    fn widen_weight(weight: Self::Weight) -> Self::Sum;

    /// Map an 8-bit source pixel into the unsigned activation range.
    fn unsigned_from_pixel(pixel: u8) -> Self::Unsigned;

    /// Map an 8-bit reference weight into the weight representation.
    fn weight_from_i8(weight: i8) -> Self::Weight;
}

// The active format is fixed at build time by exactly one feature flag,
// mirroring the NB_BITS parameter of the generated export. A build with no
// format selected is the NB_BITS = 0 configuration and is rejected here.
#[cfg(feature = "float_64")]
pub type Active = Double;

#[cfg(all(feature = "float_32", not(feature = "float_64")))]
pub type Active = Single;

#[cfg(all(feature = "bits_64", not(any(feature = "float_32", feature = "float_64"))))]
pub type Active = Fixed64;

#[cfg(all(
    feature = "bits_32",
    not(any(feature = "bits_64", feature = "float_32", feature = "float_64"))
))]
pub type Active = Fixed32;

#[cfg(all(
    feature = "bits_16",
    not(any(feature = "bits_32", feature = "bits_64", feature = "float_32", feature = "float_64"))
))]
pub type Active = Fixed16;

#[cfg(all(
    feature = "bits_8",
    not(any(
        feature = "bits_16",
        feature = "bits_32",
        feature = "bits_64",
        feature = "float_32",
        feature = "float_64"
    ))
))]
pub type Active = Fixed8;

#[cfg(not(any(
    feature = "bits_8",
    feature = "bits_16",
    feature = "bits_32",
    feature = "bits_64",
    feature = "float_32",
    feature = "float_64"
)))]
compile_error!(
    "no numeric format selected: enable exactly one of the bits_8/bits_16/bits_32/bits_64/float_32/float_64 features"
);

use std::fmt;

/// A value that can live in an activation or weight buffer.
pub trait Element:
    Copy + Default + PartialEq + PartialOrd + fmt::Debug + fmt::Display + Send + Sync + 'static
{
}

/// An accumulator value: supports saturating arithmetic and rescaling.
///
/// Integer accumulators saturate to their own extrema on overflow; float
/// accumulators use plain IEEE arithmetic, which never wraps.
pub trait SumElement: Element {
    const ZERO: Self;

    fn sat_add(self, other: Self) -> Self;
    fn sat_mul(self, other: Self) -> Self;

    /// Scale down by 2^bits (arithmetic shift for integers, division for
    /// floats), the rescaling step after a dot product.
    fn rescale(self, bits: u32) -> Self;
}

macro_rules! impl_element {
    ($($ty:ty),*) => {
        $(impl Element for $ty {})*
    };
}

impl_element!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

macro_rules! impl_int_sum {
    ($($ty:ty),*) => {
        $(impl SumElement for $ty {
            const ZERO: Self = 0;

            fn sat_add(self, other: Self) -> Self {
                self.saturating_add(other)
            }

            fn sat_mul(self, other: Self) -> Self {
                self.saturating_mul(other)
            }

            fn rescale(self, bits: u32) -> Self {
                self >> bits
            }
        })*
    };
}

impl_int_sum!(i32, i64);

macro_rules! impl_float_sum {
    ($($ty:ty),*) => {
        $(impl SumElement for $ty {
            const ZERO: Self = 0.0;

            fn sat_add(self, other: Self) -> Self {
                self + other
            }

            fn sat_mul(self, other: Self) -> Self {
                self * other
            }

            fn rescale(self, bits: u32) -> Self {
                self / (1u64 << bits) as $ty
            }
        })*
    };
}

impl_float_sum!(f32, f64);

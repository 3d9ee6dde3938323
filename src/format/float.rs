use super::Format;

macro_rules! float_format {
    ($name:ident, $bits:expr, $ty:ty, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Format for $name {
            type Signed = $ty;
            type Unsigned = $ty;
            type Weight = $ty;
            type Sum = $ty;

            const BITS: i32 = $bits;
            const SIGNED_MIN: Self::Signed = -1.0;
            const SIGNED_MAX: Self::Signed = 1.0;
            const UNSIGNED_MIN: Self::Unsigned = 0.0;
            const UNSIGNED_MAX: Self::Unsigned = 1.0;

            fn saturate_signed(sum: Self::Sum) -> Self::Signed {
                sum.clamp(-1.0, 1.0)
            }

            fn saturate_unsigned(sum: Self::Sum) -> Self::Unsigned {
                sum.clamp(0.0, 1.0)
            }

            fn widen_unsigned(value: Self::Unsigned) -> Self::Sum {
                value
            }

            fn widen_weight(weight: Self::Weight) -> Self::Sum {
                weight
            }

            fn unsigned_from_pixel(pixel: u8) -> Self::Unsigned {
                pixel as $ty / 255.0
            }

            fn weight_from_i8(weight: i8) -> Self::Weight {
                weight as $ty / 127.0
            }
        }
    };
}

float_format!(
    Single,
    -32,
    f32,
    "Single-precision floating-point format. Also serves the reduced-range \
     -16 configuration, which shares single-precision semantics."
);
float_format!(
    Double,
    -64,
    f64,
    "Double-precision floating-point format."
);

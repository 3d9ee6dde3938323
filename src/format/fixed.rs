use super::Format;

macro_rules! fixed_format {
    ($name:ident, $bits:expr, $signed:ty, $unsigned:ty, $sum:ty, $shift:expr, $doc:expr) => {
        #[doc = $doc]
        #[derive(Clone, Copy, Debug, Default)]
        pub struct $name;

        impl Format for $name {
            type Signed = $signed;
            type Unsigned = $unsigned;
            type Weight = $signed;
            type Sum = $sum;

            const BITS: i32 = $bits;
            const SIGNED_MIN: Self::Signed = <$signed>::MIN;
            const SIGNED_MAX: Self::Signed = <$signed>::MAX;
            const UNSIGNED_MIN: Self::Unsigned = <$unsigned>::MIN;
            const UNSIGNED_MAX: Self::Unsigned = <$unsigned>::MAX;

            fn saturate_signed(sum: Self::Sum) -> Self::Signed {
                if sum <= <$signed>::MIN as $sum {
                    <$signed>::MIN
                } else if sum >= <$signed>::MAX as $sum {
                    <$signed>::MAX
                } else {
                    sum as $signed
                }
            }

            fn saturate_unsigned(sum: Self::Sum) -> Self::Unsigned {
                if sum <= 0 {
                    0
                } else if (sum as u128) >= (<$unsigned>::MAX as u128) {
                    <$unsigned>::MAX
                } else {
                    sum as $unsigned
                }
            }

            fn widen_unsigned(value: Self::Unsigned) -> Self::Sum {
                (value as u128).min(<$sum>::MAX as u128) as $sum
            }

            fn widen_weight(weight: Self::Weight) -> Self::Sum {
                weight as $sum
            }

            fn unsigned_from_pixel(pixel: u8) -> Self::Unsigned {
                (pixel as $unsigned) << $shift
            }

            fn weight_from_i8(weight: i8) -> Self::Weight {
                (weight as $signed) << $shift
            }
        }
    };
}

fixed_format!(
    Fixed8,
    8,
    i8,
    u8,
    i32,
    0,
    "8-bit fixed-point format: i8/u8 activations with an i32 accumulator."
);
fixed_format!(
    Fixed16,
    16,
    i16,
    u16,
    i64,
    8,
    "16-bit fixed-point format: i16/u16 activations with an i64 accumulator."
);
fixed_format!(
    Fixed32,
    32,
    i32,
    u32,
    i64,
    24,
    "32-bit fixed-point format: i32/u32 activations with an i64 accumulator."
);
fixed_format!(
    Fixed64,
    64,
    i64,
    u64,
    i64,
    56,
    "64-bit fixed-point format: i64/u64 activations; the accumulator stays \
     at 64 bits, so wide reductions rely on saturation."
);

use std::fmt;

/// Element representation of a [`crate::Dense`] buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DType {
    F32,
    F64,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl DType {
    #[must_use]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            DType::I8 | DType::U8 => 1,
            DType::I16 | DType::U16 => 2,
            DType::F32 | DType::I32 | DType::U32 => 4,
            DType::F64 | DType::I64 | DType::U64 => 8,
        }
    }

}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DType::F32 => "f32",
            DType::F64 => "f64",
            DType::I8 => "i8",
            DType::I16 => "i16",
            DType::I32 => "i32",
            DType::I64 => "i64",
            DType::U8 => "u8",
            DType::U16 => "u16",
            DType::U32 => "u32",
            DType::U64 => "u64",
        };
        f.write_str(name)
    }
}

/// A fixed-width numeric type that can back a [`crate::Dense`] buffer.
///
/// `to_f32_exact` is the lossless narrowing used by [`crate::Dense::to_f32`]:
/// it returns `None` whenever the value has no exact `f32` representation.
/// NaN maps to NaN.
pub trait Element: bytemuck::Pod + fmt::Display + PartialEq + Send + Sync + 'static {
    const DTYPE: DType;

    fn to_f32_exact(self) -> Option<f32>;
}

impl Element for f32 {
    const DTYPE: DType = DType::F32;

    fn to_f32_exact(self) -> Option<f32> {
        Some(self)
    }
}

impl Element for f64 {
    const DTYPE: DType = DType::F64;

    #[allow(clippy::cast_possible_truncation, clippy::float_cmp)]
    fn to_f32_exact(self) -> Option<f32> {
        if self.is_nan() {
            return Some(f32::NAN);
        }
        let narrowed = self as f32;
        (f64::from(narrowed) == self).then_some(narrowed)
    }
}

macro_rules! small_int_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {$(
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            fn to_f32_exact(self) -> Option<f32> {
                Some(f32::from(self))
            }
        }
    )*};
}

small_int_element!(i8 => I8, i16 => I16, u8 => U8, u16 => U16);

macro_rules! wide_int_element {
    ($($ty:ty => $dtype:ident),* $(,)?) => {$(
        impl Element for $ty {
            const DTYPE: DType = DType::$dtype;

            #[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
            fn to_f32_exact(self) -> Option<f32> {
                let narrowed = self as f32;
                (narrowed as i128 == i128::from(self)).then_some(narrowed)
            }
        }
    )*};
}

wide_int_element!(i32 => I32, i64 => I64, u32 => U32, u64 => U64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_match_rust_types() {
        assert_eq!(DType::F32.size_in_bytes(), std::mem::size_of::<f32>());
        assert_eq!(DType::F64.size_in_bytes(), std::mem::size_of::<f64>());
        assert_eq!(DType::I16.size_in_bytes(), std::mem::size_of::<i16>());
        assert_eq!(DType::U64.size_in_bytes(), std::mem::size_of::<u64>());
    }

    #[test]
    fn wide_integers_round_trip_only_when_exact() {
        assert_eq!(16_777_216_i64.to_f32_exact(), Some(16_777_216.0));
        assert_eq!(16_777_217_i64.to_f32_exact(), None);
        assert_eq!((-16_777_216_i32).to_f32_exact(), Some(-16_777_216.0));
        assert_eq!(u64::MAX.to_f32_exact(), None);
        assert_eq!((1_u64 << 40).to_f32_exact(), Some(1_099_511_627_776.0));
    }

    #[test]
    fn doubles_must_be_representable() {
        assert_eq!(0.5_f64.to_f32_exact(), Some(0.5));
        assert_eq!(0.1_f64.to_f32_exact(), None);
        assert!(f64::NAN.to_f32_exact().is_some_and(f32::is_nan));
        assert_eq!(f64::INFINITY.to_f32_exact(), Some(f32::INFINITY));
    }
}

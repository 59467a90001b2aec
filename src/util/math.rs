//! Numeric bounds per tipe primitif
//!
//! Batas nilai di-resolve saat compile lewat trait impl per tipe,
//! tanpa inspeksi tipe saat runtime dan tanpa cast memori.

/// Nilai terkecil dan terbesar yang bisa ditampung sebuah tipe numerik.
pub trait Bounded {
    const MIN_VALUE: Self;
    const MAX_VALUE: Self;
}

/// Tipe numerik primitif. `Default` adalah nol.
pub trait Number: Copy + PartialOrd + Default + Bounded {}

macro_rules! impl_number {
    ($($t:ty),* $(,)?) => {
        $(
            impl Bounded for $t {
                const MIN_VALUE: Self = <$t>::MIN;
                const MAX_VALUE: Self = <$t>::MAX;
            }

            impl Number for $t {}
        )*
    };
}

impl_number!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64);

/// Nilai minimum yang bisa ditampung `T`
#[inline(always)]
pub fn min_value<T: Bounded>() -> T {
    T::MIN_VALUE
}

/// Nilai maksimum yang bisa ditampung `T`
#[inline(always)]
pub fn max_value<T: Bounded>() -> T {
    T::MAX_VALUE
}

/// Nilai terkecil di `values`, atau nol jika kosong
pub fn min_of<T: Number>(values: &[T]) -> T {
    let Some((&first, rest)) = values.split_first() else {
        return T::default();
    };
    rest.iter()
        .fold(first, |min, &v| if v < min { v } else { min })
}

/// Nilai terbesar di `values`, atau nol jika kosong
pub fn max_of<T: Number>(values: &[T]) -> T {
    let Some((&first, rest)) = values.split_first() else {
        return T::default();
    };
    rest.iter()
        .fold(first, |max, &v| if v > max { v } else { max })
}

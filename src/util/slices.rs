//! Slice helpers
//!
//! Semua helper yang mengembalikan `Vec` memberikan salinan, tidak pernah
//! referensi ke data asli. `count` yang melebihi panjang slice di-clamp.

/// Salinan penuh dari `slice`
#[inline]
pub fn copy_slice<T: Clone>(slice: &[T]) -> Vec<T> {
    slice.to_vec()
}

/// Salinan hingga `count` item pertama (tertua)
pub fn peek_oldest<T: Clone>(slice: &[T], count: usize) -> Vec<T> {
    let count = count.min(slice.len());
    slice[..count].to_vec()
}

/// Salinan hingga `count` item terakhir (termuda), urutan tetap
pub fn peek_newest<T: Clone>(slice: &[T], count: usize) -> Vec<T> {
    let count = count.min(slice.len());
    slice[slice.len() - count..].to_vec()
}

/// Menghapus hingga `count` item dari depan dan mengembalikannya
pub fn shift_front<T>(vec: &mut Vec<T>, count: usize) -> Vec<T> {
    let count = count.min(vec.len());
    vec.drain(..count).collect()
}

/// Menghapus hingga `count` item dari belakang dan mengembalikannya
/// dengan urutan aslinya.
pub fn pop_back<T>(vec: &mut Vec<T>, count: usize) -> Vec<T> {
    let count = count.min(vec.len());
    let start = vec.len() - count;
    vec.split_off(start)
}

/// Mengubah panjang ke `len`: dipotong, atau di-pad dengan `T::default()`
pub fn resize_slice<T: Default>(mut vec: Vec<T>, len: usize) -> Vec<T> {
    vec.resize_with(len, T::default);
    vec
}

/// Menggabungkan semua slice secara berurutan
pub fn join_slices<T: Clone>(slices: &[&[T]]) -> Vec<T> {
    let total = slices.iter().map(|s| s.len()).sum();
    let mut joined = Vec::with_capacity(total);
    for slice in slices {
        joined.extend_from_slice(slice);
    }
    joined
}

pub fn find_index<T>(slice: &[T], matcher: impl Fn(&T) -> bool) -> Option<usize> {
    slice.iter().position(matcher)
}

pub fn find_first<T>(slice: &[T], matcher: impl Fn(&T) -> bool) -> Option<&T> {
    slice.iter().find(|v| matcher(*v))
}

/// Item yang lolos `matcher`, disalin ke `Vec` baru
pub fn filter_slice<T: Clone>(slice: &[T], matcher: impl Fn(&T) -> bool) -> Vec<T> {
    slice.iter().filter(|v| matcher(*v)).cloned().collect()
}

/// Memisahkan item menjadi `(falses, trues)` berdasarkan `matcher`.
pub fn split_slice<T: Clone>(slice: &[T], matcher: impl Fn(&T) -> bool) -> (Vec<T>, Vec<T>) {
    let (trues, falses): (Vec<T>, Vec<T>) = slice.iter().cloned().partition(|v| matcher(v));
    (falses, trues)
}

#[inline]
pub fn slice_any<T>(slice: &[T], matcher: impl Fn(&T) -> bool) -> bool {
    slice.iter().any(matcher)
}

/// `true` juga untuk slice kosong
#[inline]
pub fn slice_every<T>(slice: &[T], matcher: impl Fn(&T) -> bool) -> bool {
    slice.iter().all(matcher)
}

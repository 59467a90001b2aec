//! Utility helpers kecil yang berdiri sendiri
//!
//! Tidak ada state bersama; semua fungsi pure kecuali yang jelas
//! menerima `&mut`.

pub mod maps;
pub mod matchers;
pub mod math;
pub mod slices;
pub mod strings;

pub use math::{max_of, max_value, min_of, min_value, Bounded, Number};

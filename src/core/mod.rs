//! Core module: struktur data berkapasitas tetap
//!
//! Prinsip desain:
//! - Fixed capacity: Kapasitas ditentukan saat init, tidak pernah tumbuh
//! - Overwrite-oldest: Overflow membuang data tertua, bukan menolak data baru
//! - Clamp, bukan error: Request di luar jangkauan di-clamp diam-diam

mod bounded_queue;
mod ring_buffer;

pub use bounded_queue::BoundedQueue;
pub use ring_buffer::{Iter, RingBuffer};

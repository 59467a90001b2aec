//! Kitbag - Utility Toolkit
//!
//! Arsitektur:
//! - Core: `BoundedQueue` (FIFO thread-safe, overflow membuang item tertua)
//!   dan `RingBuffer` (kapasitas tetap, overwrite-oldest, tanpa lock)
//! - Util: helper slice, map, string, matcher, dan numeric bounds
//! - Misc: `LTree` scope path, `Date` date-only, `EventManager`,
//!   `ProcessVars` untuk konfigurasi dari env/CLI
//!
//! ```
//! use kitbag::core::{BoundedQueue, RingBuffer};
//!
//! let queue = BoundedQueue::new(5);
//! assert_eq!(queue.push([1, 2, 3]), 0);
//! assert_eq!(queue.push([4, 5, 6, 7]), 2);
//! assert_eq!(queue.to_vec(), vec![3, 4, 5, 6, 7]);
//!
//! let mut ring = RingBuffer::new(3);
//! ring.push(1..=5);
//! assert_eq!(ring.elements(), vec![3, 4, 5]);
//! assert_eq!(ring.oldest(), Some(&3));
//! ```

pub mod core;
pub mod date;
pub mod error;
pub mod events;
pub mod logging;
pub mod ltree;
pub mod process_var;
pub mod util;

pub use crate::core::{BoundedQueue, RingBuffer};
pub use date::Date;
pub use error::{Error, Result};
pub use events::{EventManager, ListenerId};
pub use ltree::LTree;
pub use process_var::{ProcessValue, ProcessVars};

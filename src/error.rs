//! Error type untuk operasi kitbag yang bisa gagal.
//!
//! Struktur data inti (`RingBuffer`, `BoundedQueue`) tidak pernah gagal;
//! request di luar jangkauan di-clamp. Error hanya muncul dari parsing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid date '{input}', expected YYYY-MM-DD: {source}")]
    InvalidDate {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

//! Bounded FIFO Queue dengan displacement saat overflow
//!
//! Queue berkapasitas tetap. Saat penuh, item baru TIDAK ditolak;
//! item tertua yang dibuang untuk memberi ruang.
//!
//! Semua operasi publik memegang lock instance selama operasi berjalan,
//! sehingga tidak ada dua operasi (baca maupun tulis) yang berjalan
//! bersamaan pada satu queue. Lock dilepas sebelum return.

use parking_lot::Mutex;
use std::collections::VecDeque;
use tracing::trace;

/// Bounded FIFO queue yang thread-safe.
///
/// Posisi 0 selalu item tertua yang belum di-pop. Method mengambil `&self`,
/// jadi queue bisa dibagi antar thread lewat `Arc<BoundedQueue<T>>`.
pub struct BoundedQueue<T> {
    capacity: usize,
    items: Mutex<VecDeque<T>>,
}

impl<T> BoundedQueue<T> {
    /// Membuat queue baru. Kapasitas minimal 1.
    ///
    /// Storage di-alokasi penuh sekali di sini.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        Self {
            capacity,
            items: Mutex::new(VecDeque::with_capacity(capacity)),
        }
    }

    /// Kapasitas maksimum, tidak berubah setelah konstruksi
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Jumlah item saat ini
    pub fn len(&self) -> usize {
        self.items.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.lock().is_empty()
    }

    /// Mengambil dan menghapus hingga `count` item tertua.
    ///
    /// `count` di-clamp ke jumlah item yang ada. Item dikembalikan
    /// tertua dulu.
    pub fn pop(&self, count: usize) -> Vec<T> {
        let mut items = self.items.lock();
        let count = count.min(items.len());
        items.drain(..count).collect()
    }

    /// Menambahkan item di belakang queue.
    ///
    /// Returns jumlah item lama yang tergeser (displaced).
    ///
    /// - Jika `items.len() >= capacity`: semua isi lama dibuang dan hanya
    ///   `capacity` item terakhir dari batch yang disimpan. Nilai return
    ///   adalah panjang queue sebelumnya; item batch yang ikut terbuang
    ///   tidak dihitung.
    /// - Selain itu: item tertua dibuang sebanyak kelebihan terhadap ruang
    ///   kosong, lalu seluruh batch ditambahkan.
    pub fn push<I>(&self, items: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        // Kumpulkan di luar lock supaya critical section tetap pendek
        let mut incoming: Vec<T> = items.into_iter().collect();
        if incoming.is_empty() {
            return 0;
        }

        let mut queue = self.items.lock();

        if incoming.len() >= self.capacity {
            let displaced = queue.len();
            queue.clear();
            let skip = incoming.len() - self.capacity;
            queue.extend(incoming.drain(skip..));

            if displaced > 0 || skip > 0 {
                trace!(displaced, dropped_incoming = skip, "queue replaced by batch");
            }
            return displaced;
        }

        let space = self.capacity - queue.len();
        let overlap = incoming.len().saturating_sub(space);
        if overlap > 0 {
            queue.drain(..overlap);
            trace!(displaced = overlap, "queue evicted oldest items");
        }
        queue.extend(incoming);

        debug_assert!(queue.len() <= self.capacity);
        overlap
    }
}

impl<T: Clone> BoundedQueue<T> {
    /// Salinan seluruh isi queue, tertua ke termuda
    pub fn to_vec(&self) -> Vec<T> {
        self.items.lock().iter().cloned().collect()
    }

    /// Salinan hingga `count` item tertua tanpa mengubah queue
    pub fn peek(&self, count: usize) -> Vec<T> {
        let items = self.items.lock();
        items.iter().take(count).cloned().collect()
    }
}

/// Clone membuat lock baru yang independen; state lock tidak pernah dibagi.
impl<T: Clone> Clone for BoundedQueue<T> {
    fn clone(&self) -> Self {
        let items = self.items.lock();
        let mut copy = VecDeque::with_capacity(self.capacity);
        copy.extend(items.iter().cloned());

        Self {
            capacity: self.capacity,
            items: Mutex::new(copy),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for BoundedQueue<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let items = self.items.lock();
        f.debug_struct("BoundedQueue")
            .field("capacity", &self.capacity)
            .field("items", &*items)
            .finish()
    }
}

//! Fixed-Capacity Ring Buffer (overwrite-oldest)
//!
//! Buffer dengan kapasitas tetap. Setelah penuh, setiap push baru
//! membuang tepat satu elemen tertua.
//!
//! Prinsip desain:
//! - No-Allocation: Storage di-alokasi sekali saat `new`
//! - Tanpa shifting: head bergeser, data tidak dipindah
//! - Tanpa lock: sinkronisasi adalah tanggung jawab caller
//!
//! # Threading
//! `RingBuffer` tidak punya lock internal. Jika dipakai dari beberapa
//! thread, bungkus seluruh instance, misalnya `Mutex<RingBuffer<T>>`.

use serde::ser::{Serialize, SerializeSeq, Serializer};

/// Ring buffer dengan kapasitas tetap.
///
/// Index logis 0 selalu elemen tertua, index `len() - 1` selalu yang termuda.
/// Elemen logis `i` berada di slot fisik `(head + i) % capacity`.
#[derive(Clone)]
pub struct RingBuffer<T> {
    // Pre-allocated slot, ukurannya == capacity
    slots: Box<[Option<T>]>,
    // Slot fisik dari elemen tertua
    head: usize,
    // Jumlah slot yang terisi, saturasi di capacity
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Membuat ring buffer baru dengan kapasitas `capacity`.
    ///
    /// Kapasitas 0 dinaikkan menjadi 1.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);

        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);

        Self {
            slots: slots.into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Kapasitas maksimum buffer
    #[inline(always)]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Jumlah elemen saat ini, tidak pernah melebihi [`capacity`](Self::capacity)
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Cek apakah buffer penuh
    #[inline(always)]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Mengosongkan buffer. Elemen lama di-drop sekarang juga.
    pub fn reset(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    #[inline(always)]
    fn physical(&self, logical: usize) -> usize {
        (self.head + logical) % self.capacity()
    }

    /// Elemen pada index logis `index` (0 = tertua)
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Elemen tertua, atau `None` jika kosong
    #[inline]
    pub fn oldest(&self) -> Option<&T> {
        self.get(0)
    }

    /// Elemen yang paling terakhir di-push, atau `None` jika kosong
    #[inline]
    pub fn youngest(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Iterator dari tertua ke termuda
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            next: 0,
        }
    }

    /// Push satu elemen. Jika penuh, elemen tertua dibuang dan dikembalikan.
    pub fn push_one(&mut self, value: T) -> Option<T> {
        if self.is_full() {
            // Slot tertua ditimpa, head maju satu
            let evicted = self.slots[self.head].replace(value);
            self.head = (self.head + 1) % self.capacity();
            return evicted;
        }

        let tail = self.physical(self.len);
        self.slots[tail] = Some(value);
        self.len += 1;
        None
    }

    /// Push elemen sesuai urutan. Setiap push pada buffer penuh membuang
    /// tepat satu elemen tertua.
    pub fn push<I>(&mut self, items: I)
    where
        I: IntoIterator<Item = T>,
    {
        for item in items {
            self.push_one(item);
        }
    }
}

impl<T: Clone> RingBuffer<T> {
    /// Salinan semua elemen, urut dari tertua ke termuda.
    pub fn elements(&self) -> Vec<T> {
        self.iter().cloned().collect()
    }

    /// Bulk push. Hasil akhirnya sama dengan [`push`](Self::push), tetapi
    /// item yang pasti tertimpa dalam batch ini tidak pernah ditulis.
    pub fn extend_from_slice(&mut self, items: &[T]) {
        let capacity = self.capacity();
        if items.len() >= capacity {
            // Seluruh isi lama tergeser, cukup tulis `capacity` item terakhir
            let tail = &items[items.len() - capacity..];
            for (slot, item) in self.slots.iter_mut().zip(tail) {
                *slot = Some(item.clone());
            }
            self.head = 0;
            self.len = capacity;
            return;
        }

        self.push(items.iter().cloned());
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RingBuffer")
            .field("capacity", &self.capacity())
            .field("elements", &DebugElements(self))
            .finish()
    }
}

struct DebugElements<'a, T>(&'a RingBuffer<T>);

impl<T: std::fmt::Debug> std::fmt::Debug for DebugElements<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// Diserialisasi sebagai array elemen, tertua dulu.
impl<T: Serialize> Serialize for RingBuffer<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.len))?;
        for item in self.iter() {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

/// Iterator atas [`RingBuffer`], tertua ke termuda.
pub struct Iter<'a, T> {
    ring: &'a RingBuffer<T>,
    next: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.ring.get(self.next)?;
        self.next += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.ring.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer() {
        let rb: RingBuffer<u64> = RingBuffer::new(4);

        assert_eq!(rb.capacity(), 4);
        assert_eq!(rb.len(), 0);
        assert!(rb.is_empty());
        assert!(!rb.is_full());
        assert_eq!(rb.oldest(), None);
        assert_eq!(rb.youngest(), None);
        assert!(rb.elements().is_empty());
    }

    #[test]
    fn test_zero_capacity_is_raised() {
        let mut rb: RingBuffer<u8> = RingBuffer::new(0);
        assert_eq!(rb.capacity(), 1);

        rb.push([1, 2]);
        assert_eq!(rb.elements(), vec![2]);
    }

    #[test]
    fn test_fill_until_full() {
        let mut rb = RingBuffer::new(3);

        rb.push([1, 2]);
        assert_eq!(rb.len(), 2);
        assert!(!rb.is_full());
        assert_eq!(rb.oldest(), Some(&1));
        assert_eq!(rb.youngest(), Some(&2));

        rb.push_one(3);
        assert!(rb.is_full());
        assert_eq!(rb.elements(), vec![1, 2, 3]);
    }

    #[test]
    fn test_full_buffer_evicts_oldest() {
        let mut rb = RingBuffer::new(4);
        rb.push([1, 2, 3, 4]);

        assert_eq!(rb.push_one(5), Some(1));
        assert_eq!(rb.len(), 4);
        assert_eq!(rb.oldest(), Some(&2));
        assert_eq!(rb.youngest(), Some(&5));
        assert_eq!(rb.elements(), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_push_more_than_capacity() {
        let mut rb = RingBuffer::new(3);
        rb.push(1..=10);

        assert_eq!(rb.len(), 3);
        assert_eq!(rb.elements(), vec![8, 9, 10]);
    }

    #[test]
    fn test_extend_from_slice_matches_push() {
        let input: Vec<u32> = (0..11).collect();

        for capacity in 1..14 {
            let mut slow = RingBuffer::new(capacity);
            let mut fast = RingBuffer::new(capacity);
            slow.push([100, 101]);
            fast.push([100, 101]);

            slow.push(input.iter().copied());
            fast.extend_from_slice(&input);

            assert_eq!(slow.elements(), fast.elements(), "capacity {capacity}");
            assert_eq!(fast.youngest(), Some(&10));
        }
    }

    #[test]
    fn test_wraparound() {
        let mut rb = RingBuffer::new(4);

        for round in 0..10u64 {
            rb.push((0..3).map(|i| round * 3 + i));
            let last = round * 3 + 2;
            assert_eq!(rb.youngest(), Some(&last));
            assert!(rb.len() <= 4);
        }
        assert_eq!(rb.elements(), vec![26, 27, 28, 29]);
    }

    #[test]
    fn test_reset() {
        let mut rb = RingBuffer::new(2);
        rb.push(["a".to_string(), "b".to_string(), "c".to_string()]);

        rb.reset();
        assert!(rb.is_empty());
        assert_eq!(rb.oldest(), None);

        rb.push_one("d".to_string());
        assert_eq!(rb.elements(), vec!["d".to_string()]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = RingBuffer::new(3);
        original.push([1, 2, 3]);

        let mut copy = original.clone();
        copy.push_one(4);
        assert_eq!(original.elements(), vec![1, 2, 3]);
        assert_eq!(copy.elements(), vec![2, 3, 4]);

        original.reset();
        assert_eq!(copy.len(), 3);
        assert_eq!(copy.capacity(), 3);
    }

    #[test]
    fn test_elements_is_a_copy() {
        let mut rb = RingBuffer::new(2);
        rb.push([1, 2]);

        let mut snapshot = rb.elements();
        snapshot[0] = -1;
        assert_eq!(rb.oldest(), Some(&1));
    }

    #[test]
    fn test_serialize_oldest_first() {
        let mut rb = RingBuffer::new(3);
        rb.push([1, 2, 3, 4]);

        let json = serde_json::to_string(&rb).unwrap();
        assert_eq!(json, "[2,3,4]");
    }

    #[test]
    fn test_debug_lists_elements() {
        let mut rb = RingBuffer::new(2);
        rb.push([7, 8, 9]);

        assert_eq!(
            format!("{:?}", rb),
            "RingBuffer { capacity: 2, elements: [8, 9] }"
        );
    }
}

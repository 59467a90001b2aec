//! Event dispatcher sederhana yang thread-safe
//!
//! Listener yang mengembalikan `true` saat dipanggil akan dihapus
//! otomatis (one-shot listener).

use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::debug;

/// ID listener, dipakai untuk [`EventManager::remove`]
pub type ListenerId = u64;

type Listener<P> = Box<dyn FnMut(&P) -> bool + Send>;

struct Registry<P> {
    // BTreeMap: dispatch berjalan sesuai urutan registrasi
    listeners: BTreeMap<ListenerId, Listener<P>>,
    last_id: ListenerId,
}

/// Dispatcher callback untuk payload bertipe `P`.
///
/// Lock dipegang selama dispatch. Listener TIDAK boleh memanggil
/// `add`/`remove`/`dispatch` pada manager yang sama (deadlock).
pub struct EventManager<P> {
    registry: Mutex<Registry<P>>,
}

impl<P> EventManager<P> {
    pub fn new() -> Self {
        Self {
            registry: Mutex::new(Registry {
                listeners: BTreeMap::new(),
                last_id: 0,
            }),
        }
    }

    /// Mendaftarkan listener. ID dimulai dari 1 dan terus naik.
    pub fn add<F>(&self, callback: F) -> ListenerId
    where
        F: FnMut(&P) -> bool + Send + 'static,
    {
        let mut registry = self.registry.lock();
        registry.last_id += 1;
        let id = registry.last_id;
        registry.listeners.insert(id, Box::new(callback));
        id
    }

    /// Menghapus listener. Returns `false` jika ID tidak dikenal.
    pub fn remove(&self, id: ListenerId) -> bool {
        self.registry.lock().listeners.remove(&id).is_some()
    }

    /// Mengirim `payload` ke semua listener sesuai urutan registrasi.
    pub fn dispatch(&self, payload: &P) {
        let mut registry = self.registry.lock();
        registry.listeners.retain(|id, listener| {
            let done = listener(payload);
            if done {
                debug!(listener = id, "one-shot listener removed");
            }
            !done
        });
    }

    pub fn len(&self) -> usize {
        self.registry.lock().listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registry.lock().listeners.is_empty()
    }
}

impl<P> Default for EventManager<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> std::fmt::Debug for EventManager<P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let registry = self.registry.lock();
        f.debug_struct("EventManager")
            .field("listeners", &registry.listeners.len())
            .field("last_id", &registry.last_id)
            .finish()
    }
}

//! HashMap helpers
//!
//! Urutan iterasi `HashMap` tidak stabil, jadi hasil berbentuk `Vec`
//! juga tidak punya urutan tertentu.

use std::collections::HashMap;
use std::hash::Hash;

pub fn map_keys<K: Clone, V>(map: &HashMap<K, V>) -> Vec<K> {
    map.keys().cloned().collect()
}

pub fn map_values<K, V: Clone>(map: &HashMap<K, V>) -> Vec<V> {
    map.values().cloned().collect()
}

/// Memisahkan map menjadi `(keys, values)`. Index yang sama saling berpasangan.
pub fn split_key_value<K: Clone, V: Clone>(map: &HashMap<K, V>) -> (Vec<K>, Vec<V>) {
    map.iter().map(|(k, v)| (k.clone(), v.clone())).unzip()
}

/// Map baru dengan setiap key dilewatkan ke `transform`.
///
/// Tidak in-place: dua key yang menjadi sama setelah transform saling
/// menimpa, dan pemenangnya tidak ditentukan.
pub fn transform_map_keys<K, V, F>(map: HashMap<K, V>, transform: F) -> HashMap<K, V>
where
    K: Eq + Hash,
    F: Fn(K) -> K,
{
    map.into_iter().map(|(k, v)| (transform(k), v)).collect()
}

/// Mengubah setiap value in-place
pub fn transform_map_values<K, V, F>(map: &mut HashMap<K, V>, transform: F)
where
    F: Fn(&V) -> V,
{
    for value in map.values_mut() {
        *value = transform(value);
    }
}

/// Menggabungkan map sesuai urutan; key yang bentrok diambil dari map terakhir.
pub fn join_maps<K, V>(maps: &[&HashMap<K, V>]) -> HashMap<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    let mut joined = HashMap::new();
    for map in maps {
        joined.extend(map.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    joined
}

use std::sync::Mutex;
use taskzen_domain::{Entity, ID};

/// Useful functions for creating inmemory backend implementations

pub fn insert<T: Clone>(val: &T, collection: &Mutex<Vec<T>>) {
    let mut collection = collection.lock().unwrap();
    collection.push(val.clone());
}

pub fn find<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let collection = collection.lock().unwrap();
    collection.iter().find(|item| &item.id() == val_id).cloned()
}

pub fn find_all<T: Clone>(collection: &Mutex<Vec<T>>) -> Vec<T> {
    collection.lock().unwrap().clone()
}

pub fn delete<T: Clone + Entity>(val_id: &ID, collection: &Mutex<Vec<T>>) -> Option<T> {
    let mut collection = collection.lock().unwrap();
    let pos = collection.iter().position(|item| &item.id() == val_id)?;
    Some(collection.remove(pos))
}

pub fn update<T: Entity, F: FnMut(&mut T)>(
    val_id: &ID,
    collection: &Mutex<Vec<T>>,
    mut update: F,
) -> bool {
    let mut collection = collection.lock().unwrap();
    match collection.iter_mut().find(|item| &item.id() == val_id) {
        Some(item) => {
            update(item);
            true
        }
        None => false,
    }
}

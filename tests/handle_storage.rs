mod common;

use std::collections::HashSet;

use common::storage;
use handlestore::{Framebuffer, Handle, HandleStorage, Image, StorageError};

#[test]
fn growth_and_recycling_scenario() {
    let mut table: HandleStorage<Framebuffer, &str> = storage(2, 2);
    let a = table.insert_element("A").unwrap();
    let b = table.insert_element("B").unwrap();
    let c = table.insert_element("C").unwrap();
    assert!(table.capacity() >= 3);

    table.pop_element(b).unwrap();
    let d = table.insert_element("D").unwrap();

    assert_eq!(*table.get_element(a).unwrap(), "A");
    assert_eq!(*table.get_element(c).unwrap(), "C");
    assert_eq!(d.id(), b.id());
    assert!(d.generation() > b.generation());
    assert!(matches!(
        table.get_element(b),
        Err(StorageError::StaleHandle { .. })
    ));

    let alive: HashSet<_> = table.get_alive_data().into_iter().copied().collect();
    assert_eq!(alive, HashSet::from(["A", "C", "D"]));
}

#[test]
fn generations_strictly_increase_on_one_slot() {
    let mut table: HandleStorage<Image, u32> = storage(1, 1);
    let mut h = table.insert_element(0).unwrap();
    let mut seen = vec![h.generation()];

    for i in 1..200 {
        table.pop_element(h).unwrap();
        h = table.insert_element(i).unwrap();
        assert_eq!(h.id(), 0);
        seen.push(h.generation());
    }

    assert!(seen.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn alive_enumeration_excludes_exactly_the_popped_subset() {
    let mut table: HandleStorage<Image, u32> = storage(4, 4);
    let handles: Vec<_> = (0..50).map(|v| table.insert_element(v).unwrap()).collect();

    let popped: HashSet<u32> = (0..50).filter(|v| v % 3 == 0).collect();
    for v in &popped {
        assert_eq!(table.pop_element(handles[*v as usize]).unwrap(), *v);
    }

    let alive: Vec<u32> = table.get_alive_data().into_iter().copied().collect();
    let expected: Vec<u32> = (0..50).filter(|v| !popped.contains(v)).collect();
    assert_eq!(alive, expected);
    assert_eq!(table.len(), expected.len());
}

#[test]
fn handles_survive_many_growth_steps() {
    let mut table: HandleStorage<Image, String> = storage(2, 3);
    let handles: Vec<_> = (0..500)
        .map(|i| table.insert_element(format!("image {}", i)).unwrap())
        .collect();

    for (i, h) in handles.iter().enumerate() {
        assert_eq!(table.get_element(*h).unwrap(), &format!("image {}", i));
    }
}

#[test]
fn teardown_recovers_unreleased_values() {
    let mut table: HandleStorage<Framebuffer, u64> = storage(4, 4);
    let kept = table.insert_element(1).unwrap();
    let released = table.insert_element(2).unwrap();
    table.insert_element(3).unwrap();
    table.pop_element(released).unwrap();

    let mut destroyed = Vec::new();
    table.drain_alive(|_, raw| destroyed.push(raw));
    assert_eq!(destroyed, vec![1, 3]);

    assert!(table.is_empty());
    assert!(!table.contains(kept));
    assert_eq!(table.insert_element(9).unwrap(), Handle::new(0, 0));
}

#[test]
fn clear_after_alive_data_resets_ids() {
    let mut table: HandleStorage<Framebuffer, u64> = storage(2, 2);
    for raw in 0..5 {
        table.insert_element(raw).unwrap();
    }
    assert_eq!(table.get_alive_data().len(), 5);

    table.clear();
    let fresh = table.insert_element(42).unwrap();
    assert_eq!(fresh.id(), 0);
    assert_eq!(*table.get_element(fresh).unwrap(), 42);
}

#[test]
fn raw_handle_round_trips_through_untyped_storage() {
    let mut table: HandleStorage<Image, &str> = storage(2, 2);
    table.insert_element("swapchain").unwrap();
    let h = table.insert_element("depth").unwrap();

    let user_data: u32 = h.to_raw();
    let back = Handle::<Image>::from_raw(user_data);
    assert_eq!(*table.get_element(back).unwrap(), "depth");
}

use std::marker::PhantomData;

use super::category::HandleCategory;
use super::free_list::FreeList;
use super::handle::Handle;
use crate::{Result, StorageError};

/// Number of addressable slots with a 16-bit id.
pub const MAX_SLOTS: usize = u16::MAX as usize + 1;

/// Table configuration.
#[derive(Debug, Clone)]
pub struct StorageInfo<'a> {
    pub debug_name: &'a str,
    /// Slots reserved up front.
    pub initial_capacity: usize,
    /// Slots reserved each time the table runs out of room. Zero is treated as one.
    pub bump_size: usize,
}

impl<'a> Default for StorageInfo<'a> {
    fn default() -> Self {
        Self {
            debug_name: "",
            initial_capacity: 10,
            bump_size: 10,
        }
    }
}

struct Slot<T> {
    // Generation the payload was written at. Equal to `generation` exactly
    // while alive, behind it once freed or retired.
    data_generation: u16,
    generation: u16,
    data: Option<T>,
}

impl<T> Slot<T> {
    fn is_alive(&self) -> bool {
        self.data.is_some() && self.data_generation == self.generation
    }
}

/// Slot table mapping [`Handle`]s to values of type `T`.
///
/// Removing a value bumps its slot's generation, so every outstanding copy of
/// the old handle is rejected with [`StorageError::StaleHandle`] from then on.
/// Freed slots are reused most-recent-first. A slot whose generation would
/// wrap past `u16::MAX` is retired instead of reused.
///
/// The table never performs external cleanup of its payloads; owners of GPU
/// objects should drain them with [`HandleStorage::get_alive_data`] or
/// [`HandleStorage::drain_alive`] before [`HandleStorage::clear`].
pub struct HandleStorage<C, T> {
    name: String,
    slots: Vec<Slot<T>>,
    free: FreeList,
    bump_size: usize,
    alive: usize,
    retired: usize,
    phantom: PhantomData<fn() -> C>,
}

impl<C: HandleCategory, T> Default for HandleStorage<C, T> {
    fn default() -> Self {
        Self::new(&Default::default())
    }
}

impl<C: HandleCategory, T> HandleStorage<C, T> {
    pub fn new(info: &StorageInfo) -> Self {
        Self {
            name: info.debug_name.to_string(),
            slots: Vec::with_capacity(info.initial_capacity.min(MAX_SLOTS)),
            free: FreeList::default(),
            bump_size: info.bump_size.max(1),
            alive: 0,
            retired: 0,
            phantom: PhantomData,
        }
    }

    pub fn debug_name(&self) -> &str {
        &self.name
    }

    /// Stores `value` in the most recently freed slot, or appends a new slot,
    /// growing the table by the bump size when it is full.
    ///
    /// Fails only with [`StorageError::OutOfSlots`] once all 65536 ids are
    /// taken. Allocation failure while growing aborts.
    pub fn insert_element(&mut self, value: T) -> Result<Handle<C>> {
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.data_generation = slot.generation;
            slot.data = Some(value);
            self.alive += 1;

            log::trace!(
                "[{}] reusing {} slot {} at generation {}",
                self.name,
                C::NAME,
                index,
                slot.generation
            );
            return Ok(Handle::new(index, slot.generation));
        }

        let index = self.slots.len();
        if index >= MAX_SLOTS {
            return Err(StorageError::OutOfSlots {
                category: C::NAME,
                slots: index,
            });
        }

        if index == self.slots.capacity() {
            let bump = self.bump_size.min(MAX_SLOTS - index);
            self.slots.reserve_exact(bump);
            log::trace!(
                "[{}] growing {} table by {} slots (capacity {})",
                self.name,
                C::NAME,
                bump,
                self.slots.capacity()
            );
        }

        self.slots.push(Slot {
            data_generation: 0,
            generation: 0,
            data: Some(value),
        });
        self.alive += 1;

        Ok(Handle::new(index as u16, 0))
    }

    /// Borrows the value behind `handle`.
    pub fn get_element(&self, handle: Handle<C>) -> Result<&T> {
        self.slots
            .get(handle.slot())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.data.as_ref())
            .ok_or_else(|| Self::stale(handle))
    }

    pub fn get_element_mut(&mut self, handle: Handle<C>) -> Result<&mut T> {
        self.slots
            .get_mut(handle.slot())
            .filter(|slot| slot.generation == handle.generation())
            .and_then(|slot| slot.data.as_mut())
            .ok_or_else(|| Self::stale(handle))
    }

    pub fn contains(&self, handle: Handle<C>) -> bool {
        self.slots
            .get(handle.slot())
            .map_or(false, |slot| {
                slot.generation == handle.generation() && slot.is_alive()
            })
    }

    /// Removes the value behind `handle` and hands ownership back to the
    /// caller, who is now responsible for any external cleanup.
    ///
    /// Every copy of `handle` is stale afterwards.
    pub fn pop_element(&mut self, handle: Handle<C>) -> Result<T> {
        let slot = self
            .slots
            .get_mut(handle.slot())
            .filter(|slot| slot.generation == handle.generation())
            .ok_or_else(|| Self::stale(handle))?;
        let data = slot.data.take().ok_or_else(|| Self::stale(handle))?;
        self.alive -= 1;

        match slot.generation.checked_add(1) {
            Some(next) => {
                slot.generation = next;
                self.free.push(handle.id());
            }
            None => {
                slot.data_generation = slot.generation.wrapping_sub(1);
                self.retired += 1;
                log::warn!(
                    "[{}] {} slot {} exhausted its generations and is retired",
                    self.name,
                    C::NAME,
                    handle.id()
                );
            }
        }

        Ok(data)
    }

    /// Every alive value, in slot order.
    pub fn get_alive_data(&self) -> Vec<&T> {
        self.slots
            .iter()
            .filter(|slot| slot.is_alive())
            .filter_map(|slot| slot.data.as_ref())
            .collect()
    }

    /// Alive values paired with their current handles, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Handle<C>, &T)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_alive())
            .filter_map(|(index, slot)| {
                slot.data
                    .as_ref()
                    .map(|data| (Handle::new(index as u16, slot.generation), data))
            })
    }

    pub fn alive_handles(&self) -> Vec<Handle<C>> {
        self.iter().map(|(handle, _)| handle).collect()
    }

    /// Moves every alive value out to `func` in slot order, then clears the
    /// table.
    ///
    /// The table is emptied before `func` runs, so a panicking callback leaves
    /// it empty and usable. Values not yet handed out are dropped.
    pub fn drain_alive<F>(&mut self, mut func: F)
    where
        F: FnMut(Handle<C>, T),
    {
        let slots = std::mem::take(&mut self.slots);
        self.free.clear();
        self.alive = 0;
        self.retired = 0;

        for (index, slot) in slots.into_iter().enumerate() {
            if !slot.is_alive() {
                continue;
            }
            if let Some(data) = slot.data {
                func(Handle::new(index as u16, slot.generation), data);
            }
        }
    }

    /// Forgets every slot and free index. Issued handles become meaningless
    /// and the next insert gets id 0.
    ///
    /// Values still alive are dropped without any external cleanup.
    pub fn clear(&mut self) {
        if self.alive > 0 {
            log::warn!(
                "[{}] clearing {} table with {} live values",
                self.name,
                C::NAME,
                self.alive
            );
        }
        self.free.clear();
        self.slots.clear();
        self.alive = 0;
        self.retired = 0;
    }

    /// Number of alive values.
    pub fn len(&self) -> usize {
        self.alive
    }

    pub fn is_empty(&self) -> bool {
        self.alive == 0
    }

    /// Slots ever handed out since the last clear, alive or not.
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    pub fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn retired_count(&self) -> usize {
        self.retired
    }

    fn stale(handle: Handle<C>) -> StorageError {
        log::debug!("rejected stale {:?}", handle);
        StorageError::StaleHandle {
            category: C::NAME,
            id: handle.id(),
            generation: handle.generation(),
        }
    }
}

/// LIFO pool of recycled slot indices. The most recently freed slot is handed
/// out first.
#[derive(Debug, Default, Clone)]
pub(crate) struct FreeList {
    indices: Vec<u16>,
}

impl FreeList {
    pub(crate) fn push(&mut self, index: u16) {
        self.indices.push(index);
    }

    pub(crate) fn pop(&mut self) -> Option<u16> {
        self.indices.pop()
    }

    pub(crate) fn len(&self) -> usize {
        self.indices.len()
    }

    pub(crate) fn clear(&mut self) {
        self.indices.clear();
    }
}

//! Growable ring buffer with cheap windowed rotation.
//!
//! Backs the ordered sequence of a DEPQ. Elements live in a slot array and a
//! `head` index marks the logical front; the logical window wraps around the
//! end of the array. Pushing at either end never shifts existing elements,
//! and rotating by `k` moves at most `min(k, len - k)` elements (zero when
//! the ring is full, since only `head` has to move).
//!
//! ## Architecture
//!
//! ```text
//!   slots: Vec<Option<T>>   (capacity 8, len 5)
//!
//!     0     1     2     3     4     5     6     7
//!   ┌─────┬─────┬─────┬─────┬─────┬─────┬─────┬─────┐
//!   │  D  │  E  │  -  │  -  │  -  │  A  │  B  │  C  │
//!   └─────┴─────┴─────┴─────┴─────┴─────┴─────┴─────┘
//!                                    ▲
//!                                   head
//!
//!   logical view: [A, B, C, D, E]
//!
//!   rotate_left(2):  A, B move behind E      → [C, D, E, A, B]
//!   rotate_right(1): E moves in front of A   → [E, A, B, C, D]
//! ```
//!
//! ## Performance Characteristics
//!
//! | Operation                   | Time            | Notes                              |
//! |-----------------------------|-----------------|------------------------------------|
//! | `push_front` / `push_back`  | O(1) amort.     | Doubles capacity when full         |
//! | `pop_front` / `pop_back`    | O(1)            |                                    |
//! | `get`                       | O(1)            | Logical index                      |
//! | `rotate_left/right(k)`      | O(min(k, n-k))  | O(1) when `len == capacity`        |
//! | `remove(index)`             | O(min(i, n-i))  | Shifts the shorter side            |
//!
//! ## Notes
//! - Slots are `Option<T>`; no `unsafe` code.
//! - `debug_validate_invariants()` is available in debug/test builds.

const MIN_CAPACITY: usize = 4;

/// Double-ended ring buffer supporting O(k) rotation of its logical window.
#[derive(Debug, Clone)]
pub struct RotatingRing<T> {
    slots: Vec<Option<T>>,
    head: usize,
    len: usize,
}

impl<T> Default for RotatingRing<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RotatingRing<T> {
    /// Creates an empty ring without allocating.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            head: 0,
            len: 0,
        }
    }

    /// Creates an empty ring with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, || None);
        Self {
            slots,
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the ring holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots currently allocated.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Maps a logical index to its physical slot.
    #[inline]
    fn physical(&self, index: usize) -> usize {
        let cap = self.slots.len();
        let pos = self.head + index;
        if pos >= cap { pos - cap } else { pos }
    }

    /// Returns the element at logical `index`, if in bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.physical(index)].as_ref()
    }

    /// Returns the front element.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    /// Returns the back element.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    /// Pushes `value` in front of the current front element.
    pub fn push_front(&mut self, value: T) {
        self.grow_if_full();
        let cap = self.slots.len();
        self.head = if self.head == 0 { cap - 1 } else { self.head - 1 };
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    /// Pushes `value` behind the current back element.
    pub fn push_back(&mut self, value: T) {
        self.grow_if_full();
        let idx = self.physical(self.len);
        self.slots[idx] = Some(value);
        self.len += 1;
    }

    /// Removes and returns the front element.
    pub fn pop_front(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = self.physical(1);
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        value
    }

    /// Removes and returns the back element.
    pub fn pop_back(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        let idx = self.physical(self.len - 1);
        self.len -= 1;
        let value = self.slots[idx].take();
        if self.len == 0 {
            self.head = 0;
        }
        value
    }

    /// Rotates the logical window left by `k`: the first `k` elements move
    /// to the back, preserving their order.
    pub fn rotate_left(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        if k > self.len / 2 {
            self.shift_back_to_front(self.len - k);
        } else {
            self.shift_front_to_back(k);
        }
    }

    /// Rotates the logical window right by `k`: the last `k` elements move
    /// to the front, preserving their order.
    pub fn rotate_right(&mut self, k: usize) {
        if self.len == 0 {
            return;
        }
        let k = k % self.len;
        if k > self.len / 2 {
            self.shift_front_to_back(self.len - k);
        } else {
            self.shift_back_to_front(k);
        }
    }

    fn shift_front_to_back(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        let cap = self.slots.len();
        if self.len == cap {
            self.head = (self.head + k) % cap;
            return;
        }
        for _ in 0..k {
            let tail = self.physical(self.len);
            let value = self.slots[self.head].take();
            self.slots[tail] = value;
            self.head = self.physical(1);
        }
    }

    fn shift_back_to_front(&mut self, k: usize) {
        if k == 0 {
            return;
        }
        let cap = self.slots.len();
        if self.len == cap {
            self.head = (self.head + cap - k % cap) % cap;
            return;
        }
        for _ in 0..k {
            let last = self.physical(self.len - 1);
            let value = self.slots[last].take();
            self.head = if self.head == 0 { cap - 1 } else { self.head - 1 };
            self.slots[self.head] = value;
        }
    }

    /// Removes the element at logical `index`, keeping the relative order of
    /// every remaining element. Shifts whichever side of `index` is shorter.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }
        let physical = self.physical(index);
        let removed = self.slots[physical].take();
        if index < self.len / 2 {
            // close the gap from the front
            for i in (0..index).rev() {
                let from = self.physical(i);
                let to = self.physical(i + 1);
                self.slots[to] = self.slots[from].take();
            }
            self.head = self.physical(1);
        } else {
            for i in index + 1..self.len {
                let from = self.physical(i);
                let to = self.physical(i - 1);
                self.slots[to] = self.slots[from].take();
            }
        }
        self.len -= 1;
        if self.len == 0 {
            self.head = 0;
        }
        removed
    }

    /// Drops every element, keeping the allocation.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }

    /// Reserves room for at least `additional` more elements.
    pub fn reserve(&mut self, additional: usize) {
        let needed = self.len + additional;
        if needed > self.slots.len() {
            self.relayout(needed);
        }
    }

    /// Returns an iterator over the elements from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            ring: self,
            front: 0,
            back: self.len,
        }
    }

    fn grow_if_full(&mut self) {
        if self.len == self.slots.len() {
            let new_cap = (self.slots.len() * 2).max(MIN_CAPACITY);
            self.relayout(new_cap);
        }
    }

    /// Moves the logical window to the start of a fresh slot array.
    fn relayout(&mut self, new_cap: usize) {
        let mut slots = Vec::with_capacity(new_cap);
        for i in 0..self.len {
            let idx = self.physical(i);
            slots.push(self.slots[idx].take());
        }
        slots.resize_with(new_cap, || None);
        self.slots = slots;
        self.head = 0;
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        assert!(self.len <= self.slots.len());
        if self.slots.is_empty() {
            assert_eq!(self.head, 0);
        } else {
            assert!(self.head < self.slots.len());
        }
        let occupied = self.slots.iter().filter(|slot| slot.is_some()).count();
        assert_eq!(occupied, self.len);
        for i in 0..self.len {
            assert!(self.slots[self.physical(i)].is_some());
        }
    }
}

impl<T> FromIterator<T> for RotatingRing<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut slots: Vec<Option<T>> = iter.into_iter().map(Some).collect();
        let len = slots.len();
        if slots.capacity() > len {
            slots.resize_with(slots.capacity(), || None);
        }
        Self {
            slots,
            head: 0,
            len,
        }
    }
}

/// Front-to-back iterator over a [`RotatingRing`].
#[derive(Debug, Clone)]
pub struct Iter<'a, T> {
    ring: &'a RotatingRing<T>,
    front: usize,
    back: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let item = self.ring.get(self.front);
        self.front += 1;
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.ring.get(self.back)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a RotatingRing<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

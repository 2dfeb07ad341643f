use std::cell::Cell;
use std::ops;


// Value with a change flag. Lets the board avoid redundant visual writes: the renderer only gets
// an update when the value actually changed since the last `take_dirt`.
#[derive(Clone, Debug)]
pub struct Dirty<T> {
    value: T,
    dirty: Cell<bool>,
}

impl<T> Dirty<T> {
    pub fn new(value: T) -> Self { Self { value, dirty: Cell::new(false) } }

    pub fn take_dirt(&self) -> bool { self.dirty.replace(false) }
}

impl<T: PartialEq> Dirty<T> {
    pub fn set(&mut self, value: T) {
        if self.value != value {
            self.value = value;
            self.dirty.set(true);
        }
    }
}

impl<T> ops::Deref for Dirty<T> {
    type Target = T;
    fn deref(&self) -> &Self::Target { &self.value }
}
// Don't implement `DerefMut`: every write must go through `set`.

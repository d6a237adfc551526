//! Identifiers for objects and classes.
//! ObjectID is generational: u64 = index (low 32 bits) | generation (high 32 bits). Index 0 = nil.
//! IDs are handed out by the owning arena; reusing a slot bumps its generation so stale IDs stop resolving.

use std::fmt;

pub const fn string_to_u64(s: &str) -> u64 {
    let mut hash: u64 = 0xA0761D6478BD642F;
    let bytes = s.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        hash ^= bytes[i] as u64;
        hash = hash.wrapping_mul(0xE7037ED1A0B428DB);
        hash = mix64(hash);
        i += 1;
    }

    mix64(hash ^ (bytes.len() as u64))
}

pub const fn mix64(mut x: u64) -> u64 {
    x ^= x >> 30;
    x = x.wrapping_mul(0xBF58476D1CE4E5B9);
    x ^= x >> 27;
    x = x.wrapping_mul(0x94D049BB133111EB);
    x ^= x >> 31;
    x
}

/// Handle to an object living in a host arena. Index + generation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectID(u64);

impl ObjectID {
    #[inline]
    pub const fn nil() -> Self {
        Self(0)
    }

    #[inline]
    pub const fn from_parts(index: u32, generation: u32) -> Self {
        Self((index as u64) | ((generation as u64) << 32))
    }

    #[inline]
    pub const fn index(self) -> u32 {
        (self.0 & 0xFFFF_FFFF) as u32
    }

    #[inline]
    pub const fn generation(self) -> u32 {
        (self.0 >> 32) as u32
    }

    #[inline]
    pub const fn is_nil(self) -> bool {
        self.index() == 0
    }

    /// Same slot, next generation. Wraps at u32::MAX.
    #[inline]
    pub const fn next_generation(self) -> Self {
        Self::from_parts(self.index(), self.generation().wrapping_add(1))
    }
}

impl Default for ObjectID {
    fn default() -> Self {
        Self::nil()
    }
}

impl fmt::Debug for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectID({}:{})", self.index(), self.generation())
    }
}

impl fmt::Display for ObjectID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.index(), self.generation())
    }
}

/// Class identity, hashed from the class name. Stable across runs.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
pub struct ClassID(pub u64);

impl ClassID {
    pub const fn from_name(name: &str) -> Self {
        Self(string_to_u64(name))
    }
}

// Pattern 2: Singleton with OnceLock
// One instance per process, reached through `Singleton::get_instance()`.
// `Singleton::try_new()` is the checked constructor: it only succeeds while the
// cell is still empty.

use crate::console::Console;
use crate::error::SingletonError;
use std::io::{self, Write};
use std::sync::OnceLock;
use std::time::Instant;

/// Initialize-once storage for a single value.
///
/// `OnceLock` makes check-then-create atomic, so two racing initializers can
/// never both win.
pub struct InstanceCell<T> {
    slot: OnceLock<T>,
}

impl<T> InstanceCell<T> {
    pub const fn new() -> Self {
        Self {
            slot: OnceLock::new(),
        }
    }

    /// Accessor semantics: returns the stored value, creating it on first call.
    pub fn get_or_init(&self, init: impl FnOnce() -> T) -> &T {
        self.slot.get_or_init(init)
    }

    /// Direct construction: stores `value` only if nothing is stored yet.
    pub fn try_init(&self, value: T) -> Result<&T, SingletonError> {
        self.slot
            .set(value)
            .map_err(|_| SingletonError::AlreadyExists)?;
        self.slot.get().ok_or(SingletonError::AlreadyExists)
    }

    pub fn get(&self) -> Option<&T> {
        self.slot.get()
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.get().is_some()
    }
}

impl<T> Default for InstanceCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

static INSTANCE: InstanceCell<Singleton> = InstanceCell::new();

#[derive(Debug)]
pub struct Singleton {
    created_at: Instant,
}

impl Singleton {
    fn construct() -> Self {
        Self {
            created_at: Instant::now(),
        }
    }

    pub fn get_instance() -> &'static Singleton {
        INSTANCE.get_or_init(Self::construct)
    }

    /// Fails with `AlreadyExists` once any instance is stored. On success the
    /// new value becomes the one `get_instance()` hands out.
    pub fn try_new() -> Result<&'static Singleton, SingletonError> {
        INSTANCE.try_init(Self::construct())
    }

    pub fn is_initialized() -> bool {
        INSTANCE.is_initialized()
    }

    pub fn created_at(&self) -> Instant {
        self.created_at
    }
}

/// Two accessor calls, an identity check, then a direct construction attempt.
pub fn run_demo<W: Write>(console: &mut Console<W>) -> io::Result<()> {
    let s1 = Singleton::get_instance();
    let s2 = Singleton::get_instance();

    if std::ptr::eq(s1, s2) {
        console.line("Singleton works, both variables contain the same instance.")?;
    } else {
        console.line("Singleton failed, variables contain different instances.")?;
    }

    match Singleton::try_new() {
        Ok(_) => console.line("Singleton failed, a new instance was created."),
        Err(e) => console.error(e),
    }
}

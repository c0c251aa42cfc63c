//! # Synchronization Utilities
//!
//! Consistent lock handling for the few pieces of shared state in
//! charm_text: the process-wide [`StyleRegistry`](crate::theme::StyleRegistry)
//! and the [`StyledLogger`](crate::logging::StyledLogger) output sink.
//!
//! ## Poison policy
//!
//! A lock becomes poisoned when a thread panics while holding it. Both
//! guarded values stay usable afterwards: the registry is only ever swapped
//! for a complete copy, and a half-written log line is cosmetic. So every
//! acquisition recovers the inner value instead of propagating the poison,
//! logging a warning in debug builds.
//!
//! | Scenario | Function |
//! |----------|----------|
//! | Mutex | [`lock_recover`] |
//! | RwLock read | [`read_recover`] |
//! | RwLock write | [`write_recover`] |
//! | Test code | `.lock().unwrap()` (fail fast) |
//!
//! ```rust
//! use std::sync::Mutex;
//! use charm_text::sync::lock_recover;
//!
//! let data = Mutex::new(vec![1, 2, 3]);
//! let guard = lock_recover(&data);
//! assert_eq!(guard.len(), 3);
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Lock a mutex, recovering from poison if necessary.
///
/// # Panics
///
/// This function never panics. It always recovers from poison.
#[inline]
pub fn lock_recover<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        log::warn!("charm_text::sync: mutex poison recovered");
        e.into_inner()
    })
}

/// Acquire a read lock on an `RwLock`, recovering from poison if necessary.
#[inline]
pub fn read_recover<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        log::warn!("charm_text::sync: rwlock read poison recovered");
        e.into_inner()
    })
}

/// Acquire a write lock on an `RwLock`, recovering from poison if necessary.
#[inline]
pub fn write_recover<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(|e| {
        #[cfg(debug_assertions)]
        log::warn!("charm_text::sync: rwlock write poison recovered");
        PoisonError::into_inner(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_lock_recover_normal() {
        let mutex = Mutex::new(42);
        assert_eq!(*lock_recover(&mutex), 42);
    }

    #[test]
    fn test_lock_recover_after_poison() {
        let mutex = Arc::new(Mutex::new(vec![1, 2, 3]));
        let poisoner = Arc::clone(&mutex);

        let result = thread::spawn(move || {
            let mut guard = poisoner.lock().unwrap();
            guard.push(4);
            panic!("poison the mutex");
        })
        .join();
        assert!(result.is_err());
        assert!(mutex.is_poisoned());

        let guard = lock_recover(&mutex);
        assert_eq!(*guard, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_rwlock_recover_after_poison() {
        let lock = Arc::new(RwLock::new(String::from("before")));
        let poisoner = Arc::clone(&lock);

        let result = thread::spawn(move || {
            let mut guard = poisoner.write().unwrap();
            guard.push_str(" during");
            panic!("poison the rwlock");
        })
        .join();
        assert!(result.is_err());

        assert_eq!(*read_recover(&lock), "before during");
        write_recover(&lock).push_str(" after");
        assert_eq!(*read_recover(&lock), "before during after");
    }
}

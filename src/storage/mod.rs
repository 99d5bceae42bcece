//! Filesystem concerns
//!
//! The only persisted artifact with update semantics is the requirements
//! file itself; everything else is write-once output. Updates go through
//! [`write_atomic`] so the file is never observed half-written.

mod atomic;

pub use atomic::write_atomic;

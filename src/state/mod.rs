//! Pure per-component page state.
//!
//! DESIGN
//! ======
//! Each behavior on the page owns a small model here with no browser
//! dependency. [`crate::page::PageCore`] composes them and the hydrate-only
//! `dom` layer applies the results, so everything in this tree is testable
//! natively.

pub mod carousel;
pub mod counter;
pub mod nav;
pub mod quote;
pub mod reveal;
pub mod scroll;
pub mod theme;

//! State machines behind every interactive piece of the site.
//!
//! Nothing in here touches the DOM. Components in `crate::components` own a
//! controller through [`crate::driver::Driver`], forward browser events as
//! messages and render from the controller's state.

use crate::timer::Scheduler;

pub mod accordion;
pub mod contact;
pub mod gallery;
pub mod lightbox;
pub mod nav;
pub mod notify;
pub mod placeholder;
pub mod slider;
pub mod theme;

pub trait Controller: 'static {
    type Msg: Clone + 'static;

    /// Apply `msg`. Returns `true` when the view has to re-render.
    fn update(&mut self, msg: Self::Msg, timers: &mut dyn Scheduler<Self::Msg>) -> bool;
}

/// Wrap any integer into `0..len`, negative values included.
/// `len` must be non-zero.
pub fn wrap_index(i: isize, len: usize) -> usize {
    i.rem_euclid(len as isize) as usize
}

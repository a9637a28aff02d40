//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and focuses on the drag math and state. This crate
//! provides small, framework-neutral helpers commonly needed by adapters:
//!
//! - Trailing debounce for viewport resize bursts
//! - Listener bookkeeping with explicit teardown
//! - An event-driven `Controller` tying the two to a `Carousel`
//! - The two-step popup list toggle that ships alongside the carousel
//!
//! This crate is intentionally framework-agnostic (no web-sys/winit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod bindings;
mod controller;
mod debounce;
mod popup;
mod resize;

#[cfg(test)]
mod tests;

pub use bindings::{
    Binding, Bindings, EventHost, EventKind, EventTarget, LIFETIME_LISTENERS, ListenerId,
};
pub use controller::{Controller, Event};
pub use debounce::Debouncer;
pub use popup::{ClassTarget, PopupClasses, PopupPart, PopupStep, PopupStepToggle};
pub use resize::ResizeAdapter;

//! Core, DOM-free page model.
pub mod actions;
pub mod contact;
pub mod filter;
pub mod menu;
pub mod nav;
pub mod page;
pub mod schedule;
pub mod skills;
pub mod theme;
pub mod toast;
pub mod typing;
pub mod visibility;

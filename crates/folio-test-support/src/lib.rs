#![forbid(unsafe_code)]
#![warn(
    unused,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers for the page controller.
//! Layout: fixtures.rs (sample pages and form input), clock.rs (virtual timer host).

pub mod clock;
pub mod fixtures;

//! Pure widget state and the ports each widget talks to.
//!
//! DESIGN
//! ======
//! Each widget keeps its decisions here, free of `web-sys`, so behavior is
//! tested natively. The `dom` layer only translates browser events into the
//! event types below and writes the resulting state back to the page.

pub mod contact;
pub mod expandable;
pub mod greeting;
pub mod skills;
pub mod theme;

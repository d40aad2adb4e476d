//! # Checklist Module
//!
//! The client-side synchronization workflow between the checker backend and
//! the rendered checklist:
//!
//! ```text
//! start ──► load_groups ──► render ──► toggle ──► update_check
//!               ▲                                     │
//!               └──────────── on success ◄────────────┘
//!                     on failure: roll back the checkbox
//! ```
//!
//! - [`ChecklistController`] owns all state: the snapshot and link table
//!   ([`ChecklistState`]), the group dropdown ([`GroupFilter`]), what is on
//!   screen ([`RenderedList`]), the message slot ([`NoticeBoard`]) and the
//!   nickname gate.
//! - `loader` fetches groups then links and replaces the snapshot.
//! - `render` projects a set of groups into numbered, checkable entries.
//! - `toggle` is the optimistic update with rollback.
//!
//! Filtering only re-renders from the in-memory snapshot. Every failure is
//! logged and surfaced as a notice; none of them is fatal.

mod controller;
mod filter;
mod loader;
mod notice;
mod render;
mod state;
mod toggle;

pub use controller::ChecklistController;
pub use filter::{ALL_GROUPS, GroupFilter, GroupSelection};
pub use notice::{
    MSG_LOAD_FAILED, MSG_UPDATE_FAILED, MSG_UPDATE_OK, Notice, NoticeBoard, NoticeKind,
};
pub use render::{RenderedEntry, RenderedGroup, RenderedList, ToggleControl, render};
pub use state::{ChecklistState, LoadTicket};
pub use toggle::{ToggleEvent, ToggleOutcome};

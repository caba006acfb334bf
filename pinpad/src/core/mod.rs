//! Core module for the pinpad desk
//!
//! Components:
//! - KeyStore / MemoryStore / FileStore: scoped session storage
//! - SessionStore: authenticated manager context
//! - Roster: cached employee directory snapshot
//! - policy / gate: PIN format rules and authorization checks
//! - NoticeBoard: transient outcome notifications
//! - PinDesk: drives a PIN change end to end

pub mod desk;
pub mod draft;
pub mod error;
pub mod gate;
pub mod notice;
pub mod policy;
pub mod roster;
pub mod session;
pub mod store;

pub use desk::{PinDesk, Screen};
pub use draft::{PinDraft, Toggle};
pub use error::ChangeError;
pub use notice::{Notice, NoticeBoard};
pub use policy::{MANAGER_LEVEL, PinPolicy};
pub use roster::{Roster, RosterEntry};
pub use session::{SessionContext, SessionStore, StoredCredential};
pub use store::{FileStore, KeyStore, MemoryStore, Scope, StoreError};

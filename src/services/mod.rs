//! Domain services — the mutations and listings behind the page routes.

pub mod catfish;
pub mod consultant;
pub mod poultry;

use time::{Date, OffsetDateTime};

/// Current UTC date. Quick actions and form defaults stamp records with this.
#[must_use]
pub fn today_utc() -> Date {
    OffsetDateTime::now_utc().date()
}

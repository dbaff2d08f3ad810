//! Ticket domain: achievement problem reports.
//!
//! Every ticket query goes to `API_GetTicketData.php`; the parameter set
//! selects the view.

pub mod client;

pub(crate) const PAGE_COUNT: u32 = 10;

//! Remote operation surface.
//!
//! One async method per backend operation, grouped by resource. Bodies
//! in are anything serializable; bodies out are the backend's JSON,
//! passed through without client-side schema validation.

mod advertisements;
mod checkout;
mod orders;
mod products;
mod users;
mod watchlist;

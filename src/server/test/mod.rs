//! End-to-end tests driving the public HTTP handlers against an in-memory database.

mod reservation_flow;
mod util;

// handlers/mod.rs - Handlers grouped by access tier
//
// Public (no token) → Protected (any valid token) → Teacher (role check)
// → Admin (admin flag check). Routing and middleware live in app.rs.

pub mod admin;
pub mod protected;
pub mod public;
pub mod teacher;

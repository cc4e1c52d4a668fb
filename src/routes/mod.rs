pub mod admin;

pub mod assignments;

pub mod auth;

pub mod submissions;

pub use admin::configure_admin_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use submissions::configure_submissions_routes;

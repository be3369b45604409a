//! Reusable UI components

pub mod auth_layout;
pub mod spinner;

pub use auth_layout::AuthLayout;
pub use spinner::LoadingSpinner;

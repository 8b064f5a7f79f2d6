//! Authentication service layer.
//!
//! Signup creates accounts that stay inactive until a superuser approves them, login refuses
//! those pending accounts with a message distinct from a credential mismatch.

pub mod login;
pub mod signup;

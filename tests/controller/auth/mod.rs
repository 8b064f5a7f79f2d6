//! Tests for the signup, login, logout and current user endpoints.

mod login;
mod logout;
mod signup;
mod user;

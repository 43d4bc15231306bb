//! Session state, login flow and role routing

mod login;
mod redirect;
mod role;
mod session;

pub use login::*;
pub use redirect::*;
pub use role::*;
pub use session::*;

#[cfg(test)]
pub(crate) use session::memory;

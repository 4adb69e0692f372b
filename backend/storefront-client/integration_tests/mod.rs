mod error;
mod helpers;
mod password_reset;
mod product;
mod session;

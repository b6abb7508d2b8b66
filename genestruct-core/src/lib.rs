pub mod alphabets;
pub mod diff;
pub mod error;
pub mod io;
pub mod seq;

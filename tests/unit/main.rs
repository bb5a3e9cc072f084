//! Unit tests, one file per source module

mod algorithm;
mod io;

pub mod derived;
pub mod domain;
pub mod model;
pub mod modifier;
pub mod print;
pub mod scoregrid;
pub mod strength;
pub mod verdict;

#[doc = include_str!("../README.md")]
#[cfg(doc)]
fn readme() {}

pub mod common;

mod resolver;

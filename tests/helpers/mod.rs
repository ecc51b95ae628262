#![allow(dead_code)]

pub mod comment_scanner;
pub mod model_assertions;
pub mod source_fixtures;

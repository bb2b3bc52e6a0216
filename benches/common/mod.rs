#![allow(dead_code)]
pub mod curves;
pub mod samples;

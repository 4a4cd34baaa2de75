pub mod averager;
pub mod loader;
pub mod report;
pub mod solar;

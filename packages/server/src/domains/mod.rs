// Business domains

pub mod driver;

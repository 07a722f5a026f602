pub mod category;
pub mod manufacturer;
pub mod product;
pub mod supplier;

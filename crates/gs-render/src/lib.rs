pub mod paint;

pub use paint::paint_ops;

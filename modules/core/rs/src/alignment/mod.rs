pub use alignable::{Alignable, Reversed, Window};

pub mod alignable;

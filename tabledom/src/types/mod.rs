mod enums;

pub use enums::Tag;

pub mod imgflip;
pub mod random;

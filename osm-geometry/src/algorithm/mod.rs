pub mod assembly;
pub mod attributes;
pub mod conversion;
pub mod normalize;
pub mod trace;

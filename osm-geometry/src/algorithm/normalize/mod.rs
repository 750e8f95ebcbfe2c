pub mod normalize_ops;

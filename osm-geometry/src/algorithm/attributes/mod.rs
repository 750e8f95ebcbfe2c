pub mod attribute_ops;

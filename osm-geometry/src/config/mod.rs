mod conversion;

pub use conversion::ConversionConfiguration;

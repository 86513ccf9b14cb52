mod watermark_source;

pub use watermark_source::KafkaWatermarkSource;

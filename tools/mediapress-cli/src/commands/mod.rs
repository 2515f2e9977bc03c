pub mod codecs;
pub mod export;

//! SPI bus implementations

mod bitbang;

pub use bitbang::BitBangSpi;

//! Serial line receivers

mod soft_uart;

pub use soft_uart::SoftUart;

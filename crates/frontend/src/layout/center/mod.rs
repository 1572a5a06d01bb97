pub mod center;

pub use center::ContentArea;

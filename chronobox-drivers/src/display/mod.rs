//! Seven-segment display drivers

pub mod segments;
pub mod tm1637;

pub use tm1637::Tm1637;

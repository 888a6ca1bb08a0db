pub mod dump;
pub mod roundtrip;
pub mod write;

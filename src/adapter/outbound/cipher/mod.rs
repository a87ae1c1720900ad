//! Cipher adapters implementing [`Cipher`](crate::port::outbound::cipher::Cipher).

pub mod chacha;

//! Kiosk player
//!
//! Assembles an embeddable content page: content metadata plus the
//! script and stylesheet assets contributed by installed extensions,
//! rendered as an iframe or inline div embed.

pub mod markup;
pub mod player;

pub use player::Player;

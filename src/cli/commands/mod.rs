pub mod down;
pub mod ls;
pub mod out;
pub mod stats;
pub mod up;

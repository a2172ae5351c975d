pub mod background;
pub mod bubble_field;
pub mod emblem;
pub mod herb_field;
pub mod pulses;

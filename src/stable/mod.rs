// Decorate, sort the decorations, undecorate. Every key is resolved exactly once.
pub mod rust_std_keyed;

// Normalize every record into an owned copy that carries the key, then comparator sort.
pub mod rust_normalized;

pub mod ptr_lookup;

pub use ptr_lookup::PtrLookup;

mod result_sink;
mod reverse_lookup;

pub use result_sink::ResultSink;
pub use reverse_lookup::ReverseLookup;

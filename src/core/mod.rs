pub mod combiner;
pub mod pattern_matcher;
pub mod selector;

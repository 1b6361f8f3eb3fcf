mod text_list;

pub use text_list::{ListPaths, TextListSink, TextListSource};

mod line_writer;

pub use line_writer::LineWriter;

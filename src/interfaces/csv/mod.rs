pub mod key_reader;
pub mod trace_writer;

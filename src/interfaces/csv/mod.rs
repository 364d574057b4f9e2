pub mod decision_writer;
pub mod request_reader;

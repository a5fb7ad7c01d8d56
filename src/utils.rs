pub mod label_formatter;

pub mod invoice_reader;

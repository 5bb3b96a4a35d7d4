pub mod aggregate;
pub mod cell;
pub mod cli;
pub mod columns;
pub mod dictionary;
pub mod discovery;
pub mod error;
pub mod grid;
pub mod header;
pub mod location;
pub mod options;
pub mod parser;
pub mod policy;
pub mod report;
pub mod rows;

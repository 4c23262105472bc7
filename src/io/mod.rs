//! IO module for reading sampling frames and writing export artifacts

pub mod csv;

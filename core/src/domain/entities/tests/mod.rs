//! Unit tests for verification result entities

mod response_tests;
mod document_tests;

//! Context test modules

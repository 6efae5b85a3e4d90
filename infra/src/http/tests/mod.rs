//! HTTP transport test modules

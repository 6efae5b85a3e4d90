//! Session test modules

mod service_tests;

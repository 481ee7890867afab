//! REST API endpoint tests

mod health_tests;

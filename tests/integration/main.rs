//! Integration test modules.

mod template_flow_test;
